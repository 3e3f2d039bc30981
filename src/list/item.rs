//! List entries.

/// One entry of a list: a title, an optional description, an optional
/// payload and a disabled flag.
///
/// Items are immutable once placed in a list; replace them wholesale with
/// [`Model::set_items`](super::Model::set_items).
///
/// # Examples
///
/// ```rust
/// use bubblekit::list::ListItem;
///
/// let item = ListItem::new("Apples")
///     .with_description("Crisp and red")
///     .with_value(3u32);
/// assert_eq!(item.value, Some(3));
/// assert!(!item.disabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListItem<T = ()> {
    /// Text shown for the row.
    pub title: String,
    /// Secondary text shown beneath the title when descriptions are on.
    pub description: Option<String>,
    /// Caller payload.
    pub value: Option<T>,
    /// Disabled items are skipped by navigation and cannot be selected.
    pub disabled: bool,
}

impl<T> ListItem<T> {
    /// Creates an enabled item with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            value: None,
            disabled: false,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches a payload.
    pub fn with_value(mut self, value: T) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the disabled flag.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Shorthand for `with_disabled(true)`.
    pub fn disabled(self) -> Self {
        self.with_disabled(true)
    }
}

impl<T> From<&str> for ListItem<T> {
    fn from(title: &str) -> Self {
        Self::new(title)
    }
}

impl<T> From<String> for ListItem<T> {
    fn from(title: String) -> Self {
        Self::new(title)
    }
}
