//! List state, options and accessors.

use super::item::ListItem;
use std::ops::Range;
use tracing::debug;

/// Prefix of the selected row.
pub const DEFAULT_CURSOR: &str = "> ";

/// Prefix of every other row.
pub const DEFAULT_UNCURSOR: &str = "  ";

/// Construction options for a list.
#[derive(Debug, Clone, PartialEq)]
pub struct Options<T = ()> {
    /// Initial items.
    pub items: Vec<ListItem<T>>,
    /// Initially selected index. Clamped and moved off disabled items.
    pub selected: usize,
    /// Number of visible rows. 0 shows every item.
    pub height: usize,
    /// Prefix of the selected row.
    pub cursor: String,
    /// Prefix of unselected rows.
    pub uncursor: String,
    /// Renders each item's description on a line beneath its title.
    pub show_descriptions: bool,
    /// Whether `move_up`/`move_down` wrap around the ends.
    pub wrap: bool,
}

impl<T> Default for Options<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
            height: 0,
            cursor: DEFAULT_CURSOR.to_string(),
            uncursor: DEFAULT_UNCURSOR.to_string(),
            show_descriptions: false,
            wrap: true,
        }
    }
}

impl<T> Options<T> {
    /// Sets the items.
    pub fn with_items(mut self, items: Vec<ListItem<T>>) -> Self {
        self.items = items;
        self
    }

    /// Sets the initially selected index.
    pub fn with_selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    /// Sets the number of visible rows.
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Sets the selected-row prefix.
    pub fn with_cursor(mut self, cursor: &str) -> Self {
        self.cursor = cursor.to_string();
        self
    }

    /// Sets the unselected-row prefix.
    pub fn with_uncursor(mut self, uncursor: &str) -> Self {
        self.uncursor = uncursor.to_string();
        self
    }

    /// Toggles description lines.
    pub fn with_descriptions(mut self, show: bool) -> Self {
        self.show_descriptions = show;
        self
    }

    /// Toggles wraparound navigation.
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }
}

/// A selectable, scrollable list of items.
///
/// `items`, `selected` and `offset` are private so that these hold after
/// every transition:
///
/// - `selected < items.len()` whenever the list is non-empty, else 0
/// - `selected` rests on an enabled item whenever one exists
/// - with `height > 0`, `offset <= selected < offset + height` and
///   `offset <= max(0, len - height)`; with `height == 0`, `offset == 0`
#[derive(Debug, Clone, PartialEq)]
pub struct Model<T = ()> {
    pub(super) items: Vec<ListItem<T>>,
    pub(super) selected: usize,
    pub(super) offset: usize,
    pub(super) height: usize,

    /// Prefix of the selected row.
    pub cursor: String,
    /// Prefix of unselected rows.
    pub uncursor: String,
    /// Renders descriptions beneath titles.
    pub show_descriptions: bool,
    /// Whether `move_up`/`move_down` wrap around the ends.
    pub wrap: bool,
}

impl<T> Default for Model<T> {
    fn default() -> Self {
        new(Options::default())
    }
}

/// Creates a list from `options`.
///
/// # Examples
///
/// ```rust
/// use bubblekit::list::{new, ListItem, Options};
///
/// let list = new(Options::default().with_items(vec![
///     ListItem::<()>::new("Disabled").disabled(),
///     ListItem::new("First enabled"),
/// ]));
/// assert_eq!(list.selected_index(), 1);
/// ```
pub fn new<T>(options: Options<T>) -> Model<T> {
    let model = Model {
        items: Vec::new(),
        selected: options.selected,
        offset: 0,
        height: options.height,
        cursor: options.cursor,
        uncursor: options.uncursor,
        show_descriptions: options.show_descriptions,
        wrap: options.wrap,
    };
    model.set_items(options.items)
}

impl<T> Model<T> {
    /// Replaces every item.
    ///
    /// The selection is clamped to the new bounds and moved forward onto
    /// an enabled item when one exists. The scroll offset restarts at 0.
    #[must_use]
    pub fn set_items(mut self, items: Vec<ListItem<T>>) -> Self {
        debug!(count = items.len(), "list: items replaced");
        self.items = items;
        self.offset = 0;
        if self.items.is_empty() {
            self.selected = 0;
            return self;
        }

        self.selected = self.selected.min(self.items.len() - 1);
        if self.items[self.selected].disabled {
            if let Some(idx) = self.seek(self.selected, true, true) {
                self.selected = idx;
            }
        }
        self.sync_offset();
        self
    }

    /// Changes the number of visible rows and re-fits the scroll window.
    #[must_use]
    pub fn set_height(mut self, height: usize) -> Self {
        self.height = height;
        self.sync_offset();
        self
    }

    /// Returns every item.
    pub fn items(&self) -> &[ListItem<T>] {
        &self.items
    }

    /// Returns the selected item, if the list is non-empty.
    pub fn selected_item(&self) -> Option<&ListItem<T>> {
        self.items.get(self.selected)
    }

    /// Returns the selected item's payload.
    pub fn selected_value(&self) -> Option<&T> {
        self.selected_item().and_then(|item| item.value.as_ref())
    }

    /// Returns the selected index. 0 for an empty list.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Returns the index of the first visible row.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the number of visible rows (0 = unbounded).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Reports whether the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item indices currently inside the scroll window.
    pub fn visible_range(&self) -> Range<usize> {
        if self.height == 0 {
            0..self.items.len()
        } else {
            let end = (self.offset + self.height).min(self.items.len());
            self.offset.min(end)..end
        }
    }
}
