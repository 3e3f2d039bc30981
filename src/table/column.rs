//! Column definitions.

use super::row::TableRow;
use crate::runeutil;
use std::fmt;
use std::sync::Arc;

/// Turns a cell value (absent when the row has no entry for the column)
/// and its row into display text.
pub type CellFormatter<R> =
    Arc<dyn Fn(Option<&<R as TableRow>::Value>, &R) -> String + Send + Sync>;

/// Horizontal placement of text within a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Align {
    /// Pad on the right.
    #[default]
    Left,
    /// Split the padding, the smaller half on the left.
    Center,
    /// Pad on the left.
    Right,
}

impl Align {
    /// Fits `text` into exactly `width` characters, truncating when it is
    /// too long.
    ///
    /// ```rust
    /// use bubblekit::table::Align;
    ///
    /// assert_eq!(Align::Left.fit("ab", 5), "ab   ");
    /// assert_eq!(Align::Center.fit("ab", 5), " ab  ");
    /// assert_eq!(Align::Right.fit("ab", 5), "   ab");
    /// assert_eq!(Align::Right.fit("abcdef", 3), "abc");
    /// ```
    pub fn fit(self, text: &str, width: usize) -> String {
        let text = runeutil::truncate(text, width);
        match self {
            Align::Left => runeutil::pad_end(&text, width),
            Align::Center => runeutil::pad_center(&text, width),
            Align::Right => runeutil::pad_start(&text, width),
        }
    }
}

/// One table column.
///
/// Without a fixed `width` the column is as wide as its title or widest
/// formatted cell, clamped into `[min_width, max_width]`. A fixed `width`
/// wins outright and truncates longer content.
pub struct Column<R: TableRow> {
    /// Key passed to [`TableRow::cell`].
    pub key: String,
    /// Header text.
    pub title: String,
    /// Fixed width.
    pub width: Option<usize>,
    /// Lower bound for the computed width.
    pub min_width: Option<usize>,
    /// Upper bound for the computed width.
    pub max_width: Option<usize>,
    /// Placement of header and cell text.
    pub align: Align,
    /// Custom cell text. Defaults to the value's `Display` output, or an
    /// empty string when the value is missing.
    pub format: Option<CellFormatter<R>>,
}

impl<R: TableRow> Column<R> {
    /// Creates a left-aligned column reading `key` and titled `title`.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            width: None,
            min_width: None,
            max_width: None,
            align: Align::Left,
            format: None,
        }
    }

    /// Pins the column width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the minimum computed width.
    pub fn with_min_width(mut self, min_width: usize) -> Self {
        self.min_width = Some(min_width);
        self
    }

    /// Sets the maximum computed width.
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Sets the alignment.
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Sets a custom cell formatter.
    ///
    /// ```rust
    /// use bubblekit::table::Column;
    /// use std::collections::HashMap;
    ///
    /// let col: Column<HashMap<String, f64>> = Column::new("price", "Price")
    ///     .with_format(|v, _row| v.map(|p| format!("${p:.2}")).unwrap_or_default());
    /// let row = HashMap::from([("price".to_string(), 3.5)]);
    /// assert_eq!(col.render_cell(&row), "$3.50");
    /// ```
    pub fn with_format<F>(mut self, format: F) -> Self
    where
        F: Fn(Option<&R::Value>, &R) -> String + Send + Sync + 'static,
    {
        self.format = Some(Arc::new(format));
        self
    }

    /// Returns the display text of this column's cell in `row`.
    pub fn render_cell(&self, row: &R) -> String {
        let value = row.cell(&self.key);
        match &self.format {
            Some(format) => format(value, row),
            None => value.map(|v| v.to_string()).unwrap_or_default(),
        }
    }

    /// Width of this column given the rows it will display.
    pub(super) fn measure(&self, rows: &[R]) -> usize {
        if let Some(width) = self.width {
            return width;
        }
        let mut width = rows
            .iter()
            .map(|row| runeutil::len(&self.render_cell(row)))
            .fold(runeutil::len(&self.title), usize::max);
        if let Some(min) = self.min_width {
            width = width.max(min);
        }
        if let Some(max) = self.max_width {
            width = width.min(max);
        }
        width
    }
}

impl<R: TableRow> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            width: self.width,
            min_width: self.min_width,
            max_width: self.max_width,
            align: self.align,
            format: self.format.clone(),
        }
    }
}

impl<R: TableRow> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("width", &self.width)
            .field("min_width", &self.min_width)
            .field("max_width", &self.max_width)
            .field("align", &self.align)
            .field("format", &self.format.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Formatters compare by identity.
impl<R: TableRow> PartialEq for Column<R> {
    fn eq(&self, other: &Self) -> bool {
        let same_format = match (&self.format, &other.format) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        self.key == other.key
            && self.title == other.title
            && self.width == other.width
            && self.min_width == other.min_width
            && self.max_width == other.max_width
            && self.align == other.align
            && same_format
    }
}
