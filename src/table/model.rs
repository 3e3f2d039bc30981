//! Table state, options, column sizing and selection.

use super::border::{TableBorder, SINGLE};
use super::column::Column;
use super::row::TableRow;
use tracing::debug;

/// Row marker of a selectable table.
pub const DEFAULT_CURSOR: &str = ">";

/// Construction options for a table.
#[derive(Debug, Clone)]
pub struct Options<R: TableRow> {
    /// Column definitions, left to right.
    pub columns: Vec<Column<R>>,
    /// Rows, top to bottom.
    pub rows: Vec<R>,
    /// Grid glyphs.
    pub border: TableBorder,
    /// Renders the header line.
    pub show_header: bool,
    /// Renders the rule under the header.
    pub show_header_separator: bool,
    /// Spaces on each side of every cell.
    pub padding: usize,
    /// Enables the row cursor and navigation.
    pub selectable: bool,
    /// Initially selected row. `None` selects the first row of a
    /// selectable, non-empty table.
    pub selected: Option<usize>,
    /// Marker drawn left of the selected row.
    pub cursor: String,
}

impl<R: TableRow> Default for Options<R> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            border: SINGLE.clone(),
            show_header: true,
            show_header_separator: true,
            padding: 1,
            selectable: false,
            selected: None,
            cursor: DEFAULT_CURSOR.to_string(),
        }
    }
}

impl<R: TableRow> Options<R> {
    /// Sets the columns.
    pub fn with_columns(mut self, columns: Vec<Column<R>>) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the rows.
    pub fn with_rows(mut self, rows: Vec<R>) -> Self {
        self.rows = rows;
        self
    }

    /// Sets the border glyphs.
    pub fn with_border(mut self, border: TableBorder) -> Self {
        self.border = border;
        self
    }

    /// Toggles the header line.
    pub fn with_header(mut self, show: bool) -> Self {
        self.show_header = show;
        self
    }

    /// Toggles the rule under the header.
    pub fn with_header_separator(mut self, show: bool) -> Self {
        self.show_header_separator = show;
        self
    }

    /// Sets the cell padding.
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Toggles row selection.
    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Sets the initially selected row.
    pub fn with_selected(mut self, selected: usize) -> Self {
        self.selected = Some(selected);
        self
    }

    /// Sets the row marker.
    pub fn with_cursor(mut self, cursor: &str) -> Self {
        self.cursor = cursor.to_string();
        self
    }
}

/// A bordered, optionally selectable table.
///
/// Column widths are recomputed in full whenever rows or columns are
/// replaced, so `column_widths()` always has one entry per column.
#[derive(Debug, Clone, PartialEq)]
pub struct Model<R: TableRow> {
    pub(super) columns: Vec<Column<R>>,
    pub(super) rows: Vec<R>,
    pub(super) column_widths: Vec<usize>,
    pub(super) selected: Option<usize>,
    pub(super) selectable: bool,

    /// Grid glyphs.
    pub border: TableBorder,
    /// Renders the header line.
    pub show_header: bool,
    /// Renders the rule under the header.
    pub show_header_separator: bool,
    /// Spaces on each side of every cell.
    pub padding: usize,
    /// Marker drawn left of the selected row.
    pub cursor: String,
}

/// Creates a table from `options`.
///
/// # Examples
///
/// ```rust
/// use bubblekit::table::{new, Column, Options};
/// use std::collections::HashMap;
///
/// let rows = vec![HashMap::from([("name".to_string(), "Alice")])];
/// let table = new(
///     Options::default()
///         .with_columns(vec![Column::new("name", "Name")])
///         .with_rows(rows),
/// );
/// assert_eq!(table.column_widths(), [5]);
/// ```
pub fn new<R: TableRow>(options: Options<R>) -> Model<R> {
    let model = Model {
        columns: options.columns,
        rows: Vec::new(),
        column_widths: Vec::new(),
        selected: options.selected,
        selectable: options.selectable,
        border: options.border,
        show_header: options.show_header,
        show_header_separator: options.show_header_separator,
        padding: options.padding,
        cursor: options.cursor,
    };
    model.set_rows(options.rows)
}

impl<R: TableRow> Model<R> {
    /// Replaces every row, recomputes column widths and clamps the
    /// selection into the new bounds.
    #[must_use]
    pub fn set_rows(mut self, rows: Vec<R>) -> Self {
        self.rows = rows;
        self.clamp_selection();
        self.recompute_widths();
        self
    }

    /// Replaces every column and recomputes column widths.
    #[must_use]
    pub fn set_columns(mut self, columns: Vec<Column<R>>) -> Self {
        self.columns = columns;
        self.recompute_widths();
        self
    }

    /// Moves the selection up one row, wrapping from the first row to the
    /// last. Does nothing when the table is not selectable or has no rows.
    #[must_use]
    pub fn move_up(mut self) -> Self {
        if !self.selectable || self.rows.is_empty() {
            return self;
        }
        let last = self.rows.len() - 1;
        self.selected = Some(match self.selected {
            Some(i) if i > 0 => (i - 1).min(last),
            _ => last,
        });
        self
    }

    /// Moves the selection down one row, wrapping from the last row to the
    /// first. Does nothing when the table is not selectable or has no rows.
    #[must_use]
    pub fn move_down(mut self) -> Self {
        if !self.selectable || self.rows.is_empty() {
            return self;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % self.rows.len(),
            None => 0,
        });
        self
    }

    /// Selects row `index`. Does nothing when the table is not selectable
    /// or `index` is out of range.
    #[must_use]
    pub fn select(mut self, index: usize) -> Self {
        if self.selectable && index < self.rows.len() {
            self.selected = Some(index);
        }
        self
    }

    /// Returns the selected row.
    pub fn selected_row(&self) -> Option<&R> {
        self.selected.and_then(|i| self.rows.get(i))
    }

    /// Returns the selected row index.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Reports whether rows can be selected.
    pub fn selectable(&self) -> bool {
        self.selectable
    }

    /// Returns the computed width of each column, excluding padding.
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    /// Returns the rows.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Returns the columns.
    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    fn clamp_selection(&mut self) {
        if self.rows.is_empty() {
            self.selected = None;
            return;
        }
        let last = self.rows.len() - 1;
        self.selected = match self.selected {
            Some(i) => Some(i.min(last)),
            None if self.selectable => Some(0),
            None => None,
        };
    }

    fn recompute_widths(&mut self) {
        self.column_widths = self
            .columns
            .iter()
            .map(|col| col.measure(&self.rows))
            .collect();
        debug!(
            columns = self.columns.len(),
            rows = self.rows.len(),
            "table: column widths recomputed"
        );
    }
}
