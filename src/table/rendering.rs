//! Grid composition.
//!
//! Lines are emitted top to bottom: top rule, header, header rule, one
//! line per row, bottom rule. A rule whose horizontal glyph is empty is
//! skipped. On a selectable table every line gets a prefix column to the
//! left of the grid; only the selected row's prefix shows the cursor.

use super::model::Model;
use super::row::TableRow;
use crate::runeutil;

impl<R: TableRow> Model<R> {
    /// Renders the table.
    ///
    /// A selectable table draws its rows behind a cursor column `cursor`
    /// plus one space wide. Rule and header lines get the same column
    /// filled with blanks, so every line of the grid starts at the same
    /// offset.
    ///
    /// ```rust
    /// use bubblekit::table::{new, Column, Options};
    /// use std::collections::BTreeMap;
    ///
    /// let table = new(
    ///     Options::default()
    ///         .with_columns(vec![Column::new("name", "Name")])
    ///         .with_rows(vec![BTreeMap::from([("name".to_string(), "Alice")])]),
    /// );
    /// assert_eq!(
    ///     table.view(),
    ///     "┌───────┐\n│ Name  │\n├───────┤\n│ Alice │\n└───────┘"
    /// );
    /// ```
    pub fn view(&self) -> String {
        let prefix_width = self.prefix_width();
        let blank = " ".repeat(prefix_width);
        let b = &self.border;
        let mut lines = Vec::with_capacity(self.rows.len() + 4);

        if !b.top.is_empty() {
            lines.push(format!(
                "{blank}{}",
                self.rule(&b.top, &b.top_left, &b.top_mid, &b.top_right)
            ));
        }

        if self.show_header {
            let titles = self.columns.iter().map(|c| c.title.clone()).collect();
            lines.push(format!("{blank}{}", self.content_line(titles)));
            if self.show_header_separator && !b.header_separator.is_empty() {
                lines.push(format!(
                    "{blank}{}",
                    self.rule(&b.header_separator, &b.mid_left, &b.mid, &b.mid_right)
                ));
            }
        }

        for (idx, row) in self.rows.iter().enumerate() {
            let prefix = if self.selectable && self.selected == Some(idx) {
                runeutil::pad_end(&format!("{} ", self.cursor), prefix_width)
            } else {
                blank.clone()
            };
            let cells = self.columns.iter().map(|c| c.render_cell(row)).collect();
            lines.push(format!("{prefix}{}", self.content_line(cells)));
        }

        if !b.bottom.is_empty() {
            lines.push(format!(
                "{blank}{}",
                self.rule(&b.bottom, &b.bottom_left, &b.bottom_mid, &b.bottom_right)
            ));
        }

        lines.join("\n")
    }

    /// Width of the cursor column: `cursor` plus one space, 0 when the
    /// table is not selectable.
    fn prefix_width(&self) -> usize {
        if self.selectable {
            runeutil::len(&self.cursor) + 1
        } else {
            0
        }
    }

    fn rule(&self, horizontal: &str, left: &str, junction: &str, right: &str) -> String {
        let segments: Vec<String> = self
            .column_widths
            .iter()
            .map(|w| horizontal.repeat(w + 2 * self.padding))
            .collect();
        format!("{left}{}{right}", segments.join(junction))
    }

    fn content_line(&self, texts: Vec<String>) -> String {
        let pad = " ".repeat(self.padding);
        let cells: Vec<String> = texts
            .iter()
            .zip(&self.columns)
            .zip(&self.column_widths)
            .map(|((text, col), &width)| format!("{pad}{}{pad}", col.align.fit(text, width)))
            .collect();
        format!(
            "{}{}{}",
            self.border.left,
            cells.join(&self.border.vertical),
            self.border.right
        )
    }
}
