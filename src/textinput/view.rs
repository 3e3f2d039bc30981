//! Rendering for the text input.

use super::model::Model;
use crate::runeutil;

impl Model {
    /// Renders the prompt, the visible part of the value and, when enabled,
    /// the character counter.
    ///
    /// While focused the cursor glyph is inserted at the cursor position.
    /// An empty, unfocused input shows the placeholder instead. With a
    /// nonzero `width` the value area is either padded to `width` cells or,
    /// when longer, windowed so the cursor stays visible.
    pub fn view(&self) -> String {
        let body = if self.value.is_empty() && !self.focused && !self.placeholder.is_empty() {
            self.placeholder_view()
        } else {
            self.value_view()
        };

        let mut out = format!("{}{}", self.prompt, body);
        if self.show_char_count {
            out.push_str(&self.count_view());
        }
        out
    }

    fn placeholder_view(&self) -> String {
        if self.width == 0 {
            return self.placeholder.clone();
        }
        runeutil::pad_end(&runeutil::truncate(&self.placeholder, self.width), self.width)
    }

    fn value_view(&self) -> String {
        let mut cells = self.echo_cells();
        let cursor_cell = self.echo_len(self.pos);
        if self.focused {
            cells.insert(cursor_cell, self.cursor_char.clone());
        }

        if self.width > 0 {
            if cells.len() > self.width {
                let start = if cursor_cell >= self.width {
                    cursor_cell + 1 - self.width
                } else {
                    0
                };
                let start = start.min(cells.len() - self.width);
                return cells[start..start + self.width].concat();
            }
            let pad = self.width - cells.len();
            return cells.concat() + &" ".repeat(pad);
        }
        cells.concat()
    }

    /// One display cell per displayed character. A mask longer than one
    /// character contributes one cell per mask character.
    fn echo_cells(&self) -> Vec<String> {
        match &self.mask {
            Some(mask) => self
                .value
                .iter()
                .flat_map(|_| mask.chars())
                .map(String::from)
                .collect(),
            None => self.value.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Displayed characters for the first `n` value characters.
    fn echo_len(&self, n: usize) -> usize {
        match &self.mask {
            Some(mask) => n * runeutil::len(mask),
            None => n,
        }
    }

    fn count_view(&self) -> String {
        if self.max_length > 0 {
            format!(" {}/{}", self.value.len(), self.max_length)
        } else {
            format!(" {}", self.value.len())
        }
    }
}
