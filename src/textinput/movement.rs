//! Cursor and word movement.
//!
//! A word is a maximal run of non-whitespace characters. Moving or deleting
//! by word first skips whitespace adjacent to the cursor, then the word
//! itself.

use super::model::Model;

impl Model {
    /// Index of the start of the word before `self.pos`.
    pub(super) fn word_start_before(&self) -> usize {
        let mut i = self.pos;
        while i > 0 && self.value[i - 1].is_whitespace() {
            i -= 1;
        }
        while i > 0 && !self.value[i - 1].is_whitespace() {
            i -= 1;
        }
        i
    }

    /// Index just past the end of the word after `self.pos`.
    pub(super) fn word_end_after(&self) -> usize {
        let mut i = self.pos;
        while i < self.value.len() && self.value[i].is_whitespace() {
            i += 1;
        }
        while i < self.value.len() && !self.value[i].is_whitespace() {
            i += 1;
        }
        i
    }

    /// Moves the cursor one character left.
    #[must_use]
    pub fn cursor_left(mut self) -> Self {
        if self.pos > 0 {
            self.pos -= 1;
        }
        self
    }

    /// Moves the cursor one character right.
    #[must_use]
    pub fn cursor_right(mut self) -> Self {
        if self.pos < self.value.len() {
            self.pos += 1;
        }
        self
    }

    /// Moves the cursor to the start of the value.
    #[must_use]
    pub fn cursor_start(mut self) -> Self {
        self.pos = 0;
        self
    }

    /// Moves the cursor to the end of the value.
    #[must_use]
    pub fn cursor_end(mut self) -> Self {
        self.pos = self.value.len();
        self
    }

    /// Places the cursor at `pos`, clamped to the value length.
    #[must_use]
    pub fn set_cursor(mut self, pos: usize) -> Self {
        self.pos = pos.min(self.value.len());
        self
    }

    /// Moves the cursor to the start of the previous word.
    #[must_use]
    pub fn word_left(mut self) -> Self {
        self.pos = self.word_start_before();
        self
    }

    /// Moves the cursor past the end of the next word.
    #[must_use]
    pub fn word_right(mut self) -> Self {
        self.pos = self.word_end_after();
        self
    }
}
