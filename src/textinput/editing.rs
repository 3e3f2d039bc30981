//! Insertion and deletion.

use super::model::{sanitizer, Model};
use tracing::trace;

impl Model {
    /// Inserts `ch` at the cursor and advances the cursor.
    ///
    /// Returns the input unchanged when the length limit is reached or the
    /// character sanitizes away (control characters).
    #[must_use]
    pub fn insert(self, ch: char) -> Self {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf))
    }

    /// Inserts `text` at the cursor, truncated to the remaining capacity.
    ///
    /// Line breaks and tabs become spaces; other control characters are
    /// dropped.
    #[must_use]
    pub fn insert_str(mut self, text: &str) -> Self {
        let mut runes = sanitizer().sanitize_str(text).chars().collect::<Vec<_>>();
        let room = self.remaining_capacity();
        if runes.len() > room {
            trace!(dropped = runes.len() - room, "textinput: insert truncated at limit");
            runes.truncate(room);
        }
        if runes.is_empty() {
            return self;
        }

        let n = runes.len();
        self.value.splice(self.pos..self.pos, runes);
        self.pos += n;
        self
    }

    /// Deletes the character before the cursor.
    #[must_use]
    pub fn backspace(mut self) -> Self {
        if self.pos > 0 {
            self.value.remove(self.pos - 1);
            self.pos -= 1;
        }
        self
    }

    /// Deletes the character under the cursor.
    #[must_use]
    pub fn delete_char(mut self) -> Self {
        if self.pos < self.value.len() {
            self.value.remove(self.pos);
        }
        self
    }

    /// Deletes from the start of the previous word to the cursor.
    ///
    /// `"hello world"` with the cursor at the end becomes `"hello "`.
    #[must_use]
    pub fn delete_word_backward(mut self) -> Self {
        let start = self.word_start_before();
        self.value.drain(start..self.pos);
        self.pos = start;
        self
    }

    /// Deletes from the cursor to the end of the next word.
    #[must_use]
    pub fn delete_word_forward(mut self) -> Self {
        let end = self.word_end_after();
        self.value.drain(self.pos..end);
        self
    }

    /// Deletes everything after the cursor.
    #[must_use]
    pub fn delete_to_end(mut self) -> Self {
        self.value.truncate(self.pos);
        self
    }

    /// Deletes everything before the cursor and moves it to 0.
    #[must_use]
    pub fn delete_to_start(mut self) -> Self {
        self.value.drain(..self.pos);
        self.pos = 0;
        self
    }
}
