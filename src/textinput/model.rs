//! Core model and construction options for the text input.

use crate::runeutil::{new_sanitizer, replace_newlines, replace_tabs, Sanitizer};

/// Prompt shown before the value unless overridden.
pub const DEFAULT_PROMPT: &str = "> ";

/// Glyph drawn at the cursor position while focused.
pub const DEFAULT_CURSOR: &str = "█";

/// Construction options for a text input.
///
/// # Examples
///
/// ```rust
/// use bubblekit::textinput::{new, Options};
///
/// let input = new(
///     Options::default()
///         .with_placeholder("Search...")
///         .with_max_length(20)
///         .with_char_count(true),
/// );
/// assert_eq!(input.max_length, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Initial value. Sanitized and truncated to `max_length`.
    pub value: String,
    /// Text shown when the value is empty and the input is not focused.
    pub placeholder: String,
    /// Maximum number of characters. 0 means unlimited.
    pub max_length: usize,
    /// Replacement shown for every character of the value.
    pub mask: Option<String>,
    /// Appends a character counter to the view: ` len/max` when
    /// `max_length` is set, ` len` when the input is unlimited.
    pub show_char_count: bool,
    /// Visible width of the value area. 0 means unbounded.
    pub width: usize,
    /// Prompt prefix.
    pub prompt: String,
    /// Cursor glyph.
    pub cursor_char: String,
    /// Whether the input starts focused.
    pub focused: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            value: String::new(),
            placeholder: String::new(),
            max_length: 0,
            mask: None,
            show_char_count: false,
            width: 0,
            prompt: DEFAULT_PROMPT.to_string(),
            cursor_char: DEFAULT_CURSOR.to_string(),
            focused: true,
        }
    }
}

impl Options {
    /// Sets the initial value.
    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    /// Sets the placeholder.
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    /// Sets the character limit.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Masks the displayed value, e.g. for passwords.
    pub fn with_mask(mut self, mask: &str) -> Self {
        self.mask = Some(mask.to_string());
        self
    }

    /// Toggles the character counter.
    pub fn with_char_count(mut self, show: bool) -> Self {
        self.show_char_count = show;
        self
    }

    /// Sets the visible width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the prompt.
    pub fn with_prompt(mut self, prompt: &str) -> Self {
        self.prompt = prompt.to_string();
        self
    }

    /// Sets the cursor glyph.
    pub fn with_cursor_char(mut self, cursor_char: &str) -> Self {
        self.cursor_char = cursor_char.to_string();
        self
    }

    /// Sets the initial focus state.
    pub fn with_focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

/// A single-line text input.
///
/// The value and cursor are private so that `0 <= cursor <= len` and
/// `len <= max_length` (when limited) always hold. Display settings are
/// plain public fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub(super) value: Vec<char>,
    pub(super) pos: usize,
    pub(super) focused: bool,

    /// Text shown when the value is empty and the input is not focused.
    pub placeholder: String,
    /// Maximum number of characters. 0 means unlimited.
    pub max_length: usize,
    /// Replacement shown for every character of the value.
    pub mask: Option<String>,
    /// Appends a character counter to the view: ` len/max` when
    /// `max_length` is set, ` len` when the input is unlimited.
    pub show_char_count: bool,
    /// Visible width of the value area. 0 means unbounded.
    pub width: usize,
    /// Prompt prefix.
    pub prompt: String,
    /// Cursor glyph.
    pub cursor_char: String,
}

impl Default for Model {
    fn default() -> Self {
        new(Options::default())
    }
}

/// Creates a text input from `options` with the cursor at the end of the
/// initial value.
pub fn new(options: Options) -> Model {
    let mut value = sanitizer().sanitize_str(&options.value).chars().collect::<Vec<_>>();
    if options.max_length > 0 && value.len() > options.max_length {
        value.truncate(options.max_length);
    }
    let pos = value.len();

    Model {
        value,
        pos,
        focused: options.focused,
        placeholder: options.placeholder,
        max_length: options.max_length,
        mask: options.mask,
        show_char_count: options.show_char_count,
        width: options.width,
        prompt: options.prompt,
        cursor_char: options.cursor_char,
    }
}

/// Single-line inputs flatten line breaks and tabs to spaces.
pub(super) fn sanitizer() -> Sanitizer {
    new_sanitizer(vec![replace_newlines(" "), replace_tabs(" ")])
}

impl Model {
    /// Returns the current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Returns the cursor index in characters.
    pub fn cursor(&self) -> usize {
        self.pos
    }

    /// Returns the value length in characters.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Reports whether the value is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Reports whether the input has focus.
    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Replaces the value. The new value is sanitized and truncated to
    /// `max_length`; the cursor is clamped to the new length.
    #[must_use]
    pub fn set_value(mut self, value: &str) -> Self {
        let mut runes = sanitizer().sanitize_str(value).chars().collect::<Vec<_>>();
        if self.max_length > 0 && runes.len() > self.max_length {
            runes.truncate(self.max_length);
        }
        self.value = runes;
        self.pos = self.pos.min(self.value.len());
        self
    }

    /// Empties the value and moves the cursor to 0.
    #[must_use]
    pub fn clear(mut self) -> Self {
        self.value.clear();
        self.pos = 0;
        self
    }

    /// Gives the input focus.
    #[must_use]
    pub fn focus(mut self) -> Self {
        self.focused = true;
        self
    }

    /// Removes focus from the input.
    #[must_use]
    pub fn blur(mut self) -> Self {
        self.focused = false;
        self
    }

    /// Characters that can still be added before the limit is reached.
    pub(super) fn remaining_capacity(&self) -> usize {
        if self.max_length == 0 {
            usize::MAX
        } else {
            self.max_length.saturating_sub(self.value.len())
        }
    }
}
