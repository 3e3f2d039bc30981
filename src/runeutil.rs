//! Character-level text helpers shared by the widgets.
//!
//! Every width in bubblekit is measured in Unicode scalar values (`char`s).
//! Display-width negotiation for wide glyphs is left to the caller, so the
//! helpers here pad, truncate and slice by character count.
//!
//! The module also carries the [`Sanitizer`] used by the text input to strip
//! control characters from typed or pasted text.
//!
//! ```rust
//! use bubblekit::runeutil::{new_sanitizer, pad_end, replace_newlines, truncate};
//!
//! assert_eq!(pad_end("ab", 4), "ab  ");
//! assert_eq!(truncate("abcdef", 3), "abc");
//!
//! let sanitizer = new_sanitizer(vec![replace_newlines(" ")]);
//! assert_eq!(sanitizer.sanitize_str("one\ntwo\u{7}"), "one two");
//! ```

/// Number of characters in `s`.
pub fn len(s: &str) -> usize {
    s.chars().count()
}

/// Number of characters in `s` once ANSI escape sequences are removed.
///
/// Used wherever caller-supplied renderers may have styled their output.
pub fn visible_len(s: &str) -> usize {
    if !s.contains('\u{1b}') {
        return len(s);
    }
    len(&strip_ansi_escapes::strip_str(s))
}

/// The first `width` characters of `s`.
pub fn truncate(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

/// Characters `start..start + width` of `s`; shorter when `s` runs out.
pub fn slice(s: &str, start: usize, width: usize) -> String {
    s.chars().skip(start).take(width).collect()
}

/// Right-pads `s` with spaces to `width` characters. Never truncates.
pub fn pad_end(s: &str, width: usize) -> String {
    let n = len(s);
    if n >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + width - n);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(width - n));
    out
}

/// Left-pads `s` with spaces to `width` characters. Never truncates.
pub fn pad_start(s: &str, width: usize) -> String {
    let n = len(s);
    if n >= width {
        return s.to_string();
    }
    let mut out = " ".repeat(width - n);
    out.push_str(s);
    out
}

/// Centers `s` in `width` characters, putting `floor(gap / 2)` spaces on the
/// left and the remainder on the right. Never truncates.
pub fn pad_center(s: &str, width: usize) -> String {
    let n = len(s);
    if n >= width {
        return s.to_string();
    }
    let gap = width - n;
    let left = gap / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(gap - left))
}

/// Length of the longest line in `lines`, in characters.
pub fn longest_line(lines: &[String]) -> usize {
    lines.iter().map(|line| len(line)).max().unwrap_or(0)
}

/// Cleans user-entered text before it reaches a widget model.
///
/// Control characters are dropped; newlines and tabs are replaced with
/// configurable strings.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    replace_newline: String,
    replace_tab: String,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self {
            replace_newline: "\n".to_string(),
            replace_tab: "    ".to_string(),
        }
    }
}

/// A configuration step applied by [`new_sanitizer`].
pub type SanitizerOpt = Box<dyn FnOnce(&mut Sanitizer)>;

/// Builds a sanitizer from the defaults plus `opts`, applied in order.
pub fn new_sanitizer(opts: Vec<SanitizerOpt>) -> Sanitizer {
    let mut s = Sanitizer::default();
    for opt in opts {
        opt(&mut s);
    }
    s
}

/// Replaces tabs with `tab_repl` (default: four spaces).
pub fn replace_tabs(tab_repl: &str) -> SanitizerOpt {
    let repl = tab_repl.to_string();
    Box::new(move |s: &mut Sanitizer| s.replace_tab = repl)
}

/// Replaces `\r` and `\n` with `nl_repl` (default: `\n`).
pub fn replace_newlines(nl_repl: &str) -> SanitizerOpt {
    let repl = nl_repl.to_string();
    Box::new(move |s: &mut Sanitizer| s.replace_newline = repl)
}

impl Sanitizer {
    /// Sanitizes a string.
    pub fn sanitize_str(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut chars = input.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '\r' => {
                    // \r\n counts as one line break
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    out.push_str(&self.replace_newline);
                }
                '\n' => out.push_str(&self.replace_newline),
                '\t' => out.push_str(&self.replace_tab),
                c if c.is_control() => {}
                c => out.push(c),
            }
        }
        out
    }
}
