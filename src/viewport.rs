//! Scrollable viewport over a fixed block of text.
//!
//! The viewport splits its content into lines and shows a `width × height`
//! window of them. Every scroll operation clamps its offsets, so the window
//! never leaves the content:
//!
//! - vertical: `0 ≤ y_offset ≤ max(0, lines − height)`
//! - horizontal: `0 ≤ x_offset ≤ max(0, longest_line − width)`
//!
//! # Quick Start
//!
//! ```rust
//! use bubblekit::viewport::{new, Options};
//!
//! let content = (1..=10).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
//! let viewport = new(Options::default().with_size(20, 3).with_content(content));
//!
//! let viewport = viewport.scroll_down(100);
//! assert_eq!(viewport.y_offset(), 7);
//! assert_eq!(viewport.view(), "line 8\nline 9\nline 10");
//! assert_eq!(viewport.scroll_percent(), 100);
//! ```
//!
//! # Navigation
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | `scroll_up(n)` / `scroll_down(n)` | move `n` lines |
//! | `line_up()` / `line_down()` | move by the vertical scroll speed |
//! | `page_up()` / `page_down()` | move one height |
//! | `half_page_up()` / `half_page_down()` | move half a height |
//! | `scroll_to_top()` / `scroll_to_bottom()` | jump to either end |
//! | `scroll_to_line(n)` / `scroll_to_center(n)` | put line `n` at the top / middle |
//! | `scroll_left(n)` / `scroll_right(n)` | move `n` columns |

use crate::runeutil;

/// Viewport configuration.
#[derive(Debug, Clone)]
pub struct Options {
    /// Initial content, split on newlines.
    pub content: String,
    /// Visible columns; 0 disables truncation and horizontal scrolling.
    pub width: usize,
    /// Visible lines.
    pub height: usize,
    /// Columns moved by `line_left`/`line_right`.
    pub x_scroll_speed: usize,
    /// Lines moved by `line_up`/`line_down`.
    pub y_scroll_speed: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            content: String::new(),
            width: 80,
            height: 24,
            x_scroll_speed: 1,
            y_scroll_speed: 1,
        }
    }
}

impl Options {
    /// Sets the initial content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets width and height.
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the horizontal and vertical scroll speeds.
    pub fn with_scroll_speed(mut self, x: usize, y: usize) -> Self {
        self.x_scroll_speed = x;
        self.y_scroll_speed = y;
        self
    }
}

/// Viewport state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    content: String,
    lines: Vec<String>,
    longest_line: usize,
    width: usize,
    height: usize,
    x_offset: usize,
    y_offset: usize,
    /// Columns moved by `line_left`/`line_right`.
    pub x_scroll_speed: usize,
    /// Lines moved by `line_up`/`line_down`.
    pub y_scroll_speed: usize,
}

/// Creates a viewport scrolled to the top-left corner.
pub fn new(options: Options) -> Model {
    let mut m = Model {
        content: String::new(),
        lines: Vec::new(),
        longest_line: 0,
        width: options.width,
        height: options.height,
        x_offset: 0,
        y_offset: 0,
        x_scroll_speed: options.x_scroll_speed,
        y_scroll_speed: options.y_scroll_speed,
    };
    m.load(options.content);
    m
}

impl Default for Model {
    fn default() -> Self {
        new(Options::default())
    }
}

fn split_lines(content: &str) -> Vec<String> {
    content
        .replace("\r\n", "\n")
        .split('\n')
        .map(str::to_string)
        .collect()
}

impl Model {
    fn load(&mut self, content: String) {
        self.lines = split_lines(&content);
        self.content = content;
        self.longest_line = runeutil::longest_line(&self.lines);
        self.clamp_offsets();
    }

    fn clamp_offsets(&mut self) {
        self.y_offset = self.y_offset.min(self.max_y_offset());
        self.x_offset = self.x_offset.min(self.max_x_offset());
    }

    /// Replaces the content, keeping offsets where the new content allows.
    #[must_use]
    pub fn set_content(mut self, content: impl Into<String>) -> Self {
        self.load(content.into());
        self
    }

    /// Replaces the content with pre-split lines.
    #[must_use]
    pub fn set_lines(mut self, lines: Vec<String>) -> Self {
        self.content = lines.join("\n");
        self.longest_line = runeutil::longest_line(&lines);
        self.lines = lines;
        self.clamp_offsets();
        self
    }

    /// Resizes the window and re-clamps the offsets.
    #[must_use]
    pub fn set_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self.clamp_offsets();
        self
    }

    /// Largest valid vertical offset.
    pub fn max_y_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.height)
    }

    /// Largest valid horizontal offset.
    pub fn max_x_offset(&self) -> usize {
        if self.width == 0 {
            return 0;
        }
        self.longest_line.saturating_sub(self.width)
    }

    /// Puts `line` at the top of the window, clamped.
    #[must_use]
    pub fn scroll_to_line(mut self, line: usize) -> Self {
        self.y_offset = line.min(self.max_y_offset());
        self
    }

    /// Puts `line` in the middle of the window, clamped.
    #[must_use]
    pub fn scroll_to_center(self, line: usize) -> Self {
        let top = line.saturating_sub(self.height / 2);
        self.scroll_to_line(top)
    }

    /// Scrolls up `n` lines.
    #[must_use]
    pub fn scroll_up(self, n: usize) -> Self {
        let top = self.y_offset.saturating_sub(n);
        self.scroll_to_line(top)
    }

    /// Scrolls down `n` lines.
    #[must_use]
    pub fn scroll_down(self, n: usize) -> Self {
        let top = self.y_offset.saturating_add(n);
        self.scroll_to_line(top)
    }

    /// Scrolls up by the vertical scroll speed.
    #[must_use]
    pub fn line_up(self) -> Self {
        let n = self.y_scroll_speed;
        self.scroll_up(n)
    }

    /// Scrolls down by the vertical scroll speed.
    #[must_use]
    pub fn line_down(self) -> Self {
        let n = self.y_scroll_speed;
        self.scroll_down(n)
    }

    /// Scrolls up one window height.
    #[must_use]
    pub fn page_up(self) -> Self {
        let n = self.height;
        self.scroll_up(n)
    }

    /// Scrolls down one window height.
    #[must_use]
    pub fn page_down(self) -> Self {
        let n = self.height;
        self.scroll_down(n)
    }

    /// Scrolls up half a window height.
    #[must_use]
    pub fn half_page_up(self) -> Self {
        let n = self.height / 2;
        self.scroll_up(n)
    }

    /// Scrolls down half a window height.
    #[must_use]
    pub fn half_page_down(self) -> Self {
        let n = self.height / 2;
        self.scroll_down(n)
    }

    /// Jumps to the first line.
    #[must_use]
    pub fn scroll_to_top(mut self) -> Self {
        self.y_offset = 0;
        self
    }

    /// Jumps so the last line sits at the bottom of the window.
    #[must_use]
    pub fn scroll_to_bottom(mut self) -> Self {
        self.y_offset = self.max_y_offset();
        self
    }

    /// Scrolls left `n` columns.
    #[must_use]
    pub fn scroll_left(mut self, n: usize) -> Self {
        self.x_offset = self.x_offset.saturating_sub(n);
        self
    }

    /// Scrolls right `n` columns, clamped.
    #[must_use]
    pub fn scroll_right(mut self, n: usize) -> Self {
        self.x_offset = self.x_offset.saturating_add(n).min(self.max_x_offset());
        self
    }

    /// Scrolls left by the horizontal scroll speed.
    #[must_use]
    pub fn line_left(self) -> Self {
        let n = self.x_scroll_speed;
        self.scroll_left(n)
    }

    /// Scrolls right by the horizontal scroll speed.
    #[must_use]
    pub fn line_right(self) -> Self {
        let n = self.x_scroll_speed;
        self.scroll_right(n)
    }

    /// Whether the window shows the first line.
    pub fn at_top(&self) -> bool {
        self.y_offset == 0
    }

    /// Whether the window shows the last line.
    pub fn at_bottom(&self) -> bool {
        self.y_offset >= self.max_y_offset()
    }

    /// Vertical position as a rounded percentage. Content that fits entirely
    /// in the window reports 100.
    pub fn scroll_percent(&self) -> u32 {
        let max = self.max_y_offset();
        if max == 0 {
            return 100;
        }
        ((self.y_offset as f64 / max as f64) * 100.0).round() as u32
    }

    /// The raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// All content lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of content lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// First visible line.
    pub fn y_offset(&self) -> usize {
        self.y_offset
    }

    /// First visible column.
    pub fn x_offset(&self) -> usize {
        self.x_offset
    }

    /// Visible columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Visible lines.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The lines inside the window, horizontally sliced. May be shorter than
    /// the height near the end of the content.
    pub fn visible_lines(&self) -> Vec<String> {
        let end = (self.y_offset + self.height).min(self.lines.len());
        let start = self.y_offset.min(end);
        self.lines[start..end]
            .iter()
            .map(|line| {
                if self.width == 0 {
                    line.clone()
                } else {
                    runeutil::slice(line, self.x_offset, self.width)
                }
            })
            .collect()
    }

    /// Renders exactly `height` lines, padding with empty lines.
    pub fn view(&self) -> String {
        let mut lines = self.visible_lines();
        lines.resize(self.height, String::new());
        lines.join("\n")
    }

    /// [`view`](Self::view) followed by a line with a direction arrow and the
    /// scroll percentage: `↑` at the top, `↓` at the bottom, `↕` in between.
    pub fn view_with_indicators(&self) -> String {
        let arrow = if self.at_top() {
            "↑"
        } else if self.at_bottom() {
            "↓"
        } else {
            "↕"
        };
        format!("{}\n{} {}%", self.view(), arrow, self.scroll_percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize, height: usize) -> Model {
        let content = (0..n).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        new(Options::default().with_size(80, height).with_content(content))
    }

    #[test]
    fn test_scroll_down_clamps() {
        let vp = numbered(10, 5);
        assert_eq!(vp.clone().scroll_down(100).y_offset(), 5);
        assert_eq!(vp.clone().scroll_down(2).y_offset(), 2);
        assert_eq!(vp.scroll_up(1).y_offset(), 0);
    }

    #[test]
    fn test_paging() {
        let vp = numbered(20, 5);
        let vp = vp.page_down();
        assert_eq!(vp.y_offset(), 5);
        let vp = vp.half_page_down();
        assert_eq!(vp.y_offset(), 7);
        let vp = vp.page_up().half_page_up();
        assert_eq!(vp.y_offset(), 0);
        assert_eq!(vp.clone().scroll_to_bottom().y_offset(), 15);
        assert!(vp.scroll_to_bottom().scroll_to_top().at_top());
    }

    #[test]
    fn test_scroll_to_center() {
        let vp = numbered(20, 5);
        assert_eq!(vp.clone().scroll_to_center(10).y_offset(), 8);
        assert_eq!(vp.clone().scroll_to_center(1).y_offset(), 0);
        assert_eq!(vp.scroll_to_center(19).y_offset(), 15);
    }

    #[test]
    fn test_scroll_percent() {
        let vp = numbered(3, 5);
        assert_eq!(vp.scroll_percent(), 100);
        let vp = numbered(10, 5);
        assert_eq!(vp.scroll_percent(), 0);
        assert_eq!(vp.clone().scroll_down(2).scroll_percent(), 40);
        assert_eq!(vp.scroll_to_bottom().scroll_percent(), 100);
    }

    #[test]
    fn test_view_pads_to_height() {
        let vp = numbered(2, 4);
        assert_eq!(vp.view(), "line 0\nline 1\n\n");
        assert_eq!(vp.view().split('\n').count(), 4);
    }

    #[test]
    fn test_horizontal_scrolling() {
        let vp = new(Options::default()
            .with_size(4, 2)
            .with_content("abcdefgh\nxy"));
        assert_eq!(vp.max_x_offset(), 4);
        assert_eq!(vp.view(), "abcd\nxy");
        let vp = vp.scroll_right(2);
        assert_eq!(vp.view(), "cdef\n");
        let vp = vp.scroll_right(100);
        assert_eq!(vp.x_offset(), 4);
        assert_eq!(vp.view(), "efgh\n");
        assert_eq!(vp.scroll_left(100).x_offset(), 0);
    }

    #[test]
    fn test_scroll_speeds() {
        let vp = new(Options::default()
            .with_size(2, 1)
            .with_scroll_speed(2, 3)
            .with_content("abcdef\n1\n2\n3\n4"));
        let vp = vp.line_down().line_right();
        assert_eq!(vp.y_offset(), 3);
        assert_eq!(vp.x_offset(), 2);
        let vp = vp.line_up().line_left();
        assert_eq!((vp.y_offset(), vp.x_offset()), (0, 0));
    }

    #[test]
    fn test_set_content_reclamps() {
        let vp = numbered(20, 5).scroll_to_bottom();
        assert_eq!(vp.y_offset(), 15);
        let vp = vp.set_content("a\nb\nc\nd\ne\nf\ng");
        assert_eq!(vp.y_offset(), 2);
        let vp = vp.set_lines(vec!["only".to_string()]);
        assert_eq!(vp.y_offset(), 0);
        assert_eq!(vp.content(), "only");
    }

    #[test]
    fn test_crlf_is_normalized() {
        let vp = new(Options::default().with_content("a\r\nb"));
        assert_eq!(vp.lines(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_indicators() {
        let vp = numbered(10, 2);
        assert!(vp.view_with_indicators().ends_with("↑ 0%"));
        let vp = vp.scroll_down(4);
        assert!(vp.view_with_indicators().ends_with("↕ 50%"));
        let vp = vp.scroll_to_bottom();
        assert!(vp.view_with_indicators().ends_with("↓ 100%"));
    }

    #[test]
    fn test_set_size_reclamps() {
        let vp = numbered(10, 2).scroll_to_bottom();
        assert_eq!(vp.y_offset(), 8);
        assert_eq!(vp.set_size(80, 6).y_offset(), 4);
    }
}
