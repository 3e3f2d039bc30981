//! Progress bar component.
//!
//! The model holds a completion fraction in `[0, 1]` and renders it as a
//! fixed-width bar of "full" and "empty" characters, optionally wrapped in
//! brackets and followed by a percentage.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubblekit::progress::{new, render, with_width, without_percentage};
//!
//! let bar = new(&[with_width(10), without_percentage()]).set(0.5);
//! assert_eq!(bar.view(), "█████░░░░░");
//!
//! // One-shot rendering
//! assert_eq!(render(0.5, &[with_width(10), without_percentage()]), "█████░░░░░");
//! ```
//!
//! # Styles
//!
//! ```rust
//! use bubblekit::progress::{new, with_preset, with_width};
//!
//! let bar = new(&[with_preset("ascii"), with_width(4)]).set_percent(50.0);
//! assert_eq!(bar.view(), "[##--]  50%");
//! ```
//!
//! Values outside `[0, 1]` are clamped rather than rejected.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Default bar width in characters.
pub const DEFAULT_WIDTH: usize = 40;

/// Step used by [`Model::incr`] and [`Model::decr`].
pub const DEFAULT_STEP: f64 = 0.01;

/// Turns a completion fraction into the percentage suffix.
pub type PercentFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// The glyphs a bar is drawn with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressStyle {
    /// Character for the completed portion.
    pub full: char,
    /// Character for the remaining portion.
    pub empty: char,
    /// Drawn before the bar.
    pub left_bracket: String,
    /// Drawn after the bar.
    pub right_bracket: String,
}

impl ProgressStyle {
    fn plain(full: char, empty: char) -> Self {
        Self {
            full,
            empty,
            left_bracket: String::new(),
            right_bracket: String::new(),
        }
    }
}

impl Default for ProgressStyle {
    fn default() -> Self {
        Self::plain('█', '░')
    }
}

static STYLES: Lazy<BTreeMap<&'static str, ProgressStyle>> = Lazy::new(|| {
    BTreeMap::from([
        ("default", ProgressStyle::default()),
        (
            "ascii",
            ProgressStyle {
                full: '#',
                empty: '-',
                left_bracket: "[".to_string(),
                right_bracket: "]".to_string(),
            },
        ),
        ("dots", ProgressStyle::plain('●', '○')),
        ("thin", ProgressStyle::plain('━', '─')),
        ("shaded", ProgressStyle::plain('▓', '░')),
    ])
});

/// Looks up a named style (`default`, `ascii`, `dots`, `thin`, `shaded`).
pub fn style(name: &str) -> Result<ProgressStyle> {
    STYLES
        .get(name)
        .cloned()
        .ok_or_else(|| Error::unknown_preset("progress", name))
}

/// Looks up a named style, falling back to `default`.
pub fn style_or_default(name: &str) -> ProgressStyle {
    style(name).unwrap_or_else(|_| {
        tracing::debug!(name, "unknown progress style, using default");
        ProgressStyle::default()
    })
}

impl FromStr for ProgressStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        style(s)
    }
}

fn default_percent_format(progress: f64) -> String {
    format!(" {:>3}%", (progress * 100.0).round() as u32)
}

/// Progress bar state.
#[derive(Clone)]
pub struct Model {
    progress: f64,
    /// Bar width in characters, brackets and percentage excluded.
    pub width: usize,
    /// Character for the completed portion.
    pub full: char,
    /// Character for the remaining portion.
    pub empty: char,
    /// Whether the percentage suffix is drawn.
    pub show_percent: bool,
    /// Drawn before the bar.
    pub left_bracket: String,
    /// Drawn after the bar.
    pub right_bracket: String,
    percent_format: PercentFormatter,
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("progress", &self.progress)
            .field("width", &self.width)
            .field("full", &self.full)
            .field("empty", &self.empty)
            .field("show_percent", &self.show_percent)
            .field("left_bracket", &self.left_bracket)
            .field("right_bracket", &self.right_bracket)
            .finish_non_exhaustive()
    }
}

impl Default for Model {
    fn default() -> Self {
        let style = ProgressStyle::default();
        Self {
            progress: 0.0,
            width: DEFAULT_WIDTH,
            full: style.full,
            empty: style.empty,
            show_percent: true,
            left_bracket: style.left_bracket,
            right_bracket: style.right_bracket,
            percent_format: Arc::new(default_percent_format),
        }
    }
}

/// Configuration applied by [`new`], in order.
#[derive(Clone)]
pub enum ProgressOption {
    /// Bar width in characters.
    WithWidth(usize),
    /// Glyphs and brackets from a style.
    WithStyle(ProgressStyle),
    /// Glyphs and brackets from a named style.
    WithPreset(String),
    /// Full and empty characters.
    WithFillCharacters(char, char),
    /// Left and right brackets.
    WithBrackets(String, String),
    /// Hide the percentage suffix.
    WithoutPercentage,
    /// Custom percentage formatter.
    WithPercentFormat(PercentFormatter),
    /// Initial progress, clamped.
    WithProgress(f64),
}

impl ProgressOption {
    fn apply(&self, m: &mut Model) {
        match self {
            ProgressOption::WithWidth(width) => m.width = *width,
            ProgressOption::WithStyle(style) => m.apply_style(style.clone()),
            ProgressOption::WithPreset(name) => m.apply_style(style_or_default(name)),
            ProgressOption::WithFillCharacters(full, empty) => {
                m.full = *full;
                m.empty = *empty;
            }
            ProgressOption::WithBrackets(left, right) => {
                m.left_bracket = left.clone();
                m.right_bracket = right.clone();
            }
            ProgressOption::WithoutPercentage => m.show_percent = false,
            ProgressOption::WithPercentFormat(format) => m.percent_format = format.clone(),
            ProgressOption::WithProgress(p) => m.progress = clamp(*p),
        }
    }
}

/// Option: bar width.
pub fn with_width(width: usize) -> ProgressOption {
    ProgressOption::WithWidth(width)
}

/// Option: use a style.
pub fn with_style(style: ProgressStyle) -> ProgressOption {
    ProgressOption::WithStyle(style)
}

/// Option: use a named style; unknown names fall back to `default`.
pub fn with_preset(name: impl Into<String>) -> ProgressOption {
    ProgressOption::WithPreset(name.into())
}

/// Option: full and empty characters.
pub fn with_fill_characters(full: char, empty: char) -> ProgressOption {
    ProgressOption::WithFillCharacters(full, empty)
}

/// Option: brackets around the bar.
pub fn with_brackets(left: impl Into<String>, right: impl Into<String>) -> ProgressOption {
    ProgressOption::WithBrackets(left.into(), right.into())
}

/// Option: hide the percentage.
pub fn without_percentage() -> ProgressOption {
    ProgressOption::WithoutPercentage
}

/// Option: custom percentage formatter, called with the fraction in `[0, 1]`.
pub fn with_percent_format<F>(format: F) -> ProgressOption
where
    F: Fn(f64) -> String + Send + Sync + 'static,
{
    ProgressOption::WithPercentFormat(Arc::new(format))
}

/// Option: initial progress.
pub fn with_progress(progress: f64) -> ProgressOption {
    ProgressOption::WithProgress(progress)
}

/// Creates a progress model at 0%.
pub fn new(opts: &[ProgressOption]) -> Model {
    let mut m = Model::default();
    for opt in opts {
        opt.apply(&mut m);
    }
    m
}

/// Renders `value` once with the given options.
pub fn render(value: f64, opts: &[ProgressOption]) -> String {
    new(opts).set(value).view()
}

fn clamp(p: f64) -> f64 {
    if p.is_nan() {
        return 0.0;
    }
    p.clamp(0.0, 1.0)
}

impl Model {
    fn apply_style(&mut self, style: ProgressStyle) {
        self.full = style.full;
        self.empty = style.empty;
        self.left_bracket = style.left_bracket;
        self.right_bracket = style.right_bracket;
    }

    /// Sets progress as a fraction, clamped to `[0, 1]`.
    #[must_use]
    pub fn set(mut self, progress: f64) -> Self {
        self.progress = clamp(progress);
        self
    }

    /// Sets progress as a percentage, clamped to `[0, 100]`.
    #[must_use]
    pub fn set_percent(self, percent: f64) -> Self {
        self.set(percent / 100.0)
    }

    /// Adds `delta` and clamps.
    #[must_use]
    pub fn increment(self, delta: f64) -> Self {
        let next = self.progress + delta;
        self.set(next)
    }

    /// Subtracts `delta` and clamps.
    #[must_use]
    pub fn decrement(self, delta: f64) -> Self {
        let next = self.progress - delta;
        self.set(next)
    }

    /// [`increment`](Self::increment) by [`DEFAULT_STEP`].
    #[must_use]
    pub fn incr(self) -> Self {
        self.increment(DEFAULT_STEP)
    }

    /// [`decrement`](Self::decrement) by [`DEFAULT_STEP`].
    #[must_use]
    pub fn decr(self) -> Self {
        self.decrement(DEFAULT_STEP)
    }

    /// Completion fraction in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Completion as a rounded percentage.
    pub fn percent(&self) -> u32 {
        (self.progress * 100.0).round() as u32
    }

    /// Whether the bar is full.
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Renders the bar.
    pub fn view(&self) -> String {
        let filled = ((self.progress * self.width as f64).round() as usize).min(self.width);
        let mut out = String::with_capacity(self.width * 3 + 8);
        out.push_str(&self.left_bracket);
        out.extend(std::iter::repeat(self.full).take(filled));
        out.extend(std::iter::repeat(self.empty).take(self.width - filled));
        out.push_str(&self.right_bracket);
        if self.show_percent {
            out.push_str(&(self.percent_format)(self.progress));
        }
        out
    }
}
