//! Spinner component.
//!
//! A spinner is a frame sequence plus an index into it. The model never
//! schedules anything itself: the caller invokes [`Model::tick`] at whatever
//! cadence it likes (the preset's [`Spinner::interval`] is a suggestion) and
//! renders the current frame with [`Model::view`].
//!
//! # Basic Usage
//!
//! ```rust
//! use bubblekit::spinner::{new, with_spinner, LINE};
//!
//! let spinner = new(&[with_spinner(LINE.clone())]);
//! assert_eq!(spinner.view(), "|");
//!
//! let spinner = spinner.tick().tick();
//! assert_eq!(spinner.view(), "-");
//! ```
//!
//! # Available Spinners
//!
//! The following presets are available as statics and by name through
//! [`preset`] / [`preset_or_default`]:
//! - `LINE` (`"line"`): `|`, `/`, `-`, `\`
//! - `DOT` (`"dot"`): braille dot pattern, the default
//! - `MINI_DOT` (`"mini_dot"`): smaller braille dot pattern
//! - `JUMP` (`"jump"`): jumping dot
//! - `PULSE` (`"pulse"`): block fade
//! - `POINTS` (`"points"`): three dot bounce
//! - `GLOBE` (`"globe"`): earth rotation
//! - `MOON` (`"moon"`): moon phases
//! - `MONKEY` (`"monkey"`): see/hear/speak no evil
//! - `METER` (`"meter"`): filling meter
//! - `HAMBURGER` (`"hamburger"`): trigrams
//! - `ELLIPSIS` (`"ellipsis"`): `""`, `.`, `..`, `...`
//! - `CLOCK` (`"clock"`): clock faces
//! - `ARC` (`"arc"`): rotating arc
//! - `ARROW` (`"arrow"`): rotating arrow
//! - `BOUNCE` (`"bounce"`): bouncing braille dot

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::str::FromStr;
use std::time::Duration;

/// A frame sequence and the interval it is designed to be played at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spinner {
    /// Frames shown in order, wrapping at the end.
    pub frames: Vec<String>,
    /// Suggested delay between ticks.
    pub interval: Duration,
}

impl Spinner {
    /// Creates a spinner from arbitrary frames. Any length is accepted,
    /// including zero.
    pub fn new(frames: Vec<String>, interval: Duration) -> Self {
        Self { frames, interval }
    }
}

fn frames(glyphs: &[&str], millis: u64) -> Spinner {
    Spinner {
        frames: glyphs.iter().map(|g| g.to_string()).collect(),
        interval: Duration::from_millis(millis),
    }
}

/// `|`, `/`, `-`, `\`
pub static LINE: Lazy<Spinner> = Lazy::new(|| frames(&["|", "/", "-", "\\"], 100));

/// Braille dot pattern.
pub static DOT: Lazy<Spinner> =
    Lazy::new(|| frames(&["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"], 100));

/// Smaller braille dot pattern.
pub static MINI_DOT: Lazy<Spinner> = Lazy::new(|| {
    frames(
        &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
        83,
    )
});

/// Jumping dot.
pub static JUMP: Lazy<Spinner> =
    Lazy::new(|| frames(&["⢄", "⢂", "⢁", "⡁", "⡈", "⡐", "⡠"], 100));

/// Block fade.
pub static PULSE: Lazy<Spinner> = Lazy::new(|| frames(&["█", "▓", "▒", "░"], 125));

/// Three dot bounce.
pub static POINTS: Lazy<Spinner> =
    Lazy::new(|| frames(&["∙∙∙", "●∙∙", "∙●∙", "∙∙●"], 143));

/// Earth rotation.
pub static GLOBE: Lazy<Spinner> = Lazy::new(|| frames(&["🌍", "🌎", "🌏"], 250));

/// Moon phases.
pub static MOON: Lazy<Spinner> = Lazy::new(|| {
    frames(&["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"], 125)
});

/// See no evil, hear no evil, speak no evil.
pub static MONKEY: Lazy<Spinner> = Lazy::new(|| frames(&["🙈", "🙉", "🙊"], 333));

/// Filling meter.
pub static METER: Lazy<Spinner> = Lazy::new(|| {
    frames(
        &["▱▱▱", "▰▱▱", "▰▰▱", "▰▰▰", "▰▰▱", "▰▱▱", "▱▱▱"],
        143,
    )
});

/// Trigram symbols.
pub static HAMBURGER: Lazy<Spinner> = Lazy::new(|| frames(&["☱", "☲", "☴", "☲"], 333));

/// Growing ellipsis.
pub static ELLIPSIS: Lazy<Spinner> = Lazy::new(|| frames(&["", ".", "..", "..."], 333));

/// Clock faces, one per hour.
pub static CLOCK: Lazy<Spinner> = Lazy::new(|| {
    frames(
        &[
            "🕐", "🕑", "🕒", "🕓", "🕔", "🕕", "🕖", "🕗", "🕘", "🕙", "🕚", "🕛",
        ],
        100,
    )
});

/// Rotating arc.
pub static ARC: Lazy<Spinner> = Lazy::new(|| frames(&["◜", "◠", "◝", "◞", "◡", "◟"], 100));

/// Rotating arrow.
pub static ARROW: Lazy<Spinner> =
    Lazy::new(|| frames(&["←", "↖", "↑", "↗", "→", "↘", "↓", "↙"], 100));

/// Bouncing braille dot.
pub static BOUNCE: Lazy<Spinner> = Lazy::new(|| frames(&["⠁", "⠂", "⠄", "⠂"], 120));

static PRESETS: Lazy<BTreeMap<&'static str, &'static Spinner>> = Lazy::new(|| {
    BTreeMap::from([
        ("line", &*LINE),
        ("dot", &*DOT),
        ("mini_dot", &*MINI_DOT),
        ("jump", &*JUMP),
        ("pulse", &*PULSE),
        ("points", &*POINTS),
        ("globe", &*GLOBE),
        ("moon", &*MOON),
        ("monkey", &*MONKEY),
        ("meter", &*METER),
        ("hamburger", &*HAMBURGER),
        ("ellipsis", &*ELLIPSIS),
        ("clock", &*CLOCK),
        ("arc", &*ARC),
        ("arrow", &*ARROW),
        ("bounce", &*BOUNCE),
    ])
});

/// Names accepted by [`preset`], in alphabetical order.
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.keys().copied()
}

/// Looks up a preset by name.
pub fn preset(name: &str) -> Result<Spinner> {
    PRESETS
        .get(name)
        .map(|s| (*s).clone())
        .ok_or_else(|| Error::unknown_preset("spinner", name))
}

/// Looks up a preset by name, falling back to [`DOT`] for unknown names.
pub fn preset_or_default(name: &str) -> Spinner {
    preset(name).unwrap_or_else(|_| {
        tracing::debug!(name, "unknown spinner preset, using dot");
        DOT.clone()
    })
}

impl FromStr for Spinner {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        preset(s)
    }
}

/// Spinner state: the frames plus the index of the frame on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    spinner: Spinner,
    frame: usize,
}

/// Configuration applied by [`new`], in order.
#[derive(Debug, Clone)]
pub enum SpinnerOption {
    /// Use the given spinner.
    WithSpinner(Spinner),
    /// Use custom frames, keeping the current interval.
    WithFrames(Vec<String>),
    /// Use a named preset; unknown names fall back to `dot`.
    WithPreset(String),
    /// Override the suggested tick interval.
    WithInterval(Duration),
}

impl SpinnerOption {
    fn apply(&self, m: &mut Model) {
        match self {
            SpinnerOption::WithSpinner(spinner) => m.spinner = spinner.clone(),
            SpinnerOption::WithFrames(frames) => m.spinner.frames = frames.clone(),
            SpinnerOption::WithPreset(name) => m.spinner = preset_or_default(name),
            SpinnerOption::WithInterval(interval) => m.spinner.interval = *interval,
        }
    }
}

/// Option: use the given spinner.
pub fn with_spinner(spinner: Spinner) -> SpinnerOption {
    SpinnerOption::WithSpinner(spinner)
}

/// Option: use custom frames verbatim.
pub fn with_frames<S: Into<String>>(frames: impl IntoIterator<Item = S>) -> SpinnerOption {
    SpinnerOption::WithFrames(frames.into_iter().map(Into::into).collect())
}

/// Option: use a named preset.
pub fn with_preset(name: impl Into<String>) -> SpinnerOption {
    SpinnerOption::WithPreset(name.into())
}

/// Option: override the tick interval.
pub fn with_interval(interval: Duration) -> SpinnerOption {
    SpinnerOption::WithInterval(interval)
}

/// Creates a spinner model. With no options the `dot` preset is used.
pub fn new(opts: &[SpinnerOption]) -> Model {
    let mut m = Model::default();
    for opt in opts {
        opt.apply(&mut m);
    }
    m
}

impl Default for Model {
    fn default() -> Self {
        Self {
            spinner: DOT.clone(),
            frame: 0,
        }
    }
}

impl Model {
    /// Advances to the next frame, wrapping at the end. Empty frame lists are
    /// left alone.
    #[must_use]
    pub fn tick(mut self) -> Self {
        if self.spinner.frames.is_empty() {
            return self;
        }
        self.frame = (self.frame + 1) % self.spinner.frames.len();
        self
    }

    /// Returns to the first frame.
    #[must_use]
    pub fn reset(mut self) -> Self {
        self.frame = 0;
        self
    }

    /// The current frame, or an empty string when there are no frames.
    pub fn view(&self) -> String {
        self.spinner
            .frames
            .get(self.frame)
            .cloned()
            .unwrap_or_default()
    }

    /// Index of the frame on screen.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// The frames and interval in use.
    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    /// Suggested delay before the next [`tick`](Self::tick).
    pub fn interval(&self) -> Duration {
        self.spinner.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dot() {
        let m = new(&[]);
        assert_eq!(m.spinner(), &*DOT);
        assert_eq!(m.frame(), 0);
        assert_eq!(m.view(), "⣾");
    }

    #[test]
    fn test_tick_wraps() {
        let mut m = new(&[with_spinner(LINE.clone())]);
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(m.view());
            m = m.tick();
        }
        assert_eq!(seen, vec!["|", "/", "-", "\\", "|"]);
    }

    #[test]
    fn test_tick_does_not_mutate_input() {
        let m = new(&[with_spinner(LINE.clone())]);
        let next = m.clone().tick();
        assert_eq!(m.frame(), 0);
        assert_eq!(next.frame(), 1);
    }

    #[test]
    fn test_reset() {
        let m = new(&[with_spinner(MOON.clone())]).tick().tick().tick();
        assert_eq!(m.frame(), 3);
        assert_eq!(m.reset().frame(), 0);
    }

    #[test]
    fn test_empty_frames_view_is_empty() {
        let m = new(&[with_frames(Vec::<String>::new())]);
        assert_eq!(m.view(), "");
        let m = m.tick();
        assert_eq!(m.frame(), 0);
        assert_eq!(m.view(), "");
    }

    #[test]
    fn test_custom_frames_verbatim() {
        let m = new(&[with_frames(["a", "bb"]), with_interval(Duration::from_millis(5))]);
        assert_eq!(m.view(), "a");
        assert_eq!(m.tick().view(), "bb");
        assert_eq!(new(&[with_frames(["x"])]).interval(), DOT.interval);
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(preset("clock").unwrap().frames.len(), 12);
        assert_eq!("line".parse::<Spinner>().unwrap(), *LINE);
        assert!(matches!(
            preset("nope"),
            Err(Error::UnknownPreset { kind: "spinner", .. })
        ));
        assert_eq!(preset_or_default("nope"), *DOT);
        assert_eq!(new(&[with_preset("moon")]).view(), "🌑");
    }

    #[test]
    fn test_every_named_preset_has_frames() {
        for name in preset_names() {
            let spinner = preset(name).unwrap();
            assert!(!spinner.frames.is_empty(), "{name} has no frames");
            assert!(spinner.interval > Duration::ZERO);
        }
        assert_eq!(preset_names().count(), 16);
    }
}
