//! Timer component with countdown and stopwatch modes.
//!
//! The timer is a four-state machine:
//!
//! ```text
//! idle ──start──▶ running ──pause──▶ paused ──resume──▶ running
//!                    │
//!                    └──tick (countdown reached)──▶ finished
//! any ──stop──▶ idle
//! ```
//!
//! Elapsed time is an accumulated duration plus the live span since the last
//! `start`/`resume`. The model reads time from a [`Clock`]; it never sleeps
//! or schedules anything. Callers invoke [`Model::tick`] periodically so a
//! countdown can notice that it has run out.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubblekit::timer::{countdown, ManualClock, TimerState};
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let timer = countdown(Duration::from_secs(90)).with_clock(clock.clone()).start();
//!
//! clock.advance(Duration::from_secs(30));
//! assert_eq!(timer.view(), "01:00");
//!
//! clock.advance(Duration::from_secs(60));
//! let timer = timer.tick();
//! assert_eq!(timer.state(), TimerState::Finished);
//! assert_eq!(timer.view(), "00:00");
//! ```
//!
//! # Formatting
//!
//! ```rust
//! use bubblekit::timer::{format_time, format_time_compact};
//! use std::time::Duration;
//!
//! assert_eq!(format_time(Duration::from_millis(3_665_000), false), "01:01:05");
//! assert_eq!(format_time(Duration::from_millis(1_234), true), "00:01.23");
//! assert_eq!(format_time_compact(Duration::from_millis(125_000)), "2m 5s");
//! ```

use once_cell::sync::Lazy;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A monotonic time source.
///
/// `now` returns the time since an arbitrary fixed origin; only differences
/// between readings are meaningful.
pub trait Clock: Clone + fmt::Debug {
    /// The current reading.
    fn now(&self) -> Duration;
}

static ORIGIN: Lazy<Instant> = Lazy::new(Instant::now);

/// The process monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        ORIGIN.elapsed()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same reading, so a test can hold one handle while the
/// timer holds another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    millis: Arc<AtomicU64>,
}

impl ManualClock {
    /// A clock reading zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        self.millis.fetch_add(by.as_millis() as u64, Ordering::SeqCst);
    }

    /// Sets the absolute reading.
    pub fn set(&self, to: Duration) {
        self.millis.store(to.as_millis() as u64, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_millis(self.millis.load(Ordering::SeqCst))
    }
}

/// Whether the timer counts down to a duration or up from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerMode {
    /// Counts down from [`Options::duration`] and finishes at zero.
    Countdown,
    /// Counts up indefinitely.
    #[default]
    Stopwatch,
}

/// Lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState {
    /// Not started, or stopped.
    #[default]
    Idle,
    /// Accumulating time.
    Running,
    /// Holding its elapsed time.
    Paused,
    /// A countdown that reached its duration.
    Finished,
}

impl TimerState {
    /// Glyph shown by [`Model::view_with_status`].
    pub fn icon(self) -> &'static str {
        match self {
            TimerState::Idle => "⏹",
            TimerState::Running => "▶",
            TimerState::Paused => "⏸",
            TimerState::Finished => "✓",
        }
    }
}

/// Timer configuration.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Countdown or stopwatch. Default: stopwatch.
    pub mode: TimerMode,
    /// Countdown length; ignored by stopwatches.
    pub duration: Duration,
    /// Append centiseconds to the view.
    pub show_milliseconds: bool,
}

impl Options {
    /// Sets the mode.
    pub fn with_mode(mut self, mode: TimerMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the countdown length.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Shows centiseconds.
    pub fn with_milliseconds(mut self, show: bool) -> Self {
        self.show_milliseconds = show;
        self
    }
}

/// Timer state.
#[derive(Clone)]
pub struct Model<C: Clock = SystemClock> {
    mode: TimerMode,
    duration: Duration,
    /// Append centiseconds to the view.
    pub show_milliseconds: bool,
    state: TimerState,
    accumulated: Duration,
    started_at: Option<Duration>,
    clock: C,
}

impl<C: Clock> fmt::Debug for Model<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("mode", &self.mode)
            .field("duration", &self.duration)
            .field("state", &self.state)
            .field("accumulated", &self.accumulated)
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

// The clock is a collaborator, not state.
impl<C: Clock> PartialEq for Model<C> {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode
            && self.duration == other.duration
            && self.show_milliseconds == other.show_milliseconds
            && self.state == other.state
            && self.accumulated == other.accumulated
            && self.started_at == other.started_at
    }
}

/// Creates an idle timer on the system clock.
pub fn new(options: Options) -> Model {
    Model::new_with_clock(options, SystemClock)
}

/// Creates an idle countdown of `duration`.
pub fn countdown(duration: Duration) -> Model {
    new(Options::default()
        .with_mode(TimerMode::Countdown)
        .with_duration(duration))
}

/// Creates an idle stopwatch.
pub fn stopwatch() -> Model {
    new(Options::default())
}

impl Default for Model {
    fn default() -> Self {
        stopwatch()
    }
}

impl<C: Clock> Model<C> {
    /// Creates an idle timer reading time from `clock`.
    pub fn new_with_clock(options: Options, clock: C) -> Self {
        Self {
            mode: options.mode,
            duration: options.duration,
            show_milliseconds: options.show_milliseconds,
            state: TimerState::Idle,
            accumulated: Duration::ZERO,
            started_at: None,
            clock,
        }
    }

    /// Moves the timer onto another clock. A running timer keeps its elapsed
    /// time and continues from the new clock's current reading.
    pub fn with_clock<D: Clock>(self, clock: D) -> Model<D> {
        let accumulated = self.elapsed();
        let started_at = self.started_at.map(|_| clock.now());
        Model {
            mode: self.mode,
            duration: self.duration,
            show_milliseconds: self.show_milliseconds,
            state: self.state,
            accumulated,
            started_at,
            clock,
        }
    }

    fn transition(&mut self, to: TimerState) {
        if self.state != to {
            tracing::trace!(from = ?self.state, to = ?to, "timer state change");
        }
        self.state = to;
    }

    fn live(&self) -> Duration {
        match self.started_at {
            Some(t) => self.clock.now().saturating_sub(t),
            None => Duration::ZERO,
        }
    }

    /// Starts an idle timer. A paused timer resumes; running and finished
    /// timers are returned unchanged.
    #[must_use]
    pub fn start(mut self) -> Self {
        match self.state {
            TimerState::Idle => {
                self.started_at = Some(self.clock.now());
                self.transition(TimerState::Running);
                self
            }
            TimerState::Paused => self.resume(),
            TimerState::Running | TimerState::Finished => self,
        }
    }

    /// Pauses a running timer, folding the live span into the accumulator.
    #[must_use]
    pub fn pause(mut self) -> Self {
        if self.state != TimerState::Running {
            return self;
        }
        self.accumulated += self.live();
        self.started_at = None;
        self.transition(TimerState::Paused);
        self
    }

    /// Resumes a paused timer.
    #[must_use]
    pub fn resume(mut self) -> Self {
        if self.state != TimerState::Paused {
            return self;
        }
        self.started_at = Some(self.clock.now());
        self.transition(TimerState::Running);
        self
    }

    /// Returns to idle with zero elapsed time.
    #[must_use]
    pub fn stop(mut self) -> Self {
        self.accumulated = Duration::ZERO;
        self.started_at = None;
        self.transition(TimerState::Idle);
        self
    }

    /// Zeroes elapsed time. A running timer keeps running from now; any other
    /// timer returns to idle.
    #[must_use]
    pub fn reset(mut self) -> Self {
        self.accumulated = Duration::ZERO;
        if self.state == TimerState::Running {
            self.started_at = Some(self.clock.now());
        } else {
            self.started_at = None;
            self.transition(TimerState::Idle);
        }
        self
    }

    /// idle → running, running → paused, paused → running; finished stays.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self.state {
            TimerState::Idle => self.start(),
            TimerState::Running => self.pause(),
            TimerState::Paused => self.resume(),
            TimerState::Finished => self,
        }
    }

    /// Lets a running countdown notice that it has reached its duration.
    /// Stopwatches, and timers that are not running, are returned unchanged.
    #[must_use]
    pub fn tick(mut self) -> Self {
        if self.mode != TimerMode::Countdown || self.state != TimerState::Running {
            return self;
        }
        if self.accumulated + self.live() >= self.duration {
            self.accumulated = self.duration;
            self.started_at = None;
            self.transition(TimerState::Finished);
        }
        self
    }

    /// Accumulated time, plus the live span while running.
    pub fn elapsed(&self) -> Duration {
        if self.state == TimerState::Running {
            self.accumulated + self.live()
        } else {
            self.accumulated
        }
    }

    /// Time left on a countdown, floored at zero. Stopwatches report zero.
    pub fn remaining(&self) -> Duration {
        match self.mode {
            TimerMode::Countdown => self.duration.saturating_sub(self.elapsed()),
            TimerMode::Stopwatch => Duration::ZERO,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Countdown or stopwatch.
    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    /// Countdown length.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether time is accumulating.
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Whether a countdown has finished.
    pub fn is_finished(&self) -> bool {
        self.state == TimerState::Finished
    }

    /// Remaining time for a countdown, elapsed time for a stopwatch.
    pub fn view(&self) -> String {
        let shown = match self.mode {
            TimerMode::Countdown => self.remaining(),
            TimerMode::Stopwatch => self.elapsed(),
        };
        format_time(shown, self.show_milliseconds)
    }

    /// [`view`](Self::view) prefixed with the state glyph.
    pub fn view_with_status(&self) -> String {
        format!("{} {}", self.state.icon(), self.view())
    }
}

/// Formats as `MM:SS`, or `HH:MM:SS` once there are hours, with an optional
/// `.cc` centisecond suffix.
pub fn format_time(d: Duration, show_ms: bool) -> String {
    let total_ms = d.as_millis();
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let seconds = (total_ms % 60_000) / 1000;

    let mut out = if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    };
    if show_ms {
        out.push_str(&format!(".{:02}", (total_ms % 1000) / 10));
    }
    out
}

/// Formats using the two coarsest units starting at the first non-zero one:
/// `"1h 23m"`, `"4m 5s"`, `"12s"`.
pub fn format_time_compact(d: Duration) -> String {
    let total = d.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
