#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubblekit/")]

//! # bubblekit
//!
//! Terminal UI widgets as plain values: spinner, progress bar, text input,
//! viewport, help, timer, list and table.
//!
//! ## Overview
//!
//! Every widget is a `Model` built by a `new(...)` factory from an options
//! value with documented defaults. Transitions take the model by value and
//! return the next one, so a model you still hold never changes under you.
//! `view` methods borrow the model and return plain text ready to write to a
//! terminal. Nothing here reads input, schedules ticks or draws to the
//! screen; map your key events and timers onto transition calls yourself.
//!
//! A transition whose precondition does not hold (cursor already at the
//! start, index out of range, disabled target, empty collection) returns its
//! input unchanged rather than failing.
//!
//! ## Components
//!
//! - **[`spinner`]**: animated frame sequences with named presets
//! - **[`progress`]**: fixed-width progress bar with percent readout
//! - **[`textinput`]**: single-line input with cursor, masking and word editing
//! - **[`viewport`]**: scrollable window over multi-line content
//! - **[`help`]**: key binding listings in several layouts
//! - **[`timer`]**: countdown and stopwatch state machine
//! - **[`list`]**: selectable list with a scroll window and disabled items
//! - **[`table`]**: bordered grid with computed column widths
//!
//! ## Quick Start
//!
//! ```rust
//! use bubblekit::prelude::*;
//!
//! let list = list_new(ListOptions::default().with_items(vec![
//!     ListItem::<()>::new("Build"),
//!     ListItem::new("Test"),
//!     ListItem::new("Deploy").disabled(),
//! ]));
//!
//! let list = list.move_down().move_down();
//! assert_eq!(list.selected_index(), 0);
//! println!("{}", list.view());
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through [`tracing`] at `debug` and `trace` level. The
//! crate never installs a subscriber.

pub mod error;
pub mod help;
pub mod list;
pub mod progress;
pub mod runeutil;
pub mod spinner;
pub mod table;
pub mod textinput;
pub mod timer;
pub mod viewport;

pub use error::{Error, Result};

/// Convenience re-exports of every widget's model and factory.
///
/// ```rust
/// use bubblekit::prelude::*;
///
/// let spinner = spinner_new(&[spinner::with_preset("line")]).tick();
/// assert_eq!(spinner.view(), "/");
///
/// let bar = progress_new(&[progress::with_width(4), progress::without_percentage()]);
/// assert_eq!(bar.set(0.5).view(), "██░░");
/// ```
pub mod prelude {
    pub use crate::help::{
        new as help_new, Binding, BindingGroup, Layout as HelpLayout, Model as Help,
        Options as HelpOptions,
    };
    pub use crate::list::{
        new as list_new, Direction, ListItem, Model as List, Options as ListOptions,
    };
    pub use crate::progress::{
        new as progress_new, render as render_progress, Model as Progress, ProgressOption,
        ProgressStyle,
    };
    pub use crate::spinner::{new as spinner_new, Model as Spinner, SpinnerOption};
    pub use crate::table::{
        new as table_new, Align, Column, Model as Table, Options as TableOptions, TableBorder,
        TableRow,
    };
    pub use crate::textinput::{
        new as textinput_new, Model as TextInput, Options as TextInputOptions,
    };
    pub use crate::timer::{
        format_time, format_time_compact, new as timer_new, Clock, ManualClock,
        Model as Timer, Options as TimerOptions, SystemClock, TimerMode, TimerState,
    };
    pub use crate::viewport::{
        new as viewport_new, Model as Viewport, Options as ViewportOptions,
    };
    pub use crate::{progress, spinner};
}
