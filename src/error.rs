//! Error type shared by the widget modules.
//!
//! Widget transitions never fail: a transition whose precondition is unmet
//! hands back its input unchanged. The only fallible surface is looking up a
//! named preset (spinner frames, progress styles, table borders) by string.

use thiserror::Error;

/// Errors produced by bubblekit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A preset name did not match any entry in the preset table.
    #[error("unknown {kind} preset: {name:?}")]
    UnknownPreset {
        /// Which preset table was searched ("spinner", "progress", "border").
        kind: &'static str,
        /// The name that was looked up.
        name: String,
    },
}

impl Error {
    pub(crate) fn unknown_preset(kind: &'static str, name: &str) -> Self {
        Error::UnknownPreset {
            kind,
            name: name.to_string(),
        }
    }
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
