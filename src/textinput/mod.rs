//! Single-line text input component.
//!
//! The input holds its value as characters plus a cursor index in
//! `[0, len]`. Every edit is a consuming transition returning the next model;
//! edits whose precondition fails (cursor at a boundary, length limit
//! reached) hand the input back unchanged.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubblekit::textinput::{new, Options};
//!
//! let input = new(Options::default().with_value("hello world"));
//! assert_eq!(input.cursor(), 11);
//!
//! let input = input.delete_word_backward();
//! assert_eq!(input.value(), "hello ");
//!
//! let input = input.insert('!');
//! assert_eq!(input.view(), "> hello !█");
//! ```
//!
//! # Masking
//!
//! ```rust
//! use bubblekit::textinput::{new, Options};
//!
//! let input = new(Options::default().with_mask("*").with_value("secret")).blur();
//! assert_eq!(input.view(), "> ******");
//! ```
//!
//! # Module layout
//!
//! - `model`: state, options and the factory
//! - `editing`: insertion and deletion
//! - `movement`: cursor and word movement
//! - `view`: rendering

pub mod editing;
pub mod model;
pub mod movement;
pub mod view;

#[cfg(test)]
mod tests;

pub use model::{new, Model, Options};
