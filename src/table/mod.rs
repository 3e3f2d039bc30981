//! Bordered table component with optional row selection.
//!
//! Rows are any type implementing [`TableRow`]; columns pull cells out of a
//! row by key and may format them with a custom closure. Column widths are
//! derived from the header and cell text on every row replacement.
//!
//! ```rust
//! use bubblekit::table::{border, new, Align, Column, Options};
//! use std::collections::HashMap;
//!
//! let rows = vec![
//!     HashMap::from([("name".to_string(), "Alice".to_string()), ("age".to_string(), "30".to_string())]),
//!     HashMap::from([("name".to_string(), "Bob".to_string()), ("age".to_string(), "4".to_string())]),
//! ];
//! let table = new(
//!     Options::default()
//!         .with_columns(vec![
//!             Column::new("name", "Name"),
//!             Column::new("age", "Age").with_align(Align::Right),
//!         ])
//!         .with_rows(rows)
//!         .with_border(border::border_or_default("rounded"))
//!         .with_selectable(true),
//! );
//!
//! let table = table.move_down();
//! assert_eq!(table.selected_index(), Some(1));
//! assert!(table.view().contains("> │ Bob   │   4 │"));
//! ```

pub mod border;
pub mod column;
pub mod model;
pub mod rendering;
pub mod row;

#[cfg(test)]
mod tests;

pub use border::TableBorder;
pub use column::{Align, CellFormatter, Column};
pub use model::{new, Model, Options};
pub use row::TableRow;
