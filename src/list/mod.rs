//! Selectable, scrollable list component.
//!
//! A list holds [`ListItem`]s, a selected index and the offset of a scroll
//! window `height` rows tall. Navigation skips disabled items and, when
//! `wrap` is on, wraps around the ends. The window only moves as far as it
//! must to keep the selection visible.
//!
//! ## Quick Start
//!
//! ```rust
//! use bubblekit::list::{new, Direction, ListItem, Options};
//!
//! let items = vec![
//!     ListItem::new("Apple").with_value(1),
//!     ListItem::new("Banana").with_value(2).disabled(),
//!     ListItem::new("Cherry").with_value(3),
//! ];
//! let list = new(Options::default().with_items(items).with_height(2));
//!
//! let list = list.move_down();
//! assert_eq!(list.selected_value(), Some(&3));
//! assert_eq!(list.offset(), 1);
//!
//! let list = list.move_by_page(Direction::Up);
//! assert_eq!(list.selected_index(), 0);
//! ```
//!
//! ## Custom rendering
//!
//! ```rust
//! use bubblekit::list::{new, ListItem, Options};
//!
//! let list = new(Options::<()>::default().with_items(vec![
//!     ListItem::new("a"),
//!     ListItem::new("b"),
//! ]));
//! let out = list.view_with(|item, selected, idx| {
//!     format!("{}{}. {}", if selected { "*" } else { " " }, idx + 1, item.title)
//! });
//! assert_eq!(out, "*1. a\n 2. b");
//! ```

pub mod filtering;
pub mod item;
pub mod model;
pub mod navigation;
pub mod rendering;


pub use item::ListItem;
pub use model::{new, Model, Options};
pub use navigation::Direction;
