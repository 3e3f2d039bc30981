//! Row access for tables.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

/// A table row: anything that can look up a displayable cell value by
/// column key.
///
/// Implemented for string-keyed maps. Implement it for your own structs to
/// render them directly:
///
/// ```rust
/// use bubblekit::table::TableRow;
///
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// impl TableRow for Person {
///     type Value = dyn std::fmt::Display;
///
///     fn cell(&self, key: &str) -> Option<&Self::Value> {
///         match key {
///             "name" => Some(&self.name),
///             "age" => Some(&self.age),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait TableRow {
    /// Type of the cell values.
    type Value: Display + ?Sized;

    /// Returns the value stored under `key`, if any.
    fn cell(&self, key: &str) -> Option<&Self::Value>;
}

impl<V: Display> TableRow for HashMap<String, V> {
    type Value = V;

    fn cell(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

impl<V: Display> TableRow for BTreeMap<String, V> {
    type Value = V;

    fn cell(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

impl<V: Display> TableRow for HashMap<&str, V> {
    type Value = V;

    fn cell(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

impl<V: Display> TableRow for BTreeMap<&str, V> {
    type Value = V;

    fn cell(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}
