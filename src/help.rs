//! Key binding help display.
//!
//! The help model holds key bindings, optionally organized into titled
//! groups, and renders them in several layouts:
//!
//! - **simple**: one aligned binding per entry, joined with a separator
//! - **grouped**: each group's title, a dashed rule, then its bindings
//! - **columns**: bindings laid out column-major across the configured width
//! - **short**: a single `key description • key description` line
//! - **boxed**: any of the above inside a rounded border
//!
//! When groups are present they are the primary storage and
//! [`Model::bindings`] is their flattened mirror.
//!
//! # Quick Start
//!
//! ```rust
//! use bubblekit::help::{new, Binding, Options};
//!
//! let help = new(Options::default().with_bindings(vec![
//!     Binding::new("↑/k", "up"),
//!     Binding::new("q", "quit"),
//! ]));
//!
//! assert_eq!(help.view_simple(), "↑/k  up\nq    quit");
//! assert_eq!(help.view_short(0), "↑/k up • q quit");
//! ```

use crate::runeutil;

/// A key and what it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Key label, e.g. `"ctrl+c"`.
    pub key: String,
    /// Action label, e.g. `"quit"`.
    pub description: String,
}

impl Binding {
    /// Creates a binding.
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }
}

/// Bindings under an optional heading.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BindingGroup {
    /// Heading drawn above the bindings by the grouped layout.
    pub title: Option<String>,
    /// Bindings in display order.
    pub bindings: Vec<Binding>,
}

impl BindingGroup {
    /// A titled group.
    pub fn new(title: impl Into<String>, bindings: Vec<Binding>) -> Self {
        Self {
            title: Some(title.into()),
            bindings,
        }
    }

    /// A group with no heading.
    pub fn untitled(bindings: Vec<Binding>) -> Self {
        Self {
            title: None,
            bindings,
        }
    }
}

/// Layout selector for [`Model::view_boxed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Whatever [`Model::view`] picks.
    Auto,
    /// [`Model::view_simple`].
    Simple,
    /// [`Model::view_grouped`].
    Grouped,
    /// [`Model::view_columns`].
    Columns,
    /// [`Model::view_short`] with the given limit.
    Short(usize),
}

/// Help configuration.
#[derive(Debug, Clone)]
pub struct Options {
    /// Flat bindings; ignored when `groups` is non-empty.
    pub bindings: Vec<Binding>,
    /// Grouped bindings.
    pub groups: Vec<BindingGroup>,
    /// Joins entries in the simple layout.
    pub separator: String,
    /// Spaces between a key column and its descriptions.
    pub key_gap: usize,
    /// Available width for the column and short layouts; 0 is unbounded.
    pub width: usize,
    /// Fixed column count; 0 derives it from `width`.
    pub columns: usize,
    /// Spaces between columns.
    pub column_gap: usize,
    /// Joins entries in the short layout.
    pub short_separator: String,
    /// Appended to a short view cut off by `width`.
    pub ellipsis: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            bindings: Vec::new(),
            groups: Vec::new(),
            separator: "\n".to_string(),
            key_gap: 2,
            width: 80,
            columns: 0,
            column_gap: 4,
            short_separator: " • ".to_string(),
            ellipsis: "…".to_string(),
        }
    }
}

impl Options {
    /// Sets flat bindings.
    pub fn with_bindings(mut self, bindings: Vec<Binding>) -> Self {
        self.bindings = bindings;
        self
    }

    /// Sets grouped bindings.
    pub fn with_groups(mut self, groups: Vec<BindingGroup>) -> Self {
        self.groups = groups;
        self
    }

    /// Sets the available width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Fixes the column count.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the simple layout separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// Help state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    groups: Vec<BindingGroup>,
    bindings: Vec<Binding>,
    /// Joins entries in the simple layout.
    pub separator: String,
    /// Spaces between a key column and its descriptions.
    pub key_gap: usize,
    /// Available width; 0 is unbounded.
    pub width: usize,
    /// Fixed column count; 0 derives it from `width`.
    pub columns: usize,
    /// Spaces between columns.
    pub column_gap: usize,
    /// Joins entries in the short layout.
    pub short_separator: String,
    /// Appended to a short view cut off by `width`.
    pub ellipsis: String,
}

/// Creates a help model.
pub fn new(options: Options) -> Model {
    let groups = if options.groups.is_empty() && !options.bindings.is_empty() {
        vec![BindingGroup::untitled(options.bindings)]
    } else {
        options.groups
    };
    Model {
        bindings: flatten(&groups),
        groups,
        separator: options.separator,
        key_gap: options.key_gap,
        width: options.width,
        columns: options.columns,
        column_gap: options.column_gap,
        short_separator: options.short_separator,
        ellipsis: options.ellipsis,
    }
}

impl Default for Model {
    fn default() -> Self {
        new(Options::default())
    }
}

fn flatten(groups: &[BindingGroup]) -> Vec<Binding> {
    groups
        .iter()
        .flat_map(|g| g.bindings.iter().cloned())
        .collect()
}

fn pad_visible(s: &str, width: usize) -> String {
    let n = runeutil::visible_len(s);
    if n >= width {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(width - n))
}

impl Model {
    /// Replaces everything with a single untitled group.
    #[must_use]
    pub fn set_bindings(mut self, bindings: Vec<Binding>) -> Self {
        self.groups = if bindings.is_empty() {
            Vec::new()
        } else {
            vec![BindingGroup::untitled(bindings)]
        };
        self.bindings = flatten(&self.groups);
        self
    }

    /// Replaces the groups.
    #[must_use]
    pub fn set_groups(mut self, groups: Vec<BindingGroup>) -> Self {
        self.bindings = flatten(&groups);
        self.groups = groups;
        self
    }

    /// Appends a binding to the last group.
    #[must_use]
    pub fn add_binding(mut self, binding: Binding) -> Self {
        match self.groups.last_mut() {
            Some(group) => group.bindings.push(binding.clone()),
            None => self.groups.push(BindingGroup::untitled(vec![binding.clone()])),
        }
        self.bindings.push(binding);
        self
    }

    /// All bindings in display order.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// The binding groups.
    pub fn groups(&self) -> &[BindingGroup] {
        &self.groups
    }

    fn aligned(&self, bindings: &[Binding]) -> Vec<String> {
        let key_width = bindings
            .iter()
            .map(|b| runeutil::len(&b.key))
            .max()
            .unwrap_or(0);
        let gap = " ".repeat(self.key_gap);
        bindings
            .iter()
            .map(|b| format!("{}{}{}", runeutil::pad_end(&b.key, key_width), gap, b.description))
            .collect()
    }

    /// All bindings with keys padded to the widest key, joined with
    /// [`separator`](Self::separator).
    pub fn view_simple(&self) -> String {
        self.aligned(&self.bindings).join(&self.separator)
    }

    /// Each group's title and a dashed rule, then its aligned bindings; groups
    /// are separated by a blank line.
    pub fn view_grouped(&self) -> String {
        self.groups
            .iter()
            .map(|group| {
                let mut lines = Vec::with_capacity(group.bindings.len() + 2);
                if let Some(title) = &group.title {
                    lines.push(title.clone());
                    lines.push("-".repeat(runeutil::len(title)));
                }
                lines.extend(self.aligned(&group.bindings));
                lines.join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Number of columns the column layout uses for `count` items of
    /// `item_width` characters.
    fn column_count(&self, count: usize, item_width: usize) -> usize {
        let derived = if self.columns > 0 {
            self.columns
        } else if self.width == 0 {
            count
        } else {
            (self.width + self.column_gap) / (item_width + self.column_gap).max(1)
        };
        derived.clamp(1, count.max(1))
    }

    /// Bindings laid out column-major: each column is filled top to bottom
    /// before the next one starts.
    pub fn view_columns(&self) -> String {
        let items = self.aligned(&self.bindings);
        if items.is_empty() {
            return String::new();
        }
        let item_width = items.iter().map(|i| runeutil::len(i)).max().unwrap_or(0);
        let columns = self.column_count(items.len(), item_width);
        let rows = items.len().div_ceil(columns);
        let gap = " ".repeat(self.column_gap);

        (0..rows)
            .map(|row| {
                let cells: Vec<&str> = (0..columns)
                    .filter_map(|col| items.get(col * rows + row).map(String::as_str))
                    .collect();
                let last = cells.len().saturating_sub(1);
                cells
                    .iter()
                    .enumerate()
                    .map(|(i, cell)| {
                        if i == last {
                            cell.to_string()
                        } else {
                            runeutil::pad_end(cell, item_width)
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(&gap)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Grouped layout when there is more than one group or any group has a
    /// title; otherwise the column layout, or the simple layout when exactly
    /// one column is configured.
    pub fn view(&self) -> String {
        if self.groups.len() > 1 || self.groups.iter().any(|g| g.title.is_some()) {
            self.view_grouped()
        } else if self.columns == 1 {
            self.view_simple()
        } else {
            self.view_columns()
        }
    }

    /// The first `max` bindings (all of them when `max` is 0) as
    /// `key description` pairs on one line. Stops early with the ellipsis
    /// when the line would exceed a non-zero width.
    pub fn view_short(&self, max: usize) -> String {
        let take = if max == 0 { self.bindings.len() } else { max };
        let mut out = String::new();
        let mut total = 0;
        for (i, b) in self.bindings.iter().take(take).enumerate() {
            let sep = if i > 0 { self.short_separator.as_str() } else { "" };
            let item = format!("{}{} {}", sep, b.key, b.description);
            let item_width = runeutil::len(&item);
            if self.width > 0 && total + item_width > self.width {
                let tail = format!(" {}", self.ellipsis);
                if total + runeutil::len(&tail) <= self.width {
                    out.push_str(&tail);
                }
                break;
            }
            total += item_width;
            out.push_str(&item);
        }
        out
    }

    /// Renders `layout` inside a rounded border sized to its longest line.
    pub fn view_boxed(&self, layout: Layout) -> String {
        let body = match layout {
            Layout::Auto => self.view(),
            Layout::Simple => self.view_simple(),
            Layout::Grouped => self.view_grouped(),
            Layout::Columns => self.view_columns(),
            Layout::Short(max) => self.view_short(max),
        };
        let lines: Vec<&str> = body.split('\n').collect();
        let inner = lines
            .iter()
            .map(|l| runeutil::visible_len(l))
            .max()
            .unwrap_or(0);
        let rule = "─".repeat(inner + 2);

        let mut out = Vec::with_capacity(lines.len() + 2);
        out.push(format!("╭{}╮", rule));
        for line in lines {
            out.push(format!("│ {} │", pad_visible(line, inner)));
        }
        out.push(format!("╰{}╯", rule));
        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> Vec<Binding> {
        vec![
            Binding::new("↑/k", "up"),
            Binding::new("↓/j", "down"),
            Binding::new("enter", "select"),
            Binding::new("q", "quit"),
        ]
    }

    #[test]
    fn test_flat_bindings_become_one_group() {
        let help = new(Options::default().with_bindings(nav()));
        assert_eq!(help.groups().len(), 1);
        assert!(help.groups()[0].title.is_none());
        assert_eq!(help.bindings().len(), 4);
    }

    #[test]
    fn test_groups_mirror_into_bindings() {
        let help = new(Options::default().with_groups(vec![
            BindingGroup::new("Move", nav()[..2].to_vec()),
            BindingGroup::new("Act", nav()[2..].to_vec()),
        ]));
        assert_eq!(help.bindings(), nav().as_slice());
        let help = help.add_binding(Binding::new("?", "help"));
        assert_eq!(help.groups()[1].bindings.len(), 3);
        assert_eq!(help.bindings().len(), 5);
    }

    #[test]
    fn test_view_simple_aligns_keys() {
        let help = new(Options::default().with_bindings(nav()));
        assert_eq!(
            help.view_simple(),
            "↑/k    up\n↓/j    down\nenter  select\nq      quit"
        );
        let help = help.clone().set_bindings(nav()[..2].to_vec());
        let help = Model { separator: " | ".to_string(), ..help };
        assert_eq!(help.view_simple(), "↑/k  up | ↓/j  down");
    }

    #[test]
    fn test_view_grouped() {
        let help = new(Options::default().with_groups(vec![
            BindingGroup::new("Navigation", nav()[..2].to_vec()),
            BindingGroup::new("Actions", vec![Binding::new("q", "quit")]),
        ]));
        assert_eq!(
            help.view_grouped(),
            "Navigation\n----------\n↑/k  up\n↓/j  down\n\nActions\n-------\nq  quit"
        );
        assert_eq!(help.view(), help.view_grouped());
    }

    #[test]
    fn test_view_columns_is_column_major() {
        let bindings: Vec<Binding> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|k| Binding::new(*k, "x"))
            .collect();
        let help = new(Options::default().with_bindings(bindings).with_columns(2));
        // rows = ceil(5 / 2) = 3
        assert_eq!(help.view_columns(), "a  x    d  x\nb  x    e  x\nc  x");
    }

    #[test]
    fn test_view_columns_derives_count_from_width() {
        let bindings: Vec<Binding> = ["a", "b", "c", "d"]
            .iter()
            .map(|k| Binding::new(*k, "x"))
            .collect();
        // item width 4, gap 4: (20 + 4) / (4 + 4) = 3 columns, 2 rows
        let help = new(Options::default().with_bindings(bindings).with_width(20));
        assert_eq!(help.view_columns(), "a  x    c  x\nb  x    d  x");
        assert_eq!(help.view(), help.view_columns());
    }

    #[test]
    fn test_view_dispatch_single_column_is_simple() {
        let help = new(Options::default().with_bindings(nav()).with_columns(1));
        assert_eq!(help.view(), help.view_simple());
    }

    #[test]
    fn test_view_short() {
        let help = new(Options::default().with_bindings(nav()));
        assert_eq!(help.view_short(2), "↑/k up • ↓/j down");
        assert_eq!(help.view_short(0), "↑/k up • ↓/j down • enter select • q quit");
    }

    #[test]
    fn test_view_short_truncates_to_width() {
        let help = new(Options::default().with_bindings(nav()).with_width(20));
        assert_eq!(help.view_short(0), "↑/k up • ↓/j down …");
    }

    #[test]
    fn test_view_boxed() {
        let help = new(Options::default().with_bindings(vec![
            Binding::new("q", "quit"),
            Binding::new("?", "help"),
        ]));
        assert_eq!(
            help.view_boxed(Layout::Simple),
            "╭─────────╮\n│ q  quit │\n│ ?  help │\n╰─────────╯"
        );
        assert_eq!(
            help.view_boxed(Layout::Short(1)),
            "╭────────╮\n│ q quit │\n╰────────╯"
        );
    }

    #[test]
    fn test_view_columns_with_zero_width_items() {
        let help = new(Options {
            key_gap: 0,
            column_gap: 0,
            ..Options::default().with_bindings(vec![Binding::new("", ""), Binding::new("", "")])
        });
        assert_eq!(help.view_columns(), "");
    }

    #[test]
    fn test_empty_help_renders_nothing() {
        let help = Model::default();
        assert_eq!(help.view(), "");
        assert_eq!(help.view_simple(), "");
        assert_eq!(help.view_short(3), "");
    }
}
