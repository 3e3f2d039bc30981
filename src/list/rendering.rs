//! Rendering for the list.

use super::item::ListItem;
use super::model::Model;
use crate::runeutil;

/// Appended to the title of disabled items.
pub const DISABLED_SUFFIX: &str = " (disabled)";

impl<T> Model<T> {
    /// Renders the rows inside the scroll window, one per line.
    ///
    /// The selected row is prefixed with `cursor`, the others with
    /// `uncursor`. With `show_descriptions`, an item's description follows
    /// on its own line, indented to line up with the titles.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubblekit::list::{new, ListItem, Options};
    ///
    /// let list = new(Options::<()>::default().with_items(vec![
    ///     ListItem::new("One"),
    ///     ListItem::new("Two").disabled(),
    /// ]));
    /// assert_eq!(list.view(), "> One\n  Two (disabled)");
    /// ```
    pub fn view(&self) -> String {
        let indent = " ".repeat(
            runeutil::visible_len(&self.cursor).max(runeutil::visible_len(&self.uncursor)),
        );
        self.view_with(|item, is_selected, _| {
            let prefix = if is_selected {
                &self.cursor
            } else {
                &self.uncursor
            };
            let mut row = format!("{}{}", prefix, item.title);
            if item.disabled {
                row.push_str(DISABLED_SUFFIX);
            }
            if self.show_descriptions {
                if let Some(desc) = &item.description {
                    row.push('\n');
                    row.push_str(&indent);
                    row.push_str(desc);
                }
            }
            row
        })
    }

    /// Renders the rows inside the scroll window with a caller-supplied
    /// renderer, joined by newlines.
    ///
    /// `renderer` receives the item, whether it is selected and its index
    /// in the full item list. Its output is used verbatim.
    pub fn view_with<F>(&self, renderer: F) -> String
    where
        F: Fn(&ListItem<T>, bool, usize) -> String,
    {
        self.visible_range()
            .map(|idx| renderer(&self.items[idx], idx == self.selected, idx))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
