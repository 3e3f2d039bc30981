//! Narrowing the item set.
//!
//! Filters replace the items with the matching subsequence through
//! [`Model::set_items`]. The selection restarts at the first enabled
//! match; the previously selected item is not tracked.

use super::item::ListItem;
use super::model::Model;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use tracing::debug;

impl<T> Model<T> {
    /// Keeps the items for which `predicate` returns true.
    #[must_use]
    pub fn filter<F>(mut self, mut predicate: F) -> Self
    where
        F: FnMut(&ListItem<T>) -> bool,
    {
        let before = self.items.len();
        let kept: Vec<_> = std::mem::take(&mut self.items)
            .into_iter()
            .filter(|item| predicate(item))
            .collect();
        debug!(before, after = kept.len(), "list: filtered");
        self.selected = 0;
        self.set_items(kept)
    }

    /// Keeps the items whose title contains `query`, ignoring case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubblekit::list::{new, ListItem, Options};
    ///
    /// let list = new(Options::<()>::default().with_items(vec![
    ///     ListItem::new("Apple"),
    ///     ListItem::new("Banana"),
    ///     ListItem::new("Pineapple"),
    /// ]))
    /// .filter_by_title("APPLE");
    ///
    /// let titles: Vec<_> = list.items().iter().map(|i| i.title.as_str()).collect();
    /// assert_eq!(titles, ["Apple", "Pineapple"]);
    /// ```
    #[must_use]
    pub fn filter_by_title(self, query: &str) -> Self {
        let needle = query.to_lowercase();
        self.filter(|item| item.title.to_lowercase().contains(&needle))
    }

    /// Keeps the items whose title fuzzy-matches `query`, best match first.
    ///
    /// Equal scores keep their original order. An empty query keeps every
    /// item in place.
    #[must_use]
    pub fn filter_fuzzy(mut self, query: &str) -> Self {
        if query.is_empty() {
            let items = std::mem::take(&mut self.items);
            self.selected = 0;
            return self.set_items(items);
        }

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, ListItem<T>)> = std::mem::take(&mut self.items)
            .into_iter()
            .filter_map(|item| {
                matcher
                    .fuzzy_match(&item.title, query)
                    .map(|score| (score, item))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        debug!(query, matches = scored.len(), "list: fuzzy filtered");
        self.selected = 0;
        self.set_items(scored.into_iter().map(|(_, item)| item).collect())
    }
}
