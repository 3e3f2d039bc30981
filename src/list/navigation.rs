//! Selection movement and the scroll window.
//!
//! Every movement computes a candidate index, then walks past disabled
//! items in the direction of travel. Once the selection changes, the
//! offset is moved by the least amount that keeps the selected row
//! visible.

use super::model::Model;

/// Rows jumped by [`Model::move_by_page`] on a list without a height.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Direction of a page jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward index 0.
    Up,
    /// Toward the last index.
    Down,
}

impl<T> Model<T> {
    /// Moves the selection to the previous enabled item, wrapping to the
    /// end when `wrap` is set.
    #[must_use]
    pub fn move_up(self) -> Self {
        if self.items.is_empty() {
            return self;
        }
        let target = self
            .step(self.selected, false, self.wrap)
            .and_then(|candidate| self.seek(candidate, false, self.wrap));
        match target {
            Some(idx) => self.apply_selection(idx),
            None => self,
        }
    }

    /// Moves the selection to the next enabled item, wrapping to the start
    /// when `wrap` is set.
    #[must_use]
    pub fn move_down(self) -> Self {
        if self.items.is_empty() {
            return self;
        }
        let target = self
            .step(self.selected, true, self.wrap)
            .and_then(|candidate| self.seek(candidate, true, self.wrap));
        match target {
            Some(idx) => self.apply_selection(idx),
            None => self,
        }
    }

    /// Selects the first enabled item.
    #[must_use]
    pub fn move_to_start(self) -> Self {
        if self.items.is_empty() {
            return self;
        }
        match self.seek(0, true, self.wrap) {
            Some(idx) => self.apply_selection(idx),
            None => self,
        }
    }

    /// Selects the last enabled item.
    #[must_use]
    pub fn move_to_end(self) -> Self {
        if self.items.is_empty() {
            return self;
        }
        let last = self.items.len() - 1;
        match self.seek(last, false, self.wrap) {
            Some(idx) => self.apply_selection(idx),
            None => self,
        }
    }

    /// Jumps a page (`height` rows, or [`DEFAULT_PAGE_SIZE`] when
    /// unbounded) in `direction`, stopping at the ends.
    ///
    /// When the landing item is disabled the jump continues one row at a
    /// time in the same direction without wrapping. If that runs off the
    /// end, the list is returned unchanged.
    #[must_use]
    pub fn move_by_page(self, direction: Direction) -> Self {
        if self.items.is_empty() {
            return self;
        }
        let page = if self.height > 0 {
            self.height
        } else {
            DEFAULT_PAGE_SIZE
        };
        let last = self.items.len() - 1;
        let (candidate, forward) = match direction {
            Direction::Up => (self.selected.saturating_sub(page), false),
            Direction::Down => ((self.selected + page).min(last), true),
        };
        match self.seek(candidate, forward, false) {
            Some(idx) => self.apply_selection(idx),
            None => self,
        }
    }

    /// Selects `index` exactly. Out-of-range and disabled targets leave the
    /// list unchanged.
    #[must_use]
    pub fn select(self, index: usize) -> Self {
        match self.items.get(index) {
            Some(item) if !item.disabled => self.apply_selection(index),
            _ => self,
        }
    }

    fn apply_selection(mut self, idx: usize) -> Self {
        self.selected = idx;
        self.sync_offset();
        self
    }

    /// One step from `idx`, or `None` when it would leave the list and
    /// wrapping is off.
    fn step(&self, idx: usize, forward: bool, wrap: bool) -> Option<usize> {
        let n = self.items.len();
        if forward {
            if idx + 1 < n {
                Some(idx + 1)
            } else if wrap {
                Some(0)
            } else {
                None
            }
        } else if idx > 0 {
            Some(idx - 1)
        } else if wrap {
            Some(n - 1)
        } else {
            None
        }
    }

    /// First enabled index at or after `from` in the given direction,
    /// visiting each item at most once.
    pub(super) fn seek(&self, from: usize, forward: bool, wrap: bool) -> Option<usize> {
        let mut idx = from;
        for _ in 0..self.items.len() {
            if !self.items[idx].disabled {
                return Some(idx);
            }
            idx = self.step(idx, forward, wrap)?;
        }
        None
    }

    /// Moves `offset` the minimum distance that brings `selected` into the
    /// window.
    pub(super) fn sync_offset(&mut self) {
        if self.height == 0 || self.items.is_empty() {
            self.offset = 0;
            return;
        }

        if self.selected >= self.offset + self.height {
            self.offset = self.selected + 1 - self.height;
        } else if self.selected < self.offset {
            self.offset = self.selected;
        }

        let max_offset = self.items.len().saturating_sub(self.height);
        if self.offset > max_offset {
            self.offset = max_offset;
        }
    }
}
