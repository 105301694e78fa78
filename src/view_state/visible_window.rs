//! Visible window over a logical collection.
//!
//! The window is derived, never stored next to a second copy of the items:
//! given the logical length, the display capacity and an anchor, it is a pure
//! `[start, end)` range. Recomputing it after every mutation keeps
//! `len() == min(logical_len, max_visible)` without any manual syncing.

use serde::Serialize;
use std::collections::VecDeque;
use std::ops::Range;

/// Which end of the logical collection the window sticks to.
///
/// The anchor should be the end the next removal takes from, so that the
/// element being removed is always on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowAnchor {
    /// Show the most recently added items (suffix). The newest item is always
    /// visible; appending past capacity evicts the oldest visible item.
    #[default]
    Newest,
    /// Show the oldest items (prefix). Removing the front backfills the window
    /// with the oldest item not yet shown.
    Oldest,
}

/// Range of logical indices currently assigned on-screen positions.
///
/// # Invariants
/// - `start <= end <= logical_len`
/// - `end - start == min(logical_len, max_visible)`
/// - `Newest`: `end == logical_len`; `Oldest`: `start == 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VisibleWindow {
    start: usize,
    end: usize,
    logical_len: usize,
}

impl VisibleWindow {
    /// Derive the window for a collection of `logical_len` items.
    ///
    /// # Examples
    ///
    /// ```
    /// use algoviz::view_state::visible_window::{VisibleWindow, WindowAnchor};
    ///
    /// let window = VisibleWindow::compute(50, 40, WindowAnchor::Newest);
    /// assert_eq!(window.range(), 10..50);
    ///
    /// let window = VisibleWindow::compute(50, 40, WindowAnchor::Oldest);
    /// assert_eq!(window.range(), 0..40);
    /// ```
    pub fn compute(logical_len: usize, max_visible: usize, anchor: WindowAnchor) -> Self {
        let visible = logical_len.min(max_visible);
        let (start, end) = match anchor {
            WindowAnchor::Newest => (logical_len - visible, logical_len),
            WindowAnchor::Oldest => (0, visible),
        };
        Self {
            start,
            end,
            logical_len,
        }
    }

    /// First visible logical index (inclusive).
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last visible logical index (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    /// Visible indices as a range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of visible items.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Length of the logical collection the window was derived from.
    pub fn logical_len(&self) -> usize {
        self.logical_len
    }

    /// Items present in the collection but not on screen.
    pub fn hidden_count(&self) -> usize {
        self.logical_len - self.len()
    }

    /// Whether `index` is visible.
    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }

    /// Position of a logical index within the window (0 = oldest visible).
    pub fn to_window_index(&self, logical_index: usize) -> Option<usize> {
        self.contains(logical_index)
            .then(|| logical_index - self.start)
    }

    /// Borrow the visible part of a slice.
    ///
    /// # Panics
    ///
    /// Panics if `items` is shorter than `end()`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range()]
    }

    /// Iterate over the visible part of a deque.
    ///
    /// # Panics
    ///
    /// Panics if `items` is shorter than `end()`.
    pub fn select<'a, T>(&self, items: &'a VecDeque<T>) -> impl Iterator<Item = &'a T> + 'a {
        items.range(self.range())
    }
}
