//! Autocomplete suggestion navigation
//!
//! Tracks the highlighted candidate and the fixed-size window of candidates
//! currently on screen. A navigator is rebuilt, not edited, whenever the query
//! changes.

use crate::catalog::Catalog;
use std::ops::Range;

/// Highlight and scroll state over a list of candidate names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionNavigator<'c> {
    candidates: Vec<&'c str>,
    highlighted: usize,
    window_start: usize,
    window_size: usize,
}

impl<'c> SuggestionNavigator<'c> {
    /// Create a navigator with the first candidate highlighted
    ///
    /// A zero window size is raised to one.
    #[must_use]
    pub fn new(candidates: Vec<&'c str>, window_size: usize) -> Self {
        Self {
            candidates,
            highlighted: 0,
            window_start: 0,
            window_size: window_size.max(1),
        }
    }

    /// Navigator over the catalog's search results for `query`
    #[must_use]
    pub fn for_query(catalog: &'c Catalog, query: &str, window_size: usize) -> Self {
        Self::new(catalog.search(query), window_size)
    }

    /// Move the highlight by `delta`, wrapping in both directions
    ///
    /// Keeps the highlight visible. Does nothing without candidates.
    ///
    /// # Examples
    /// ```
    /// use geodle::game::SuggestionNavigator;
    ///
    /// let mut nav = SuggestionNavigator::new(vec!["Chad", "Mali", "Peru"], 6);
    /// nav.move_by(-1);
    /// assert_eq!(nav.select_current(), Some("Peru"));
    /// nav.move_by(1);
    /// assert_eq!(nav.select_current(), Some("Chad"));
    /// ```
    pub fn move_by(&mut self, delta: isize) {
        if self.candidates.is_empty() {
            return;
        }

        let len = self.candidates.len() as isize;
        self.highlighted = (self.highlighted as isize + delta).rem_euclid(len) as usize;
        self.ensure_visible();
    }

    /// Slide the window so the highlighted candidate is inside it
    pub fn ensure_visible(&mut self) {
        if self.highlighted < self.window_start {
            self.window_start = self.highlighted;
        } else if self.highlighted >= self.window_start + self.window_size {
            self.window_start = self.highlighted + 1 - self.window_size;
        }
    }

    /// Scroll the window by `steps` without touching the highlight
    ///
    /// The window stops where the highlighted candidate would leave it.
    ///
    /// # Examples
    /// ```
    /// use geodle::game::SuggestionNavigator;
    ///
    /// let names = vec!["A", "B", "C", "D", "E", "F", "G", "H"];
    /// let mut nav = SuggestionNavigator::new(names, 4);
    /// nav.move_by(3);
    /// nav.scroll_by(10);
    /// assert_eq!(nav.window(), 3..7);
    /// assert_eq!(nav.select_current(), Some("D"));
    /// ```
    pub fn scroll_by(&mut self, steps: isize) {
        if self.candidates.is_empty() {
            return;
        }

        let lowest = (self.highlighted + 1).saturating_sub(self.window_size);
        let highest = self.highlighted.min(self.max_window_start());
        let target = self.window_start as isize + steps;
        self.window_start = target.clamp(lowest as isize, highest as isize) as usize;
    }

    /// Highlight the `row`-th visible candidate
    ///
    /// Returns `false`, leaving the highlight alone, when the row is past the
    /// end of the window.
    pub fn highlight_visible(&mut self, row: usize) -> bool {
        let window = self.window();
        let position = window.start + row;
        if window.contains(&position) {
            self.highlighted = position;
            true
        } else {
            false
        }
    }

    /// Candidate under the highlight
    #[must_use]
    pub fn select_current(&self) -> Option<&'c str> {
        self.candidates.get(self.highlighted).copied()
    }

    /// Highlighted position, if there are candidates
    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        (!self.candidates.is_empty()).then_some(self.highlighted)
    }

    /// All candidates, in search order
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[&'c str] {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    #[must_use]
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// Bounds of the visible slice of candidates
    #[must_use]
    pub fn window(&self) -> Range<usize> {
        let end = (self.window_start + self.window_size).min(self.candidates.len());
        self.window_start.min(end)..end
    }

    /// Candidates currently on screen
    #[must_use]
    pub fn visible(&self) -> &[&'c str] {
        &self.candidates[self.window()]
    }

    fn max_window_start(&self) -> usize {
        self.candidates.len().saturating_sub(self.window_size)
    }
}
