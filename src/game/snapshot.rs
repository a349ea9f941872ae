//! Read-only view of a game for frontends

use super::SessionState;
use crate::core::{Entity, HintRecord};
use std::ops::Range;

/// Everything a frontend needs to draw the game after a mutation
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<'c> {
    pub state: SessionState,
    /// Accepted guesses with their hints, oldest first
    pub guesses: Vec<(&'c Entity, HintRecord)>,
    pub remaining: usize,
    pub budget: usize,
    pub query: String,
    pub suggestions: SuggestionView<'c>,
    /// Target name, only revealed once the session is over
    pub target: Option<&'c str>,
}

/// Autocomplete list with its highlight and visible window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionView<'c> {
    pub candidates: Vec<&'c str>,
    pub highlighted: Option<usize>,
    pub window: Range<usize>,
}

impl<'c> SuggestionView<'c> {
    /// Visible candidates with their absolute positions
    pub fn visible(&self) -> impl Iterator<Item = (usize, &'c str)> + '_ {
        self.window
            .clone()
            .map(|position| (position, self.candidates[position]))
    }

    /// Check whether the candidate at `position` is highlighted
    #[must_use]
    pub fn is_highlighted(&self, position: usize) -> bool {
        self.highlighted == Some(position)
    }

    /// Candidates hidden above the window
    #[must_use]
    pub const fn hidden_above(&self) -> usize {
        self.window.start
    }

    /// Candidates hidden below the window
    #[must_use]
    pub fn hidden_below(&self) -> usize {
        self.candidates.len() - self.window.end
    }
}

impl Snapshot<'_> {
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_terminal()
    }
}
