//! Guess session state machine
//!
//! A session starts `InProgress` and ends `Won` when the target is guessed or
//! `Lost` when the budget runs out. Rejected guesses never change state.

use crate::catalog::Catalog;
use crate::core::{Entity, HintRecord};
use thiserror::Error;
use tracing::info;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    InProgress,
    Won,
    Lost,
}

impl SessionState {
    /// `Won` and `Lost` accept no further guesses
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A guess that was rejected without touching the session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Country not found: {0}")]
    UnknownEntity(String),
    #[error("Already guessed {0}")]
    DuplicateGuess(String),
    #[error("The game is over")]
    SessionOver,
}

/// An accepted guess with its feedback
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guess<'c> {
    pub entity: &'c Entity,
    pub hints: HintRecord,
}

/// One game against a fixed target
#[derive(Debug, Clone)]
pub struct GuessSession<'c> {
    catalog: &'c Catalog,
    target: &'c Entity,
    guesses: Vec<Guess<'c>>,
    budget: usize,
    state: SessionState,
}

impl<'c> GuessSession<'c> {
    /// Start a session; a zero budget is raised to one
    #[must_use]
    pub fn new(catalog: &'c Catalog, target: &'c Entity, budget: usize) -> Self {
        Self {
            catalog,
            target,
            guesses: Vec::with_capacity(budget),
            budget: budget.max(1),
            state: SessionState::InProgress,
        }
    }

    /// Submit a guess by exact catalog name
    ///
    /// Returns the state after the guess was recorded.
    ///
    /// # Errors
    /// - `SessionOver` once the session is `Won` or `Lost`
    /// - `UnknownEntity` if the name is not in the catalog
    /// - `DuplicateGuess` if the name was already guessed
    ///
    /// # Examples
    /// ```
    /// use geodle::catalog::Catalog;
    /// use geodle::game::{GuessError, GuessSession, SessionState};
    ///
    /// let catalog = Catalog::load(r#"[{"name": "Mali"}, {"name": "Chad"}]"#).unwrap();
    /// let target = catalog.lookup("Mali").unwrap();
    /// let mut session = GuessSession::new(&catalog, target, 6);
    ///
    /// assert_eq!(session.submit_guess("Chad"), Ok(SessionState::InProgress));
    /// assert_eq!(session.submit_guess("Chad"), Err(GuessError::DuplicateGuess("Chad".into())));
    /// assert_eq!(session.submit_guess("Mali"), Ok(SessionState::Won));
    /// assert_eq!(session.submit_guess("Chad"), Err(GuessError::SessionOver));
    /// ```
    pub fn submit_guess(&mut self, name: &str) -> Result<SessionState, GuessError> {
        if self.state.is_terminal() {
            return Err(GuessError::SessionOver);
        }

        let entity = self
            .catalog
            .lookup(name)
            .ok_or_else(|| GuessError::UnknownEntity(name.to_string()))?;

        if self.has_guessed(name) {
            return Err(GuessError::DuplicateGuess(name.to_string()));
        }

        let hints = HintRecord::compare(entity, self.target);
        self.guesses.push(Guess { entity, hints });
        info!(
            guess = %entity.name,
            matches = hints.match_count(),
            turn = self.guesses.len(),
            "guess accepted"
        );

        if entity.is(&self.target.name) {
            self.state = SessionState::Won;
        } else if self.guesses.len() >= self.budget {
            self.state = SessionState::Lost;
        }

        if self.state.is_terminal() {
            info!(state = ?self.state, guesses = self.guesses.len(), "session over");
        }

        Ok(self.state)
    }

    /// Check whether a name was already guessed
    #[must_use]
    pub fn has_guessed(&self, name: &str) -> bool {
        self.guesses.iter().any(|guess| guess.entity.is(name))
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Accepted guesses, oldest first
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Guess<'c>] {
        &self.guesses
    }

    #[must_use]
    pub fn last_guess(&self) -> Option<&Guess<'c>> {
        self.guesses.last()
    }

    #[inline]
    #[must_use]
    pub const fn budget(&self) -> usize {
        self.budget
    }

    /// Guesses left before the session is lost
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.budget - self.guesses.len()
    }

    /// The secret target
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &'c Entity {
        self.target
    }

    #[inline]
    #[must_use]
    pub const fn catalog(&self) -> &'c Catalog {
        self.catalog
    }
}
