//! Input-driven game facade
//!
//! `Game` is what the frontends talk to: it owns one session, the text typed
//! so far and the suggestion navigator rebuilt from it.

use super::{GuessError, GuessSession, SessionState, Snapshot, SuggestionNavigator, SuggestionView};
use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::core::Entity;
use tracing::debug;

/// A session plus its input line and autocomplete state
#[derive(Debug, Clone)]
pub struct Game<'c> {
    catalog: &'c Catalog,
    session: GuessSession<'c>,
    query: String,
    navigator: SuggestionNavigator<'c>,
    window_size: usize,
}

impl<'c> Game<'c> {
    #[must_use]
    pub fn new(catalog: &'c Catalog, target: &'c Entity, config: &GameConfig) -> Self {
        Self {
            catalog,
            session: GuessSession::new(catalog, target, config.budget),
            query: String::new(),
            navigator: SuggestionNavigator::new(Vec::new(), config.window_size),
            window_size: config.window_size,
        }
    }

    /// Discard the current session and start over against `target`
    pub fn restart(&mut self, target: &'c Entity) {
        debug!("restarting game");
        self.session = GuessSession::new(self.catalog, target, self.session.budget());
        self.clear_query();
    }

    #[inline]
    #[must_use]
    pub const fn session(&self) -> &GuessSession<'c> {
        &self.session
    }

    #[inline]
    #[must_use]
    pub const fn navigator(&self) -> &SuggestionNavigator<'c> {
        &self.navigator
    }

    #[inline]
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[inline]
    #[must_use]
    pub const fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Replace the input text and rebuild the suggestions
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.rebuild_suggestions();
    }

    pub fn push_char(&mut self, ch: char) {
        self.query.push(ch);
        self.rebuild_suggestions();
    }

    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.rebuild_suggestions();
        }
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.rebuild_suggestions();
    }

    /// Move the highlighted suggestion, wrapping around
    pub fn move_selection(&mut self, delta: isize) {
        self.navigator.move_by(delta);
    }

    /// Scroll the suggestion window without moving the highlight
    ///
    /// Stops before the highlighted suggestion would scroll out of view.
    pub fn scroll(&mut self, steps: isize) {
        self.navigator.scroll_by(steps);
    }

    /// Highlight the `row`-th visible suggestion; `false` if there is none
    pub fn highlight_visible(&mut self, row: usize) -> bool {
        self.navigator.highlight_visible(row)
    }

    /// Submit the highlighted suggestion, or the raw input when there is none
    ///
    /// Returns `Ok(None)` when there is nothing to submit. An accepted guess
    /// clears the input; a rejected one keeps it for correction.
    ///
    /// # Errors
    /// Returns the session's `GuessError` when the guess is rejected.
    ///
    /// # Examples
    /// ```
    /// use geodle::catalog::Catalog;
    /// use geodle::config::GameConfig;
    /// use geodle::game::{Game, SessionState};
    ///
    /// let catalog = Catalog::load(r#"[{"name": "Niger"}, {"name": "Nigeria"}, {"name": "Mali"}]"#).unwrap();
    /// let target = catalog.lookup("Nigeria").unwrap();
    /// let mut game = Game::new(&catalog, target, &GameConfig::default());
    ///
    /// game.set_query("nig");
    /// game.move_selection(1);
    /// assert_eq!(game.submit(), Ok(Some(SessionState::Won)));
    /// assert_eq!(game.query(), "");
    /// ```
    pub fn submit(&mut self) -> Result<Option<SessionState>, GuessError> {
        let result = match self.navigator.select_current() {
            Some(name) => self.session.submit_guess(name),
            None if !self.query.is_empty() => self.session.submit_guess(&self.query),
            None => return Ok(None),
        };

        match result {
            Ok(state) => {
                self.clear_query();
                Ok(Some(state))
            }
            Err(err) => {
                debug!(error = %err, query = %self.query, "guess rejected");
                Err(err)
            }
        }
    }

    /// Submit a specific catalog name, bypassing the suggestions
    ///
    /// # Errors
    /// Returns the session's `GuessError` when the guess is rejected.
    pub fn submit_name(&mut self, name: &str) -> Result<SessionState, GuessError> {
        let state = self.session.submit_guess(name)?;
        self.clear_query();
        Ok(state)
    }

    /// Read-only view of the whole game
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'c> {
        let session = &self.session;
        Snapshot {
            state: session.state(),
            guesses: session
                .guesses()
                .iter()
                .map(|guess| (guess.entity, guess.hints))
                .collect(),
            remaining: session.remaining(),
            budget: session.budget(),
            query: self.query.clone(),
            suggestions: SuggestionView {
                candidates: self.navigator.candidates().to_vec(),
                highlighted: self.navigator.highlighted(),
                window: self.navigator.window(),
            },
            target: session
                .is_over()
                .then(|| session.target().name.as_str()),
        }
    }

    fn rebuild_suggestions(&mut self) {
        self.navigator = SuggestionNavigator::for_query(self.catalog, &self.query, self.window_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Attribute, Hint};

    fn catalog() -> Catalog {
        let names = [
            "Niger", "Nigeria", "Mali", "Chad", "Peru", "Oman", "Fiji", "Laos", "Cuba", "Iran",
            "Iraq", "Malta", "Malawi", "Malaysia", "Maldives", "Somalia", "Guatemala",
        ];
        Catalog::from_entities(names.into_iter().map(Entity::named)).unwrap()
    }

    fn game<'c>(catalog: &'c Catalog, target: &str) -> Game<'c> {
        let target = catalog.lookup(target).unwrap();
        Game::new(catalog, target, &GameConfig::default())
    }

    #[test]
    fn typing_rebuilds_suggestions() {
        let catalog = catalog();
        let mut game = game(&catalog, "Mali");

        game.push_char('n');
        game.push_char('i');
        assert_eq!(game.navigator().candidates(), &["Niger", "Nigeria"]);

        game.move_selection(1);
        game.push_char('g');
        assert_eq!(game.navigator().highlighted(), Some(0));

        game.pop_char();
        game.pop_char();
        game.pop_char();
        assert!(game.navigator().is_empty());
        game.pop_char();
        assert_eq!(game.query(), "");
    }

    #[test]
    fn submit_uses_highlighted_suggestion() {
        let catalog = catalog();
        let mut game = game(&catalog, "Mali");

        game.set_query("nig");
        game.move_selection(1);
        assert_eq!(game.submit(), Ok(Some(SessionState::InProgress)));
        assert_eq!(game.session().last_guess().unwrap().entity.name, "Nigeria");
        assert_eq!(game.query(), "");
        assert!(game.navigator().is_empty());
    }

    #[test]
    fn submit_falls_back_to_raw_query() {
        let catalog = catalog();
        let mut game = game(&catalog, "Mali");

        game.set_query("Atlantis");
        assert!(game.navigator().is_empty());
        assert_eq!(
            game.submit(),
            Err(GuessError::UnknownEntity("Atlantis".to_string()))
        );
        assert_eq!(game.query(), "Atlantis");
        assert!(game.session().guesses().is_empty());
    }

    #[test]
    fn submit_with_nothing_typed_is_noop() {
        let catalog = catalog();
        let mut game = game(&catalog, "Mali");
        assert_eq!(game.submit(), Ok(None));
        assert!(game.session().guesses().is_empty());
    }

    #[test]
    fn duplicate_keeps_query() {
        let catalog = catalog();
        let mut game = game(&catalog, "Mali");

        game.set_query("Chad");
        game.submit().unwrap();
        game.set_query("Chad");
        assert_eq!(
            game.submit(),
            Err(GuessError::DuplicateGuess("Chad".to_string()))
        );
        assert_eq!(game.query(), "Chad");
    }

    #[test]
    fn submit_name_skips_suggestions() {
        let catalog = catalog();
        let mut game = game(&catalog, "Chad");

        game.set_query("mal");
        assert_eq!(game.navigator().select_current(), Some("Guatemala"));
        assert_eq!(game.submit_name("Mali"), Ok(SessionState::InProgress));
        assert_eq!(game.session().last_guess().unwrap().entity.name, "Mali");
        assert_eq!(game.query(), "");

        game.set_query("xyz");
        assert!(game.submit_name("Mali").is_err());
        assert_eq!(game.query(), "xyz");
    }

    #[test]
    fn snapshot_hides_target_until_over() {
        let catalog = catalog();
        let mut game = game(&catalog, "Mali");

        game.set_query("Chad");
        game.submit().unwrap();
        let snapshot = game.snapshot();
        assert_eq!(snapshot.state, SessionState::InProgress);
        assert_eq!(snapshot.target, None);
        assert_eq!(snapshot.remaining, 5);
        assert_eq!(snapshot.budget, 6);
        assert_eq!(snapshot.guesses.len(), 1);
        assert_eq!(snapshot.guesses[0].0.name, "Chad");

        game.set_query("Mali");
        game.submit().unwrap();
        let snapshot = game.snapshot();
        assert!(snapshot.is_over());
        assert_eq!(snapshot.state, SessionState::Won);
        assert_eq!(snapshot.target, Some("Mali"));
        assert_eq!(snapshot.guesses[1].1[Attribute::Continent], Hint::Match);
    }

    #[test]
    fn snapshot_reflects_suggestion_window() {
        let catalog = catalog();
        let mut game = game(&catalog, "Chad");

        game.set_query("a");
        let total = game.navigator().len();
        assert_eq!(total, 10);

        game.move_selection(-1);
        let snapshot = game.snapshot();
        assert_eq!(snapshot.query, "a");
        assert_eq!(snapshot.suggestions.candidates.len(), 10);
        assert_eq!(snapshot.suggestions.highlighted, Some(9));
        assert_eq!(snapshot.suggestions.window, 4..10);
        assert_eq!(snapshot.suggestions.hidden_above(), 4);
        assert_eq!(snapshot.suggestions.hidden_below(), 0);
        assert!(snapshot.suggestions.is_highlighted(9));

        let visible: Vec<usize> = snapshot.suggestions.visible().map(|(i, _)| i).collect();
        assert_eq!(visible, (4..10).collect::<Vec<_>>());

        game.scroll(-10);
        assert_eq!(game.snapshot().suggestions.window, 4..10);
        assert_eq!(game.snapshot().suggestions.highlighted, Some(9));

        game.move_selection(-4);
        game.scroll(-10);
        assert_eq!(game.snapshot().suggestions.window, 0..6);
        assert_eq!(game.snapshot().suggestions.highlighted, Some(5));
    }

    #[test]
    fn scrolling_never_hides_submitted_suggestion() {
        let names: Vec<String> = (0..10).map(|i| format!("Land {i}")).collect();
        let catalog = Catalog::from_entities(names.into_iter().map(Entity::named)).unwrap();
        let mut game = game(&catalog, "Land 9");

        game.set_query("land");
        game.scroll(4);
        let view = game.snapshot().suggestions;
        let highlighted = view.highlighted.unwrap();
        assert!(view.window.contains(&highlighted));

        game.submit().unwrap();
        let submitted = game.session().last_guess().unwrap().entity.name.as_str();
        assert!(view.visible().any(|(_, name)| name == submitted));
    }

    #[test]
    fn clicking_visible_row_submits_it() {
        let catalog = catalog();
        let mut game = game(&catalog, "Mali");

        game.set_query("nig");
        assert!(!game.highlight_visible(2));
        assert!(game.highlight_visible(1));
        assert_eq!(game.submit(), Ok(Some(SessionState::InProgress)));
        assert_eq!(game.session().last_guess().unwrap().entity.name, "Nigeria");
    }

    #[test]
    fn lost_game_reveals_target() {
        let catalog = catalog();
        let mut game = game(&catalog, "Mali");

        for name in ["Chad", "Peru", "Oman", "Fiji", "Laos", "Cuba"] {
            game.set_query(name);
            game.submit().unwrap();
        }
        let snapshot = game.snapshot();
        assert_eq!(snapshot.state, SessionState::Lost);
        assert_eq!(snapshot.remaining, 0);
        assert_eq!(snapshot.target, Some("Mali"));

        game.set_query("Iran");
        assert_eq!(game.submit(), Err(GuessError::SessionOver));
    }

    #[test]
    fn restart_starts_fresh_session() {
        let catalog = catalog();
        let mut game = game(&catalog, "Mali");

        game.set_query("Mali");
        game.submit().unwrap();
        game.set_query("ch");

        game.restart(catalog.lookup("Chad").unwrap());
        assert_eq!(game.session().state(), SessionState::InProgress);
        assert!(game.session().guesses().is_empty());
        assert_eq!(game.session().target().name, "Chad");
        assert_eq!(game.query(), "");
        assert_eq!(game.session().budget(), 6);
    }
}
