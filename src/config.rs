//! Game configuration
//!
//! Tunable constants of a play session, with defaults matching the classic game.

use chrono::NaiveDate;

/// Guesses allowed per session
pub const DEFAULT_BUDGET: usize = 6;

/// Suggestions visible at once in the autocomplete window
pub const DEFAULT_WINDOW_SIZE: usize = 6;

/// How the secret target is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetMode {
    /// Today's country, the same for everyone on the same day
    #[default]
    Daily,
    /// The daily country of a specific date
    Date(NaiveDate),
    /// A uniformly random country
    Practice,
}

/// Settings for a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub budget: usize,
    pub window_size: usize,
    pub target: TargetMode,
}

impl GameConfig {
    /// Same settings with another target mode
    #[must_use]
    pub const fn with_target(self, target: TargetMode) -> Self {
        Self { target, ..self }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            window_size: DEFAULT_WINDOW_SIZE,
            target: TargetMode::Daily,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_game() {
        let config = GameConfig::default();
        assert_eq!(config.budget, 6);
        assert_eq!(config.window_size, 6);
        assert_eq!(config.target, TargetMode::Daily);
    }

    #[test]
    fn with_target_keeps_other_settings() {
        let config = GameConfig {
            budget: 3,
            ..GameConfig::default()
        }
        .with_target(TargetMode::Practice);
        assert_eq!(config.budget, 3);
        assert_eq!(config.target, TargetMode::Practice);
    }
}
