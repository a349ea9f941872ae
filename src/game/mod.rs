//! Game engine
//!
//! Target selection, the guess state machine and autocomplete navigation,
//! tied together by `Game` for the frontends.

mod navigator;
mod play;
pub mod selector;
mod session;
mod snapshot;

pub use navigator::SuggestionNavigator;
pub use play::Game;
pub use selector::{DailySelector, select_random};
pub use session::{Guess, GuessError, GuessSession, SessionState};
pub use snapshot::{Snapshot, SuggestionView};
