//! Terminal output formatting
//!
//! Display utilities for CLI results and the text-mode game.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_entity, print_game_over, print_guess_row, print_search_results,
    print_suggestions, print_table_header,
};
