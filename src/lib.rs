//! Geodle
//!
//! A daily country guessing game: guess the secret country within six tries,
//! with per-attribute hints after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use geodle::catalog::Catalog;
//! use geodle::config::GameConfig;
//! use geodle::game::{DailySelector, Game};
//!
//! let catalog = Catalog::embedded().unwrap();
//! let target = DailySelector::default().select_today(&catalog);
//! let mut game = Game::new(&catalog, target, &GameConfig::default());
//!
//! game.set_query("canada");
//! let _ = game.submit();
//! println!("{} guesses left", game.snapshot().remaining);
//! ```

// Core domain types
pub mod core;

// Entity catalog
pub mod catalog;

// Session settings
pub mod config;

// Game engine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
