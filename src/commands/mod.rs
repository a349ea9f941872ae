//! Command implementations

pub mod lookup;
pub mod simple;

pub use lookup::{RevealResult, find_entity, reveal_target};
pub use simple::run_simple;
