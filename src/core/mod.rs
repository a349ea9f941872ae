//! Core domain types for Geodle
//!
//! Entities and the comparison rules that turn a guess into hints.
//! Everything here is pure and free of I/O.

mod entity;
pub mod hint;

pub use entity::Entity;
pub use hint::{Attribute, AttributeValue, Hint, HintRecord, compare};
