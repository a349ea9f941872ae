//! Embedded country catalog
//!
//! The default catalog compiled into the binary.

/// Raw JSON of the built-in country catalog
pub const COUNTRIES_JSON: &str = include_str!("../../data/countries.json");
