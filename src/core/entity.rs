//! Catalog entity representation
//!
//! An Entity is one country with the fixed attribute set every guess is compared on.

use serde::Serialize;
use std::fmt;

/// A country with its comparable attributes
///
/// Entities are immutable once loaded and keyed by `name` inside the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    pub name: String,
    pub continent: String,
    pub population: u64,
    pub landlocked: bool,
    pub religion: String,
    /// Average temperature in degrees Celsius
    pub temperature: f64,
    pub government: String,
}

impl Entity {
    /// Create an entity with every attribute defaulted except the name
    ///
    /// # Examples
    /// ```
    /// use geodle::core::Entity;
    ///
    /// let mut country = Entity::named("Mali");
    /// country.population = 20_000_000;
    /// assert_eq!(country.name, "Mali");
    /// assert!(!country.landlocked);
    /// ```
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            continent: String::new(),
            population: 0,
            landlocked: false,
            religion: String::new(),
            temperature: 0.0,
            government: String::new(),
        }
    }

    /// Check whether this entity has the given catalog name
    #[inline]
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
