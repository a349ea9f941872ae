//! Per-attribute feedback for a guess
//!
//! Every guess is compared to the target on six attributes, in a fixed order:
//! continent, population, landlocked, religion, temperature, government.
//!
//! - Categorical attributes either match or they don't.
//! - Population matches within a 10% relative difference, otherwise it points
//!   the way the guess has to move.
//! - Temperature matches within half a degree, otherwise it points the way the
//!   guess has to move.

use super::Entity;
use std::fmt;
use std::ops::Index;

/// Relative population difference (against the pair's average) still counted as a match
pub const POPULATION_TOLERANCE: f64 = 0.10;

/// Absolute temperature difference in degrees Celsius still counted as a match
pub const TEMPERATURE_TOLERANCE: f64 = 0.5;

/// A compared attribute of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Continent,
    Population,
    Landlocked,
    Religion,
    Temperature,
    Government,
}

impl Attribute {
    /// All attributes in hint order
    pub const ALL: [Self; 6] = [
        Self::Continent,
        Self::Population,
        Self::Landlocked,
        Self::Religion,
        Self::Temperature,
        Self::Government,
    ];

    /// Column header used by the frontends
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Continent => "Continent",
            Self::Population => "Population",
            Self::Landlocked => "Landlocked",
            Self::Religion => "Religion",
            Self::Temperature => "Avg. Temp.",
            Self::Government => "Gov.",
        }
    }

    /// Read this attribute's value from an entity
    #[must_use]
    pub fn value_of(self, entity: &Entity) -> AttributeValue<'_> {
        match self {
            Self::Continent => AttributeValue::Category(&entity.continent),
            Self::Population => AttributeValue::Population(entity.population),
            Self::Landlocked => AttributeValue::Flag(entity.landlocked),
            Self::Religion => AttributeValue::Category(&entity.religion),
            Self::Temperature => AttributeValue::Temperature(entity.temperature),
            Self::Government => AttributeValue::Category(&entity.government),
        }
    }

    /// Compare `guess` against `target` on this attribute
    #[must_use]
    pub fn compare(self, guess: &Entity, target: &Entity) -> Hint {
        match self {
            Self::Continent => Hint::categorical(guess.continent == target.continent),
            Self::Population => Hint::population(guess.population, target.population),
            Self::Landlocked => Hint::categorical(guess.landlocked == target.landlocked),
            Self::Religion => Hint::categorical(guess.religion == target.religion),
            Self::Temperature => Hint::temperature(guess.temperature, target.temperature),
            Self::Government => Hint::categorical(guess.government == target.government),
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A typed attribute value, borrowed from its entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue<'a> {
    Category(&'a str),
    Flag(bool),
    Population(u64),
    Temperature(f64),
}

impl fmt::Display for AttributeValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Category("") => f.write_str("-"),
            Self::Category(value) => f.write_str(value),
            Self::Flag(true) => f.write_str("Yes"),
            Self::Flag(false) => f.write_str("No"),
            Self::Population(value) => f.write_str(&group_thousands(value)),
            Self::Temperature(value) => write!(f, "{value:.1}°C"),
        }
    }
}

/// Format an integer with `,` thousands separators
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Outcome of comparing one attribute
///
/// Directions always describe how the guess must move to reach the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hint {
    Match,
    Mismatch,
    /// The target's value is higher than the guess
    GuessTooLow,
    /// The target's value is lower than the guess
    GuessTooHigh,
}

impl Hint {
    #[inline]
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Match)
    }

    #[inline]
    const fn categorical(equal: bool) -> Self {
        if equal { Self::Match } else { Self::Mismatch }
    }

    #[inline]
    const fn directional(guess_below_target: bool) -> Self {
        if guess_below_target {
            Self::GuessTooLow
        } else {
            Self::GuessTooHigh
        }
    }

    fn population(guess: u64, target: u64) -> Self {
        // Also covers the both-zero case, where the average is zero
        if guess == target {
            return Self::Match;
        }

        let (g, t) = (guess as f64, target as f64);
        let average = (g + t) / 2.0;
        if (g - t).abs() / average <= POPULATION_TOLERANCE {
            Self::Match
        } else {
            Self::directional(guess < target)
        }
    }

    fn temperature(guess: f64, target: f64) -> Self {
        if (guess - target).abs() <= TEMPERATURE_TOLERANCE {
            Self::Match
        } else {
            Self::directional(guess < target)
        }
    }
}

/// Feedback for one guess: one hint per attribute, in `Attribute::ALL` order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintRecord([Hint; 6]);

impl HintRecord {
    /// Compare a guessed entity against the target
    ///
    /// # Examples
    /// ```
    /// use geodle::core::{Attribute, Entity, Hint, HintRecord};
    ///
    /// let mut guess = Entity::named("Canada");
    /// guess.temperature = -5.0;
    /// let mut target = Entity::named("Mali");
    /// target.temperature = 28.0;
    ///
    /// let hints = HintRecord::compare(&guess, &target);
    /// assert_eq!(hints[Attribute::Temperature], Hint::GuessTooLow);
    /// ```
    #[must_use]
    pub fn compare(guess: &Entity, target: &Entity) -> Self {
        Self(Attribute::ALL.map(|attribute| attribute.compare(guess, target)))
    }

    /// Hint for a single attribute
    #[inline]
    #[must_use]
    pub const fn get(&self, attribute: Attribute) -> Hint {
        self.0[attribute.index()]
    }

    /// Iterate over `(attribute, hint)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, Hint)> + '_ {
        Attribute::ALL.into_iter().zip(self.0.iter().copied())
    }

    /// Check whether every attribute matched
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|hint| hint.is_match())
    }

    /// Number of matching attributes
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.0.iter().filter(|hint| hint.is_match()).count()
    }
}

impl Index<Attribute> for HintRecord {
    type Output = Hint;

    fn index(&self, attribute: Attribute) -> &Hint {
        &self.0[attribute.index()]
    }
}

/// Compare a guessed entity against the target
#[must_use]
pub fn compare(guess: &Entity, target: &Entity) -> HintRecord {
    HintRecord::compare(guess, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(
        name: &str,
        continent: &str,
        population: u64,
        temperature: f64,
        landlocked: bool,
        religion: &str,
        government: &str,
    ) -> Entity {
        Entity {
            name: name.to_string(),
            continent: continent.to_string(),
            population,
            landlocked,
            religion: religion.to_string(),
            temperature,
            government: government.to_string(),
        }
    }

    fn canada() -> Entity {
        country("Canada", "NA", 38_000_000, -5.0, false, "Christian", "Federal")
    }

    fn mali() -> Entity {
        country("Mali", "Africa", 20_000_000, 28.0, true, "Muslim", "Republic")
    }

    fn with_population(population: u64) -> Entity {
        let mut entity = Entity::named("X");
        entity.population = population;
        entity
    }

    fn with_temperature(temperature: f64) -> Entity {
        let mut entity = Entity::named("X");
        entity.temperature = temperature;
        entity
    }

    #[test]
    fn canada_against_mali() {
        let hints = compare(&canada(), &mali());

        assert_eq!(hints[Attribute::Continent], Hint::Mismatch);
        assert_eq!(hints[Attribute::Population], Hint::GuessTooHigh);
        assert_eq!(hints[Attribute::Landlocked], Hint::Mismatch);
        assert_eq!(hints[Attribute::Religion], Hint::Mismatch);
        assert_eq!(hints[Attribute::Temperature], Hint::GuessTooLow);
        assert_eq!(hints[Attribute::Government], Hint::Mismatch);
        assert_eq!(hints.match_count(), 0);
    }

    #[test]
    fn direction_is_relative_to_the_target() {
        let hints = compare(&mali(), &canada());
        assert_eq!(hints[Attribute::Population], Hint::GuessTooLow);
        assert_eq!(hints[Attribute::Temperature], Hint::GuessTooHigh);
    }

    #[test]
    fn identical_attributes_match_everywhere() {
        let a = mali();
        let mut b = mali();
        b.name = "Mali Twin".to_string();

        let hints = compare(&a, &b);
        assert!(hints.is_perfect());
        assert_eq!(hints.match_count(), 6);
        assert!(hints.iter().all(|(_, hint)| hint == Hint::Match));
    }

    #[test]
    fn equal_populations_match() {
        for population in [0, 1, 1_000, 1_400_000_000] {
            let hints = compare(&with_population(population), &with_population(population));
            assert_eq!(hints[Attribute::Population], Hint::Match);
        }
    }

    #[test]
    fn population_eleven_percent_above_is_too_high() {
        let hints = compare(&with_population(111), &with_population(100));
        assert_eq!(hints[Attribute::Population], Hint::GuessTooHigh);

        let hints = compare(&with_population(100), &with_population(111));
        assert_eq!(hints[Attribute::Population], Hint::GuessTooLow);
    }

    #[test]
    fn population_tolerance_boundary_is_inclusive() {
        // |21 - 19| / 20 = 0.10
        let hints = compare(&with_population(21), &with_population(19));
        assert_eq!(hints[Attribute::Population], Hint::Match);
    }

    #[test]
    fn population_zero_against_nonzero_is_directional() {
        let hints = compare(&with_population(0), &with_population(5));
        assert_eq!(hints[Attribute::Population], Hint::GuessTooLow);
    }

    #[test]
    fn temperature_within_half_degree_matches() {
        let hints = compare(&with_temperature(20.5), &with_temperature(20.0));
        assert_eq!(hints[Attribute::Temperature], Hint::Match);

        let hints = compare(&with_temperature(19.5), &with_temperature(20.0));
        assert_eq!(hints[Attribute::Temperature], Hint::Match);
    }

    #[test]
    fn temperature_outside_tolerance_is_directional() {
        let hints = compare(&with_temperature(20.6), &with_temperature(20.0));
        assert_eq!(hints[Attribute::Temperature], Hint::GuessTooHigh);

        let hints = compare(&with_temperature(-3.0), &with_temperature(20.0));
        assert_eq!(hints[Attribute::Temperature], Hint::GuessTooLow);
    }

    #[test]
    fn categorical_has_no_partial_credit() {
        let mut guess = mali();
        guess.religion = "Muslim (Sunni)".to_string();
        let hints = compare(&guess, &mali());
        assert_eq!(hints[Attribute::Religion], Hint::Mismatch);
    }

    #[test]
    fn iter_follows_fixed_order() {
        let hints = compare(&canada(), &mali());
        let order: Vec<Attribute> = hints.iter().map(|(attribute, _)| attribute).collect();
        assert_eq!(order, Attribute::ALL.to_vec());
    }

    #[test]
    fn get_agrees_with_index() {
        let hints = compare(&canada(), &mali());
        for attribute in Attribute::ALL {
            assert_eq!(hints.get(attribute), hints[attribute]);
        }
    }

    #[test]
    fn attribute_values_display() {
        let entity = canada();
        assert_eq!(Attribute::Population.value_of(&entity).to_string(), "38,000,000");
        assert_eq!(Attribute::Temperature.value_of(&entity).to_string(), "-5.0°C");
        assert_eq!(Attribute::Landlocked.value_of(&entity).to_string(), "No");
        assert_eq!(Attribute::Continent.value_of(&entity).to_string(), "NA");
        assert_eq!(Attribute::Religion.value_of(&Entity::named("Y")).to_string(), "-");
    }

    #[test]
    fn group_thousands_small_values() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(123_456_789), "123,456,789");
    }
}
