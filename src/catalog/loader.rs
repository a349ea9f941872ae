//! Catalog record parsing
//!
//! A source record is a JSON object whose attributes may live under several
//! alias keys. Each attribute has an ordered list of candidate keys; the first
//! one holding a non-null, non-empty value wins. Missing or malformed optional
//! fields fall back to zero, an empty string or `false`.

use crate::core::Entity;
use serde_json::{Map, Value};

const NAME_KEYS: &[&str] = &["name", "country"];
const CONTINENT_KEYS: &[&str] = &["continent", "region"];
const POPULATION_KEYS: &[&str] = &["population", "pop"];
const LANDLOCKED_KEYS: &[&str] = &["landlocked", "is_landlocked"];
const RELIGION_KEYS: &[&str] = &["religion", "dominant_religion"];
const TEMPERATURE_KEYS: &[&str] = &["temperature", "avg_temp"];
const GOVERNMENT_KEYS: &[&str] = &["government", "gov"];

/// String tokens accepted as `true` for boolean fields (compared case-insensitively)
const TRUTHY: &[&str] = &["1", "true", "yes"];

/// Parse one source record into an entity
///
/// Returns `None` when the record is not an object or has no usable name.
///
/// # Examples
/// ```
/// use geodle::catalog::loader::parse_record;
/// use serde_json::json;
///
/// let record = json!({ "country": "  Chad ", "pop": "17000000", "is_landlocked": "Yes" });
/// let chad = parse_record(&record).unwrap();
/// assert_eq!(chad.name, "Chad");
/// assert_eq!(chad.population, 17_000_000);
/// assert!(chad.landlocked);
///
/// assert!(parse_record(&json!({ "name": "   " })).is_none());
/// ```
#[must_use]
pub fn parse_record(record: &Value) -> Option<Entity> {
    let record = record.as_object()?;

    let name = resolve(record, NAME_KEYS).map(text).unwrap_or_default();
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    Some(Entity {
        name: name.to_string(),
        continent: resolve(record, CONTINENT_KEYS).map(text).unwrap_or_default(),
        population: resolve(record, POPULATION_KEYS).map_or(0, population),
        landlocked: resolve(record, LANDLOCKED_KEYS).is_some_and(flag),
        religion: resolve(record, RELIGION_KEYS).map(text).unwrap_or_default(),
        temperature: resolve(record, TEMPERATURE_KEYS).map_or(0.0, temperature),
        government: resolve(record, GOVERNMENT_KEYS).map(text).unwrap_or_default(),
    })
}

/// Find the first candidate key holding a usable value
fn resolve<'a>(record: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|&key| record.get(key))
        .find(|value| is_present(value))
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Non-negative integer; negative, fractional strings and garbage become 0
fn population(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_u64().unwrap_or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map_or(0, |f| f.trunc() as u64)
        }),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Finite real number; anything else becomes 0.0
fn temperature(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.filter(|f: &f64| f.is_finite()).unwrap_or(0.0)
}

fn flag(value: &Value) -> bool {
    let token = match value {
        Value::Bool(b) => return *b,
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return false,
    };
    TRUTHY.iter().any(|truthy| token.eq_ignore_ascii_case(truthy))
}
