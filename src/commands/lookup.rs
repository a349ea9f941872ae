//! Catalog lookup commands
//!
//! Search the catalog, show one country and reveal the target of a day.

use crate::catalog::Catalog;
use crate::config::TargetMode;
use crate::core::Entity;
use crate::game::DailySelector;
use chrono::NaiveDate;

/// Result of looking up the target of a day
pub struct RevealResult<'c> {
    pub date: NaiveDate,
    pub day_index: i64,
    pub entity: &'c Entity,
}

/// Find a country by name
///
/// Exact names win; otherwise a unique case-insensitive match is accepted.
///
/// # Errors
///
/// Returns an error if no country matches, listing close matches when the
/// name is a partial one.
pub fn find_entity<'c>(catalog: &'c Catalog, name: &str) -> Result<&'c Entity, String> {
    let name = name.trim();
    if let Some(entity) = catalog.lookup(name) {
        return Ok(entity);
    }

    let mut folded = catalog
        .entities()
        .iter()
        .filter(|entity| entity.name.to_lowercase() == name.to_lowercase());
    if let (Some(entity), None) = (folded.next(), folded.next()) {
        return Ok(entity);
    }

    let similar = catalog.search(name);
    if similar.is_empty() {
        Err(format!("Country '{name}' not in catalog"))
    } else {
        Err(format!(
            "Country '{name}' not in catalog. Did you mean: {}?",
            similar.join(", ")
        ))
    }
}

/// Target for a daily mode: `today` for `Daily`, the given day for `Date`
///
/// # Errors
///
/// Returns an error for `Practice`, whose target is only drawn when a game
/// starts.
pub fn reveal_target<'c>(
    catalog: &'c Catalog,
    selector: &DailySelector,
    mode: TargetMode,
    today: NaiveDate,
) -> Result<RevealResult<'c>, String> {
    let date = match mode {
        TargetMode::Daily => today,
        TargetMode::Date(date) => date,
        TargetMode::Practice => {
            return Err(
                "Practice games have no fixed country to reveal; use --date instead".to_string(),
            );
        }
    };

    Ok(RevealResult {
        date,
        day_index: selector.day_index(date),
        entity: selector.select_for(date, catalog),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_entities(["Niger", "Nigeria", "Mali"].into_iter().map(Entity::named))
            .unwrap()
    }

    #[test]
    fn exact_name() {
        let catalog = catalog();
        assert_eq!(find_entity(&catalog, "Niger").unwrap().name, "Niger");
        assert_eq!(find_entity(&catalog, "  Mali ").unwrap().name, "Mali");
    }

    #[test]
    fn case_insensitive_fallback() {
        let catalog = catalog();
        assert_eq!(find_entity(&catalog, "nigeria").unwrap().name, "Nigeria");
    }

    #[test]
    fn partial_name_suggests() {
        let catalog = catalog();
        let err = find_entity(&catalog, "nig").unwrap_err();
        assert!(err.contains("Did you mean: Niger, Nigeria?"));
    }

    #[test]
    fn unknown_name() {
        let catalog = catalog();
        let err = find_entity(&catalog, "Atlantis").unwrap_err();
        assert_eq!(err, "Country 'Atlantis' not in catalog");
    }

    #[test]
    fn reveal_daily_uses_today() {
        let catalog = catalog();
        let selector = DailySelector::default();
        let today = NaiveDate::from_ymd_opt(2022, 5, 11).unwrap();

        let result = reveal_target(&catalog, &selector, TargetMode::Daily, today).unwrap();
        assert_eq!(result.day_index, 2);
        assert_eq!(result.entity.name, "Mali");
        assert_eq!(result.date, today);
    }

    #[test]
    fn reveal_specific_date() {
        let catalog = catalog();
        let selector = DailySelector::default();
        let today = NaiveDate::from_ymd_opt(2022, 5, 11).unwrap();
        let date = NaiveDate::from_ymd_opt(2022, 5, 10).unwrap();

        let result = reveal_target(&catalog, &selector, TargetMode::Date(date), today).unwrap();
        assert_eq!(result.day_index, 1);
        assert_eq!(result.entity.name, "Nigeria");
        assert_eq!(result.date, date);
    }

    #[test]
    fn reveal_rejects_practice() {
        let catalog = catalog();
        let selector = DailySelector::default();
        let today = NaiveDate::from_ymd_opt(2022, 5, 11).unwrap();

        let err = reveal_target(&catalog, &selector, TargetMode::Practice, today)
            .err()
            .unwrap();
        assert!(err.contains("--date"));
    }
}
