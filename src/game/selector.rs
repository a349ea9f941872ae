//! Target selection
//!
//! The daily target is the catalog entry at `days_since(epoch) mod len`, in
//! load order. Practice mode draws uniformly at random instead.

use crate::catalog::Catalog;
use crate::config::TargetMode;
use crate::core::Entity;
use chrono::{Local, NaiveDate};
use rand::Rng;

/// Maps calendar days onto catalog entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySelector {
    epoch: NaiveDate,
}

impl Default for DailySelector {
    fn default() -> Self {
        Self::new(NaiveDate::from_ymd_opt(2022, 5, 9).expect("epoch is a valid date"))
    }
}

impl DailySelector {
    /// Create a selector counting days from `epoch`
    #[must_use]
    pub const fn new(epoch: NaiveDate) -> Self {
        Self { epoch }
    }

    /// Day zero of the rotation
    #[must_use]
    pub const fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    /// Days between the epoch and `date`; negative before the epoch
    #[must_use]
    pub fn day_index(&self, date: NaiveDate) -> i64 {
        date.signed_duration_since(self.epoch).num_days()
    }

    /// Target for a given date
    ///
    /// Deterministic for a fixed date and catalog. Dates before the epoch wrap
    /// around to the end of the catalog.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use geodle::catalog::Catalog;
    /// use geodle::game::DailySelector;
    ///
    /// let catalog = Catalog::load(r#"[{"name": "Peru"}, {"name": "Chad"}, {"name": "Oman"}]"#).unwrap();
    /// let selector = DailySelector::default();
    ///
    /// let day_one = NaiveDate::from_ymd_opt(2022, 5, 10).unwrap();
    /// assert_eq!(selector.select_for(day_one, &catalog).name, "Chad");
    /// ```
    #[must_use]
    pub fn select_for<'c>(&self, date: NaiveDate, catalog: &'c Catalog) -> &'c Entity {
        let len = catalog.len() as i64;
        let position = self.day_index(date).rem_euclid(len) as usize;
        &catalog.entities()[position]
    }

    /// Target for the local calendar day
    #[must_use]
    pub fn select_today<'c>(&self, catalog: &'c Catalog) -> &'c Entity {
        self.select_for(Local::now().date_naive(), catalog)
    }

    /// Resolve a target according to the configured mode
    pub fn select<'c, R: Rng>(
        &self,
        mode: TargetMode,
        catalog: &'c Catalog,
        rng: &mut R,
    ) -> &'c Entity {
        match mode {
            TargetMode::Daily => self.select_today(catalog),
            TargetMode::Date(date) => self.select_for(date, catalog),
            TargetMode::Practice => select_random(catalog, rng),
        }
    }
}

/// Uniformly random target for practice games
pub fn select_random<'c, R: Rng>(catalog: &'c Catalog, rng: &mut R) -> &'c Entity {
    let position = rng.random_range(0..catalog.len());
    &catalog.entities()[position]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::load(r#"[{"name": "Peru"}, {"name": "Chad"}, {"name": "Oman"}, {"name": "Fiji"}]"#)
            .unwrap()
    }

    #[test]
    fn epoch_selects_first_entry() {
        let catalog = catalog();
        let selector = DailySelector::default();
        assert_eq!(selector.epoch(), date(2022, 5, 9));
        assert_eq!(selector.select_for(date(2022, 5, 9), &catalog).name, "Peru");
    }

    #[test]
    fn days_advance_in_load_order_and_wrap() {
        let catalog = catalog();
        let selector = DailySelector::default();
        let names: Vec<&str> = (9..15)
            .map(|day| selector.select_for(date(2022, 5, day), &catalog).name.as_str())
            .collect();
        assert_eq!(names, ["Peru", "Chad", "Oman", "Fiji", "Peru", "Chad"]);
    }

    #[test]
    fn select_for_is_idempotent() {
        let catalog = Catalog::embedded().unwrap();
        let selector = DailySelector::default();
        let day = date(2026, 10, 19);
        assert_eq!(
            selector.select_for(day, &catalog),
            selector.select_for(day, &catalog)
        );
    }

    #[test]
    fn dates_before_epoch_wrap_backwards() {
        let catalog = catalog();
        let selector = DailySelector::default();
        assert_eq!(selector.day_index(date(2022, 5, 8)), -1);
        assert_eq!(selector.select_for(date(2022, 5, 8), &catalog).name, "Fiji");
        assert_eq!(selector.select_for(date(2022, 5, 5), &catalog).name, "Peru");
    }

    #[test]
    fn day_index_counts_across_years() {
        let selector = DailySelector::new(date(2024, 1, 1));
        assert_eq!(selector.day_index(date(2025, 1, 1)), 366);
    }

    #[test]
    fn select_follows_mode() {
        let catalog = catalog();
        let selector = DailySelector::default();
        let mut rng = StdRng::seed_from_u64(7);

        let dated = selector.select(TargetMode::Date(date(2022, 5, 11)), &catalog, &mut rng);
        assert_eq!(dated.name, "Oman");

        let today = selector.select(TargetMode::Daily, &catalog, &mut rng);
        assert!(catalog.contains(&today.name));
    }

    #[test]
    fn random_selection_covers_catalog() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(42);
        let seen: FxHashSet<&str> = (0..200)
            .map(|_| select_random(&catalog, &mut rng).name.as_str())
            .collect();
        assert_eq!(seen.len(), catalog.len());
    }
}
