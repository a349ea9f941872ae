//! Formatting utilities for terminal output

use crate::core::{Attribute, Entity, Hint, HintRecord};

/// Short marker for a hint
///
/// Arrows point the way the guess has to move to reach the target.
#[must_use]
pub const fn hint_symbol(hint: Hint) -> &'static str {
    match hint {
        Hint::Match => "✓",
        Hint::Mismatch => "✗",
        Hint::GuessTooLow => "↑",
        Hint::GuessTooHigh => "↓",
    }
}

/// Attribute value followed by its hint marker, e.g. `38,000,000 ↓`
#[must_use]
pub fn hint_cell(attribute: Attribute, entity: &Entity, hint: Hint) -> String {
    format!("{} {}", attribute.value_of(entity), hint_symbol(hint))
}

/// Format a hint record as an emoji string, one square per attribute
#[must_use]
pub fn hints_to_emoji(hints: &HintRecord) -> String {
    hints
        .iter()
        .map(|(_, hint)| match hint {
            Hint::Match => '🟩',
            Hint::Mismatch => '🟥',
            Hint::GuessTooLow => '🔼',
            Hint::GuessTooHigh => '🔽',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Pad or truncate `text` to exactly `width` characters
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        format!("{text:<width$}")
    } else if width == 0 {
        String::new()
    } else {
        let mut out: String = text.chars().take(width - 1).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> Entity {
        let mut mali = Entity::named("Mali");
        mali.population = 20_000_000;
        mali.temperature = 28.0;
        mali.landlocked = true;
        mali
    }

    #[test]
    fn symbols_are_distinct() {
        let symbols = [Hint::Match, Hint::Mismatch, Hint::GuessTooLow, Hint::GuessTooHigh]
            .map(hint_symbol);
        for (i, a) in symbols.iter().enumerate() {
            for b in &symbols[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn hint_cell_shows_value_and_marker() {
        let mut guess = Entity::named("Canada");
        guess.population = 38_000_000;
        let hints = HintRecord::compare(&guess, &target());
        let cell = hint_cell(Attribute::Population, &guess, hints[Attribute::Population]);
        assert_eq!(cell, "38,000,000 ↓");
    }

    #[test]
    fn emoji_for_perfect_record() {
        let hints = HintRecord::compare(&target(), &target());
        assert_eq!(hints_to_emoji(&hints), "🟩🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_for_mixed_record() {
        // Continent and religion match (both empty), government too
        let guess = Entity::named("Chad");
        let hints = HintRecord::compare(&guess, &target());
        assert_eq!(hints_to_emoji(&hints), "🟩🔼🟥🟩🔼🟩");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 6, 6), "░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(6, 6, 6), "██████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(3, 6, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }

    #[test]
    fn fit_pads_and_truncates() {
        assert_eq!(fit("Chad", 6), "Chad  ");
        assert_eq!(fit("Guatemala", 6), "Guate…");
        assert_eq!(fit("Peru", 4), "Peru");
        assert_eq!(fit("Peru", 0), "");
    }
}
