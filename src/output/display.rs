//! Display functions for command results and the text game

use super::formatters::{create_progress_bar, fit, hint_cell, hints_to_emoji};
use crate::catalog::Catalog;
use crate::core::{Attribute, Entity, Hint, HintRecord};
use crate::game::{SessionState, Snapshot, SuggestionView};
use colored::{ColoredString, Colorize};

const NAME_WIDTH: usize = 16;
const CELL_WIDTH: usize = 16;

fn colorize_hint(text: &str, hint: Hint) -> ColoredString {
    match hint {
        Hint::Match => text.black().on_green(),
        Hint::Mismatch => text.white().on_red(),
        Hint::GuessTooLow | Hint::GuessTooHigh => text.black().on_yellow(),
    }
}

/// Print the column headers of the guess table
pub fn print_table_header() {
    let mut line = format!("     {}", fit("Country", NAME_WIDTH));
    for attribute in Attribute::ALL {
        line.push(' ');
        line.push_str(&fit(attribute.label(), CELL_WIDTH));
    }
    println!("{}", line.bright_black().bold());
}

/// Print one guess as a coloured table row
pub fn print_guess_row(turn: usize, entity: &Entity, hints: &HintRecord) {
    print!(
        "  {}. {}",
        turn.to_string().bright_black(),
        fit(&entity.name, NAME_WIDTH).bright_white().bold()
    );
    for (attribute, hint) in hints.iter() {
        let cell = fit(&hint_cell(attribute, entity, hint), CELL_WIDTH);
        print!(" {}", colorize_hint(&cell, hint));
    }
    println!();
}

/// Print the guesses so far and the remaining budget
pub fn print_board(snapshot: &Snapshot<'_>) {
    println!("\n{}", "─".repeat(120).cyan());
    print_table_header();
    for (i, (entity, hints)) in snapshot.guesses.iter().enumerate() {
        print_guess_row(i + 1, entity, hints);
    }

    let used = snapshot.budget - snapshot.remaining;
    println!(
        "\n  Guesses: [{}] {used}/{}  ({} left)",
        create_progress_bar(used, snapshot.budget, snapshot.budget).cyan(),
        snapshot.budget,
        snapshot.remaining.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(120).cyan());
}

/// Print the visible window of autocomplete suggestions, numbered from 1
pub fn print_suggestions(view: &SuggestionView<'_>, catalog: &Catalog) {
    if view.candidates.is_empty() {
        println!("  {}", "No matching countries".bright_black());
        return;
    }

    if view.hidden_above() > 0 {
        println!("    {}", format!("↑ {} more", view.hidden_above()).bright_black());
    }
    for (position, name) in view.visible() {
        let meta = catalog
            .lookup(name)
            .map(|entity| {
                format!(
                    "{}, {}, {}",
                    Attribute::Continent.value_of(entity),
                    Attribute::Population.value_of(entity),
                    Attribute::Government.value_of(entity)
                )
            })
            .unwrap_or_default();

        let number = format!("{:>2}.", position + 1);
        if view.is_highlighted(position) {
            println!(
                "  {} {} {}  {}",
                "›".bright_cyan().bold(),
                number.bright_black(),
                name.bright_cyan().bold(),
                meta.bright_black()
            );
        } else {
            println!("    {} {name}  {}", number.bright_black(), meta.bright_black());
        }
    }
    if view.hidden_below() > 0 {
        println!("    {}", format!("↓ {} more", view.hidden_below()).bright_black());
    }
}

/// Print the end-of-game banner with the revealed target
pub fn print_game_over(snapshot: &Snapshot<'_>) {
    let target = snapshot.target.unwrap_or("?");

    println!("\n{}", "═".repeat(70).bright_cyan());
    match snapshot.state {
        SessionState::Won => {
            println!(
                "{}",
                "    🎉 🎊 ✨  C O N G R A T U L A T I O N S !  ✨ 🎊 🎉    "
                    .bright_green()
                    .bold()
            );
            let count = snapshot.guesses.len();
            println!(
                "\n  You guessed {} in {} {}.",
                target.bright_yellow().bold(),
                count.to_string().bright_cyan().bold(),
                if count == 1 { "attempt" } else { "attempts" }
            );
        }
        SessionState::Lost => {
            println!("{}", "    G A M E   O V E R    ".bright_red().bold());
            println!("\n  The country was: {}", target.bright_yellow().bold());
        }
        SessionState::InProgress => return,
    }

    println!("\n  Guess history:");
    for (i, (entity, hints)) in snapshot.guesses.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            hints_to_emoji(hints),
            entity.name.bright_white().bold()
        );
    }
    println!("\n{}", "═".repeat(70).bright_cyan());
}

/// Print every attribute of an entity
pub fn print_entity(entity: &Entity) {
    println!("\n{}", entity.name.bright_yellow().bold());
    for attribute in Attribute::ALL {
        println!(
            "  {:<12} {}",
            attribute.label().bright_black(),
            attribute.value_of(entity)
        );
    }
}

/// Print catalog search results with a short summary per match
pub fn print_search_results(query: &str, names: &[&str], catalog: &Catalog) {
    if names.is_empty() {
        println!("No countries match {}", format!("{query:?}").bright_yellow());
        return;
    }

    println!(
        "{} for {}:",
        format!("{} match{}", names.len(), if names.len() == 1 { "" } else { "es" }).bold(),
        format!("{query:?}").bright_yellow()
    );
    for name in names {
        if let Some(entity) = catalog.lookup(name) {
            println!(
                "  • {}  {}",
                fit(name, NAME_WIDTH).bright_white(),
                format!(
                    "{}, {}",
                    Attribute::Continent.value_of(entity),
                    Attribute::Population.value_of(entity)
                )
                .bright_black()
            );
        }
    }
}
