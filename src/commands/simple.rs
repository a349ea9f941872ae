//! Simple interactive CLI mode
//!
//! Text-based game without the TUI

use crate::catalog::{Catalog, SEARCH_LIMIT};
use crate::config::GameConfig;
use crate::game::{DailySelector, Game, GuessError, select_random};
use crate::output::{print_board, print_game_over, print_suggestions};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// Typing a full country name submits it. Anything else is treated as a
/// search; a number then picks one of the listed suggestions.
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(catalog: &Catalog, selector: &DailySelector, config: &GameConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Geodle - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the secret country in {} tries.", config.budget);
    println!("After each guess every attribute is marked:\n");
    println!("  - {} attribute matches", "✓ green ".black().on_green());
    println!("  - {} attribute differs", "✗ red   ".white().on_red());
    println!("  - {} the answer is higher / lower", "↑↓ yellow".black().on_yellow());
    println!("\nPopulation matches within 10%, temperature within 0.5°C.");
    println!("Commands: 'quit' to exit, 'new' for a new random country\n");

    let mut rng = rand::rng();
    let target = selector.select(config.target, catalog, &mut rng);
    // Show every search result at once; there is no scrolling in text mode
    let config = GameConfig {
        window_size: SEARCH_LIMIT,
        ..*config
    };
    let mut game = Game::new(catalog, target, &config);

    loop {
        let Some(input) = get_user_input("Guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game.restart(select_random(catalog, &mut rng));
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        let result = if catalog.contains(&input) {
            game.submit_name(&input).map(Some)
        } else if let Some(name) = pick_suggestion(&game, &input) {
            game.submit_name(name).map(Some)
        } else {
            game.set_query(input);
            if game.navigator().len() == 1 {
                game.submit()
            } else {
                print_suggestions(&game.snapshot().suggestions, catalog);
                println!("  {}", "Type a full name or a number to guess".bright_black());
                continue;
            }
        };

        match result {
            Ok(Some(_)) => print_board(&game.snapshot()),
            Ok(None) => {}
            Err(err) => print_guess_error(&err),
        }

        if game.session().is_over() {
            print_game_over(&game.snapshot());

            match get_user_input("Play again? (yes/no)")?
                .unwrap_or_default()
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    game.restart(select_random(catalog, &mut rng));
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Resolve a 1-based suggestion number typed after a search
fn pick_suggestion<'c>(game: &Game<'c>, input: &str) -> Option<&'c str> {
    let number: usize = input.parse().ok()?;
    game.navigator()
        .candidates()
        .get(number.checked_sub(1)?)
        .copied()
}

fn print_guess_error(err: &GuessError) {
    let hint = match err {
        GuessError::UnknownEntity(_) => " (names are case-sensitive; search with part of a name)",
        GuessError::DuplicateGuess(_) | GuessError::SessionOver => "",
    };
    println!("❌ {}{}", err.to_string().red(), hint.bright_black());
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    Ok((read > 0).then(|| input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Entity;

    #[test]
    fn pick_suggestion_is_one_based() {
        let catalog =
            Catalog::from_entities(["Niger", "Nigeria", "Mali"].into_iter().map(Entity::named))
                .unwrap();
        let target = catalog.lookup("Mali").unwrap();
        let mut game = Game::new(&catalog, target, &GameConfig::default());
        game.set_query("nig");

        assert_eq!(pick_suggestion(&game, "1"), Some("Niger"));
        assert_eq!(pick_suggestion(&game, "2"), Some("Nigeria"));
        assert_eq!(pick_suggestion(&game, "3"), None);
        assert_eq!(pick_suggestion(&game, "0"), None);
        assert_eq!(pick_suggestion(&game, "two"), None);
    }
}
