//! Geodle - CLI
//!
//! Daily country guessing game with TUI and CLI modes.

use anyhow::{Context, Result, anyhow};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use geodle::{
    catalog::Catalog,
    commands::{find_entity, reveal_target, run_simple},
    config::{DEFAULT_BUDGET, DEFAULT_WINDOW_SIZE, GameConfig, TargetMode},
    game::{DailySelector, Game},
    output::{print_entity, print_search_results},
};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "geodle",
    about = "Guess the country of the day from attribute hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Country catalog JSON file (default: built-in list)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Guesses per game
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_BUDGET as u8,
        value_parser = clap::value_parser!(u8).range(1..=20)
    )]
    budget: u8,

    /// Suggestions visible at once
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_WINDOW_SIZE as u8,
        value_parser = clap::value_parser!(u8).range(1..=20)
    )]
    window: u8,

    /// Play against a random country instead of today's
    #[arg(short, long, global = true, conflicts_with = "date")]
    practice: bool,

    /// Play the daily country of another day (YYYY-MM-DD)
    #[arg(short, long, global = true)]
    date: Option<NaiveDate>,

    /// Log filter when RUST_LOG is unset: off, error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Search the catalog by part of a name
    Search {
        /// Text to look for, case-insensitive
        query: String,
    },

    /// Show every attribute of a country
    Info {
        /// Country name
        name: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the daily country (spoiler!) for today or --date
    Reveal,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(
        &cli.log_level,
        cli.log_file.as_deref(),
        matches!(command, Commands::Play),
    )?;

    let catalog = load_catalog(cli.catalog.as_deref())?;
    info!(countries = catalog.len(), "catalog ready");

    let selector = DailySelector::default();
    let target = if cli.practice {
        TargetMode::Practice
    } else {
        cli.date.map_or(TargetMode::Daily, TargetMode::Date)
    };
    let config = GameConfig {
        budget: usize::from(cli.budget),
        window_size: usize::from(cli.window),
        target,
    };

    match command {
        Commands::Play => run_play_command(&catalog, &selector, &config),
        Commands::Simple => run_simple(&catalog, &selector, &config),
        Commands::Search { query } => {
            let names = catalog.search(&query);
            print_search_results(&query, &names, &catalog);
            Ok(())
        }
        Commands::Info { name, json } => run_info_command(&catalog, &name, json),
        Commands::Reveal => run_reveal_command(&catalog, &selector, config.target),
    }
}

/// Install the tracing subscriber
///
/// The TUI owns the terminal, so without a log file nothing is logged there.
fn init_logging(level: &str, log_file: Option<&Path>, tui: bool) -> Result<()> {
    if tui && log_file.is_none() {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level '{level}'"))?;

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init(),
    }
    .map_err(|err| anyhow!("failed to initialise logging: {err}"))
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load_from_file(path)
            .with_context(|| format!("failed to load catalog from {}", path.display())),
        None => Catalog::embedded().context("built-in catalog is invalid"),
    }
}

fn run_play_command(catalog: &Catalog, selector: &DailySelector, config: &GameConfig) -> Result<()> {
    use geodle::interactive::{App, run_tui};

    let mut rng = rand::rng();
    let target = selector.select(config.target, catalog, &mut rng);
    let app = App::new(Game::new(catalog, target, config));
    run_tui(app)
}

fn run_info_command(catalog: &Catalog, name: &str, json: bool) -> Result<()> {
    let entity = find_entity(catalog, name).map_err(|e| anyhow!(e))?;

    if json {
        let text = serde_json::to_string_pretty(entity).context("failed to serialise country")?;
        println!("{text}");
    } else {
        print_entity(entity);
    }
    Ok(())
}

fn run_reveal_command(catalog: &Catalog, selector: &DailySelector, mode: TargetMode) -> Result<()> {
    let today = Local::now().date_naive();
    let result = reveal_target(catalog, selector, mode, today).map_err(|e| anyhow!(e))?;
    println!(
        "Country #{} ({}): {}",
        result.day_index, result.date, result.entity.name
    );
    Ok(())
}
