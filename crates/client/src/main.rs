//! Skilling profit calculator.
//!
//! Ranks every skilling action by coins per hour for one player build and
//! one market snapshot.
//!
//! # Examples
//!
//! ```bash
//! # Bundled sample data
//! cargo run -p skilling-cli
//!
//! # Own data directory (game_data.json, settings.toml, market.json)
//! cargo run -p skilling-cli -- --data-dir ./my-data --skill cooking --limit 10
//!
//! # Machine-readable output with debug logs on stderr
//! RUST_LOG=skilling_core=debug cargo run -p skilling-cli -- --format json
//! ```

mod inputs;
mod report;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use skilling_core::{Planner, rank_by_profit};

use inputs::InputSources;
use report::OutputFormat;

/// Rank skilling actions by profit per hour
#[derive(Parser)]
#[command(name = "skilling")]
#[command(about = "Rank skilling actions by profit per hour", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding game_data.json, settings.toml and market.json
    /// (bundled samples are used for anything not found this way)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Game data JSON file (overrides --data-dir)
    #[arg(long, value_name = "FILE")]
    game_data: Option<PathBuf>,

    /// Player settings TOML file (overrides --data-dir)
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Market snapshot JSON file (overrides --data-dir)
    #[arg(long, value_name = "FILE")]
    market: Option<PathBuf>,

    /// Only show one skill (e.g. cooking, /action_types/cooking)
    #[arg(short, long, value_name = "SKILL")]
    skill: Option<String>,

    /// Limit number of actions to display (0 = unlimited)
    #[arg(short, long, default_value = "20")]
    limit: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Per-action debug logs on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let sources = InputSources::new(
        cli.data_dir.as_deref(),
        cli.game_data.as_deref(),
        cli.settings.as_deref(),
        cli.market.as_deref(),
    );
    let (data, config, market) = sources.load()?;

    let planner = Planner::new(data);
    let mut results = planner.compute_all(&config, &market);
    if let Some(skill) = &cli.skill {
        results.retain(|result| report::matches_skill(result, skill));
    }
    rank_by_profit(&mut results);
    if cli.limit > 0 {
        results.truncate(cli.limit);
    }

    report::print(&results, planner.data(), cli.format)
}

/// Logs go to stderr so JSON on stdout stays clean. `RUST_LOG` refines the
/// default level.
fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}
