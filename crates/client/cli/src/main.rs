//! Command-line front end for the encounter-rate plugin.
//!
//! Loads a data directory into a [`runtime::Runtime`] with the bundled
//! plugins installed, then either inspects a map's encounter tag or replays
//! host events and reports the resulting rate.
mod bootstrap;
mod commands;
mod config;
mod logging;

use anyhow::Result;
use clap::Parser;
use commands::{Inspect, Rate};
use config::CliConfig;

/// Encounter rate inspection tool
#[derive(Parser)]
#[command(name = "encounter-cli")]
#[command(about = "Inspect map encounter rules and compute encounter rates", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Show the parsed encounter rule of a map, or list every map
    Inspect(Inspect),

    /// Compute the active encounter rate for a map and game state
    Rate(Rate),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _guard = logging::setup_logging(&config)?;

    let cli = Cli::parse();
    match cli.command {
        Command::Inspect(cmd) => cmd.execute(&config),
        Command::Rate(cmd) => cmd.execute(&config),
    }
}
