//! Bondgrid CLI - bond valuation and key-rate risk from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Price, duration and convexity for a file of bonds
//! bondgrid price --bonds bonds.csv --curve treasury.json --pricing-date 2024-01-02
//!
//! # Key-rate durations
//! bondgrid krd --bonds bonds.json --curve treasury.csv --format json
//!
//! # Term and forward rates
//! bondgrid curve --curve treasury.csv --points 11
//!
//! # Cash-flow timetable of the second bond
//! bondgrid timetable --bonds bonds.csv --row 2
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON and CSV output stay clean.
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = commands::load_config(cli.config.as_deref())?;
    let format = cli.format;

    match cli.command {
        Commands::Price(args) => commands::price::execute(args, &config, format)?,
        Commands::Krd(args) => commands::krd::execute(args, &config, format)?,
        Commands::Curve(args) => commands::curve::execute(args, &config, format)?,
        Commands::Timetable(args) => commands::timetable::execute(args, &config, format)?,
    }

    Ok(())
}
