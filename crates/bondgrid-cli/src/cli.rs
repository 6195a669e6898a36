//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CurveArgs, KrdArgs, PriceArgs, TimetableArgs};

/// Bondgrid - fixed-rate bond valuation and key-rate risk
#[derive(Parser)]
#[command(name = "bondgrid")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Engine config file (TOML)
    #[arg(short, long, env = "BONDGRID_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Price bonds and compute effective duration and convexity
    Price(PriceArgs),

    /// Key-rate durations on the standard tenor ladder
    Krd(KrdArgs),

    /// Term and forward rate table of a curve
    Curve(CurveArgs),

    /// Cash-flow timetable of one bond
    Timetable(TimetableArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
