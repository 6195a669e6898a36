//! CLI command implementations.

pub mod curve;
pub mod krd;
pub mod price;
pub mod timetable;

pub use curve::CurveArgs;
pub use krd::KrdArgs;
pub use price::PriceArgs;
pub use timetable::TimetableArgs;

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::de::DeserializeOwned;

use bondgrid_analytics::BondBook;
use bondgrid_bonds::{BondRecord, RawBondRecord};
use bondgrid_config::EngineConfig;
use bondgrid_core::Date;
use bondgrid_curves::{MarketRate, RateCurve};

use crate::error::{CliError, CliResult};

/// Bond file, curve file and pricing date, shared by the valuation commands.
#[derive(Args, Debug)]
pub struct MarketArgs {
    /// Bond rows (.json array or .csv with grid headers)
    #[arg(long)]
    pub bonds: PathBuf,

    /// Zero curve quotes (.json or .csv with Year, Rate in percent)
    #[arg(long)]
    pub curve: PathBuf,

    /// Pricing date (YYYY-MM-DD). Defaults to the config value, then today.
    #[arg(long)]
    pub pricing_date: Option<String>,
}

/// A bond file row, parsed or with the reason it was rejected.
pub struct InputRow {
    /// Identifier as written in the file.
    pub bond: String,
    /// The validated record.
    pub record: anyhow::Result<BondRecord>,
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Loads the engine config, or the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(EngineConfig::default()),
    }
}

/// Resolves the pricing date: argument, then config, then today.
pub fn resolve_pricing_date(arg: Option<&str>, config: &EngineConfig) -> CliResult<Date> {
    match arg {
        Some(s) => parse_date(s),
        None => Ok(config.pricing_date_or(Date::today())),
    }
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => {
            let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
            serde_json::from_reader(file).with_context(|| format!("Invalid JSON in {}", path.display()))
        }
        Some("csv") => {
            let mut reader = csv::Reader::from_path(path)
                .with_context(|| format!("Cannot open {}", path.display()))?;
            reader
                .deserialize()
                .collect::<Result<Vec<T>, _>>()
                .with_context(|| format!("Invalid CSV in {}", path.display()))
        }
        _ => Err(CliError::UnsupportedFile(path.to_path_buf()).into()),
    }
}

/// Reads and validates a curve file.
pub fn load_curve(path: &Path) -> Result<RateCurve> {
    let quotes: Vec<MarketRate> = read_rows(path)?;
    let curve = RateCurve::from_market_rates(&quotes)
        .with_context(|| format!("Invalid curve in {}", path.display()))?;
    tracing::debug!("loaded {} curve nodes from {}", curve.len(), path.display());
    Ok(curve)
}

/// Reads a bond file. Rows that fail validation are kept with their error.
pub fn load_bonds(path: &Path) -> Result<Vec<InputRow>> {
    let raw: Vec<RawBondRecord> = read_rows(path)?;
    if raw.is_empty() {
        return Err(CliError::NoBonds(path.to_path_buf()).into());
    }

    Ok(raw
        .iter()
        .map(|r| InputRow {
            bond: r.bond.clone(),
            record: BondRecord::from_raw(r).map_err(anyhow::Error::from),
        })
        .collect())
}

/// Builds a book from the valid rows of `rows`.
///
/// Returns the book and, for each input row, its position in the book.
pub fn build_book(
    rows: &[InputRow],
    curve: RateCurve,
    pricing_date: Date,
    config: &EngineConfig,
) -> Result<(BondBook, Vec<Option<usize>>)> {
    let mut book = BondBook::new(curve, pricing_date)
        .with_shock_size(config.shock_size)
        .with_defaults(config.record_defaults()?);

    let positions = rows
        .iter()
        .map(|row| {
            row.record.as_ref().ok().map(|record| {
                book.push(record.clone());
                book.len() - 1
            })
        })
        .collect();

    Ok((book, positions))
}
