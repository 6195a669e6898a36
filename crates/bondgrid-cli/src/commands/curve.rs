//! Curve command implementation.
//!
//! Shows the term and forward rates implied by a zero curve on an even time
//! grid out to its longest tenor.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tabled::Tabled;

use bondgrid_config::EngineConfig;
use bondgrid_curves::{rate_table, Discounter, RateTableRow};

use crate::cli::OutputFormat;
use crate::commands::load_curve;
use crate::output::{print_header, print_output};

/// Arguments for the curve command.
#[derive(Args, Debug)]
pub struct CurveArgs {
    /// Zero curve quotes (.json or .csv with Year, Rate in percent)
    #[arg(long)]
    pub curve: PathBuf,

    /// Number of grid points, including 0; overrides the config value
    #[arg(long)]
    pub points: Option<usize>,
}

/// One interval of the rate table, rates in percent.
#[derive(Debug, Serialize, Tabled)]
pub struct RateRow {
    #[tabled(rename = "Time")]
    #[serde(rename = "Time")]
    pub time: String,
    #[tabled(rename = "Term Rate (%)")]
    #[serde(rename = "Term Rate")]
    pub term_rate: String,
    #[tabled(rename = "Fwd Rate (%)")]
    #[serde(rename = "Fwd Rate")]
    pub forward_rate: String,
}

impl From<&RateTableRow> for RateRow {
    fn from(row: &RateTableRow) -> Self {
        Self {
            time: format!("{:.4}", row.time),
            term_rate: format!("{:.6}", row.term_rate * 100.0),
            forward_rate: format!("{:.6}", row.forward_rate * 100.0),
        }
    }
}

/// Execute the curve command.
pub fn execute(args: CurveArgs, config: &EngineConfig, format: OutputFormat) -> Result<()> {
    let curve = load_curve(&args.curve)?;
    let points = args.points.unwrap_or(config.rate_table_points);

    let table = rate_table(&Discounter::build(&curve), curve.max_tenor(), points)
        .context("Cannot build rate table")?;
    let rows: Vec<RateRow> = table.iter().map(RateRow::from).collect();

    if format == OutputFormat::Table {
        print_header(&format!(
            "{} nodes, {} intervals to {} years",
            curve.len(),
            rows.len(),
            curve.max_tenor()
        ));
    }
    print_output(&rows, format)
}
