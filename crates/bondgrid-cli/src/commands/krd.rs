//! KRD command implementation.
//!
//! Key-rate durations of every bond in a file, one column per standard
//! tenor. Tenors past the first one beyond a bond's maturity are blank.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use bondgrid_analytics::report::{BOND_COLUMN, MATURITY_COLUMN};
use bondgrid_analytics::{KrdReport, RowFailure};
use bondgrid_bonds::FixedBondScheduleGenerator;
use bondgrid_config::EngineConfig;
use bondgrid_curves::standard_tenor_labels;

use crate::cli::OutputFormat;
use crate::commands::{build_book, load_bonds, load_curve, resolve_pricing_date, MarketArgs};
use crate::output::{print_error, print_grid, print_json};

/// Arguments for the krd command.
#[derive(Args, Debug)]
pub struct KrdArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    /// Shock size as a decimal; overrides the config value
    #[arg(long)]
    pub shock: Option<f64>,
}

/// A bond that was rejected or failed to value.
#[derive(Debug, Serialize)]
struct Failure {
    #[serde(rename = "Bond")]
    bond: String,
    #[serde(rename = "Error")]
    error: String,
}

#[derive(Debug, Serialize)]
struct KrdOutput<'a> {
    rows: &'a [bondgrid_analytics::KrdReportRow],
    failures: Vec<Failure>,
}

/// Execute the krd command.
pub fn execute(args: KrdArgs, config: &EngineConfig, format: OutputFormat) -> Result<()> {
    let pricing_date = resolve_pricing_date(args.market.pricing_date.as_deref(), config)?;
    let curve = load_curve(&args.market.curve)?;
    let inputs = load_bonds(&args.market.bonds)?;

    let (book, _) = build_book(&inputs, curve, pricing_date, config)?;
    let book = match args.shock {
        Some(shock) => book.with_shock_size(shock),
        None => book,
    };

    let report = book.krd_report(&FixedBondScheduleGenerator);

    let mut failures: Vec<Failure> = inputs
        .iter()
        .filter_map(|input| {
            input.record.as_ref().err().map(|e| Failure {
                bond: input.bond.clone(),
                error: e.to_string(),
            })
        })
        .collect();
    failures.extend(report.failures.iter().map(|f: &RowFailure| Failure {
        bond: f.bond.clone(),
        error: f.error.to_string(),
    }));

    match format {
        OutputFormat::Json => print_json(&KrdOutput {
            rows: &report.rows,
            failures,
        })?,
        OutputFormat::Table | OutputFormat::Csv => {
            let (header, rows) = grid(&report);
            print_grid(&header, &rows, format)?;
            for failure in &failures {
                print_error(&format!("{}: {}", failure.bond, failure.error));
            }
        }
    }

    Ok(())
}

fn grid(report: &KrdReport) -> (Vec<String>, Vec<Vec<String>>) {
    let mut header = vec![BOND_COLUMN.to_string(), MATURITY_COLUMN.to_string()];
    header.extend(standard_tenor_labels().into_iter().map(String::from));

    let rows = report
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![row.bond.clone(), format!("{:.2}", row.maturity_years)];
            cells.extend(
                row.values
                    .iter()
                    .map(|(_, v)| v.map(|x| format!("{x:.6}")).unwrap_or_default()),
            );
            cells
        })
        .collect();

    (header, rows)
}
