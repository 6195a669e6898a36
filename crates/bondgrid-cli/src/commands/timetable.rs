//! Timetable command implementation.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use bondgrid_bonds::{FixedBondScheduleGenerator, ScheduleGenerator, Timetable};
use bondgrid_config::EngineConfig;

use crate::cli::OutputFormat;
use crate::commands::load_bonds;
use crate::error::CliError;
use crate::output::print_json;

/// Arguments for the timetable command.
#[derive(Args, Debug)]
pub struct TimetableArgs {
    /// Bond rows (.json array or .csv with grid headers)
    #[arg(long)]
    pub bonds: PathBuf,

    /// 1-based row of the bond to show
    #[arg(long, default_value = "1")]
    pub row: usize,
}

/// Execute the timetable command.
pub fn execute(args: TimetableArgs, _config: &EngineConfig, format: OutputFormat) -> Result<()> {
    let inputs = load_bonds(&args.bonds)?;
    let len = inputs.len();
    let input = args
        .row
        .checked_sub(1)
        .and_then(|i| inputs.get(i))
        .ok_or(CliError::RowOutOfRange { row: args.row, len })?;

    let record = match &input.record {
        Ok(record) => record,
        Err(e) => anyhow::bail!("{}: {e}", input.bond),
    };

    let schedule = FixedBondScheduleGenerator
        .generate(&record.to_cashflow_inputs())
        .with_context(|| format!("Cannot build schedule for {}", input.bond))?;
    let table = Timetable::new(record, &schedule);

    match format {
        OutputFormat::Table => print!("{table}"),
        OutputFormat::Json => print_json(&table)?,
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in &table.rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
    }

    Ok(())
}
