//! Price command implementation.
//!
//! Values every bond in a file and reports price, effective duration and
//! convexity. Rows that cannot be valued are listed with the reason.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bondgrid_bonds::{BondRecord, FixedBondScheduleGenerator};
use bondgrid_config::EngineConfig;

use crate::cli::OutputFormat;
use crate::commands::{build_book, load_bonds, load_curve, resolve_pricing_date, MarketArgs};
use crate::output::{print_output, print_warning};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub market: MarketArgs,
}

/// One output row of the price command.
#[derive(Debug, Serialize, Tabled)]
pub struct PriceRow {
    #[tabled(rename = "Bond")]
    #[serde(rename = "Bond")]
    pub bond: String,
    #[tabled(rename = "Currency")]
    #[serde(rename = "Currency")]
    pub currency: String,
    #[tabled(rename = "Coupon")]
    #[serde(rename = "Coupon")]
    pub coupon: String,
    #[tabled(rename = "Maturity")]
    #[serde(rename = "Maturity")]
    pub maturity: String,
    #[tabled(rename = "Notional")]
    #[serde(rename = "Notional")]
    pub notional: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    pub price: String,
    #[tabled(rename = "Duration")]
    #[serde(rename = "Duration")]
    pub duration: String,
    #[tabled(rename = "Convexity")]
    #[serde(rename = "Convexity")]
    pub convexity: String,
    #[tabled(rename = "Error")]
    #[serde(rename = "Error")]
    pub error: String,
}

impl PriceRow {
    fn valued(record: &BondRecord) -> Self {
        Self {
            bond: record.identifier().to_string(),
            currency: record.currency().code().to_string(),
            coupon: record.coupon().to_string(),
            maturity: record.maturity().to_string(),
            notional: record.notional().to_string(),
            price: record.price_display(),
            duration: record.duration_display(),
            convexity: record.convexity_display(),
            error: String::new(),
        }
    }

    fn failed(bond: &str, error: String) -> Self {
        Self {
            bond: bond.to_string(),
            currency: String::new(),
            coupon: String::new(),
            maturity: String::new(),
            notional: String::new(),
            price: String::new(),
            duration: String::new(),
            convexity: String::new(),
            error,
        }
    }
}

/// Execute the price command.
pub fn execute(args: PriceArgs, config: &EngineConfig, format: OutputFormat) -> Result<()> {
    let pricing_date = resolve_pricing_date(args.market.pricing_date.as_deref(), config)?;
    let curve = load_curve(&args.market.curve)?;
    let inputs = load_bonds(&args.market.bonds)?;

    let (mut book, positions) = build_book(&inputs, curve, pricing_date, config)?;
    let failures = book.refresh(&FixedBondScheduleGenerator);
    tracing::info!(
        "valued {} of {} bonds as of {pricing_date}",
        book.len() - failures.len(),
        inputs.len()
    );

    let rows: Vec<PriceRow> = inputs
        .iter()
        .zip(&positions)
        .map(|(input, position)| match (&input.record, position) {
            (Err(e), _) => PriceRow::failed(&input.bond, e.to_string()),
            (Ok(_), Some(index)) => match failures.iter().find(|f| f.row == *index) {
                Some(failure) => PriceRow::failed(&input.bond, failure.error.to_string()),
                None => PriceRow::valued(&book.rows()[*index]),
            },
            (Ok(_), None) => PriceRow::failed(&input.bond, "not valued".to_string()),
        })
        .collect();

    print_output(&rows, format)?;

    let failed = rows.iter().filter(|r| !r.error.is_empty()).count();
    if failed > 0 {
        print_warning(&format!("{failed} of {} bonds could not be valued", rows.len()));
    }

    Ok(())
}
