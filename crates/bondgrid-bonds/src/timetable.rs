//! Text rendering of a bond's cash-flow schedule.

use std::fmt;

use bondgrid_core::{CashFlowSchedule, Date};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::record::BondRecord;

/// One payment line of a timetable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimetableRow {
    /// Payment date
    #[serde(rename = "Date")]
    pub date: Date,
    /// Flow kind, e.g. "Coupon"
    #[serde(rename = "Type")]
    pub kind: String,
    /// Accrual period start, if any
    #[serde(rename = "Accrual Start")]
    pub accrual_start: Option<Date>,
    /// Amount per unit of notional
    #[serde(rename = "Unit Amount")]
    pub unit_amount: Decimal,
    /// Amount scaled by the notional
    #[serde(rename = "Amount")]
    pub amount: Decimal,
}

/// The schedule of one bond, scaled by its notional.
///
/// `Display` renders a fixed-width table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timetable {
    /// Bond identifier
    pub bond: String,
    /// Currency code
    pub currency: String,
    /// Payment lines in date order
    pub rows: Vec<TimetableRow>,
}

impl Timetable {
    /// Builds the timetable of `record` from its generated schedule.
    #[must_use]
    pub fn new(record: &BondRecord, schedule: &CashFlowSchedule) -> Self {
        let rows = schedule
            .iter()
            .map(|cf| TimetableRow {
                date: cf.date(),
                kind: cf.cf_type().to_string(),
                accrual_start: cf.accrual_start(),
                unit_amount: cf.amount(),
                amount: (cf.amount() * record.notional()).round_dp(6),
            })
            .collect();

        Self {
            bond: record.identifier().to_string(),
            currency: record.currency().code().to_string(),
            rows,
        }
    }

    /// Total of the scaled amounts.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.rows.iter().map(|r| r.amount).sum()
    }
}

impl fmt::Display for Timetable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.bond, self.currency)?;
        writeln!(
            f,
            "{:<10}  {:<16}  {:<13}  {:>18}",
            "date", "flow", "accrual start", "amount"
        )?;
        for row in &self.rows {
            let start = row.accrual_start.map(|d| d.to_string()).unwrap_or_default();
            writeln!(
                f,
                "{:<10}  {:<16}  {:<13}  {:>18}",
                row.date.to_string(),
                row.kind,
                start,
                row.amount.to_string()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::default_record;
    use crate::schedule::{FixedBondScheduleGenerator, ScheduleGenerator};
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_bond_timetable() {
        let record = default_record(1, Date::parse("2024-01-02").unwrap()).unwrap();
        let schedule = FixedBondScheduleGenerator
            .generate(&record.to_cashflow_inputs())
            .unwrap();
        let table = Timetable::new(&record, &schedule);

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].amount, dec!(102.5));
        assert_eq!(table.total(), dec!(102.5));

        let text = table.to_string();
        assert!(text.starts_with("Bond 1 (USD)"));
        assert!(text.contains("2024-12-31"));
        assert!(text.contains("Coupon+Principal"));
        assert!(text.contains("102.5"));
    }
}
