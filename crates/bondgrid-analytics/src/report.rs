//! Batch key-rate reports.

use std::fmt;

use bondgrid_bonds::{BondRecord, ScheduleGenerator};
use bondgrid_core::Date;
use bondgrid_curves::RateCurve;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::error::AnalyticsError;
use crate::risk::{krd, KeyRateProfile};

/// Column header for the bond identifier.
pub const BOND_COLUMN: &str = "Bond";

/// Column header for the term in years.
pub const MATURITY_COLUMN: &str = "Maturity (Years)";

/// Rounds half away from zero. Values that round to zero come back as
/// `+0.0` so reports never show `-0`.
fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale + 0.0
}

/// One formatted row of the KRD report.
///
/// Serializes as an ordered map: `Bond`, `Maturity (Years)`, then one entry
/// per standard tenor label, null where not computed.
#[derive(Debug, Clone, PartialEq)]
pub struct KrdReportRow {
    /// Bond identifier.
    pub bond: String,
    /// Term in years, rounded to 2 dp.
    pub maturity_years: f64,
    /// `(label, value)` per standard tenor, values rounded to 6 dp.
    pub values: Vec<(&'static str, Option<f64>)>,
}

impl KrdReportRow {
    /// Formats a computed profile.
    pub fn new(bond: impl Into<String>, profile: &KeyRateProfile) -> Self {
        Self {
            bond: bond.into(),
            maturity_years: round_to(profile.maturity_years, 2),
            values: profile
                .values
                .iter()
                .map(|v| (v.label, v.value.map(|x| round_to(x, 6))))
                .collect(),
        }
    }

    /// Value at a tenor label; outer `None` for an unknown label.
    pub fn get(&self, label: &str) -> Option<Option<f64>> {
        self.values
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| *v)
    }
}

impl Serialize for KrdReportRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 2))?;
        map.serialize_entry(BOND_COLUMN, &self.bond)?;
        map.serialize_entry(MATURITY_COLUMN, &self.maturity_years)?;
        for (label, value) in &self.values {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// A row that could not be valued.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowFailure {
    /// Zero-based row position.
    pub row: usize,
    /// Bond identifier of the row.
    pub bond: String,
    /// Why the row failed.
    #[serde(serialize_with = "serialize_display")]
    pub error: AnalyticsError,
}

impl fmt::Display for RowFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {} ({}): {}", self.row, self.bond, self.error)
    }
}

fn serialize_display<S: Serializer>(value: &AnalyticsError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// KRD report over a batch of bonds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KrdReport {
    /// Rows that were valued, in input order.
    pub rows: Vec<KrdReportRow>,
    /// Rows that failed, in input order.
    pub failures: Vec<RowFailure>,
}

impl KrdReport {
    /// Returns true if every row was valued.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Builds the KRD report for `records`.
///
/// Each row is valued independently; a failing row is recorded in
/// [`KrdReport::failures`] and the rest still get values.
pub fn krd_report<'a, I>(
    records: I,
    generator: &dyn ScheduleGenerator,
    base_curve: &RateCurve,
    pricing_date: Date,
    shock_size: f64,
) -> KrdReport
where
    I: IntoIterator<Item = &'a BondRecord>,
{
    let mut report = KrdReport::default();

    for (row, record) in records.into_iter().enumerate() {
        match krd(record, generator, base_curve, pricing_date, shock_size) {
            Ok(profile) => report
                .rows
                .push(KrdReportRow::new(record.identifier(), &profile)),
            Err(error) => {
                log::warn!("krd failed for row {row} ({}): {error}", record.identifier());
                report.failures.push(RowFailure {
                    row,
                    bond: record.identifier().to_string(),
                    error,
                });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use bondgrid_bonds::{default_record, BondField, FixedBondScheduleGenerator};
    use bondgrid_curves::{RateCurvePoint, STANDARD_TENORS};

    fn d(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    fn ladder_curve(rate: f64) -> RateCurve {
        RateCurve::new(
            STANDARD_TENORS
                .iter()
                .map(|t| RateCurvePoint::new(t.years, rate))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_to(1.002_739_7, 2), 1.0);
        assert_eq!(round_to(123.456_789_4, 6), 123.456_789);
        assert_eq!(round_to(-0.000_000_4, 6), 0.0);
        assert_eq!(round_to(-1.25, 1), -1.3);
    }

    #[test]
    fn test_rounding_drops_negative_zero() {
        let rounded = round_to(-0.000_000_4, 6);
        assert!(rounded.is_sign_positive());
        assert_eq!(serde_json::to_string(&rounded).unwrap(), "0.0");
        assert_eq!(format!("{rounded:.6}"), "0.000000");
    }

    #[test]
    fn test_row_serializes_in_column_order() {
        let pricing = d("2024-01-02");
        let report = krd_report(
            &[default_record(1, pricing).unwrap()],
            &FixedBondScheduleGenerator,
            &ladder_curve(0.04),
            pricing,
            0.01,
        );

        let json = serde_json::to_string(&report.rows[0]).unwrap();
        assert!(json.starts_with(r#"{"Bond":"Bond 1","Maturity (Years)":1.0,"1 Mo":"#));
        assert!(json.ends_with(r#""20 Yr":null,"30 Yr":null}"#));
    }

    #[test]
    fn test_failed_row_does_not_block_others() {
        let pricing = d("2024-01-02");
        let expired = default_record(2, d("2020-01-02")).unwrap();
        let records = vec![default_record(1, pricing).unwrap(), expired, default_record(3, pricing).unwrap()];

        let report = krd_report(
            &records,
            &FixedBondScheduleGenerator,
            &ladder_curve(0.04),
            pricing,
            0.01,
        );

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[1].bond, "Bond 3");
        assert!(!report.is_complete());
        assert_eq!(report.failures[0].row, 1);
        assert!(matches!(
            report.failures[0].error,
            AnalyticsError::EmptySchedule { .. }
        ));

        let json = serde_json::to_value(&report.failures[0]).unwrap();
        assert_eq!(json["error"], "no future cash flows as of 2024-01-02");
    }

    #[test]
    fn test_row_lookup() {
        let pricing = d("2024-01-02");
        let record = default_record(1, pricing).unwrap()
            .with_field(BondField::Maturity, "2029-01-02")
            .unwrap();
        let report = krd_report(
            std::iter::once(&record),
            &FixedBondScheduleGenerator,
            &ladder_curve(0.04),
            pricing,
            0.01,
        );

        let row = &report.rows[0];
        assert_eq!(row.maturity_years, 5.01);
        assert!(row.get("5 Yr").unwrap().unwrap() > 0.0);
        assert!(row.get("7 Yr").unwrap().is_some());
        assert_eq!(row.get("10 Yr"), Some(None));
    }
}
