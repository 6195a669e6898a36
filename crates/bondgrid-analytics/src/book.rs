//! Grid state: an ordered book of bond rows valued against one curve.

use bondgrid_bonds::{
    default_record_with, BondField, BondMetrics, BondRecord, RecordDefaults, ScheduleGenerator,
    Timetable,
};
use bondgrid_core::Date;
use bondgrid_curves::RateCurve;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::report::{krd_report, KrdReport, RowFailure};
use crate::risk::{parallel_risk, DEFAULT_SHOCK_SIZE};

/// Per-row grid actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Remove the row.
    Delete,
    /// Render the row's cash-flow timetable.
    ShowTimetable,
}

/// Result of [`BondBook::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// The row was removed; holds the removed record.
    Deleted(BondRecord),
    /// The row's timetable.
    Timetable(Timetable),
    /// The row index was out of range; nothing happened.
    Ignored,
}

/// Ordered bond rows together with the curve and pricing date they are
/// valued against.
///
/// Cached metrics are cleared whenever their inputs change: an edit clears
/// its row, a new curve or pricing date clears every row.
/// [`BondBook::refresh`] recomputes only rows whose metrics are unknown.
#[derive(Debug, Clone)]
pub struct BondBook {
    rows: Vec<BondRecord>,
    curve: RateCurve,
    pricing_date: Date,
    shock_size: f64,
    defaults: RecordDefaults,
}

impl BondBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new(curve: RateCurve, pricing_date: Date) -> Self {
        Self {
            rows: Vec::new(),
            curve,
            pricing_date,
            shock_size: DEFAULT_SHOCK_SIZE,
            defaults: RecordDefaults::default(),
        }
    }

    /// Sets the shock size used for duration, convexity and KRD.
    #[must_use]
    pub fn with_shock_size(mut self, shock_size: f64) -> Self {
        self.shock_size = shock_size;
        self
    }

    /// Sets the terms used by [`BondBook::add_default`].
    #[must_use]
    pub fn with_defaults(mut self, defaults: RecordDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Returns the rows in grid order.
    pub fn rows(&self) -> &[BondRecord] {
        &self.rows
    }

    /// Returns the row at `index`.
    pub fn row(&self, index: usize) -> Option<&BondRecord> {
        self.rows.get(index)
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the book has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the current curve.
    pub fn curve(&self) -> &RateCurve {
        &self.curve
    }

    /// Returns the pricing date.
    pub fn pricing_date(&self) -> Date {
        self.pricing_date
    }

    /// Returns the shock size.
    pub fn shock_size(&self) -> f64 {
        self.shock_size
    }

    /// Appends a record as-is; its metrics are cleared.
    pub fn push(&mut self, mut record: BondRecord) {
        record.clear_metrics();
        self.rows.push(record);
    }

    /// Appends the default row `Bond {len + 1}` starting on the pricing date.
    ///
    /// # Errors
    ///
    /// Returns the record error if the default maturity is out of range;
    /// the book is unchanged.
    pub fn add_default(&mut self) -> AnalyticsResult<&BondRecord> {
        let index = self.rows.len() + 1;
        let record = default_record_with(index, self.pricing_date, &self.defaults)?;
        log::debug!("added default row {}", record.identifier());
        self.rows.push(record);
        Ok(&self.rows[index - 1])
    }

    /// Edits one cell.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an out-of-range row, or the validation error of
    /// the edit. The row is left untouched on error.
    pub fn edit(&mut self, row: usize, field: BondField, raw: &str) -> AnalyticsResult<()> {
        let len = self.rows.len();
        let record = self
            .rows
            .get_mut(row)
            .ok_or_else(|| AnalyticsError::invalid_input(format!("row {row} out of range ({len} rows)")))?;

        *record = record.with_field(field, raw)?;
        log::debug!("row {row}: {field} set to '{raw}'");
        Ok(())
    }

    /// Replaces the curve and invalidates every row.
    pub fn set_curve(&mut self, curve: RateCurve) {
        self.curve = curve;
        self.invalidate_all();
    }

    /// Changes the pricing date and invalidates every row.
    pub fn set_pricing_date(&mut self, pricing_date: Date) {
        self.pricing_date = pricing_date;
        self.invalidate_all();
    }

    fn invalidate_all(&mut self) {
        self.rows.iter_mut().for_each(BondRecord::clear_metrics);
    }

    /// Values every row with unknown metrics.
    ///
    /// Rows that fail keep unknown metrics and are returned; the others are
    /// still valued.
    pub fn refresh(&mut self, generator: &dyn ScheduleGenerator) -> Vec<RowFailure> {
        let (curve, pricing_date, shock_size) = (&self.curve, self.pricing_date, self.shock_size);
        let mut failures = Vec::new();

        for (row, record) in self.rows.iter_mut().enumerate() {
            if record.metrics().is_complete() {
                continue;
            }

            let valued = generator
                .generate(&record.to_cashflow_inputs())
                .map_err(AnalyticsError::from)
                .and_then(|schedule| {
                    parallel_risk(&schedule, curve, pricing_date, shock_size)
                });

            match valued {
                Ok(risk) => {
                    record.set_metrics(BondMetrics::new(risk.price, risk.duration, risk.convexity));
                }
                Err(error) => {
                    log::warn!("valuation failed for row {row} ({}): {error}", record.identifier());
                    record.clear_metrics();
                    failures.push(RowFailure {
                        row,
                        bond: record.identifier().to_string(),
                        error,
                    });
                }
            }
        }

        failures
    }

    /// Applies a row action. Out-of-range rows are ignored.
    ///
    /// # Errors
    ///
    /// Propagates schedule errors from `ShowTimetable`.
    pub fn apply(
        &mut self,
        action: RowAction,
        row: usize,
        generator: &dyn ScheduleGenerator,
    ) -> AnalyticsResult<RowOutcome> {
        if row >= self.rows.len() {
            log::debug!("{action:?} on row {row} ignored, {} rows", self.rows.len());
            return Ok(RowOutcome::Ignored);
        }

        match action {
            RowAction::Delete => Ok(RowOutcome::Deleted(self.rows.remove(row))),
            RowAction::ShowTimetable => {
                let record = &self.rows[row];
                let schedule = generator.generate(&record.to_cashflow_inputs())?;
                Ok(RowOutcome::Timetable(Timetable::new(record, &schedule)))
            }
        }
    }

    /// KRD report over all rows.
    pub fn krd_report(&self, generator: &dyn ScheduleGenerator) -> KrdReport {
        krd_report(
            &self.rows,
            generator,
            &self.curve,
            self.pricing_date,
            self.shock_size,
        )
    }
}
