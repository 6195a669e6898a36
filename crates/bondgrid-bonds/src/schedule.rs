//! Cash flow schedule generation for fixed-coupon bonds.
//!
//! Coupon dates are rolled backward from maturity one regular period at a
//! time until the accrual start is reached. Frequencies that divide 12 step
//! in whole months, any other frequency in `365 / n` day periods. Any
//! remainder becomes a short first period whose coupon is pro-rated by
//! actual days.
//!
//! ```text
//! accrual start        c1           c2           maturity
//!      |--- stub ----|--- regular --|--- regular --|
//! ```

use bondgrid_core::{CashFlow, CashFlowSchedule, Date};
use rust_decimal::Decimal;

use crate::error::{BondError, BondResult};
use crate::record::CashFlowInputs;

/// Produces the dated cash flows of a bond, per unit of notional.
///
/// Implementations must be deterministic: the same inputs always give the
/// same schedule.
pub trait ScheduleGenerator: Send + Sync {
    /// Generates the schedule for `inputs`.
    fn generate(&self, inputs: &CashFlowInputs) -> BondResult<CashFlowSchedule>;
}

/// Fixed-coupon bullet bond schedule.
///
/// - Regular periods pay `coupon / frequency`.
/// - A short first period pays the regular coupon scaled by its actual days
///   over the days of the full regular period ending on the same date.
/// - Principal of 1 is paid with the final coupon.
/// - A zero coupon bond has a single principal flow at maturity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedBondScheduleGenerator;

impl FixedBondScheduleGenerator {
    /// Coupon period end dates, earliest first, the last being maturity.
    ///
    /// Also returns the regular roll date on or before the accrual start,
    /// which is where the first period would begin if it were full.
    fn coupon_dates(inputs: &CashFlowInputs) -> BondResult<(Vec<Date>, Date)> {
        let mut dates = Vec::new();

        // Roll from maturity each time so clamping and rounding do not drift.
        let mut k = 0;
        let first_regular_start = loop {
            let date = inputs
                .frequency
                .roll_back(inputs.maturity, k)
                .map_err(|e| BondError::schedule_failed(e.to_string()))?;
            if date <= inputs.accrual_start {
                break date;
            }
            dates.push(date);
            k += 1;
        };

        dates.reverse();
        Ok((dates, first_regular_start))
    }
}

impl ScheduleGenerator for FixedBondScheduleGenerator {
    fn generate(&self, inputs: &CashFlowInputs) -> BondResult<CashFlowSchedule> {
        if inputs.accrual_start >= inputs.maturity {
            return Err(BondError::schedule_failed(format!(
                "maturity {} is not after accrual start {}",
                inputs.maturity, inputs.accrual_start
            )));
        }

        if inputs.coupon.is_zero() {
            let mut schedule = CashFlowSchedule::with_capacity(1);
            schedule.push(
                CashFlow::principal(inputs.maturity, Decimal::ONE)
                    .with_accrual(inputs.accrual_start, inputs.maturity),
            );
            return Ok(schedule);
        }

        let regular = inputs.coupon / Decimal::from(inputs.frequency.periods_per_year());
        let (dates, regular_start) = Self::coupon_dates(inputs)?;
        let last = dates.len() - 1;

        let mut schedule = CashFlowSchedule::with_capacity(dates.len());
        let mut period_start = inputs.accrual_start;

        for (i, &end) in dates.iter().enumerate() {
            let amount = if i == 0 && regular_start != period_start {
                let stub_days = period_start.days_between(&end);
                let full_days = regular_start.days_between(&end);
                log::debug!(
                    "short first period {period_start} to {end}: {stub_days}/{full_days} days"
                );
                regular * Decimal::from(stub_days) / Decimal::from(full_days)
            } else {
                regular
            };

            let cf = if i == last {
                CashFlow::final_payment(end, amount, Decimal::ONE)
            } else {
                CashFlow::coupon(end, amount)
            };
            schedule.push(cf.with_accrual(period_start, end));
            period_start = end;
        }

        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bondgrid_core::{CashFlowType, Currency, Frequency};
    use rust_decimal_macros::dec;

    fn d(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    fn inputs(coupon: Decimal, start: &str, maturity: &str, frequency: Frequency) -> CashFlowInputs {
        CashFlowInputs {
            currency: Currency::USD,
            coupon,
            accrual_start: d(start),
            maturity: d(maturity),
            frequency,
        }
    }

    #[test]
    fn test_one_year_annual() {
        let schedule = FixedBondScheduleGenerator
            .generate(&inputs(dec!(0.05), "2024-01-02", "2025-01-02", Frequency::Annual))
            .unwrap();

        assert_eq!(schedule.len(), 1);
        let cf = schedule.as_slice()[0];
        assert_eq!(cf.date(), d("2025-01-02"));
        assert_eq!(cf.amount(), dec!(1.05));
        assert_eq!(cf.cf_type(), CashFlowType::CouponAndPrincipal);
        assert_eq!(cf.accrual_start(), Some(d("2024-01-02")));
    }

    #[test]
    fn test_semi_annual_regular() {
        let schedule = FixedBondScheduleGenerator
            .generate(&inputs(dec!(0.04), "2024-03-15", "2026-03-15", Frequency::SemiAnnual))
            .unwrap();

        let dates: Vec<String> = schedule.iter().map(|cf| cf.date().to_string()).collect();
        assert_eq!(
            dates,
            ["2024-09-15", "2025-03-15", "2025-09-15", "2026-03-15"]
        );
        assert!(schedule.as_slice()[..3].iter().all(|cf| cf.amount() == dec!(0.02)));
        assert_eq!(schedule.as_slice()[3].amount(), dec!(1.02));
        assert_eq!(schedule.total(), dec!(1.08));
    }

    #[test]
    fn test_short_first_period_pro_rated() {
        // Quarterly back from 2024-12-31: 09-30, 06-30, 03-31; the stub runs
        // 2024-02-15 to 2024-03-31 inside the regular 2023-12-31..2024-03-31.
        let schedule = FixedBondScheduleGenerator
            .generate(&inputs(dec!(0.04), "2024-02-15", "2024-12-31", Frequency::Quarterly))
            .unwrap();

        let first = schedule.as_slice()[0];
        assert_eq!(first.date(), d("2024-03-31"));
        assert_eq!(first.accrual_start(), Some(d("2024-02-15")));
        assert_eq!(first.amount(), dec!(0.01) * dec!(45) / dec!(91));
        assert_eq!(schedule.len(), 4);
    }

    #[test]
    fn test_month_end_does_not_drift() {
        let schedule = FixedBondScheduleGenerator
            .generate(&inputs(dec!(0.06), "2024-08-31", "2025-08-31", Frequency::Monthly))
            .unwrap();

        let dates: Vec<Date> = schedule.iter().map(CashFlow::date).collect();
        assert_eq!(dates.len(), 12);
        assert!(dates.contains(&d("2025-02-28")));
        assert!(dates.contains(&d("2025-03-31")));
        assert!(schedule.iter().all(|cf| cf.amount() >= dec!(0.005)));
    }

    #[test]
    fn test_zero_coupon() {
        let schedule = FixedBondScheduleGenerator
            .generate(&inputs(Decimal::ZERO, "2024-01-02", "2029-01-02", Frequency::SemiAnnual))
            .unwrap();

        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.as_slice()[0].amount(), Decimal::ONE);
        assert_eq!(schedule.as_slice()[0].cf_type(), CashFlowType::Principal);
    }

    #[test]
    fn test_deterministic() {
        let i = inputs(dec!(0.035), "2024-05-20", "2031-11-20", Frequency::TriAnnual);
        let a = FixedBondScheduleGenerator.generate(&i).unwrap();
        let b = FixedBondScheduleGenerator.generate(&i).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_day_based_periods() {
        // Five payments a year do not fit whole months: 73-day periods.
        let schedule = FixedBondScheduleGenerator
            .generate(&inputs(dec!(0.05), "2024-03-31", "2025-03-31", Frequency::PerYear(5)))
            .unwrap();

        let dates: Vec<String> = schedule.iter().map(|cf| cf.date().to_string()).collect();
        assert_eq!(
            dates,
            ["2024-06-12", "2024-08-24", "2024-11-05", "2025-01-17", "2025-03-31"]
        );
        assert!(schedule.as_slice()[..4].iter().all(|cf| cf.amount() == dec!(0.01)));
        assert_eq!(schedule.as_slice()[4].amount(), dec!(1.01));
        assert_eq!(schedule.as_slice()[0].accrual_start(), Some(d("2024-03-31")));
    }

    #[test]
    fn test_inverted_dates_rejected() {
        let i = inputs(dec!(0.05), "2025-01-02", "2024-01-02", Frequency::Annual);
        assert!(matches!(
            FixedBondScheduleGenerator.generate(&i),
            Err(BondError::ScheduleFailed { .. })
        ));
    }
}
