//! Key-rate durations on the standard tenor ladder.

use bondgrid_bonds::{BondRecord, ScheduleGenerator};
use bondgrid_core::{CashFlowSchedule, Date};
use bondgrid_curves::bumping::KeyRateBump;
use bondgrid_curves::{Discounter, RateCurve, StandardTenor, STANDARD_TENORS};
use serde::Serialize;

use super::check_shock_size;
use crate::error::AnalyticsResult;
use crate::valuation::price;

/// Sensitivity at one standard tenor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeyRateValue {
    /// Tenor label, e.g. "2 Yr".
    pub label: &'static str,
    /// Tenor in years.
    pub years: f64,
    /// PV change in currency units for a `+shock_size` move of the tenor's
    /// node. `None` for tenors past the one spare point beyond maturity.
    pub value: Option<f64>,
}

/// Key-rate sensitivities of one bond, in standard tenor order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyRateProfile {
    /// Term of the bond in years from accrual start.
    pub maturity_years: f64,
    /// One entry per standard tenor.
    pub values: Vec<KeyRateValue>,
}

impl KeyRateProfile {
    /// Looks up the value at a tenor label.
    ///
    /// Outer `None` for an unknown label, inner `None` for a null entry.
    pub fn get(&self, label: &str) -> Option<Option<f64>> {
        self.values.iter().find(|v| v.label == label).map(|v| v.value)
    }

    /// Sum of the computed values.
    pub fn total(&self) -> f64 {
        self.values.iter().filter_map(|v| v.value).sum()
    }
}

/// Key-rate durations of `record` on the standard tenor ladder.
///
/// Walking the tenors in order, every tenor up to the bond's term gets a
/// value, as does the first tenor past it (the spare point); later tenors
/// are null. A value is
///
/// ```text
/// KRD[T] = (P₀ - P(curve with node T shifted by +shock)) × notional
/// ```
///
/// Only a curve node sitting exactly at `T` is shifted. A tenor with no node
/// on the curve is left unshocked and reports 0.
///
/// # Errors
///
/// Propagates schedule and pricing errors, and `InvalidInput` for a bad
/// shock size.
pub fn krd(
    record: &BondRecord,
    generator: &dyn ScheduleGenerator,
    base_curve: &RateCurve,
    pricing_date: Date,
    shock_size: f64,
) -> AnalyticsResult<KeyRateProfile> {
    check_shock_size(shock_size)?;

    let schedule = generator.generate(&record.to_cashflow_inputs())?;
    let price0 = price(&schedule, &Discounter::build(base_curve), pricing_date)?;
    let notional = record.notional_f64();
    let maturity_years = record.maturity_years();

    // Tenors that get a value: all within the term plus one spare.
    let mut spare_taken = false;
    let computed: Vec<bool> = STANDARD_TENORS
        .iter()
        .map(|t| {
            if t.years <= maturity_years {
                true
            } else if spare_taken {
                false
            } else {
                spare_taken = true;
                true
            }
        })
        .collect();

    let shock = |tenor: &StandardTenor| -> AnalyticsResult<f64> {
        shocked_change(&schedule, base_curve, pricing_date, price0, tenor, shock_size)
            .map(|dp| dp * notional)
    };

    #[cfg(feature = "parallel")]
    let results: Vec<AnalyticsResult<Option<f64>>> = {
        use rayon::prelude::*;
        STANDARD_TENORS
            .par_iter()
            .zip(computed.par_iter())
            .map(|(t, &on)| if on { shock(t).map(Some) } else { Ok(None) })
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let results: Vec<AnalyticsResult<Option<f64>>> = STANDARD_TENORS
        .iter()
        .zip(&computed)
        .map(|(t, &on)| if on { shock(t).map(Some) } else { Ok(None) })
        .collect();

    let values = STANDARD_TENORS
        .iter()
        .zip(results)
        .map(|(t, r)| {
            r.map(|value| KeyRateValue {
                label: t.label,
                years: t.years,
                value,
            })
        })
        .collect::<AnalyticsResult<Vec<_>>>()?;

    log::debug!(
        "krd for {}: term {maturity_years:.4}y, {} tenors computed",
        record.identifier(),
        computed.iter().filter(|&&c| c).count()
    );

    Ok(KeyRateProfile {
        maturity_years,
        values,
    })
}

/// `P₀ - P_shocked` per unit of notional for a shock at `tenor`.
fn shocked_change(
    schedule: &CashFlowSchedule,
    base_curve: &RateCurve,
    pricing_date: Date,
    price0: f64,
    tenor: &StandardTenor,
    shock_size: f64,
) -> AnalyticsResult<f64> {
    let bump = KeyRateBump::new(tenor.years, shock_size);
    if !bump.hits(base_curve) {
        log::warn!(
            "no curve node at {} ({} years), key rate not shocked",
            tenor.label,
            tenor.years
        );
        return Ok(0.0);
    }

    let shocked = bump.apply(base_curve)?;
    let price_shocked = price(schedule, &Discounter::build(&shocked), pricing_date)?;
    Ok(price0 - price_shocked)
}
