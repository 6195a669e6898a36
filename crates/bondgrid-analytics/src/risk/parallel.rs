//! Effective duration and convexity under a parallel shock.

use bondgrid_core::{CashFlowSchedule, Date};
use bondgrid_curves::bumping::ParallelBump;
use bondgrid_curves::{Discounter, RateCurve};
use serde::{Deserialize, Serialize};

use super::check_shock_size;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::valuation::price;

/// Base price together with its parallel-shock sensitivities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParallelRisk {
    /// Base price per unit of notional.
    pub price: f64,
    /// Effective duration.
    pub duration: f64,
    /// Effective convexity (not divided by price).
    pub convexity: f64,
}

/// Effective duration from shocked prices.
///
/// ```text
/// D = -(P₊ - P₋) / (2 × Δy × P₀)
/// ```
pub fn effective_duration(
    price_up: f64,
    price_down: f64,
    price_base: f64,
    shock_size: f64,
) -> AnalyticsResult<f64> {
    check_shock_size(shock_size)?;
    if price_base == 0.0 {
        return Err(AnalyticsError::ZeroPrice);
    }
    let dv = (price_up - price_down) / (2.0 * shock_size);
    Ok(-dv / price_base)
}

/// Effective convexity from shocked prices.
///
/// ```text
/// C = (P₊ + P₋ - 2×P₀) / Δy²
/// ```
///
/// Kept in price units, without the usual division by `P₀`.
pub fn effective_convexity(
    price_up: f64,
    price_down: f64,
    price_base: f64,
    shock_size: f64,
) -> AnalyticsResult<f64> {
    check_shock_size(shock_size)?;
    Ok((price_up + price_down - 2.0 * price_base) / shock_size.powi(2))
}

/// Prices `schedule` on the base curve and on curves shifted by
/// `±shock_size`.
///
/// # Errors
///
/// Propagates pricing errors, `ZeroPrice` when the base price is zero and
/// `InvalidInput` for a non-positive or non-finite shock size.
pub fn parallel_risk(
    schedule: &CashFlowSchedule,
    base_curve: &RateCurve,
    pricing_date: Date,
    shock_size: f64,
) -> AnalyticsResult<ParallelRisk> {
    check_shock_size(shock_size)?;

    let price0 = price(schedule, &Discounter::build(base_curve), pricing_date)?;
    if price0 == 0.0 {
        return Err(AnalyticsError::ZeroPrice);
    }

    let (up, down) = ParallelBump::symmetric(shock_size);
    let price_up = price(schedule, &Discounter::build(&up.apply(base_curve)?), pricing_date)?;
    let price_down = price(schedule, &Discounter::build(&down.apply(base_curve)?), pricing_date)?;

    let duration = effective_duration(price_up, price_down, price0, shock_size)?;
    let convexity = effective_convexity(price_up, price_down, price0, shock_size)?;

    log::debug!(
        "parallel shock {shock_size}: p0={price0} p+={price_up} p-={price_down} D={duration} C={convexity}"
    );

    Ok(ParallelRisk {
        price: price0,
        duration,
        convexity,
    })
}

/// Effective `(duration, convexity)` of `schedule` under a parallel shock.
///
/// # Errors
///
/// See [`parallel_risk`].
pub fn duration_convexity(
    schedule: &CashFlowSchedule,
    base_curve: &RateCurve,
    pricing_date: Date,
    shock_size: f64,
) -> AnalyticsResult<(f64, f64)> {
    parallel_risk(schedule, base_curve, pricing_date, shock_size).map(|r| (r.duration, r.convexity))
}
