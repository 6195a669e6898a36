//! Discounted cash-flow valuation.

use bondgrid_core::{CashFlowSchedule, Date};
use bondgrid_curves::Discounter;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Present value of `schedule` per unit of notional.
///
/// $$PV = \sum_{t_i > 0} CF_i \cdot DF(t_i)$$
///
/// with `t_i` the ACT/365F time from `pricing_date`. Flows on or before the
/// pricing date are excluded. Callers multiply by the notional.
///
/// # Errors
///
/// Returns `AnalyticsError::EmptySchedule` if no flow is left after the
/// pricing date.
pub fn price(
    schedule: &CashFlowSchedule,
    discounter: &Discounter,
    pricing_date: Date,
) -> AnalyticsResult<f64> {
    let mut pv = 0.0;
    let mut counted = 0usize;

    for (t, amount) in schedule.times_from(pricing_date).filter(|(t, _)| *t > 0.0) {
        pv += amount * discounter.discount_factor(t);
        counted += 1;
    }

    if counted == 0 {
        return Err(AnalyticsError::EmptySchedule { pricing_date });
    }

    log::debug!("priced {counted} flows as of {pricing_date}: {pv}");
    Ok(pv)
}
