//! Term and forward rate grid for display.

use serde::{Deserialize, Serialize};

use crate::discounter::Discounter;
use crate::error::{CurveError, CurveResult};

/// Grid points used by the rate chart; 21 points give 20 intervals.
pub const DEFAULT_RATE_TABLE_POINTS: usize = 21;

/// One interval of the rate table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateTableRow {
    /// Interval end, in years.
    #[serde(rename = "Time")]
    pub time: f64,
    /// Term rate from 0 to `time`.
    #[serde(rename = "Term Rate")]
    pub term_rate: f64,
    /// Forward rate from the previous grid time to `time`.
    #[serde(rename = "Fwd Rate")]
    pub forward_rate: f64,
}

/// Builds the term/forward rate table on `points` evenly spaced times over
/// `[0, max_tenor]`.
///
/// One row per interval, so `points - 1` rows.
///
/// # Errors
///
/// Returns `CurveError::InvalidCurve` if `points < 2` or `max_tenor` is not
/// positive and finite.
pub fn rate_table(
    discounter: &Discounter,
    max_tenor: f64,
    points: usize,
) -> CurveResult<Vec<RateTableRow>> {
    if points < 2 {
        return Err(CurveError::invalid_curve(format!(
            "rate table needs at least 2 grid points, got {points}"
        )));
    }
    if !(max_tenor.is_finite() && max_tenor > 0.0) {
        return Err(CurveError::invalid_curve(format!(
            "rate table horizon must be positive, got {max_tenor}"
        )));
    }

    let step = max_tenor / (points - 1) as f64;
    let ends: Vec<f64> = (1..points).map(|i| i as f64 * step).collect();
    let starts: Vec<f64> = (0..points - 1).map(|i| i as f64 * step).collect();

    let term_rates = discounter.rate(&ends, &vec![0.0; ends.len()])?;
    let fwd_rates = discounter.rate(&ends, &starts)?;

    Ok(ends
        .into_iter()
        .zip(term_rates)
        .zip(fwd_rates)
        .map(|((time, term_rate), forward_rate)| RateTableRow {
            time,
            term_rate,
            forward_rate,
        })
        .collect())
}
