//! Finite-difference rate sensitivities.
//!
//! - [`duration_convexity`]: central differences under a parallel shock
//! - [`krd`]: per-tenor repricing under single-node shocks
//!
//! Every shock reprices on a fresh curve copy; the base curve is never
//! modified, so repeated calls are independent.

mod key_rate;
mod parallel;

pub use key_rate::{krd, KeyRateProfile, KeyRateValue};
pub use parallel::{
    duration_convexity, effective_convexity, effective_duration, parallel_risk, ParallelRisk,
};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Default shock size, 100bp.
pub const DEFAULT_SHOCK_SIZE: f64 = 0.01;

pub(crate) fn check_shock_size(shock_size: f64) -> AnalyticsResult<()> {
    if shock_size.is_finite() && shock_size > 0.0 {
        Ok(())
    } else {
        Err(AnalyticsError::invalid_input(format!(
            "shock size must be positive and finite, got {shock_size}"
        )))
    }
}
