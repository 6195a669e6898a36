use serde::{Deserialize, Serialize};

/// A single zero-rate node.
///
/// `tenor` is in years, `rate` is an annualized, continuously compounded
/// decimal rate (0.05 = 5%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateCurvePoint {
    /// Time to the node in years.
    pub tenor: f64,
    /// Zero rate at the node.
    pub rate: f64,
}

impl RateCurvePoint {
    /// Creates a new rate point.
    #[must_use]
    pub fn new(tenor: f64, rate: f64) -> Self {
        Self { tenor, rate }
    }
}

impl From<(f64, f64)> for RateCurvePoint {
    fn from((tenor, rate): (f64, f64)) -> Self {
        Self::new(tenor, rate)
    }
}
