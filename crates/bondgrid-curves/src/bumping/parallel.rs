//! Parallel (uniform) curve bumping.

use crate::curve::RateCurve;
use crate::error::{CurveError, CurveResult};
use crate::point::RateCurvePoint;

/// A parallel shift applied to every node of a curve.
///
/// # Example
///
/// ```rust
/// use bondgrid_curves::prelude::*;
///
/// let curve = RateCurve::new(vec![
///     RateCurvePoint::new(1.0, 0.04),
///     RateCurvePoint::new(5.0, 0.05),
/// ])
/// .unwrap();
///
/// let (up, down) = ParallelBump::symmetric(0.01);
/// let curve_up = up.apply(&curve).unwrap();
/// let curve_down = down.apply(&curve).unwrap();
/// assert!((curve_up.points()[0].rate - 0.05).abs() < 1e-15);
/// assert!((curve_down.points()[1].rate - 0.04).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelBump {
    shift: f64,
}

impl ParallelBump {
    /// Creates a new parallel bump of `shift` (decimal).
    #[must_use]
    pub fn new(shift: f64) -> Self {
        Self { shift }
    }

    /// Creates symmetric up/down bumps for central differences.
    ///
    /// Returns (up_bump, down_bump) pair.
    #[must_use]
    pub fn symmetric(shift: f64) -> (Self, Self) {
        (Self::new(shift), Self::new(-shift))
    }

    /// Returns the shift as a decimal.
    #[must_use]
    pub fn shift(&self) -> f64 {
        self.shift
    }

    /// Returns a shifted copy of `curve`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurve` if the shift is not finite.
    pub fn apply(&self, curve: &RateCurve) -> CurveResult<RateCurve> {
        if !self.shift.is_finite() {
            return Err(CurveError::invalid_curve(format!(
                "non-finite parallel shift {}",
                self.shift
            )));
        }

        log::debug!("parallel shift of {} over {} nodes", self.shift, curve.len());
        RateCurve::new(
            curve
                .points()
                .iter()
                .map(|p| RateCurvePoint::new(p.tenor, p.rate + self.shift))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn curve() -> RateCurve {
        RateCurve::new(vec![
            RateCurvePoint::new(0.5, 0.03),
            RateCurvePoint::new(2.0, 0.035),
            RateCurvePoint::new(10.0, 0.04),
        ])
        .unwrap()
    }

    #[test]
    fn test_parallel_shift_all_nodes() {
        let base = curve();
        let shifted = ParallelBump::new(0.01).apply(&base).unwrap();

        for (b, s) in base.points().iter().zip(shifted.points()) {
            assert_relative_eq!(s.tenor, b.tenor);
            assert_relative_eq!(s.rate, b.rate + 0.01, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_base_untouched() {
        let base = curve();
        let snapshot = base.clone();
        let _ = base.shifted(0.02).unwrap();
        assert_eq!(base, snapshot);
    }

    #[test]
    fn test_up_then_down_restores_rates() {
        let base = curve();
        let round_trip = base.shifted(0.01).unwrap().shifted(-0.01).unwrap();
        for (b, r) in base.points().iter().zip(round_trip.points()) {
            assert_relative_eq!(r.rate, b.rate, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_non_finite_shift_rejected() {
        assert!(ParallelBump::new(f64::NAN).apply(&curve()).is_err());
    }
}
