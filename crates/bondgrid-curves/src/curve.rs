//! Validated zero-rate curve.

use bondgrid_math::interpolation::LinearInterpolator;
use serde::{Deserialize, Serialize};

use crate::bumping::{KeyRateBump, ParallelBump};
use crate::error::{CurveError, CurveResult};
use crate::market::MarketRate;
use crate::point::RateCurvePoint;

/// An immutable, validated zero-rate term structure.
///
/// Only constructible through [`RateCurve::new`], which enforces:
///
/// - at least 2 points
/// - finite tenors and rates
/// - non-negative tenors, strictly increasing (so no duplicates)
///
/// Shocks never mutate a curve; [`RateCurve::shifted`] and
/// [`RateCurve::bumped_at`] return new curves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RateCurvePoint>", into = "Vec<RateCurvePoint>")]
pub struct RateCurve {
    points: Vec<RateCurvePoint>,
    interpolator: LinearInterpolator,
}

impl RateCurve {
    /// Validates `points` and builds the curve.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurve` describing the first violated rule.
    pub fn new(points: Vec<RateCurvePoint>) -> CurveResult<Self> {
        if points.len() < 2 {
            return Err(CurveError::invalid_curve(format!(
                "need at least 2 points, got {}",
                points.len()
            )));
        }

        for (i, p) in points.iter().enumerate() {
            if !p.tenor.is_finite() || !p.rate.is_finite() {
                return Err(CurveError::invalid_curve(format!(
                    "non-finite point at index {i}: tenor {}, rate {}",
                    p.tenor, p.rate
                )));
            }
            if p.tenor < 0.0 {
                return Err(CurveError::invalid_curve(format!(
                    "negative tenor {} at index {i}",
                    p.tenor
                )));
            }
        }

        for (i, w) in points.windows(2).enumerate() {
            let (prev, cur) = (w[0].tenor, w[1].tenor);
            if cur == prev {
                return Err(CurveError::invalid_curve(format!(
                    "duplicate tenor {cur} at index {}",
                    i + 1
                )));
            }
            if cur < prev {
                return Err(CurveError::invalid_curve(format!(
                    "tenors must be strictly increasing: {prev} then {cur} at index {}",
                    i + 1
                )));
            }
        }

        let interpolator = LinearInterpolator::new(
            points.iter().map(|p| p.tenor).collect(),
            points.iter().map(|p| p.rate).collect(),
        )?
        .with_flat_extrapolation();

        Ok(Self {
            points,
            interpolator,
        })
    }

    /// Builds a curve from market quotes given in percent.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurve` if the converted points fail
    /// validation. Quotes are not reordered.
    pub fn from_market_rates(rates: &[MarketRate]) -> CurveResult<Self> {
        Self::new(rates.iter().map(MarketRate::to_point).collect())
    }

    /// Returns the curve nodes, sorted by tenor.
    pub fn points(&self) -> &[RateCurvePoint] {
        &self.points
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a valid curve has at least two nodes.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the longest tenor on the curve.
    pub fn max_tenor(&self) -> f64 {
        self.points.last().map_or(0.0, |p| p.tenor)
    }

    /// Returns the index of the node whose tenor matches `tenor` within
    /// `tolerance`.
    pub fn node_index(&self, tenor: f64, tolerance: f64) -> Option<usize> {
        self.points
            .iter()
            .position(|p| (p.tenor - tenor).abs() <= tolerance)
    }

    /// Returns a copy with every rate shifted by `shift`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurve` if the shift is not finite.
    pub fn shifted(&self, shift: f64) -> CurveResult<Self> {
        ParallelBump::new(shift).apply(self)
    }

    /// Returns a copy with only the node at `tenor` shifted by `shift`.
    ///
    /// An unchanged copy is returned when no node sits at `tenor`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurve` if the shift is not finite.
    pub fn bumped_at(&self, tenor: f64, shift: f64) -> CurveResult<Self> {
        KeyRateBump::new(tenor, shift).apply(self)
    }

    pub(crate) fn interpolator(&self) -> &LinearInterpolator {
        &self.interpolator
    }
}

impl TryFrom<Vec<RateCurvePoint>> for RateCurve {
    type Error = CurveError;

    fn try_from(points: Vec<RateCurvePoint>) -> CurveResult<Self> {
        Self::new(points)
    }
}

impl From<RateCurve> for Vec<RateCurvePoint> {
    fn from(curve: RateCurve) -> Self {
        curve.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts(data: &[(f64, f64)]) -> Vec<RateCurvePoint> {
        data.iter().copied().map(RateCurvePoint::from).collect()
    }

    #[test]
    fn test_valid_curve() {
        let curve = RateCurve::new(pts(&[(0.0, 0.03), (1.0, 0.04), (5.0, 0.045)])).unwrap();
        assert_eq!(curve.len(), 3);
        assert!(!curve.is_empty());
        assert_relative_eq!(curve.max_tenor(), 5.0);
    }

    #[test]
    fn test_single_point_rejected() {
        let err = RateCurve::new(pts(&[(1.0, 0.05)])).unwrap_err();
        assert!(matches!(err, CurveError::InvalidCurve { .. }));
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn test_duplicate_and_unsorted_rejected() {
        let dup = RateCurve::new(pts(&[(1.0, 0.05), (1.0, 0.06)])).unwrap_err();
        assert!(dup.to_string().contains("duplicate"));

        let unsorted = RateCurve::new(pts(&[(2.0, 0.05), (1.0, 0.06)])).unwrap_err();
        assert!(unsorted.to_string().contains("strictly increasing"));
    }

    #[test]
    fn test_negative_and_non_finite_rejected() {
        assert!(RateCurve::new(pts(&[(-1.0, 0.05), (1.0, 0.06)])).is_err());
        assert!(RateCurve::new(pts(&[(0.5, f64::NAN), (1.0, 0.06)])).is_err());
        assert!(RateCurve::new(pts(&[(0.5, 0.05), (f64::INFINITY, 0.06)])).is_err());
    }

    #[test]
    fn test_node_index_tolerance() {
        let curve = RateCurve::new(pts(&[(1.0 / 12.0, 0.05), (1.0, 0.04)])).unwrap();
        assert_eq!(curve.node_index(1.0 / 12.0, 1e-9), Some(0));
        assert_eq!(curve.node_index(0.0833, 1e-9), None);
        assert_eq!(curve.node_index(1.0, 1e-9), Some(1));
    }

    #[test]
    fn test_serde_validates() {
        let json = r#"[{"tenor":1.0,"rate":0.05},{"tenor":2.0,"rate":0.06}]"#;
        let curve: RateCurve = serde_json::from_str(json).unwrap();
        assert_eq!(curve.len(), 2);

        let bad = r#"[{"tenor":1.0,"rate":0.05}]"#;
        assert!(serde_json::from_str::<RateCurve>(bad).is_err());

        let back = serde_json::to_string(&curve).unwrap();
        assert_eq!(back, json);
    }
}
