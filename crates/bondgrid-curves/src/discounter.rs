//! Rate and discount-factor queries over a curve snapshot.

use bondgrid_math::interpolation::Interpolator;

use crate::curve::RateCurve;
use crate::error::{CurveError, CurveResult};
use crate::point::RateCurvePoint;

/// Immutable discounting view over a [`RateCurve`].
///
/// Zero rates are linearly interpolated between nodes and held flat beyond
/// the first and last node. Compounding is continuous:
///
/// $$DF(t) = e^{-r(t) t}$$
///
/// and the forward rate over `[s, t]` is
///
/// $$f(s, t) = \frac{r(t) t - r(s) s}{t - s}$$
///
/// A discounter owns its snapshot; re-shocking the source curve requires
/// building a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Discounter {
    curve: RateCurve,
}

impl Discounter {
    /// Builds a discounter over a validated curve.
    #[must_use]
    pub fn build(curve: &RateCurve) -> Self {
        Self {
            curve: curve.clone(),
        }
    }

    /// Validates raw points and builds a discounter over them.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurve` if the points fail validation.
    pub fn from_points(points: &[RateCurvePoint]) -> CurveResult<Self> {
        Ok(Self {
            curve: RateCurve::new(points.to_vec())?,
        })
    }

    /// Returns the curve snapshot.
    pub fn curve(&self) -> &RateCurve {
        &self.curve
    }

    /// Zero rate to time `t`. NaN for a NaN query.
    pub fn zero_rate(&self, t: f64) -> f64 {
        // Flat extrapolation only fails on NaN input.
        self.curve
            .interpolator()
            .interpolate(t)
            .unwrap_or(f64::NAN)
    }

    /// Discount factor to time `t`, continuously compounded.
    pub fn discount_factor(&self, t: f64) -> f64 {
        (-self.zero_rate(t) * t).exp()
    }

    /// Rate applicable between `start` and `end`.
    ///
    /// With `start == 0` this is the term rate to `end`; otherwise the
    /// implied forward rate. Equal endpoints give NaN.
    pub fn forward_rate(&self, start: f64, end: f64) -> f64 {
        if end == start {
            return f64::NAN;
        }
        if start == 0.0 {
            return self.zero_rate(end);
        }
        (self.zero_rate(end) * end - self.zero_rate(start) * start) / (end - start)
    }

    /// Vectorised [`Discounter::forward_rate`]: element `i` is the rate
    /// between `start_times[i]` and `times[i]`.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurve` if the slices differ in length.
    pub fn rate(&self, times: &[f64], start_times: &[f64]) -> CurveResult<Vec<f64>> {
        if times.len() != start_times.len() {
            return Err(CurveError::invalid_curve(format!(
                "times and start_times must have same length: {} vs {}",
                times.len(),
                start_times.len()
            )));
        }

        Ok(times
            .iter()
            .zip(start_times)
            .map(|(&t, &s)| self.forward_rate(s, t))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn discounter(data: &[(f64, f64)]) -> Discounter {
        let points: Vec<RateCurvePoint> = data.iter().copied().map(RateCurvePoint::from).collect();
        Discounter::from_points(&points).unwrap()
    }

    #[test]
    fn test_flat_curve_discount_factor() {
        let d = discounter(&[(0.5, 0.05), (10.0, 0.05)]);
        for t in [0.1, 1.0, 7.5, 30.0] {
            assert_relative_eq!(d.discount_factor(t), (-0.05 * t).exp(), epsilon = 1e-14);
        }
        assert_relative_eq!(d.discount_factor(0.0), 1.0);
    }

    #[test]
    fn test_interpolation_and_flat_extrapolation() {
        let d = discounter(&[(1.0, 0.02), (3.0, 0.04)]);
        assert_relative_eq!(d.zero_rate(2.0), 0.03, epsilon = 1e-15);
        assert_relative_eq!(d.zero_rate(0.25), 0.02, epsilon = 1e-15);
        assert_relative_eq!(d.zero_rate(50.0), 0.04, epsilon = 1e-15);
    }

    #[test]
    fn test_rate_term_and_forward() {
        let d = discounter(&[(1.0, 0.02), (2.0, 0.03)]);
        let rates = d.rate(&[2.0, 2.0], &[0.0, 1.0]).unwrap();

        assert_relative_eq!(rates[0], 0.03, epsilon = 1e-15);
        // (0.03 * 2 - 0.02 * 1) / (2 - 1)
        assert_relative_eq!(rates[1], 0.04, epsilon = 1e-14);
    }

    #[test]
    fn test_rate_equal_times_is_nan() {
        let d = discounter(&[(1.0, 0.02), (2.0, 0.03)]);
        let rates = d.rate(&[1.5, 0.0], &[1.5, 0.0]).unwrap();
        assert!(rates[0].is_nan());
        assert!(rates[1].is_nan());
    }

    #[test]
    fn test_rate_length_mismatch() {
        let d = discounter(&[(1.0, 0.02), (2.0, 0.03)]);
        assert!(matches!(
            d.rate(&[1.0, 2.0], &[0.0]),
            Err(CurveError::InvalidCurve { .. })
        ));
    }

    #[test]
    fn test_zero_tenor_node() {
        let d = discounter(&[(0.0, 0.01), (1.0, 0.03)]);
        assert_relative_eq!(d.zero_rate(0.5), 0.02, epsilon = 1e-15);
        assert_relative_eq!(d.discount_factor(0.5), (-0.01f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_nan_query() {
        let d = discounter(&[(1.0, 0.02), (2.0, 0.03)]);
        assert!(d.zero_rate(f64::NAN).is_nan());
    }
}
