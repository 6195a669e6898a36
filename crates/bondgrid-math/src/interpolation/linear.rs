//! Linear interpolation.

use crate::error::{MathError, MathResult};
use crate::extrapolation::ExtrapolationMethod;
use crate::interpolation::Interpolator;

/// Linear interpolation between data points.
///
/// # Example
///
/// ```rust
/// use bondgrid_math::interpolation::{LinearInterpolator, Interpolator};
///
/// let xs = vec![1.0, 2.0, 3.0];
/// let ys = vec![0.01, 0.02, 0.04];
///
/// let interp = LinearInterpolator::new(xs, ys).unwrap().with_flat_extrapolation();
/// assert!((interp.interpolate(2.5).unwrap() - 0.03).abs() < 1e-12);
/// // Held flat outside the nodes
/// assert!((interp.interpolate(0.0).unwrap() - 0.01).abs() < 1e-12);
/// assert!((interp.interpolate(30.0).unwrap() - 0.04).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    extrapolation: ExtrapolationMethod,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator that rejects out-of-range queries.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (strictly increasing)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, if lengths differ,
    /// if any coordinate is not finite, or if `xs` is not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.len() < 2 {
            return Err(MathError::insufficient_data(2, xs.len()));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err(MathError::invalid_input("values must be finite"));
        }
        if xs.windows(2).any(|w| w[1] <= w[0]) {
            return Err(MathError::invalid_input(
                "x values must be strictly increasing",
            ));
        }

        Ok(Self {
            xs,
            ys,
            extrapolation: ExtrapolationMethod::None,
        })
    }

    /// Holds the boundary values flat outside the node range.
    #[must_use]
    pub fn with_flat_extrapolation(mut self) -> Self {
        self.extrapolation = ExtrapolationMethod::Flat;
        self
    }

    /// Returns the configured extrapolation method.
    pub fn extrapolation(&self) -> ExtrapolationMethod {
        self.extrapolation
    }

    /// Returns the node x coordinates.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Returns the node y coordinates.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Finds the index i such that xs[i] <= x < xs[i+1].
    fn find_segment(&self, x: f64) -> usize {
        let last = self.xs.len() - 2;
        // xs is finite and sorted, so partition_point is well defined.
        self.xs.partition_point(|&node| node <= x).saturating_sub(1).min(last)
    }

    fn check_range(&self, x: f64) -> MathResult<()> {
        if x.is_nan() {
            return Err(MathError::invalid_input("query point is NaN"));
        }
        if self.extrapolation == ExtrapolationMethod::None && !self.in_range(x) {
            return Err(MathError::ExtrapolationNotAllowed {
                x,
                min: self.min_x(),
                max: self.max_x(),
            });
        }
        Ok(())
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;

        let n = self.xs.len();
        if x <= self.xs[0] {
            return Ok(self.ys[0]);
        }
        if x >= self.xs[n - 1] {
            return Ok(self.ys[n - 1]);
        }

        let i = self.find_segment(x);

        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let y0 = self.ys[i];
        let y1 = self.ys[i + 1];

        let t = (x - x0) / (x1 - x0);
        Ok(y0 + t * (y1 - y0))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;

        // Flat beyond the boundaries.
        if x < self.min_x() || x > self.max_x() {
            return Ok(0.0);
        }

        let i = self.find_segment(x);
        Ok((self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i]))
    }

    fn allows_extrapolation(&self) -> bool {
        self.extrapolation != ExtrapolationMethod::None
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}
