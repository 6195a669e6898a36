//! Single-node (key-rate) curve bumping.

use crate::bumping::NODE_TOLERANCE;
use crate::curve::RateCurve;
use crate::error::{CurveError, CurveResult};
use crate::point::RateCurvePoint;

/// A shift applied to the single curve node at `tenor`.
///
/// Only a node whose tenor equals the key tenor (within [`NODE_TOLERANCE`])
/// moves. There is no triangular spreading onto neighbours, so a key tenor
/// with no node on the curve leaves the curve unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyRateBump {
    key_tenor: f64,
    shift: f64,
}

impl KeyRateBump {
    /// Creates a key-rate bump of `shift` (decimal) at `key_tenor` years.
    #[must_use]
    pub fn new(key_tenor: f64, shift: f64) -> Self {
        Self { key_tenor, shift }
    }

    /// Returns the key tenor.
    #[must_use]
    pub fn key_tenor(&self) -> f64 {
        self.key_tenor
    }

    /// Returns the shift as a decimal.
    #[must_use]
    pub fn shift(&self) -> f64 {
        self.shift
    }

    /// Returns true if `curve` has a node at the key tenor.
    #[must_use]
    pub fn hits(&self, curve: &RateCurve) -> bool {
        curve.node_index(self.key_tenor, NODE_TOLERANCE).is_some()
    }

    /// Returns a copy of `curve` with the key node shifted.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::InvalidCurve` if the shift is not finite.
    pub fn apply(&self, curve: &RateCurve) -> CurveResult<RateCurve> {
        if !self.shift.is_finite() {
            return Err(CurveError::invalid_curve(format!(
                "non-finite key-rate shift {}",
                self.shift
            )));
        }

        let Some(index) = curve.node_index(self.key_tenor, NODE_TOLERANCE) else {
            log::debug!("no curve node at tenor {}, curve unchanged", self.key_tenor);
            return Ok(curve.clone());
        };

        let mut points: Vec<RateCurvePoint> = curve.points().to_vec();
        points[index].rate += self.shift;
        RateCurve::new(points)
    }
}
