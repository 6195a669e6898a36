//! Error types for curve operations.

use bondgrid_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// The rate points do not describe a usable term structure, or a query
    /// against one was malformed.
    #[error("Invalid curve: {reason}")]
    InvalidCurve {
        /// Description of the problem.
        reason: String,
    },
}

impl CurveError {
    /// Creates an invalid curve error.
    #[must_use]
    pub fn invalid_curve(reason: impl Into<String>) -> Self {
        Self::InvalidCurve {
            reason: reason.into(),
        }
    }
}

impl From<MathError> for CurveError {
    fn from(err: MathError) -> Self {
        Self::invalid_curve(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurveError::invalid_curve("need at least 2 points, got 1");
        assert_eq!(err.to_string(), "Invalid curve: need at least 2 points, got 1");
    }

    #[test]
    fn test_from_math_error() {
        let err: CurveError = MathError::insufficient_data(2, 1).into();
        assert!(matches!(err, CurveError::InvalidCurve { .. }));
        assert!(err.to_string().contains("at least 2"));
    }
}
