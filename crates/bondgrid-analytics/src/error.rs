//! Error types for valuation and risk.

use bondgrid_bonds::BondError;
use bondgrid_core::Date;
use bondgrid_curves::CurveError;
use thiserror::Error;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors raised by valuation, risk and the bond book.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// No cash flow falls after the pricing date.
    #[error("no future cash flows as of {pricing_date}")]
    EmptySchedule {
        /// Pricing date used for the valuation.
        pricing_date: Date,
    },

    /// Base price is zero, so relative sensitivities are undefined.
    #[error("base price is zero")]
    ZeroPrice,

    /// Invalid input parameter.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Curve construction or query failed.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Bond record or schedule failed.
    #[error(transparent)]
    Bond(#[from] BondError),
}

impl AnalyticsError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalyticsError::EmptySchedule {
            pricing_date: Date::from_ymd(2030, 1, 1).unwrap(),
        };
        assert_eq!(err.to_string(), "no future cash flows as of 2030-01-01");
    }

    #[test]
    fn test_transparent_sources() {
        let err: AnalyticsError = CurveError::invalid_curve("need at least 2 points, got 1").into();
        assert_eq!(err.to_string(), "Invalid curve: need at least 2 points, got 1");

        let err: AnalyticsError = BondError::invalid_record("Coupon", "not a number: 'x'").into();
        assert!(matches!(err, AnalyticsError::Bond(_)));
    }
}
