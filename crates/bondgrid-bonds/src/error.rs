//! Error types for bond record operations.

use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur while building or using bond records.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// A grid field failed validation.
    #[error("Invalid bond record: {field}: {reason}")]
    InvalidBondRecord {
        /// Grid field name, e.g. "Coupon".
        field: String,
        /// Description of what's invalid.
        reason: String,
    },

    /// Cash flow generation failed.
    #[error("Schedule generation failed: {reason}")]
    ScheduleFailed {
        /// Description of the failure.
        reason: String,
    },
}

impl BondError {
    /// Creates an invalid record error for `field`.
    #[must_use]
    pub fn invalid_record(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBondRecord {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a schedule generation error.
    #[must_use]
    pub fn schedule_failed(reason: impl Into<String>) -> Self {
        Self::ScheduleFailed {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BondError::invalid_record("Coupon", "not a number: abc");
        assert_eq!(
            err.to_string(),
            "Invalid bond record: Coupon: not a number: abc"
        );
    }
}
