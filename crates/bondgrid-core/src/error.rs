//! Error types for the core domain types.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building core domain values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Currency code not recognised.
    #[error("Unknown currency code: {code}")]
    UnknownCurrency {
        /// The code that failed to parse.
        code: String,
    },

    /// Payments per year that are not a positive integer.
    #[error("Unsupported payment frequency: {payments_per_year} payments per year")]
    UnsupportedFrequency {
        /// The rejected number of payments per year.
        payments_per_year: i64,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an unknown currency error.
    #[must_use]
    pub fn unknown_currency(code: impl Into<String>) -> Self {
        Self::UnknownCurrency { code: code.into() }
    }
}
