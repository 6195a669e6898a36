//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Input file extension not recognised.
    #[error("Unsupported input file {}: expected .json or .csv", .0.display())]
    UnsupportedFile(PathBuf),

    /// Row number outside the bond file.
    #[error("Row {row} out of range: the file has {len} bonds")]
    RowOutOfRange {
        /// Requested 1-based row.
        row: usize,
        /// Number of bonds.
        len: usize,
    },

    /// The bond file has no rows.
    #[error("No bonds in {}", .0.display())]
    NoBonds(PathBuf),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
