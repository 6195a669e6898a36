//! # Bondgrid Core
//!
//! Core domain types shared by every Bondgrid crate.
//!
//! - **Types**: `Date`, `Currency`, `Frequency`, `CashFlow`, `CashFlowSchedule`
//! - **Day Counts**: ACT/365 Fixed year fractions used to place cash flows in time
//! - **Errors**: [`CoreError`] for malformed primitive inputs
//!
//! ## Example
//!
//! ```rust
//! use bondgrid_core::prelude::*;
//!
//! let start = Date::parse("2024-01-02").unwrap();
//! let end = start.add_days(365).unwrap();
//! let t = Act365Fixed.year_fraction(start, end);
//! assert!((t - 1.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{Act365Fixed, DayCount};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CashFlow, CashFlowSchedule, CashFlowType, Currency, Date, Frequency};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{CashFlow, CashFlowSchedule, CashFlowType, Currency, Date, Frequency};
