//! # Bondgrid Analytics
//!
//! Valuation and rate risk for fixed-rate bonds.
//!
//! - [`valuation::price`]: discounted cash-flow price per unit of notional
//! - [`risk::duration_convexity`]: effective duration and convexity from a
//!   parallel shock
//! - [`risk::krd`]: key-rate sensitivities on the standard tenor ladder
//! - [`report::krd_report`]: KRD report over a batch of bonds
//! - [`book::BondBook`]: the grid state tying rows, curve and pricing date
//!   together
//!
//! ## Example
//!
//! ```rust
//! use bondgrid_analytics::prelude::*;
//! use bondgrid_bonds::prelude::*;
//! use bondgrid_core::Date;
//! use bondgrid_curves::prelude::*;
//!
//! let curve = RateCurve::new(vec![
//!     RateCurvePoint::new(0.5, 0.05),
//!     RateCurvePoint::new(2.0, 0.045),
//! ])
//! .unwrap();
//! let pricing = Date::parse("2024-01-02").unwrap();
//!
//! let mut book = BondBook::new(curve, pricing);
//! book.add_default().unwrap();
//! assert!(book.refresh(&FixedBondScheduleGenerator).is_empty());
//! assert!(book.rows()[0].price_display().starts_with('$'));
//! ```
//!
//! ## Features
//!
//! - `parallel`: run the per-tenor KRD repricings on rayon

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

pub mod book;
pub mod error;
pub mod report;
pub mod risk;
pub mod valuation;

pub use book::{BondBook, RowAction, RowOutcome};
pub use error::{AnalyticsError, AnalyticsResult};
pub use report::{krd_report, KrdReport, KrdReportRow, RowFailure};
pub use risk::{
    duration_convexity, krd, parallel_risk, KeyRateProfile, KeyRateValue, ParallelRisk,
    DEFAULT_SHOCK_SIZE,
};
pub use valuation::price;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        duration_convexity, krd, krd_report, parallel_risk, price, AnalyticsError,
        AnalyticsResult, BondBook, KeyRateProfile, KrdReport, KrdReportRow, ParallelRisk,
        RowAction, RowOutcome, DEFAULT_SHOCK_SIZE,
    };
}
