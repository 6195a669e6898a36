//! # Bondgrid Curves
//!
//! Zero-rate term structures and the discounter built over them.
//!
//! - [`RateCurve`]: validated, immutable sequence of [`RateCurvePoint`]s
//! - [`Discounter`]: continuously compounded discount factors, term and
//!   forward rates, with linear interpolation and flat extrapolation
//! - [`bumping`]: parallel and single-node shocked copies of a curve
//! - [`STANDARD_TENORS`]: the market tenors key-rate risk is reported on
//! - [`rate_table`]: term/forward rate grid for display
//!
//! ## Example
//!
//! ```rust
//! use bondgrid_curves::prelude::*;
//!
//! let curve = RateCurve::new(vec![
//!     RateCurvePoint::new(1.0, 0.04),
//!     RateCurvePoint::new(10.0, 0.05),
//! ])
//! .unwrap();
//!
//! let discounter = Discounter::build(&curve);
//! let df = discounter.discount_factor(1.0);
//! assert!((df - (-0.04f64).exp()).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

pub mod bumping;
mod curve;
mod discounter;
pub mod error;
mod market;
mod point;
mod rate_table;
mod tenors;

pub use curve::RateCurve;
pub use discounter::Discounter;
pub use error::{CurveError, CurveResult};
pub use market::MarketRate;
pub use point::RateCurvePoint;
pub use rate_table::{rate_table, RateTableRow, DEFAULT_RATE_TABLE_POINTS};
pub use tenors::{standard_tenor_labels, StandardTenor, STANDARD_TENORS};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bumping::{KeyRateBump, ParallelBump, NODE_TOLERANCE};
    pub use crate::{
        rate_table, standard_tenor_labels, CurveError, CurveResult, Discounter, MarketRate,
        RateCurve, RateCurvePoint, RateTableRow, StandardTenor, STANDARD_TENORS,
    };
}
