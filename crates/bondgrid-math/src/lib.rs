//! # Bondgrid Math
//!
//! Numerical helpers for curve construction.
//!
//! - **Interpolation**: [`interpolation::LinearInterpolator`] over strictly
//!   increasing nodes
//! - **Extrapolation**: [`extrapolation::ExtrapolationMethod`] selects what
//!   happens outside the node range (error or flat hold)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]

pub mod error;
pub mod extrapolation;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::extrapolation::ExtrapolationMethod;
    pub use crate::interpolation::{Interpolator, LinearInterpolator};
}

pub use error::{MathError, MathResult};
