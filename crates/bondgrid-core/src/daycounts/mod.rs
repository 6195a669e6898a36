//! Day count conventions.
//!
//! Cash flows are placed on the time axis in years from the pricing date.
//! The engine uses a single convention, [`Act365Fixed`], for every bond and
//! curve; the trait is the seam for adding others.

mod act365;

pub use act365::Act365Fixed;

use crate::types::Date;

/// Trait for day count conventions.
pub trait DayCount: Send + Sync {
    /// Returns the market name of the convention (e.g. "ACT/365F").
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative when `end` is before `start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the day count between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64;
}
