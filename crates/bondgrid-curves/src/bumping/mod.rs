//! Shocked copies of a rate curve.
//!
//! - [`ParallelBump`]: every node moves by the same amount (duration and
//!   convexity)
//! - [`KeyRateBump`]: a single node moves, the rest stay put (key-rate
//!   duration)
//!
//! Shifts are in decimal rate units (0.01 = 100bp). Bumps return new
//! curves; the source curve is never touched.

mod key_rate;
mod parallel;

pub use key_rate::KeyRateBump;
pub use parallel::ParallelBump;

/// Tolerance for matching a key-rate tenor against a curve node.
pub const NODE_TOLERANCE: f64 = 1e-9;
