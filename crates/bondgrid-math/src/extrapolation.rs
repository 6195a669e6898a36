//! Behavior outside the node range of an interpolator.

/// Configuration for extrapolation beyond curve boundaries.
///
/// Flat holds the boundary value: below the first node the first value
/// applies, above the last node the last value applies. This implies a flat
/// zero curve beyond the last liquid point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtrapolationMethod {
    /// No extrapolation, queries outside the range fail
    None,
    /// Constant value from the nearest boundary node
    #[default]
    Flat,
}

impl ExtrapolationMethod {
    /// Returns the name of the extrapolation method.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ExtrapolationMethod::None => "None",
            ExtrapolationMethod::Flat => "Flat",
        }
    }
}
