use serde::{Deserialize, Serialize};

use crate::point::RateCurvePoint;

/// A market zero-rate quote as entered in the rate editor.
///
/// Serialized with the editor's column names (`Year`, `Rate`); the rate is
/// in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketRate {
    /// Tenor in years.
    #[serde(rename = "Year")]
    pub year: f64,
    /// Zero rate in percent (4.8 = 4.8%).
    #[serde(rename = "Rate")]
    pub rate_percent: f64,
}

impl MarketRate {
    /// Creates a new market quote.
    #[must_use]
    pub fn new(year: f64, rate_percent: f64) -> Self {
        Self { year, rate_percent }
    }

    /// Converts the quote to a decimal-rate curve point.
    #[must_use]
    pub fn to_point(&self) -> RateCurvePoint {
        RateCurvePoint::new(self.year, self.rate_percent / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RateCurve;
    use approx::assert_relative_eq;

    #[test]
    fn test_percent_to_decimal() {
        let p = MarketRate::new(2.0, 4.33).to_point();
        assert_relative_eq!(p.tenor, 2.0);
        assert_relative_eq!(p.rate, 0.0433, epsilon = 1e-15);
    }

    #[test]
    fn test_editor_field_names() {
        let quotes: Vec<MarketRate> =
            serde_json::from_str(r#"[{"Year": 1, "Rate": 4.8}, {"Year": 2, "Rate": 4.33}]"#).unwrap();
        let curve = RateCurve::from_market_rates(&quotes).unwrap();
        assert_eq!(curve.len(), 2);
        assert_relative_eq!(curve.points()[0].rate, 0.048, epsilon = 1e-15);
    }
}
