//! String-typed grid rows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A grid cell value as the UI hands it over: JSON numbers or free text.
///
/// CSV and JSON sources disagree on whether `"2.5"` or `2.5` is sent, so
/// numeric fields accept either and are parsed later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Integer cell
    Int(i64),
    /// Floating-point cell
    Float(f64),
    /// Text cell
    Text(String),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Int(v) => write!(f, "{v}"),
            RawValue::Float(v) => write!(f, "{v}"),
            RawValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        RawValue::Int(v)
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Float(v)
    }
}

/// One row of the bond grid, before validation.
///
/// Field names match the grid's column ids. `Price`, `Duration` and
/// `Convexity` are display outputs; they are carried through but never
/// parsed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBondRecord {
    /// Bond identifier
    #[serde(rename = "Bond")]
    pub bond: String,
    /// ISO currency code
    #[serde(rename = "Currency")]
    pub currency: String,
    /// Coupon in percent
    #[serde(rename = "Coupon")]
    pub coupon: RawValue,
    /// Accrual start, `YYYY-MM-DD`
    #[serde(rename = "Accrual Start")]
    pub accrual_start: String,
    /// Maturity, `YYYY-MM-DD`
    #[serde(rename = "Maturity")]
    pub maturity: String,
    /// Payments per year
    #[serde(rename = "Frequency")]
    pub frequency: RawValue,
    /// Notional in currency units
    #[serde(rename = "Notional")]
    pub notional: RawValue,
    /// Formatted price, e.g. `$101.798925`
    #[serde(rename = "Price", default)]
    pub price: Option<String>,
    /// Formatted duration
    #[serde(rename = "Duration", default)]
    pub duration: Option<String>,
    /// Formatted convexity
    #[serde(rename = "Convexity", default)]
    pub convexity: Option<String>,
}
