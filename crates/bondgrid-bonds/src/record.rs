//! Validated bond records.

use std::fmt;
use std::str::FromStr;

use bondgrid_core::daycounts::{Act365Fixed, DayCount};
use bondgrid_core::{Currency, Date, Frequency};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{BondError, BondResult};
use crate::raw::{RawBondRecord, RawValue};

/// An editable grid column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BondField {
    /// `Bond`
    Bond,
    /// `Currency`
    Currency,
    /// `Coupon`
    Coupon,
    /// `Accrual Start`
    AccrualStart,
    /// `Maturity`
    Maturity,
    /// `Frequency`
    Frequency,
    /// `Notional`
    Notional,
}

impl BondField {
    /// All editable fields in grid column order.
    pub const ALL: [BondField; 7] = [
        BondField::Bond,
        BondField::Currency,
        BondField::Coupon,
        BondField::AccrualStart,
        BondField::Maturity,
        BondField::Frequency,
        BondField::Notional,
    ];

    /// Returns the grid column id.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            BondField::Bond => "Bond",
            BondField::Currency => "Currency",
            BondField::Coupon => "Coupon",
            BondField::AccrualStart => "Accrual Start",
            BondField::Maturity => "Maturity",
            BondField::Frequency => "Frequency",
            BondField::Notional => "Notional",
        }
    }
}

impl fmt::Display for BondField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BondField {
    type Err = BondError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BondError::invalid_record(s, "not an editable field"))
    }
}

/// Computed analytics for a record. `None` means unknown or invalidated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BondMetrics {
    /// Price per unit of notional.
    pub price: Option<f64>,
    /// Effective duration.
    pub duration: Option<f64>,
    /// Effective convexity.
    pub convexity: Option<f64>,
}

impl BondMetrics {
    /// Creates a fully populated set of metrics.
    #[must_use]
    pub fn new(price: f64, duration: f64, convexity: f64) -> Self {
        Self {
            price: Some(price),
            duration: Some(duration),
            convexity: Some(convexity),
        }
    }

    /// Returns true if every metric is known.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.price.is_some() && self.duration.is_some() && self.convexity.is_some()
    }
}

/// The terms a schedule generator needs to lay out cash flows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlowInputs {
    /// Currency of the flows.
    pub currency: Currency,
    /// Annual coupon as a decimal (0.025 = 2.5%).
    pub coupon: Decimal,
    /// First accrual date.
    pub accrual_start: Date,
    /// Final payment date.
    pub maturity: Date,
    /// Payment frequency.
    pub frequency: Frequency,
}

/// Defaults applied to newly added grid rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordDefaults {
    /// Coupon in percent.
    pub coupon: Decimal,
    /// Notional in currency units.
    pub notional: Decimal,
    /// Currency.
    pub currency: Currency,
    /// Payment frequency.
    pub frequency: Frequency,
    /// Days from accrual start to maturity.
    pub term_days: i64,
}

impl Default for RecordDefaults {
    fn default() -> Self {
        Self {
            coupon: dec!(2.5),
            notional: dec!(100),
            currency: Currency::USD,
            frequency: Frequency::Annual,
            term_days: 365,
        }
    }
}

/// A validated bond row.
///
/// Invariants, enforced by every constructor:
///
/// - `accrual_start < maturity`
/// - coupon and notional are non-negative
/// - frequency is a positive number of payments per year
///
/// Coupon is in percent as typed (2.5 means 2.5%). Metrics are cleared by
/// every edit and refilled by the analytics layer.
///
/// Serializes as its grid row ([`RawBondRecord`]) and is re-validated when
/// deserialized. Metrics travel only as display strings and come back
/// unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBondRecord", into = "RawBondRecord")]
pub struct BondRecord {
    identifier: String,
    currency: Currency,
    coupon: Decimal,
    accrual_start: Date,
    maturity: Date,
    frequency: Frequency,
    notional: Decimal,
    metrics: BondMetrics,
}

impl BondRecord {
    /// Creates a record, checking the invariants.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidBondRecord` naming the offending field.
    pub fn new(
        identifier: impl Into<String>,
        currency: Currency,
        coupon: Decimal,
        accrual_start: Date,
        maturity: Date,
        frequency: Frequency,
        notional: Decimal,
    ) -> BondResult<Self> {
        if coupon.is_sign_negative() && !coupon.is_zero() {
            return Err(BondError::invalid_record(
                BondField::Coupon.as_str(),
                format!("must be non-negative, got {coupon}"),
            ));
        }
        if notional.is_sign_negative() && !notional.is_zero() {
            return Err(BondError::invalid_record(
                BondField::Notional.as_str(),
                format!("must be non-negative, got {notional}"),
            ));
        }
        if accrual_start >= maturity {
            return Err(BondError::invalid_record(
                BondField::Maturity.as_str(),
                format!("maturity {maturity} must be after accrual start {accrual_start}"),
            ));
        }

        Ok(Self {
            identifier: identifier.into(),
            currency,
            coupon,
            accrual_start,
            maturity,
            frequency,
            notional,
            metrics: BondMetrics::default(),
        })
    }

    /// Parses and validates a grid row. Display fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidBondRecord` for the first invalid field.
    pub fn from_raw(raw: &RawBondRecord) -> BondResult<Self> {
        Self::new(
            raw.bond.clone(),
            parse_currency(&raw.currency)?,
            parse_amount(BondField::Coupon, &raw.coupon.to_string())?,
            parse_date(BondField::AccrualStart, &raw.accrual_start)?,
            parse_date(BondField::Maturity, &raw.maturity)?,
            parse_frequency(&raw.frequency.to_string())?,
            parse_amount(BondField::Notional, &raw.notional.to_string())?,
        )
    }

    /// Returns an edited copy with `field` set from the raw text.
    ///
    /// The copy is re-validated as a whole and has its metrics cleared;
    /// `self` is never modified.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidBondRecord` if the edit is not valid.
    pub fn with_field(&self, field: BondField, raw: &str) -> BondResult<Self> {
        let mut edited = self.clone();
        match field {
            BondField::Bond => edited.identifier = raw.to_string(),
            BondField::Currency => edited.currency = parse_currency(raw)?,
            BondField::Coupon => edited.coupon = parse_amount(field, raw)?,
            BondField::AccrualStart => edited.accrual_start = parse_date(field, raw)?,
            BondField::Maturity => edited.maturity = parse_date(field, raw)?,
            BondField::Frequency => edited.frequency = parse_frequency(raw)?,
            BondField::Notional => edited.notional = parse_amount(field, raw)?,
        }

        Self::new(
            edited.identifier,
            edited.currency,
            edited.coupon,
            edited.accrual_start,
            edited.maturity,
            edited.frequency,
            edited.notional,
        )
    }

    /// Returns the identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the coupon in percent.
    pub fn coupon(&self) -> Decimal {
        self.coupon
    }

    /// Returns the accrual start date.
    pub fn accrual_start(&self) -> Date {
        self.accrual_start
    }

    /// Returns the maturity date.
    pub fn maturity(&self) -> Date {
        self.maturity
    }

    /// Returns the payment frequency.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the notional.
    pub fn notional(&self) -> Decimal {
        self.notional
    }

    /// Returns the notional as a float for valuation.
    pub fn notional_f64(&self) -> f64 {
        self.notional.to_f64().unwrap_or(f64::NAN)
    }

    /// Returns the cached metrics.
    pub fn metrics(&self) -> &BondMetrics {
        &self.metrics
    }

    /// Stores freshly computed metrics.
    pub fn set_metrics(&mut self, metrics: BondMetrics) {
        self.metrics = metrics;
    }

    /// Marks the metrics as unknown.
    pub fn clear_metrics(&mut self) {
        self.metrics = BondMetrics::default();
    }

    /// Term of the bond in ACT/365F years, measured from accrual start.
    pub fn maturity_years(&self) -> f64 {
        Act365Fixed.year_fraction(self.accrual_start, self.maturity)
    }

    /// Maps the record to schedule generator inputs (coupon as a decimal).
    pub fn to_cashflow_inputs(&self) -> CashFlowInputs {
        CashFlowInputs {
            currency: self.currency,
            coupon: self.coupon / dec!(100),
            accrual_start: self.accrual_start,
            maturity: self.maturity,
            frequency: self.frequency,
        }
    }

    /// Formatted price: currency symbol and `price * notional` to 6 dp.
    /// Empty when the price is unknown.
    pub fn price_display(&self) -> String {
        self.metrics.price.map_or_else(String::new, |p| {
            format!("{}{:.6}", self.currency.symbol(), p * self.notional_f64())
        })
    }

    /// Duration to 6 dp, empty when unknown.
    pub fn duration_display(&self) -> String {
        self.metrics
            .duration
            .map_or_else(String::new, |d| format!("{d:.6}"))
    }

    /// Convexity to 6 dp, empty when unknown.
    pub fn convexity_display(&self) -> String {
        self.metrics
            .convexity
            .map_or_else(String::new, |c| format!("{c:.6}"))
    }

    /// Converts back to a grid row, with the display fields filled in.
    pub fn to_raw(&self) -> RawBondRecord {
        let non_empty = |s: String| if s.is_empty() { None } else { Some(s) };
        RawBondRecord {
            bond: self.identifier.clone(),
            currency: self.currency.code().to_string(),
            coupon: RawValue::Text(self.coupon.to_string()),
            accrual_start: self.accrual_start.to_string(),
            maturity: self.maturity.to_string(),
            frequency: RawValue::Int(i64::from(self.frequency.periods_per_year())),
            notional: RawValue::Text(self.notional.to_string()),
            price: non_empty(self.price_display()),
            duration: non_empty(self.duration_display()),
            convexity: non_empty(self.convexity_display()),
        }
    }
}

impl TryFrom<&RawBondRecord> for BondRecord {
    type Error = BondError;

    fn try_from(raw: &RawBondRecord) -> BondResult<Self> {
        Self::from_raw(raw)
    }
}

impl TryFrom<RawBondRecord> for BondRecord {
    type Error = BondError;

    fn try_from(raw: RawBondRecord) -> BondResult<Self> {
        Self::from_raw(&raw)
    }
}

impl From<BondRecord> for RawBondRecord {
    fn from(record: BondRecord) -> Self {
        record.to_raw()
    }
}

/// Default row for index `index` (1-based), starting on the pricing date.
///
/// `Bond {index}`, USD, 2.5% annual coupon, 365-day term, notional 100.
///
/// # Errors
///
/// Returns `BondError::InvalidBondRecord` if the maturity falls outside
/// the representable date range.
pub fn default_record(index: usize, pricing_date: Date) -> BondResult<BondRecord> {
    default_record_with(index, pricing_date, &RecordDefaults::default())
}

/// Default row built from configured defaults.
///
/// # Errors
///
/// Returns `BondError::InvalidBondRecord` if the maturity falls outside
/// the representable date range.
pub fn default_record_with(
    index: usize,
    pricing_date: Date,
    defaults: &RecordDefaults,
) -> BondResult<BondRecord> {
    let maturity = pricing_date
        .add_days(defaults.term_days.max(1))
        .map_err(|e| BondError::invalid_record(BondField::Maturity.as_str(), e.to_string()))?;

    Ok(BondRecord {
        identifier: format!("Bond {index}"),
        currency: defaults.currency,
        coupon: defaults.coupon.abs(),
        accrual_start: pricing_date,
        maturity,
        frequency: defaults.frequency,
        notional: defaults.notional.abs(),
        metrics: BondMetrics::default(),
    })
}

fn parse_currency(raw: &str) -> BondResult<Currency> {
    raw.parse::<Currency>()
        .map_err(|e| BondError::invalid_record(BondField::Currency.as_str(), e.to_string()))
}

fn parse_date(field: BondField, raw: &str) -> BondResult<Date> {
    Date::parse(raw).map_err(|_| {
        BondError::invalid_record(field.as_str(), format!("expected YYYY-MM-DD, got '{raw}'"))
    })
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let s = raw.trim();
    Decimal::from_str(s)
        .ok()
        .or_else(|| Decimal::from_scientific(s).ok())
}

fn parse_amount(field: BondField, raw: &str) -> BondResult<Decimal> {
    let value = parse_decimal(raw)
        .ok_or_else(|| BondError::invalid_record(field.as_str(), format!("not a number: '{raw}'")))?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(BondError::invalid_record(
            field.as_str(),
            format!("must be non-negative, got {value}"),
        ));
    }
    Ok(value)
}

fn parse_frequency(raw: &str) -> BondResult<Frequency> {
    let field = BondField::Frequency.as_str();
    let value = parse_decimal(raw)
        .filter(|v| v.fract().is_zero())
        .and_then(|v| v.to_i64())
        .ok_or_else(|| {
            BondError::invalid_record(field, format!("must be a positive integer, got '{raw}'"))
        })?;
    Frequency::from_payments_per_year(value).map_err(|e| BondError::invalid_record(field, e.to_string()))
}
