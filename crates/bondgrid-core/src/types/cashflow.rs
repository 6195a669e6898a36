//! Cash flow types produced by schedule generation.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;
use crate::daycounts::{Act365Fixed, DayCount};

/// Type of cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashFlowType {
    /// Regular coupon payment
    Coupon,
    /// Principal repayment at maturity
    Principal,
    /// Combined coupon and principal (final payment)
    CouponAndPrincipal,
}

impl fmt::Display for CashFlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CashFlowType::Coupon => "Coupon",
            CashFlowType::Principal => "Principal",
            CashFlowType::CouponAndPrincipal => "Coupon+Principal",
        };
        write!(f, "{name}")
    }
}

/// A dated cash flow, expressed per unit of notional.
///
/// # Example
///
/// ```rust
/// use bondgrid_core::types::{CashFlow, Date};
/// use rust_decimal_macros::dec;
///
/// let cf = CashFlow::coupon(Date::from_ymd(2025, 6, 15).unwrap(), dec!(0.0125));
/// assert_eq!(cf.amount(), dec!(0.0125));
/// assert!(cf.is_coupon());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Payment date
    date: Date,
    /// Amount per unit of notional
    amount: Decimal,
    /// Type of cash flow
    cf_type: CashFlowType,
    /// Accrual period start date (for coupons)
    accrual_start: Option<Date>,
    /// Accrual period end date (for coupons)
    accrual_end: Option<Date>,
}

impl CashFlow {
    /// Creates a new cash flow with basic fields.
    #[must_use]
    pub fn new(date: Date, amount: Decimal, cf_type: CashFlowType) -> Self {
        Self {
            date,
            amount,
            cf_type,
            accrual_start: None,
            accrual_end: None,
        }
    }

    /// Creates a coupon cash flow without accrual period.
    #[must_use]
    pub fn coupon(date: Date, amount: Decimal) -> Self {
        Self::new(date, amount, CashFlowType::Coupon)
    }

    /// Creates a principal cash flow.
    #[must_use]
    pub fn principal(date: Date, amount: Decimal) -> Self {
        Self::new(date, amount, CashFlowType::Principal)
    }

    /// Creates a final cash flow (coupon + principal).
    #[must_use]
    pub fn final_payment(date: Date, coupon: Decimal, principal: Decimal) -> Self {
        Self::new(date, coupon + principal, CashFlowType::CouponAndPrincipal)
    }

    /// Sets the accrual period for this cash flow.
    #[must_use]
    pub fn with_accrual(mut self, start: Date, end: Date) -> Self {
        self.accrual_start = Some(start);
        self.accrual_end = Some(end);
        self
    }

    /// Returns the payment date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the cash flow amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the cash flow type.
    #[must_use]
    pub fn cf_type(&self) -> CashFlowType {
        self.cf_type
    }

    /// Returns the accrual period start date, if any.
    #[must_use]
    pub fn accrual_start(&self) -> Option<Date> {
        self.accrual_start
    }

    /// Returns the accrual period end date, if any.
    #[must_use]
    pub fn accrual_end(&self) -> Option<Date> {
        self.accrual_end
    }

    /// Returns true if this is a coupon payment.
    #[must_use]
    pub fn is_coupon(&self) -> bool {
        matches!(
            self.cf_type,
            CashFlowType::Coupon | CashFlowType::CouponAndPrincipal
        )
    }

    /// Returns true if this includes principal repayment.
    #[must_use]
    pub fn is_principal(&self) -> bool {
        matches!(
            self.cf_type,
            CashFlowType::Principal | CashFlowType::CouponAndPrincipal
        )
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.date, self.amount, self.cf_type)
    }
}

/// An ordered schedule of cash flows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowSchedule {
    cash_flows: Vec<CashFlow>,
}

impl CashFlowSchedule {
    /// Creates a new empty cash flow schedule.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cash_flows: Vec::new(),
        }
    }

    /// Creates a schedule with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cash_flows: Vec::with_capacity(capacity),
        }
    }

    /// Adds a cash flow to the schedule.
    pub fn push(&mut self, cf: CashFlow) {
        self.cash_flows.push(cf);
    }

    /// Returns the cash flows as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[CashFlow] {
        &self.cash_flows
    }

    /// Returns the number of cash flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cash_flows.len()
    }

    /// Returns true if there are no cash flows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cash_flows.is_empty()
    }

    /// Returns an iterator over the cash flows.
    pub fn iter(&self) -> impl Iterator<Item = &CashFlow> {
        self.cash_flows.iter()
    }

    /// Returns the total of all cash flows.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.cash_flows.iter().map(|cf| cf.amount).sum()
    }

    /// Sorts cash flows by date.
    pub fn sort_by_date(&mut self) {
        self.cash_flows.sort_by_key(|cf| cf.date);
    }

    /// Views the schedule as `(time, amount)` pairs, time in ACT/365F years
    /// from `pricing_date`.
    ///
    /// Past flows come out with non-positive times; filtering them is the
    /// caller's decision.
    pub fn times_from(&self, pricing_date: Date) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.cash_flows.iter().map(move |cf| {
            (
                Act365Fixed.year_fraction(pricing_date, cf.date),
                cf.amount.to_f64().unwrap_or(f64::NAN),
            )
        })
    }
}

impl IntoIterator for CashFlowSchedule {
    type Item = CashFlow;
    type IntoIter = std::vec::IntoIter<CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.cash_flows.into_iter()
    }
}

impl<'a> IntoIterator for &'a CashFlowSchedule {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.cash_flows.iter()
    }
}

impl FromIterator<CashFlow> for CashFlowSchedule {
    fn from_iter<I: IntoIterator<Item = CashFlow>>(iter: I) -> Self {
        Self {
            cash_flows: iter.into_iter().collect(),
        }
    }
}
