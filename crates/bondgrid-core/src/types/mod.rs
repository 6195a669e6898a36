//! Domain types for bond valuation.
//!
//! - [`Date`]: Calendar date for financial calculations
//! - [`Currency`]: ISO currency codes offered in the bond grid
//! - [`Frequency`]: Coupon payment frequency
//! - [`CashFlow`] / [`CashFlowSchedule`]: Dated cash flow amounts

mod cashflow;
mod currency;
mod date;
mod frequency;

pub use cashflow::{CashFlow, CashFlowSchedule, CashFlowType};
pub use currency::Currency;
pub use date::Date;
pub use frequency::Frequency;
