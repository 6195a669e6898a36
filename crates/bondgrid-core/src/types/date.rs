//! Date type for financial calculations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// A calendar date for bond terms and pricing dates.
///
/// Newtype over `chrono::NaiveDate`. Serializes as `YYYY-MM-DD`, the same
/// fixed string format the bond grid uses for its date cells.
///
/// # Example
///
/// ```rust
/// use bondgrid_core::types::Date;
///
/// let date = Date::from_ymd(2024, 1, 31).unwrap();
/// let next = date.add_months(1).unwrap();
/// assert_eq!(next.to_string(), "2024-02-29");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses a date from the fixed `YYYY-MM-DD` format.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns today's date.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Adds a number of days to the date. Negative values move backward.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_days(&self, days: i64) -> CoreResult<Self> {
        chrono::Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{self} + {days} days is out of range")))
    }

    /// Adds a number of months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Jan 31 + 1 month),
    /// it rolls back to the last valid day of the month.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> CoreResult<Self> {
        let total_months =
            i64::from(self.year()) * 12 + i64::from(self.month()) - 1 + i64::from(months);
        let new_year = i32::try_from(total_months.div_euclid(12))
            .map_err(|_| CoreError::invalid_date(format!("{self} + {months} months is out of range")))?;
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        let max_day = days_in_month(new_year, new_month);
        let new_day = self.day().min(max_day);

        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Calculates the number of calendar days from `self` to `other`.
    ///
    /// Negative when `other` is earlier.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the end of month for the current date.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        Date(self.0.with_day(self.days_in_month()).unwrap_or(self.0))
    }

    /// Checks if the date is the end of month.
    #[must_use]
    pub fn is_end_of_month(&self) -> bool {
        self.day() == self.days_in_month()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2024-01-02").unwrap();
        assert_eq!(date, Date::from_ymd(2024, 1, 2).unwrap());
        assert_eq!(Date::parse(" 2024-01-02 ").unwrap(), date);
        assert_eq!("2024-01-02".parse::<Date>().unwrap(), date);
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert!(Date::parse("02/01/2024").is_err());
        assert!(Date::parse("2024-1-2x").is_err());
        assert!(Date::parse("").is_err());
        assert!(Date::parse("2023-02-29").is_err());
    }

    #[test]
    fn test_add_months_rolls_back() {
        let date = Date::from_ymd(2025, 1, 31).unwrap();
        let result = date.add_months(1).unwrap();
        assert_eq!(result, Date::from_ymd(2025, 2, 28).unwrap());
    }

    #[test]
    fn test_add_negative_months_across_year() {
        let date = Date::from_ymd(2025, 2, 15).unwrap();
        assert_eq!(
            date.add_months(-3).unwrap(),
            Date::from_ymd(2024, 11, 15).unwrap()
        );
        assert_eq!(
            date.add_months(-14).unwrap(),
            Date::from_ymd(2023, 12, 15).unwrap()
        );
    }

    #[test]
    fn test_days_between() {
        let d1 = Date::from_ymd(2024, 1, 2).unwrap();
        let d2 = Date::from_ymd(2025, 1, 2).unwrap();
        assert_eq!(d1.days_between(&d2), 366);
        assert_eq!(d2.days_between(&d1), -366);
        assert_eq!(d2 - d1, 366);
    }

    #[test]
    fn test_add_months_out_of_range() {
        let date = Date::from_ymd(2024, 1, 2).unwrap();
        assert!(date.add_months(i32::MAX).is_err());
        assert!(date.add_months(i32::MIN).is_err());
    }

    #[test]
    fn test_add_days() {
        let date = Date::from_ymd(2024, 1, 2).unwrap();
        assert_eq!(date.add_days(365).unwrap(), Date::from_ymd(2024, 12, 31).unwrap());
        assert_eq!(date.add_days(-2).unwrap(), Date::from_ymd(2023, 12, 31).unwrap());
    }

    #[test]
    fn test_add_days_out_of_range() {
        let date = Date::from_ymd(2024, 1, 2).unwrap();
        assert!(matches!(
            date.add_days(200_000_000),
            Err(CoreError::InvalidDate { .. })
        ));
        assert!(date.add_days(i64::MAX).is_err());
        assert!(date.add_days(i64::MIN).is_err());
    }

    #[test]
    fn test_end_of_month() {
        let date = Date::from_ymd(2024, 2, 10).unwrap();
        assert_eq!(date.end_of_month(), Date::from_ymd(2024, 2, 29).unwrap());
        assert!(date.end_of_month().is_end_of_month());
        assert!(!date.is_end_of_month());
    }

    #[test]
    fn test_display_round_trips_grid_format() {
        let date = Date::from_ymd(2024, 3, 5).unwrap();
        assert_eq!(date.to_string(), "2024-03-05");
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-03-05\"");
    }
}
