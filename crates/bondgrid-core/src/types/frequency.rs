//! Coupon payment frequency.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// Days in the nominal year that day-based periods divide.
const DAYS_PER_YEAR: i64 = 365;

/// Payment frequency for coupon bonds, as payments per year.
///
/// Counts that divide 12 have named variants and roll in whole months.
/// Any other positive count is [`Frequency::PerYear`] and rolls in periods
/// of `365 / n` days. [`Frequency::from_payments_per_year`] always picks the
/// named variant when one exists.
///
/// Serializes as the plain payments-per-year integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum Frequency {
    /// Annual payments (1 per year)
    #[default]
    Annual,
    /// Semi-annual payments (2 per year)
    SemiAnnual,
    /// Every four months (3 per year)
    TriAnnual,
    /// Quarterly payments (4 per year)
    Quarterly,
    /// Every two months (6 per year)
    BiMonthly,
    /// Monthly payments (12 per year)
    Monthly,
    /// Any other positive number of payments per year, on day-based periods
    PerYear(u32),
}

impl Frequency {
    /// Maps the grid's integer "payments per year" onto a frequency code.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnsupportedFrequency` for values that are not a
    /// positive integer.
    pub fn from_payments_per_year(payments: i64) -> CoreResult<Self> {
        match payments {
            1 => Ok(Frequency::Annual),
            2 => Ok(Frequency::SemiAnnual),
            3 => Ok(Frequency::TriAnnual),
            4 => Ok(Frequency::Quarterly),
            6 => Ok(Frequency::BiMonthly),
            12 => Ok(Frequency::Monthly),
            other => u32::try_from(other)
                .ok()
                .filter(|n| *n > 0)
                .map(Frequency::PerYear)
                .ok_or(CoreError::UnsupportedFrequency {
                    payments_per_year: other,
                }),
        }
    }

    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::TriAnnual => 3,
            Frequency::Quarterly => 4,
            Frequency::BiMonthly => 6,
            Frequency::Monthly => 12,
            Frequency::PerYear(n) => *n,
        }
    }

    /// Returns the number of months per period, or `None` when the period
    /// is not a whole number of months.
    #[must_use]
    pub fn months_per_period(&self) -> Option<u32> {
        let n = self.periods_per_year();
        (n > 0 && 12 % n == 0).then(|| 12 / n)
    }

    /// Returns the date `periods` regular periods before `end`.
    ///
    /// Month-based periods are always measured from `end` so month-end
    /// clamping does not drift. Day-based periods are rounded to whole days.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn roll_back(&self, end: Date, periods: u32) -> CoreResult<Date> {
        if let Some(months) = self.months_per_period() {
            let months = i32::try_from(u64::from(periods) * u64::from(months))
                .map_err(|_| CoreError::invalid_date(format!("{periods} periods before {end}")))?;
            return end.add_months(-months);
        }

        let n = i64::from(self.periods_per_year().max(1));
        let days = (i64::from(periods) * DAYS_PER_YEAR + n / 2) / n;
        end.add_days(-days)
    }
}

impl TryFrom<u32> for Frequency {
    type Error = CoreError;

    fn try_from(payments: u32) -> CoreResult<Self> {
        Self::from_payments_per_year(i64::from(payments))
    }
}

impl From<Frequency> for u32 {
    fn from(frequency: Frequency) -> Self {
        frequency.periods_per_year()
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::TriAnnual => "Tri-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::BiMonthly => "Bi-Monthly",
            Frequency::Monthly => "Monthly",
            Frequency::PerYear(n) => return write!(f, "{n} per year"),
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    #[test]
    fn test_frequency_periods() {
        assert_eq!(Frequency::Annual.periods_per_year(), 1);
        assert_eq!(Frequency::SemiAnnual.months_per_period(), Some(6));
        assert_eq!(Frequency::TriAnnual.months_per_period(), Some(4));
        assert_eq!(Frequency::Quarterly.months_per_period(), Some(3));
        assert_eq!(Frequency::BiMonthly.months_per_period(), Some(2));
        assert_eq!(Frequency::Monthly.months_per_period(), Some(1));
        assert_eq!(Frequency::PerYear(5).months_per_period(), None);
    }

    #[test]
    fn test_from_payments_per_year() {
        for f in [1, 2, 3, 4, 5, 6, 7, 12, 24, 52] {
            let freq = Frequency::from_payments_per_year(f).unwrap();
            assert_eq!(i64::from(freq.periods_per_year()), f);
        }
        assert_eq!(Frequency::from_payments_per_year(4).unwrap(), Frequency::Quarterly);
        assert_eq!(Frequency::from_payments_per_year(5).unwrap(), Frequency::PerYear(5));
    }

    #[test]
    fn test_rejects_non_positive() {
        for f in [0, -1, -12, i64::from(u32::MAX) + 1] {
            assert!(matches!(
                Frequency::from_payments_per_year(f),
                Err(CoreError::UnsupportedFrequency { .. })
            ));
        }
    }

    #[test]
    fn test_roll_back_months_and_days() {
        let end = d("2025-03-31");
        assert_eq!(Frequency::Quarterly.roll_back(end, 1).unwrap(), d("2024-12-31"));
        assert_eq!(Frequency::Monthly.roll_back(end, 1).unwrap(), d("2025-02-28"));
        // 365 / 5 = 73 days per period.
        assert_eq!(Frequency::PerYear(5).roll_back(end, 1).unwrap(), d("2025-01-17"));
        assert_eq!(Frequency::PerYear(5).roll_back(end, 5).unwrap(), d("2024-03-31"));
    }

    #[test]
    fn test_serde_as_integer() {
        assert_eq!(serde_json::to_string(&Frequency::SemiAnnual).unwrap(), "2");
        assert_eq!(serde_json::from_str::<Frequency>("7").unwrap(), Frequency::PerYear(7));
        assert_eq!(serde_json::from_str::<Frequency>("12").unwrap(), Frequency::Monthly);
        assert!(serde_json::from_str::<Frequency>("0").is_err());
    }
}
