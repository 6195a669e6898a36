//! Standard market tenors for key-rate reporting.

/// A named point on the standard tenor ladder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardTenor {
    /// Tenor in years.
    pub years: f64,
    /// Display label, e.g. "6 Mo" or "10 Yr".
    pub label: &'static str,
}

impl StandardTenor {
    const fn new(years: f64, label: &'static str) -> Self {
        Self { years, label }
    }

    /// Looks up a standard tenor by its label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        STANDARD_TENORS.iter().copied().find(|t| t.label == label)
    }
}

/// The US Treasury par-curve ladder, shortest first.
pub const STANDARD_TENORS: [StandardTenor; 13] = [
    StandardTenor::new(1.0 / 12.0, "1 Mo"),
    StandardTenor::new(2.0 / 12.0, "2 Mo"),
    StandardTenor::new(3.0 / 12.0, "3 Mo"),
    StandardTenor::new(4.0 / 12.0, "4 Mo"),
    StandardTenor::new(6.0 / 12.0, "6 Mo"),
    StandardTenor::new(1.0, "1 Yr"),
    StandardTenor::new(2.0, "2 Yr"),
    StandardTenor::new(3.0, "3 Yr"),
    StandardTenor::new(5.0, "5 Yr"),
    StandardTenor::new(7.0, "7 Yr"),
    StandardTenor::new(10.0, "10 Yr"),
    StandardTenor::new(20.0, "20 Yr"),
    StandardTenor::new(30.0, "30 Yr"),
];

/// Returns the standard tenor labels in ladder order.
#[must_use]
pub fn standard_tenor_labels() -> Vec<&'static str> {
    STANDARD_TENORS.iter().map(|t| t.label).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_is_sorted() {
        assert!(STANDARD_TENORS.windows(2).all(|w| w[0].years < w[1].years));
    }

    #[test]
    fn test_labels() {
        let labels = standard_tenor_labels();
        assert_eq!(labels.len(), 13);
        assert_eq!(labels[0], "1 Mo");
        assert_eq!(labels[5], "1 Yr");
        assert_eq!(labels[12], "30 Yr");
    }

    #[test]
    fn test_from_label() {
        let t = StandardTenor::from_label("4 Mo").unwrap();
        assert!((t.years - 1.0 / 3.0).abs() < 1e-15);
        assert!(StandardTenor::from_label("15 Yr").is_none());
    }
}
