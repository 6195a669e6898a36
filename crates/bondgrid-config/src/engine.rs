//! Engine settings loaded from TOML.

use std::path::Path;
use std::str::FromStr;

use bondgrid_bonds::RecordDefaults;
use bondgrid_core::{Currency, Date, Frequency};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult, ValidationError};

fn default_shock_size() -> f64 {
    0.01
}

fn default_coupon() -> f64 {
    2.5
}

fn default_notional() -> f64 {
    100.0
}

fn default_frequency() -> u32 {
    1
}

fn default_term_days() -> i64 {
    365
}

/// Longest term accepted for new rows, 100 years.
const MAX_TERM_DAYS: i64 = 36_525;

fn default_rate_table_points() -> usize {
    21
}

/// Engine configuration.
///
/// Every field is optional in the file; missing ones take their defaults.
///
/// ```toml
/// shock_size = 0.0001
/// default_coupon = 4.0
/// default_currency = "EUR"
/// pricing_date = "2024-01-02"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Rate shock for duration, convexity and KRD, as a decimal.
    #[serde(default = "default_shock_size")]
    pub shock_size: f64,

    /// Coupon of new rows, in percent.
    #[serde(default = "default_coupon")]
    pub default_coupon: f64,

    /// Notional of new rows.
    #[serde(default = "default_notional")]
    pub default_notional: f64,

    /// Currency of new rows.
    #[serde(default)]
    pub default_currency: Currency,

    /// Payments per year of new rows.
    #[serde(default = "default_frequency")]
    pub default_frequency: u32,

    /// Term of new rows in days.
    #[serde(default = "default_term_days")]
    pub default_term_days: i64,

    /// Number of time points in the rate table.
    #[serde(default = "default_rate_table_points")]
    pub rate_table_points: usize,

    /// Pricing date; today when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_date: Option<Date>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            shock_size: default_shock_size(),
            default_coupon: default_coupon(),
            default_notional: default_notional(),
            default_currency: Currency::default(),
            default_frequency: default_frequency(),
            default_term_days: default_term_days(),
            rate_table_points: default_rate_table_points(),
            pricing_date: None,
        }
    }
}

impl EngineConfig {
    /// Parses and validates TOML text.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Renders the config as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks every field, reporting all failures at once.
    pub fn validate(&self) -> ConfigResult<()> {
        let mut errors = Vec::new();

        if !(self.shock_size.is_finite() && self.shock_size > 0.0) {
            errors.push(ValidationError::new(
                "shock_size",
                format!("must be positive and finite, got {}", self.shock_size),
            ));
        }
        if let Err(e) = to_decimal(self.default_coupon) {
            errors.push(ValidationError::new("default_coupon", e));
        }
        if let Err(e) = to_decimal(self.default_notional) {
            errors.push(ValidationError::new("default_notional", e));
        }
        if let Err(e) = Frequency::from_payments_per_year(i64::from(self.default_frequency)) {
            errors.push(ValidationError::new("default_frequency", e.to_string()));
        }
        if !(1..=MAX_TERM_DAYS).contains(&self.default_term_days) {
            errors.push(ValidationError::new(
                "default_term_days",
                format!(
                    "must be between 1 and {MAX_TERM_DAYS}, got {}",
                    self.default_term_days
                ),
            ));
        }
        if self.rate_table_points < 2 {
            errors.push(ValidationError::new(
                "rate_table_points",
                format!("must be at least 2, got {}", self.rate_table_points),
            ));
        }

        match ConfigError::from_validation(errors) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Terms for new grid rows.
    pub fn record_defaults(&self) -> ConfigResult<RecordDefaults> {
        let field_error = |field: &str, message: String| {
            ConfigError::Validation(ValidationError::new(field, message))
        };

        Ok(RecordDefaults {
            coupon: to_decimal(self.default_coupon).map_err(|m| field_error("default_coupon", m))?,
            notional: to_decimal(self.default_notional)
                .map_err(|m| field_error("default_notional", m))?,
            currency: self.default_currency,
            frequency: Frequency::from_payments_per_year(i64::from(self.default_frequency))
                .map_err(|e| field_error("default_frequency", e.to_string()))?,
            term_days: self.default_term_days,
        })
    }

    /// The configured pricing date, or `fallback`.
    pub fn pricing_date_or(&self, fallback: Date) -> Date {
        self.pricing_date.unwrap_or(fallback)
    }
}

/// Converts through the shortest decimal text so 0.1 stays 0.1.
fn to_decimal(value: f64) -> Result<Decimal, String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("must be non-negative and finite, got {value}"));
    }
    Decimal::from_str(&value.to_string()).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.record_defaults().unwrap(), RecordDefaults::default());
    }

    #[test]
    fn test_partial_file() {
        let config = EngineConfig::from_toml_str(
            r#"
            shock_size = 0.0001
            default_coupon = 4.1
            default_currency = "EUR"
            default_frequency = 2
            pricing_date = "2024-01-02"
            "#,
        )
        .unwrap();

        assert_eq!(config.shock_size, 0.0001);
        assert_eq!(config.rate_table_points, 21);
        assert_eq!(config.pricing_date, Some(Date::from_ymd(2024, 1, 2).unwrap()));

        let defaults = config.record_defaults().unwrap();
        assert_eq!(defaults.coupon, dec!(4.1));
        assert_eq!(defaults.currency, Currency::EUR);
        assert_eq!(defaults.frequency, Frequency::SemiAnnual);
    }

    #[test]
    fn test_validation_collects_all() {
        let err = EngineConfig::from_toml_str(
            r#"
            shock_size = -0.01
            default_frequency = 0
            rate_table_points = 1
            "#,
        )
        .unwrap_err();

        match err {
            ConfigError::MultipleValidationErrors(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, ["shock_size", "default_frequency", "rate_table_points"]);
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_any_positive_frequency() {
        let config = EngineConfig::from_toml_str("default_frequency = 5").unwrap();
        assert_eq!(config.record_defaults().unwrap().frequency, Frequency::PerYear(5));
    }

    #[test]
    fn test_term_days_bounded() {
        for bad in ["default_term_days = 0", "default_term_days = 200000000"] {
            match EngineConfig::from_toml_str(bad).unwrap_err() {
                ConfigError::Validation(e) => assert_eq!(e.field, "default_term_days"),
                other => panic!("unexpected error {other}"),
            }
        }

        let config = EngineConfig::from_toml_str("default_term_days = 36525").unwrap();
        assert_eq!(config.record_defaults().unwrap().term_days, 36_525);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(
            EngineConfig::from_toml_str("shock = 0.01"),
            Err(ConfigError::Deserialization(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig {
            pricing_date: Some(Date::from_ymd(2024, 6, 28).unwrap()),
            ..EngineConfig::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(EngineConfig::from_toml_str(&text).unwrap(), config);
    }
}
