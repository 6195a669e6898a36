//! Loading engine configs from disk.

use std::io::Write;

use bondgrid_config::{ConfigError, EngineConfig};
use bondgrid_core::Currency;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "default_currency = \"GBP\"\nrate_table_points = 11").unwrap();

    let config = EngineConfig::load(file.path()).unwrap();
    assert_eq!(config.default_currency, Currency::GBP);
    assert_eq!(config.rate_table_points, 11);
    assert_eq!(config.shock_size, 0.01);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = EngineConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_invalid_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "default_notional = -5.0").unwrap();

    assert!(matches!(
        EngineConfig::load(file.path()),
        Err(ConfigError::Validation(_))
    ));
}
