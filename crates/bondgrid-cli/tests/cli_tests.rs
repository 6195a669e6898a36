//! End-to-end tests for the `bondgrid` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CURVE_CSV: &str = "Year,Rate
0.0833333333333333,5.55
0.1666666666666667,5.54
0.25,5.46
0.3333333333333333,5.41
0.5,5.24
1,4.80
2,4.33
3,4.09
5,3.93
7,3.95
10,3.95
20,4.25
30,4.08
";

const BONDS_JSON: &str = r#"[
  {"Bond": "Bond 1", "Currency": "USD", "Coupon": 5.0, "Accrual Start": "2024-01-02",
   "Maturity": "2025-01-02", "Frequency": 1, "Notional": 1000000},
  {"Bond": "Bond 2", "Currency": "EUR", "Coupon": "3.25", "Accrual Start": "2024-01-02",
   "Maturity": "2034-01-02", "Frequency": 2, "Notional": 100}
]"#;

const BONDS_CSV: &str = "Bond,Currency,Coupon,Accrual Start,Maturity,Frequency,Notional
Bond 1,USD,2.5,2024-01-02,2025-01-01,1,100
Broken,USD,abc,2024-01-02,2025-01-01,1,100
";

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("curve.csv"), CURVE_CSV).unwrap();
        fs::write(dir.path().join("bonds.json"), BONDS_JSON).unwrap();
        fs::write(dir.path().join("bonds.csv"), BONDS_CSV).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

fn bondgrid() -> Command {
    let mut cmd = Command::cargo_bin("bondgrid").unwrap();
    cmd.env_remove("BONDGRID_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help() {
    bondgrid()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("krd"))
        .stdout(predicate::str::contains("timetable"));
}

#[test]
fn test_price_table() {
    let fx = Fixture::new();
    bondgrid()
        .args(["price", "--pricing-date", "2024-01-02", "--bonds"])
        .arg(fx.path("bonds.json"))
        .arg("--curve")
        .arg(fx.path("curve.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Bond 1"))
        .stdout(predicate::str::contains("$"))
        .stdout(predicate::str::contains("€"));
}

#[test]
fn test_price_reports_bad_rows() {
    let fx = Fixture::new();
    bondgrid()
        .args(["price", "--format", "json", "--pricing-date", "2024-01-02", "--bonds"])
        .arg(fx.path("bonds.csv"))
        .arg("--curve")
        .arg(fx.path("curve.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""Bond": "Broken""#))
        .stdout(predicate::str::contains("not a number"))
        .stderr(predicate::str::contains("1 of 2 bonds could not be valued"));
}

#[test]
fn test_krd_json() {
    let fx = Fixture::new();
    let output = bondgrid()
        .args(["krd", "--format", "json", "--pricing-date", "2024-01-02", "--bonds"])
        .arg(fx.path("bonds.json"))
        .arg("--curve")
        .arg(fx.path("curve.csv"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let first = &json["rows"][0];
    assert_eq!(first["Bond"], "Bond 1");
    assert_eq!(first["Maturity (Years)"], 1.0);
    assert!(first["2 Yr"].is_number());
    assert!(first["3 Yr"].is_null());

    let second = &json["rows"][1];
    assert!(second["20 Yr"].is_number());
    assert!(second["30 Yr"].is_null());
    assert_eq!(json["failures"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_krd_csv_header() {
    let fx = Fixture::new();
    bondgrid()
        .args(["krd", "--format", "csv", "--pricing-date", "2024-01-02", "--bonds"])
        .arg(fx.path("bonds.json"))
        .arg("--curve")
        .arg(fx.path("curve.csv"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Bond,Maturity (Years),1 Mo,2 Mo,3 Mo,4 Mo,6 Mo,1 Yr,2 Yr,3 Yr,5 Yr,7 Yr,10 Yr,20 Yr,30 Yr",
        ));
}

#[test]
fn test_curve_points() {
    let fx = Fixture::new();
    let output = bondgrid()
        .args(["curve", "--format", "json", "--points", "11", "--curve"])
        .arg(fx.path("curve.csv"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0]["Time"], "3.0000");
    assert_eq!(rows[9]["Time"], "30.0000");
}

#[test]
fn test_single_point_curve_fails() {
    let fx = Fixture::new();
    let curve = fx.path("one.json");
    fs::write(&curve, r#"[{"Year": 1, "Rate": 5.0}]"#).unwrap();

    bondgrid()
        .args(["curve", "--curve"])
        .arg(&curve)
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2"));
}

#[test]
fn test_timetable() {
    let fx = Fixture::new();
    bondgrid()
        .args(["timetable", "--row", "2", "--bonds"])
        .arg(fx.path("bonds.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Bond 2 (EUR)"))
        .stdout(predicate::str::contains("2034-01-02"));
}

#[test]
fn test_timetable_row_out_of_range() {
    let fx = Fixture::new();
    bondgrid()
        .args(["timetable", "--row", "5", "--bonds"])
        .arg(fx.path("bonds.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_config_overrides_points() {
    let fx = Fixture::new();
    let config = fx.path("bondgrid.toml");
    fs::write(&config, "rate_table_points = 4\n").unwrap();

    let output = bondgrid()
        .env("BONDGRID_CONFIG", &config)
        .args(["curve", "--format", "json", "--curve"])
        .arg(fx.path("curve.csv"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.as_array().map(Vec::len), Some(3));
}

#[test]
fn test_unsupported_file() {
    let fx = Fixture::new();
    let curve = fx.path("curve.txt");
    fs::write(&curve, CURVE_CSV).unwrap();

    bondgrid()
        .args(["curve", "--curve"])
        .arg(&curve)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected .json or .csv"));
}
