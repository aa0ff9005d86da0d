//! End-to-end tests for the `tally` binary
//!
//! Each test points `TALLY_CLI_DATA_DIR` at its own temporary directory.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tally(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env("TALLY_CLI_DATA_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

fn add(dir: &TempDir, args: &[&str]) {
    tally(dir).arg("add").args(args).assert().success();
}

fn seed(dir: &TempDir) {
    add(dir, &["expense", "50", "-d", "2024-01-10", "-c", "Food"]);
    add(dir, &["income", "1000", "-d", "2024-01-15", "-c", "Salary"]);
    add(dir, &["expense", "60", "-d", "2024-02-05", "-c", "Food"]);
    add(dir, &["expense", "500", "-d", "2024-02-20", "-c", "Rent", "-m", "February rent"]);
}

fn insights_json(dir: &TempDir) -> serde_json::Value {
    let output = tally(dir)
        .args(["insights", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();
    tally(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("transactions.json").exists());
}

#[test]
fn empty_insights_show_onboarding_tip() {
    let dir = TempDir::new().unwrap();
    tally(&dir)
        .arg("insights")
        .assert()
        .success()
        .stdout(predicate::str::contains("Add a few transactions to see insights!"));

    let report = insights_json(&dir);
    assert_eq!(report["total_income"], 0.0);
    assert_eq!(report["monthly_series"], serde_json::json!([]));
}

#[test]
fn add_then_insights() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    let report = insights_json(&dir);
    assert_eq!(report["total_income"], 1000.0);
    assert_eq!(report["total_expense"], 610.0);
    assert_eq!(report["net"], 390.0);
    assert_eq!(report["expenses_by_category"]["Food"], 110.0);
    assert_eq!(report["monthly_series"][1]["month"], "2024-02");
    assert_eq!(report["monthly_series"][1]["net"], -560.0);
    assert_eq!(report["forecast_next_month_net"], 195.0);
    assert_eq!(report["avg_burn_rate"], 305.0);
    assert_eq!(
        report["tips"][0],
        "'Rent' is over 40% of your expenses. Consider setting a cap for this category."
    );

    tally(&dir)
        .arg("insights")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expenses by Category"))
        .stdout(predicate::str::contains("-$560.00"));
}

#[test]
fn add_rejects_invalid_input() {
    let dir = TempDir::new().unwrap();
    tally(&dir)
        .args(["add", "transfer", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("type"));

    tally(&dir)
        .args(["add", "expense", "10", "-d", "2024-02-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("date"));

    tally(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn list_shows_newest_first_with_limit() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    tally(&dir)
        .args(["list", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("February rent"))
        .stdout(predicate::str::contains("Salary").not())
        .stdout(predicate::str::contains("Showing 1 of 4 transactions."));
}

#[test]
fn delete_by_full_id() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["expense", "5", "-d", "2024-01-10"]);

    let stored = fs::read_to_string(dir.path().join("data").join("transactions.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stored).unwrap();
    let id = value["transactions"][0]["id"].as_str().unwrap().to_string();

    tally(&dir)
        .args(["delete", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction deleted."));

    tally(&dir)
        .args(["delete", id.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction not found"));

    assert_eq!(insights_json(&dir)["total_expense"], 0.0);
}

#[test]
fn import_reports_skipped_rows() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("bank.csv");
    fs::write(
        &csv_path,
        "Date,Description,Category,Type,Amount\n\
         2024-03-01,Paycheck,Salary,Income,2000\n\
         2024-03-02,Groceries,Food,expense,85.20\n\
         yesterday,Mystery,,,10\n",
    )
    .unwrap();

    tally(&dir)
        .arg("import")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported: 2"))
        .stdout(predicate::str::contains("Skipped:  1"))
        .stdout(predicate::str::contains("Row 3:"));

    let report = insights_json(&dir);
    assert_eq!(report["total_income"], 2000.0);
    assert_eq!(report["total_expense"], 85.2);
}

#[test]
fn import_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    tally(&dir)
        .args(["import", "does-not-exist.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn export_csv_round_trips_through_import() {
    let source = TempDir::new().unwrap();
    seed(&source);
    let csv_path = source.path().join("out.csv");

    tally(&source)
        .arg("export")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 4 transactions"));

    let exported = fs::read_to_string(&csv_path).unwrap();
    assert!(exported.starts_with("id,date,description,category,type,amount\n"));
    assert!(exported.contains(",2024-02-20,February rent,Rent,expense,500.00"));

    let target = TempDir::new().unwrap();
    tally(&target).arg("import").arg(&csv_path).assert().success();
    assert_eq!(insights_json(&target), insights_json(&source));
}

#[test]
fn insights_yaml_to_file() {
    let dir = TempDir::new().unwrap();
    seed(&dir);
    let out = dir.path().join("report.yaml");

    tally(&dir)
        .args(["insights", "--format", "yaml", "-o"])
        .arg(&out)
        .assert()
        .success();

    let yaml = fs::read_to_string(&out).unwrap();
    assert!(yaml.starts_with("# Tally insight report"));
    let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(value["total_expense"].as_f64(), Some(610.0));
    assert_eq!(value["expenses_by_category"]["Rent"].as_f64(), Some(500.0));
}

#[test]
fn add_rejects_oversized_amount() {
    let dir = TempDir::new().unwrap();
    tally(&dir)
        .args(["add", "expense", "90000000000000000", "-d", "2024-01-10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the maximum"));

    assert_eq!(insights_json(&dir)["total_expense"], 0.0);
}

#[test]
fn unusable_date_format_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["expense", "5", "-d", "2024-01-10"]);
    fs::write(dir.path().join("config.json"), r#"{"date_format": "%Q"}"#).unwrap();

    tally(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format '%Q'"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();
    tally(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("transactions.json"))
        .stdout(predicate::str::contains("Default category:    General"));
}
