//! Behavior-driven tests for CLI user journeys
//!
//! These tests verify WHAT the user can accomplish with the basketlens
//! CLI, driving real command-line arguments through the dispatcher
//! against data directories on disk.

use std::fs;
use std::path::Path;

use basketlens_cli::cli::Cli;
use basketlens_cli::commands;
use basketlens_cli::error::CliError;
use clap::Parser;
use serde_json::Value;

fn write_series(dir: &Path, file: &str, ticker: &str, dates: &[&str], closes: &[f64]) {
    let body = serde_json::json!({ "ticker": ticker, "dates": dates, "close": closes });
    fs::write(dir.join(file), body.to_string()).expect("write series file");
}

fn run_cli(args: &[&str]) -> Result<Value, CliError> {
    let cli = Cli::try_parse_from(args).expect("arguments should parse");
    commands::run(&cli)
}

const DATES: &[&str] = &["2024-01-02", "2024-01-03", "2024-01-04", "2024-01-05"];

// =============================================================================
// CLI User Journey: Single-Series KPIs
// =============================================================================

#[test]
fn user_can_compute_kpis_for_a_single_series_file() {
    // Given: one per-ticker file on disk
    let dir = tempfile::tempdir().expect("tempdir");
    write_series(dir.path(), "aapl.json", "AAPL", DATES, &[100.0, 110.0, 90.0, 120.0]);
    let file = dir.path().join("aapl.json");

    // When: they ask for KPIs over the full history
    let value = run_cli(&["basketlens", "kpi", file.to_str().expect("utf8 path")])
        .expect("kpi command should succeed");

    // Then: the response carries the ticker, the window, and the figures
    assert_eq!(value["ticker"], "AAPL");
    assert_eq!(value["range"], "ALL");
    assert_eq!(value["points"], 4);
    let total_return = value["kpi"]["total_return"].as_f64().expect("number");
    assert!((total_return - 0.20).abs() < 1e-9, "got {total_return}");
    let drawdown = value["kpi"]["max_drawdown"].as_f64().expect("number");
    assert!((drawdown + 2.0 / 11.0).abs() < 1e-9, "got {drawdown}");
}

// =============================================================================
// CLI User Journey: Basket Index
// =============================================================================

#[test]
fn user_can_build_a_weighted_index_for_their_basket() {
    // Given: a data directory with two held tickers
    let dir = tempfile::tempdir().expect("tempdir");
    write_series(dir.path(), "aapl.json", "AAPL", DATES, &[100.0, 110.0, 90.0, 120.0]);
    write_series(dir.path(), "msft.json", "MSFT", DATES, &[50.0, 50.0, 50.0, 50.0]);
    let data_dir = dir.path().to_str().expect("utf8 path");

    // When: they build an equal-share index
    let value = run_cli(&[
        "basketlens", "index", "--data-dir", data_dir,
        "--holding", "AAPL=1", "--holding", "MSFT=1",
    ])
    .expect("index command should succeed");

    // Then: the index starts at base and averages the normalized legs
    let values: Vec<f64> = value["values"]
        .as_array()
        .expect("array")
        .iter()
        .map(|v| v.as_f64().expect("number"))
        .collect();
    assert_eq!(values.len(), 4);
    assert!((values[0] - 100.0).abs() < 1e-9);
    assert!((values[3] - 110.0).abs() < 1e-9, "got {}", values[3]);

    // And: each holding reports its reconciled weight
    assert_eq!(value["holdings"][0]["ticker"], "AAPL");
    let percent = value["holdings"][0]["percent"].as_f64().expect("number");
    assert!((percent - 50.0).abs() < 1e-9);
}

#[test]
fn user_can_compare_their_basket_against_a_benchmark() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_series(dir.path(), "aapl.json", "AAPL", DATES, &[100.0, 110.0, 90.0, 120.0]);
    write_series(dir.path(), "spy.json", "SPY", DATES, &[400.0, 404.0, 408.0, 440.0]);
    let data_dir = dir.path().to_str().expect("utf8 path");

    let value = run_cli(&[
        "basketlens", "index", "--data-dir", data_dir,
        "--holding", "AAPL=1", "--benchmark", "spy",
    ])
    .expect("index command should succeed");

    // The benchmark normalizes over the same window as the basket
    assert_eq!(value["benchmark"]["ticker"], "SPY");
    let bench_return = value["benchmark"]["kpi"]["total_return"]
        .as_f64()
        .expect("number");
    assert!((bench_return - 0.10).abs() < 1e-9, "got {bench_return}");
}

// =============================================================================
// CLI User Journey: Similar-Risk Peers
// =============================================================================

#[test]
fn user_can_find_similar_risk_winners_from_the_universe() {
    // Given: held tickers, two candidates, and a universe table
    let dir = tempfile::tempdir().expect("tempdir");
    write_series(dir.path(), "aapl.json", "AAPL", DATES, &[100.0, 110.0, 90.0, 120.0]);
    write_series(dir.path(), "msft.json", "MSFT", DATES, &[50.0, 50.0, 50.0, 50.0]);
    write_series(dir.path(), "winx.json", "WINX", DATES, &[100.0, 105.0, 115.0, 130.0]);
    write_series(dir.path(), "lagx.json", "LAGX", DATES, &[100.0, 101.0, 99.0, 102.0]);
    // The universe table lives outside the series directory, which is
    // swept for .json files wholesale
    let tables = tempfile::tempdir().expect("tempdir");
    let universe = tables.path().join("universe.json");
    fs::write(
        &universe,
        serde_json::json!([
            { "ticker": "AAPL", "name": "Apple", "assetClass": "equity", "riskBucket": "medium" },
            { "ticker": "MSFT", "name": "Microsoft", "assetClass": "equity", "riskBucket": "medium" },
            { "ticker": "WINX", "name": "Momentum Fund", "assetClass": "etf", "riskBucket": "medium" },
            { "ticker": "LAGX", "name": "Laggard Fund", "assetClass": "etf", "riskBucket": "medium" }
        ])
        .to_string(),
    )
    .expect("write universe");

    // When: they rank peers for the equal-share basket
    let value = run_cli(&[
        "basketlens", "peers",
        "--data-dir", dir.path().to_str().expect("utf8 path"),
        "--universe", universe.to_str().expect("utf8 path"),
        "--holding", "AAPL=1", "--holding", "MSFT=1",
    ])
    .expect("peers command should succeed");

    // Then: the portfolio classifies by its dominant bucket
    assert_eq!(value["bucket"], "medium");

    // And: only the candidate beating the basket's 10% return remains;
    // held tickers never appear as their own peers
    let peers = value["peers"].as_array().expect("array");
    assert_eq!(peers.len(), 1);
    assert_eq!(peers[0]["ticker"], "WINX");
    assert_eq!(peers[0]["name"], "Momentum Fund");
}

// =============================================================================
// CLI User Journey: Error Reporting
// =============================================================================

#[test]
fn missing_series_file_reports_a_data_error_exit_code() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_series(dir.path(), "aapl.json", "AAPL", DATES, &[100.0, 110.0, 90.0, 120.0]);

    let err = run_cli(&[
        "basketlens", "index",
        "--data-dir", dir.path().to_str().expect("utf8 path"),
        "--holding", "AAPL=1", "--holding", "GOOG=1",
    ])
    .expect_err("must fail");

    assert!(matches!(err, CliError::MissingSeries { ref ticker } if ticker == "GOOG"));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn unknown_range_label_reports_a_validation_exit_code() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_series(dir.path(), "aapl.json", "AAPL", DATES, &[100.0, 110.0, 90.0, 120.0]);
    let file = dir.path().join("aapl.json");

    let err = run_cli(&[
        "basketlens", "kpi", file.to_str().expect("utf8 path"),
        "--range", "2W",
    ])
    .expect_err("must fail");

    assert!(matches!(err, CliError::Validation(_)));
    assert_eq!(err.exit_code(), 2);
}
