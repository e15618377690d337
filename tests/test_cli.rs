//! Tests for CLI argument parsing and the end-to-end infer pipeline

use clap::Parser;
use roughset::cli::{derive_path, Cli};
use std::path::PathBuf;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_cli_default_values() {
    let cli = Cli::parse_from(["roughset", "-i", "data.csv"]);

    assert_eq!(cli.min_support, 0.0, "Default support threshold should be 0");
    assert_eq!(
        cli.min_confidence, 0.0,
        "Default confidence threshold should be 0"
    );
    assert_eq!(cli.min_lift, 0.0, "Default lift threshold should be 0");
    assert!(!cli.include_empty, "Default include_empty should be false");
    assert!(!cli.keep_duplicates, "Default keep_duplicates should be false");
    assert!(!cli.no_confirm, "Default no_confirm should be false");
    assert_eq!(
        cli.infer_schema_length, 10000,
        "Default schema inference should be 10000"
    );
}

#[test]
fn test_cli_custom_thresholds() {
    let cli = Cli::parse_from([
        "roughset",
        "-i",
        "data.csv",
        "--min-support",
        "0.2",
        "--min-confidence",
        "0.9",
        "--min-lift",
        "1.5",
    ]);

    assert_eq!(cli.min_support, 0.2);
    assert_eq!(cli.min_confidence, 0.9);
    assert_eq!(cli.min_lift, 1.5);
}

#[test]
fn test_cli_rejects_out_of_range_thresholds() {
    assert!(Cli::try_parse_from(["roughset", "-i", "d.csv", "--min-support", "1.5"]).is_err());
    assert!(Cli::try_parse_from(["roughset", "-i", "d.csv", "--min-confidence", "-0.1"]).is_err());
    assert!(Cli::try_parse_from(["roughset", "-i", "d.csv", "--min-lift", "-1.0"]).is_err());
    // Lift has no upper bound
    assert!(Cli::try_parse_from(["roughset", "-i", "d.csv", "--min-lift", "10.0"]).is_ok());
}

#[test]
fn test_cli_feature_columns_comma_separated() {
    let cli = Cli::parse_from(["roughset", "-i", "data.csv", "-f", "a,b,c"]);

    assert_eq!(cli.feature_columns, vec!["a", "b", "c"]);
}

#[test]
fn test_cli_output_path_derivation() {
    let cli = Cli::parse_from(["roughset", "-i", "/path/to/data.csv"]);

    let output = cli.output_path().unwrap();
    assert_eq!(output, PathBuf::from("/path/to/data_rules.csv"));
}

#[test]
fn test_cli_output_path_derivation_parquet() {
    let cli = Cli::parse_from(["roughset", "-i", "/path/to/data.parquet"]);

    let output = cli.output_path().unwrap();
    assert_eq!(output, PathBuf::from("/path/to/data_rules.parquet"));
}

#[test]
fn test_cli_export_path_from_output() {
    let cli = Cli::parse_from(["roughset", "-i", "/path/to/data.csv"]);

    assert_eq!(
        cli.export_path().unwrap(),
        PathBuf::from("/path/to/data_rules.json")
    );
}

#[test]
fn test_derive_path_suffix() {
    assert_eq!(
        derive_path(&PathBuf::from("rules.csv"), "_test_metrics"),
        PathBuf::from("rules_test_metrics.csv")
    );
}

mod end_to_end {
    use super::common;
    use assert_cmd::Command;
    use predicates::prelude::*;

    #[test]
    fn test_infer_pipeline_writes_rules_file() {
        let mut df = common::create_incident_dataframe();
        let (temp_dir, csv_path) = common::create_temp_csv(&mut df);
        let output_path = temp_dir.path().join("rules.csv");

        let mut cmd = Command::cargo_bin("roughset").unwrap();
        cmd.arg("-i")
            .arg(&csv_path)
            .arg("-o")
            .arg(&output_path)
            .arg("--no-confirm")
            .assert()
            .success()
            .stdout(predicate::str::contains("Rule inference complete"));

        assert!(output_path.exists(), "Rules file should be written");

        let rules = roughset::pipeline::load_dataset(&output_path, 100).unwrap();
        // 9 distinct rules, plus support/confidence/lift columns
        assert_eq!(rules.height(), 9);
        let names: Vec<String> = rules
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert!(names.contains(&"support".to_string()));
        assert!(names.contains(&"lift".to_string()));
    }

    #[test]
    fn test_infer_pipeline_json_export() {
        let mut df = common::create_incident_dataframe();
        let (temp_dir, csv_path) = common::create_temp_csv(&mut df);
        let output_path = temp_dir.path().join("rules.csv");

        let mut cmd = Command::cargo_bin("roughset").unwrap();
        cmd.arg("-i")
            .arg(&csv_path)
            .arg("-o")
            .arg(&output_path)
            .arg("--export-json")
            .arg("--no-confirm")
            .assert()
            .success();

        let export_path = output_path.with_extension("json");
        assert!(export_path.exists(), "JSON report should be written");

        let raw = std::fs::read_to_string(&export_path).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc["summary"]["rules_exported"], 9);
        assert_eq!(doc["metadata"]["decision_column"], "損壞部位");
    }

    #[test]
    fn test_missing_input_fails() {
        let mut cmd = Command::cargo_bin("roughset").unwrap();
        cmd.assert()
            .failure()
            .stderr(predicate::str::contains("Input file is required"));
    }

    #[test]
    fn test_analyze_subcommand() {
        let mut df = common::create_incident_dataframe();
        let (_temp_dir, csv_path) = common::create_temp_csv(&mut df);

        let mut cmd = Command::cargo_bin("roughset").unwrap();
        cmd.arg("analyze")
            .arg(&csv_path)
            .arg("--decision-value")
            .arg("1")
            .arg("--no-confirm")
            .assert()
            .success()
            .stdout(predicate::str::contains("Lower (certain)"));
    }
}
