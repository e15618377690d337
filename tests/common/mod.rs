//! Shared test utilities and fixture generators

use polars::prelude::*;
use roughset::pipeline::{ColumnRoles, DecisionTable};
use std::path::PathBuf;
use tempfile::TempDir;

/// Create the 5-object incident decision table used across the tests.
///
/// Columns:
/// - `No`: object identifier (1..=5)
/// - `天氣` (weather): binary condition attribute
/// - `事故情形` (incident): ternary condition attribute
/// - `事故原因` (cause): binary condition attribute
/// - `損壞部位` (damage): binary decision attribute
pub fn create_incident_dataframe() -> DataFrame {
    df! {
        "No" => [1i64, 2, 3, 4, 5],
        "天氣" => [0i64, 1, 1, 0, 1],
        "事故情形" => [1i64, 0, 2, 1, 1],
        "事故原因" => [1i64, 0, 1, 1, 0],
        "損壞部位" => [0i64, 0, 1, 1, 1],
    }
    .unwrap()
}

/// Column roles matching [`create_incident_dataframe`]
pub fn incident_roles() -> ColumnRoles {
    ColumnRoles::new(
        "No",
        vec![
            "天氣".to_string(),
            "事故情形".to_string(),
            "事故原因".to_string(),
        ],
        "損壞部位",
    )
}

/// The incident fixture as a validated decision table
pub fn create_incident_table() -> DecisionTable {
    DecisionTable::from_dataframe(&create_incident_dataframe(), incident_roles()).unwrap()
}

/// Create a larger random symbolic table for stress tests.
///
/// Feature cells are small integers so equivalence classes stay non-trivial.
pub fn create_random_symbolic_dataframe(rows: usize, features: usize) -> DataFrame {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    let mut columns: Vec<Column> = Vec::with_capacity(features + 2);

    let ids: Vec<i64> = (1..=rows as i64).collect();
    columns.push(Column::new("No".into(), ids));

    for i in 0..features {
        let values: Vec<i64> = (0..rows).map(|_| rng.gen_range(0..3)).collect();
        columns.push(Column::new(format!("feature_{}", i).into(), values));
    }

    let decisions: Vec<i64> = (0..rows).map(|_| rng.gen_range(0..2)).collect();
    columns.push(Column::new("decision".into(), decisions));

    DataFrame::new(columns).unwrap()
}

/// Column roles matching [`create_random_symbolic_dataframe`]
pub fn random_symbolic_roles(features: usize) -> ColumnRoles {
    ColumnRoles::new(
        "No",
        (0..features).map(|i| format!("feature_{}", i)).collect(),
        "decision",
    )
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}
