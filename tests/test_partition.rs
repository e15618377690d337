//! Unit tests for equivalence partitioning and the dependence test

use std::collections::BTreeSet;

use roughset::pipeline::{
    feature_dependence, partition, partitions_equal, Dependence, RoughSetError, Value,
};

#[path = "common/mod.rs"]
mod common;

fn ids(values: &[i64]) -> BTreeSet<Value> {
    values.iter().map(|&v| Value::Int(v)).collect()
}

#[test]
fn test_partition_by_weather() {
    let table = common::create_incident_table();

    let part = partition(&table, &["天氣".to_string()]).unwrap();

    assert_eq!(part.classes().len(), 2);
    assert_eq!(part.class_of(&[Value::Int(0)]), Some(&ids(&[1, 4])));
    assert_eq!(part.class_of(&[Value::Int(1)]), Some(&ids(&[2, 3, 5])));
}

#[test]
fn test_partition_classes_follow_row_order() {
    let table = common::create_incident_table();

    let part = partition(&table, &["事故情形".to_string()]).unwrap();

    // First occurrence order: 1 (row 1), 0 (row 2), 2 (row 3)
    let keys: Vec<&Vec<Value>> = part.classes().iter().map(|c| &c.key).collect();
    assert_eq!(
        keys,
        vec![
            &vec![Value::Int(1)],
            &vec![Value::Int(0)],
            &vec![Value::Int(2)],
        ]
    );
    assert_eq!(part.class_of(&[Value::Int(1)]), Some(&ids(&[1, 4, 5])));
}

#[test]
fn test_partition_totality_and_disjointness() {
    let table = common::create_incident_table();
    let attribute_sets: Vec<Vec<String>> = vec![
        vec!["天氣".to_string()],
        vec!["天氣".to_string(), "事故情形".to_string()],
        vec![
            "天氣".to_string(),
            "事故情形".to_string(),
            "事故原因".to_string(),
        ],
    ];

    for attributes in attribute_sets {
        let part = partition(&table, &attributes).unwrap();

        let mut union = BTreeSet::new();
        let mut total = 0;
        for class in part.classes() {
            total += class.members.len();
            union.extend(class.members.iter().cloned());
        }

        assert_eq!(
            union,
            table.universe().unwrap(),
            "Classes must cover the universe under {:?}",
            attributes
        );
        assert_eq!(
            total,
            union.len(),
            "Classes must be pairwise disjoint under {:?}",
            attributes
        );
    }
}

#[test]
fn test_partition_rejects_empty_attribute_set() {
    let table = common::create_incident_table();

    let err = partition(&table, &[]).unwrap_err();
    assert!(matches!(err, RoughSetError::EmptyAttributeSet));
}

#[test]
fn test_partition_rejects_unknown_attribute() {
    let table = common::create_incident_table();

    let err = partition(&table, &["nope".to_string()]).unwrap_err();
    assert!(matches!(err, RoughSetError::ColumnNotFound { column, .. } if column == "nope"));
}

#[test]
fn test_partitions_equal_ignores_key_tuples() {
    let table = common::create_incident_table();

    // Dropping 事故原因 leaves the same grouping as the full feature set
    let full = partition(
        &table,
        &[
            "天氣".to_string(),
            "事故情形".to_string(),
            "事故原因".to_string(),
        ],
    )
    .unwrap();
    let without_cause = partition(&table, &["天氣".to_string(), "事故情形".to_string()]).unwrap();
    assert!(partitions_equal(&full, &without_cause));

    // Dropping 事故情形 changes the grouping ({2} and {5} merge)
    let without_incident =
        partition(&table, &["天氣".to_string(), "事故原因".to_string()]).unwrap();
    assert!(!partitions_equal(&full, &without_incident));
}

#[test]
fn test_feature_dependence_verdicts() {
    let table = common::create_incident_table();

    let verdicts = feature_dependence(&table).unwrap();

    assert_eq!(
        verdicts,
        vec![
            ("天氣".to_string(), Dependence::Dependent),
            ("事故情形".to_string(), Dependence::Independent),
            ("事故原因".to_string(), Dependence::Dependent),
        ]
    );
}

#[test]
fn test_feature_dependence_single_feature_table() {
    use polars::df;
    use roughset::pipeline::{ColumnRoles, DecisionTable};

    // With one feature the comparison is against the one-class partition
    let constant = df! {
        "No" => [1i64, 2, 3],
        "a" => [7i64, 7, 7],
        "d" => [0i64, 1, 0],
    }
    .unwrap();
    let table = DecisionTable::from_dataframe(
        &constant,
        ColumnRoles::new("No", vec!["a".to_string()], "d"),
    )
    .unwrap();
    assert_eq!(
        feature_dependence(&table).unwrap(),
        vec![("a".to_string(), Dependence::Dependent)]
    );

    let varying = df! {
        "No" => [1i64, 2, 3],
        "a" => [7i64, 8, 7],
        "d" => [0i64, 1, 0],
    }
    .unwrap();
    let table = DecisionTable::from_dataframe(
        &varying,
        ColumnRoles::new("No", vec!["a".to_string()], "d"),
    )
    .unwrap();
    assert_eq!(
        feature_dependence(&table).unwrap(),
        vec![("a".to_string(), Dependence::Independent)]
    );
}

#[test]
fn test_partition_never_coerces_types() {
    use polars::prelude::*;
    use roughset::pipeline::{ColumnRoles, DecisionTable};

    // A string column holding the digits "1" must not merge with Int rows
    let df = df! {
        "No" => [1i64, 2, 3],
        "a" => ["1", "1", "2"],
        "d" => [0i64, 0, 1],
    }
    .unwrap();
    let table = DecisionTable::from_dataframe(
        &df,
        ColumnRoles::new("No", vec!["a".to_string()], "d"),
    )
    .unwrap();

    let part = partition(&table, &["a".to_string()]).unwrap();
    assert_eq!(part.classes().len(), 2);
    assert!(part.class_of(&[Value::Int(1)]).is_none());
    assert_eq!(
        part.class_of(&[Value::Str("1".to_string())]),
        Some(&ids(&[1, 2]))
    );
}

#[test]
fn test_partition_totality_on_random_table() {
    use roughset::pipeline::DecisionTable;

    let df = common::create_random_symbolic_dataframe(200, 4);
    let table = DecisionTable::from_dataframe(&df, common::random_symbolic_roles(4)).unwrap();

    let part = partition(&table, &["feature_0".to_string(), "feature_2".to_string()]).unwrap();
    let covered: usize = part.classes().iter().map(|c| c.members.len()).sum();
    assert_eq!(covered, 200);
}
