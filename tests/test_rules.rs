//! Unit tests for rule tables: deduplication, conversion, rendering

use roughset::pipeline::{create_reduct_rules, rule, RuleTable, Value};

#[path = "common/mod.rs"]
mod common;

fn int(v: i64) -> Option<Value> {
    Some(Value::Int(v))
}

#[test]
fn test_deduplicate_drops_objects_and_duplicates() {
    let roles = common::incident_roles();
    let rules = RuleTable {
        roles,
        rules: vec![
            rule(int(1), vec![None, int(0), None], int(0)),
            rule(int(2), vec![None, int(0), None], int(0)),
            rule(int(3), vec![int(1), int(0), None], int(0)),
        ],
    };

    let deduped = rules.deduplicate();

    assert_eq!(deduped.len(), 2);
    assert!(deduped.rules.iter().all(|r| r.object.is_none()));
    // First occurrence wins, order preserved
    assert_eq!(deduped.rules[0].conditions, vec![None, int(0), None]);
    assert_eq!(deduped.rules[1].conditions, vec![int(1), int(0), None]);
}

#[test]
fn test_deduplicate_is_idempotent() {
    let table = common::create_incident_table();
    let rules = create_reduct_rules(&table, true).unwrap();

    let once = rules.deduplicate();
    let twice = once.deduplicate();

    assert_eq!(once.len(), twice.len());
    assert_eq!(once.rules, twice.rules);
}

#[test]
fn test_unset_entries_only_match_unset() {
    let roles = common::incident_roles();
    let rules = RuleTable {
        roles,
        rules: vec![
            rule(int(1), vec![None, int(0), None], int(0)),
            rule(int(2), vec![int(0), int(0), None], int(0)),
        ],
    };

    // An unset 天氣 is not a duplicate of 天氣 = 0
    assert_eq!(rules.deduplicate().len(), 2);
}

#[test]
fn test_incident_rules_have_no_duplicates() {
    let table = common::create_incident_table();
    let rules = create_reduct_rules(&table, false).unwrap();

    assert_eq!(rules.deduplicate().len(), rules.len());
}

#[test]
fn test_to_dataframe_keeps_objects_before_dedup() {
    let table = common::create_incident_table();
    let rules = create_reduct_rules(&table, false).unwrap();

    let df = rules.to_dataframe().unwrap();
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    assert_eq!(names, vec!["No", "天氣", "事故情形", "事故原因", "損壞部位"]);
    assert_eq!(df.height(), rules.len());
}

#[test]
fn test_dataframe_round_trip() {
    let table = common::create_incident_table();
    let rules = create_reduct_rules(&table, true).unwrap().deduplicate();

    let df = rules.to_dataframe().unwrap();
    let reloaded = RuleTable::from_dataframe(&df, rules.roles.clone()).unwrap();

    assert_eq!(reloaded.rules, rules.rules);
}

#[test]
fn test_render_rule() {
    let roles = common::incident_roles();
    let rules = RuleTable {
        roles,
        rules: vec![
            rule(int(2), vec![int(1), int(0), None], int(0)),
            rule(None, vec![None, int(0), None], int(0)),
            rule(None, vec![None, None, None], int(1)),
        ],
    };

    assert_eq!(
        rules.render_rule(&rules.rules[0]),
        "IF 天氣 = 1 AND 事故情形 = 0 THEN 損壞部位 = 0  (from object 2)"
    );
    assert_eq!(
        rules.render_rule(&rules.rules[1]),
        "IF 事故情形 = 0 THEN 損壞部位 = 0"
    );
    assert_eq!(
        rules.render_rule(&rules.rules[2]),
        "IF (no conditions) THEN 損壞部位 = 1"
    );
}
