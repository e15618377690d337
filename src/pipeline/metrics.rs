//! Support, confidence and lift for reduct rules.
//!
//! A rule is scored against a reference table, which may differ from the
//! table that produced it (train rules against test data). Ratios are
//! plain row-count fractions after successive exact-equality filters.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};
use serde::Serialize;

use crate::pipeline::error::RoughSetError;
use crate::pipeline::rules::{ReductRule, RuleTable};
use crate::pipeline::table::{ColumnRoles, DecisionTable};
use crate::pipeline::value::Value;

/// Which slice of a rule enters a ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubsetMethod {
    /// Feature conditions only (X)
    Condition,
    /// Decision value only (Y)
    Decision,
    /// Features plus decision (XY)
    ConditionDecision,
}

/// Rule-quality metrics against one reference table.
///
/// `confidence` and `lift` are `None` when a denominator ratio is zero, so
/// batch evaluation keeps going instead of aborting on one degenerate rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RuleMetrics {
    pub support: f64,
    pub confidence: Option<f64>,
    pub lift: Option<f64>,
}

/// The partial assignment a rule induces under the given method.
pub fn assignment(
    rule: &ReductRule,
    roles: &ColumnRoles,
    method: SubsetMethod,
) -> Vec<(String, Option<Value>)> {
    let mut entries = Vec::new();
    if matches!(method, SubsetMethod::Condition | SubsetMethod::ConditionDecision) {
        for (name, value) in roles.feature_columns.iter().zip(rule.conditions.iter()) {
            entries.push((name.clone(), value.clone()));
        }
    }
    if matches!(method, SubsetMethod::Decision | SubsetMethod::ConditionDecision) {
        entries.push((roles.decision_column.clone(), rule.decision.clone()));
    }
    entries
}

/// Fraction of `table` rows matching every set entry of the assignment.
///
/// Unset entries impose no filter; the reference table's identifier column
/// is never used as a filter. An entirely-unset assignment matches the
/// whole table (ratio 1.0).
pub fn rule_ratio(
    assignment: &[(String, Option<Value>)],
    table: &DecisionTable,
) -> Result<f64, RoughSetError> {
    let mut keep: Vec<usize> = (0..table.height()).collect();
    for (name, value) in assignment {
        if *name == table.roles().id_column {
            continue;
        }
        let Some(value) = value else {
            continue;
        };
        let cells = table.column(name)?;
        keep.retain(|&row| cells[row] == *value);
    }
    Ok(keep.len() as f64 / table.height() as f64)
}

/// Score one rule against a reference table.
pub fn evaluate_rule(
    rule: &ReductRule,
    roles: &ColumnRoles,
    reference: &DecisionTable,
) -> Result<RuleMetrics, RoughSetError> {
    let ratio_x = rule_ratio(&assignment(rule, roles, SubsetMethod::Condition), reference)?;
    let ratio_y = rule_ratio(&assignment(rule, roles, SubsetMethod::Decision), reference)?;
    let ratio_xy = rule_ratio(
        &assignment(rule, roles, SubsetMethod::ConditionDecision),
        reference,
    )?;

    let confidence = if ratio_x > 0.0 {
        Some(ratio_xy / ratio_x)
    } else {
        None
    };
    let lift = if ratio_x > 0.0 && ratio_y > 0.0 {
        Some(ratio_xy / (ratio_x * ratio_y))
    } else {
        None
    };

    Ok(RuleMetrics {
        support: ratio_x,
        confidence,
        lift,
    })
}

/// Score every rule of a table against the same reference table.
pub fn evaluate_rules(
    rules: &RuleTable,
    reference: &DecisionTable,
) -> Result<Vec<RuleMetrics>, RoughSetError> {
    rules
        .rules
        .iter()
        .map(|rule| evaluate_rule(rule, &rules.roles, reference))
        .collect()
}

/// Rule table plus `support`, `confidence`, `lift` columns, for saving.
pub fn rules_with_metrics_dataframe(
    rules: &RuleTable,
    metrics: &[RuleMetrics],
) -> PolarsResult<DataFrame> {
    let mut df = rules.to_dataframe()?;

    let support: Vec<f64> = metrics.iter().map(|m| m.support).collect();
    let confidence: Vec<Option<f64>> = metrics.iter().map(|m| m.confidence).collect();
    let lift: Vec<Option<f64>> = metrics.iter().map(|m| m.lift).collect();

    df.with_column(Column::new("support".into(), support))?;
    df.with_column(Series::new("confidence".into(), confidence).into_column())?;
    df.with_column(Series::new("lift".into(), lift).into_column())?;
    Ok(df)
}

/// True when a rule's metrics clear all three thresholds.
///
/// An undefined metric never clears a threshold; degenerate rules are
/// filtered out rather than propagated.
pub fn passes_thresholds(
    metrics: &RuleMetrics,
    min_support: f64,
    min_confidence: f64,
    min_lift: f64,
) -> bool {
    metrics.support >= min_support
        && metrics.confidence.map_or(false, |c| c >= min_confidence)
        && metrics.lift.map_or(false, |l| l >= min_lift)
}
