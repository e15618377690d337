//! Lower and upper approximations of a decision class.

use std::collections::BTreeSet;

use crate::pipeline::error::RoughSetError;
use crate::pipeline::partition::partition;
use crate::pipeline::table::DecisionTable;
use crate::pipeline::value::Value;

/// Objects whose whole equivalence class under `attributes` lies inside the
/// decision class of `decision_value` (certain members).
pub fn lower_approximation(
    table: &DecisionTable,
    attributes: &[String],
    decision_value: &Value,
) -> Result<BTreeSet<Value>, RoughSetError> {
    let target = table.decision_class(decision_value)?;
    let classes = partition(table, attributes)?;

    let mut lower = BTreeSet::new();
    for class in classes.classes() {
        if class.members.is_subset(&target) {
            lower.extend(class.members.iter().cloned());
        }
    }
    Ok(lower)
}

/// Objects whose equivalence class under `attributes` intersects the
/// decision class of `decision_value` at all (possible members).
pub fn upper_approximation(
    table: &DecisionTable,
    attributes: &[String],
    decision_value: &Value,
) -> Result<BTreeSet<Value>, RoughSetError> {
    let target = table.decision_class(decision_value)?;
    let classes = partition(table, attributes)?;

    let mut upper = BTreeSet::new();
    for class in classes.classes() {
        if !class.members.is_disjoint(&target) {
            upper.extend(class.members.iter().cloned());
        }
    }
    Ok(upper)
}

/// Upper minus lower: objects of ambiguous membership.
pub fn boundary_region(
    table: &DecisionTable,
    attributes: &[String],
    decision_value: &Value,
) -> Result<BTreeSet<Value>, RoughSetError> {
    let lower = lower_approximation(table, attributes, decision_value)?;
    let upper = upper_approximation(table, attributes, decision_value)?;
    Ok(upper.difference(&lower).cloned().collect())
}
