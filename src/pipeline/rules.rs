//! Reduct rule tables: aggregation, deduplication, and DataFrame conversion.

use std::collections::HashSet;

use polars::prelude::{AnyValue, Column, DataFrame, IntoColumn, PolarsResult, Series};

use crate::pipeline::error::RoughSetError;
use crate::pipeline::table::ColumnRoles;
use crate::pipeline::value::Value;

/// One reduct rule: a partial assignment over the feature columns plus the
/// decision value, tied to the object that generated it.
///
/// `conditions` is aligned with the declared feature order; `None` entries
/// are unset and impose no constraint. `object` is `None` once the
/// originating identifier has been dropped by deduplication, and `decision`
/// is `None` only for rules re-loaded from a file with an empty decision
/// cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReductRule {
    pub object: Option<Value>,
    pub conditions: Vec<Option<Value>>,
    pub decision: Option<Value>,
}

impl ReductRule {
    /// True when every feature entry is unset (the `include_empty` marker).
    pub fn is_empty(&self) -> bool {
        self.conditions.iter().all(|c| c.is_none())
    }

    /// Number of set condition entries.
    pub fn condition_count(&self) -> usize {
        self.conditions.iter().filter(|c| c.is_some()).count()
    }
}

/// An ordered sequence of reduct rules sharing one set of column roles.
#[derive(Debug, Clone)]
pub struct RuleTable {
    pub roles: ColumnRoles,
    pub rules: Vec<ReductRule>,
}

impl RuleTable {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules flagged as "no informative reduct found".
    pub fn empty_rule_count(&self) -> usize {
        self.rules.iter().filter(|r| r.is_empty()).count()
    }

    /// Drop originating identifiers and remove exact duplicate rule bodies.
    ///
    /// Two rules are duplicates when their condition vectors and decision
    /// values are equal; an unset entry only ever equals another unset
    /// entry. First occurrence wins, order is preserved. Idempotent.
    pub fn deduplicate(&self) -> RuleTable {
        let mut seen = HashSet::new();
        let mut rules = Vec::new();
        for rule in &self.rules {
            let body = (rule.conditions.clone(), rule.decision.clone());
            if seen.insert(body) {
                rules.push(ReductRule {
                    object: None,
                    conditions: rule.conditions.clone(),
                    decision: rule.decision.clone(),
                });
            }
        }
        RuleTable {
            roles: self.roles.clone(),
            rules,
        }
    }

    /// Convert to a DataFrame with one column per role column.
    ///
    /// The identifier column is included only while rules still carry their
    /// originating objects (i.e. before deduplication).
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let with_objects = self.rules.iter().any(|r| r.object.is_some());
        let mut columns: Vec<Column> = Vec::new();

        if with_objects {
            let cells: Vec<AnyValue> = self
                .rules
                .iter()
                .map(|r| r.object.as_ref().map_or(AnyValue::Null, Value::to_any))
                .collect();
            columns.push(any_value_column(&self.roles.id_column, &cells)?);
        }

        for (pos, feature) in self.roles.feature_columns.iter().enumerate() {
            let cells: Vec<AnyValue> = self
                .rules
                .iter()
                .map(|r| r.conditions[pos].as_ref().map_or(AnyValue::Null, Value::to_any))
                .collect();
            columns.push(any_value_column(feature, &cells)?);
        }

        let cells: Vec<AnyValue> = self
            .rules
            .iter()
            .map(|r| r.decision.as_ref().map_or(AnyValue::Null, Value::to_any))
            .collect();
        columns.push(any_value_column(&self.roles.decision_column, &cells)?);

        DataFrame::new(columns)
    }

    /// Read a rule table back from a DataFrame (e.g. a saved rules file).
    ///
    /// Null cells become unset entries. The identifier column is optional;
    /// feature and decision columns must exist.
    pub fn from_dataframe(df: &DataFrame, roles: ColumnRoles) -> Result<Self, RoughSetError> {
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let objects = if names.contains(&roles.id_column) {
            Some(read_column(df, &roles.id_column)?)
        } else {
            None
        };
        let features: Vec<Vec<Value>> = roles
            .feature_columns
            .iter()
            .map(|name| read_column(df, name))
            .collect::<Result<_, _>>()?;
        let decisions = read_column(df, &roles.decision_column)?;

        let mut rules = Vec::with_capacity(df.height());
        for row in 0..df.height() {
            let object = objects
                .as_ref()
                .map(|cells| cells[row].clone())
                .filter(|v| !v.is_null());
            let conditions = features
                .iter()
                .map(|cells| Some(cells[row].clone()).filter(|v| !v.is_null()))
                .collect();
            let decision = Some(decisions[row].clone()).filter(|v| !v.is_null());
            rules.push(ReductRule {
                object,
                conditions,
                decision,
            });
        }

        Ok(RuleTable { roles, rules })
    }

    /// Plain-text IF/THEN rendering of one rule, for terminal display.
    pub fn render_rule(&self, rule: &ReductRule) -> String {
        let conditions: Vec<String> = self
            .roles
            .feature_columns
            .iter()
            .zip(rule.conditions.iter())
            .filter_map(|(name, value)| {
                value.as_ref().map(|v| format!("{} = {}", name, v))
            })
            .collect();

        let antecedent = if conditions.is_empty() {
            "(no conditions)".to_string()
        } else {
            conditions.join(" AND ")
        };
        let consequent = match &rule.decision {
            Some(value) => format!("{} = {}", self.roles.decision_column, value),
            None => format!("{} = ?", self.roles.decision_column),
        };

        match &rule.object {
            Some(object) => format!(
                "IF {} THEN {}  (from object {})",
                antecedent, consequent, object
            ),
            None => format!("IF {} THEN {}", antecedent, consequent),
        }
    }
}

fn any_value_column(name: &str, cells: &[AnyValue]) -> PolarsResult<Column> {
    Ok(Series::from_any_values(name.into(), cells, false)?.into_column())
}

fn read_column(df: &DataFrame, name: &str) -> Result<Vec<Value>, RoughSetError> {
    let column = df.column(name).map_err(|_| RoughSetError::ColumnNotFound {
        column: name.to_string(),
        available: df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect(),
    })?;
    let series = column.as_materialized_series();
    series
        .iter()
        .map(|cell| {
            Value::from_any(&cell).ok_or_else(|| RoughSetError::UnsupportedColumnType {
                column: name.to_string(),
                dtype: series.dtype().to_string(),
            })
        })
        .collect()
}

/// Build a rule by hand; used by the search engine and by tests.
pub fn rule(
    object: Option<Value>,
    conditions: Vec<Option<Value>>,
    decision: Option<Value>,
) -> ReductRule {
    ReductRule {
        object,
        conditions,
        decision,
    }
}
