//! Decision tables: a read-only column store plus declared column roles.
//!
//! The table validates its contract eagerly at construction (all role
//! columns present, identifiers unique, at least one row, symbolic dtypes
//! only) and is never mutated afterwards. All rough-set queries are free
//! functions over `&DecisionTable`.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use polars::prelude::{Column, DataFrame};

use crate::pipeline::error::RoughSetError;
use crate::pipeline::value::Value;

/// Which column plays which role in a decision table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRoles {
    /// Column holding the unique object identifier
    pub id_column: String,
    /// Condition (feature) attribute columns, in declared order
    pub feature_columns: Vec<String>,
    /// The decision attribute column
    pub decision_column: String,
}

impl ColumnRoles {
    pub fn new(
        id_column: impl Into<String>,
        feature_columns: Vec<String>,
        decision_column: impl Into<String>,
    ) -> Self {
        Self {
            id_column: id_column.into(),
            feature_columns,
            decision_column: decision_column.into(),
        }
    }

    /// All role columns in output order: identifier, features, decision.
    pub fn all_columns(&self) -> Vec<String> {
        let mut columns = Vec::with_capacity(self.feature_columns.len() + 2);
        columns.push(self.id_column.clone());
        columns.extend(self.feature_columns.iter().cloned());
        columns.push(self.decision_column.clone());
        columns
    }
}

/// An immutable, validated decision table.
#[derive(Debug, Clone)]
pub struct DecisionTable {
    roles: ColumnRoles,
    height: usize,
    columns: Vec<(String, Vec<Value>)>,
}

impl DecisionTable {
    /// Materialize the role columns of `df` into a validated table.
    ///
    /// Fails fast when a role column is missing, the identifier column has
    /// duplicates, the frame has no rows, or a role column holds a dtype
    /// outside the symbolic set.
    pub fn from_dataframe(df: &DataFrame, roles: ColumnRoles) -> Result<Self, RoughSetError> {
        if df.height() == 0 {
            return Err(RoughSetError::EmptyTable);
        }

        let mut columns = Vec::new();
        let mut seen_names = HashSet::new();
        for name in roles.all_columns() {
            if !seen_names.insert(name.clone()) {
                continue;
            }
            let column = frame_column(df, &name)?;
            columns.push((name.clone(), materialize(&name, column)?));
        }

        let table = Self {
            roles,
            height: df.height(),
            columns,
        };

        let mut seen = HashSet::with_capacity(table.height);
        for id in table.identifiers()? {
            if !seen.insert(id) {
                return Err(RoughSetError::DuplicateIdentifier {
                    column: table.roles.id_column.clone(),
                    value: id.to_string(),
                });
            }
        }

        Ok(table)
    }

    pub fn roles(&self) -> &ColumnRoles {
        &self.roles
    }

    /// Number of object rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cells of a named column, in row order.
    pub fn column(&self, name: &str) -> Result<&[Value], RoughSetError> {
        self.columns
            .iter()
            .find(|(col, _)| col == name)
            .map(|(_, cells)| cells.as_slice())
            .ok_or_else(|| RoughSetError::ColumnNotFound {
                column: name.to_string(),
                available: self.column_names(),
            })
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|(name, _)| name.clone()).collect()
    }

    /// The identifier column, in row order.
    pub fn identifiers(&self) -> Result<&[Value], RoughSetError> {
        self.column(&self.roles.id_column)
    }

    /// The decision column, in row order.
    pub fn decisions(&self) -> Result<&[Value], RoughSetError> {
        self.column(&self.roles.decision_column)
    }

    /// Decision equivalence classes: decision value -> identifiers holding it.
    pub fn decision_classes(&self) -> Result<BTreeMap<Value, BTreeSet<Value>>, RoughSetError> {
        let ids = self.identifiers()?;
        let decisions = self.decisions()?;
        let mut classes: BTreeMap<Value, BTreeSet<Value>> = BTreeMap::new();
        for (id, decision) in ids.iter().zip(decisions.iter()) {
            classes
                .entry(decision.clone())
                .or_default()
                .insert(id.clone());
        }
        Ok(classes)
    }

    /// Distinct decision values in first-occurrence order.
    pub fn unique_decision_values(&self) -> Result<Vec<Value>, RoughSetError> {
        let mut seen = HashSet::new();
        let mut unique = Vec::new();
        for value in self.decisions()? {
            if seen.insert(value.clone()) {
                unique.push(value.clone());
            }
        }
        Ok(unique)
    }

    /// Identifiers sharing the given decision value.
    ///
    /// The value must occur at least once in the decision column.
    pub fn decision_class(&self, value: &Value) -> Result<BTreeSet<Value>, RoughSetError> {
        let ids = self.identifiers()?;
        let decisions = self.decisions()?;
        let class: BTreeSet<Value> = ids
            .iter()
            .zip(decisions.iter())
            .filter(|(_, decision)| *decision == value)
            .map(|(id, _)| id.clone())
            .collect();
        if class.is_empty() {
            return Err(RoughSetError::UnknownDecisionValue {
                column: self.roles.decision_column.clone(),
                value: value.to_string(),
            });
        }
        Ok(class)
    }

    /// The full object-identifier set.
    pub fn universe(&self) -> Result<BTreeSet<Value>, RoughSetError> {
        Ok(self.identifiers()?.iter().cloned().collect())
    }
}

fn frame_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, RoughSetError> {
    df.column(name).map_err(|_| RoughSetError::ColumnNotFound {
        column: name.to_string(),
        available: df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect(),
    })
}

fn materialize(name: &str, column: &Column) -> Result<Vec<Value>, RoughSetError> {
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

/// Look up every cell of `columns` at row `row`.
pub(crate) fn row_key(
    table: &DecisionTable,
    columns: &[String],
    row: usize,
) -> Result<Vec<Value>, RoughSetError> {
    columns
        .iter()
        .map(|name| Ok(table.column(name)?[row].clone()))
        .collect()
}
