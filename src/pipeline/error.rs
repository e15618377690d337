//! Error types for decision-table validation and rough-set queries.
//!
//! Every variant corresponds to a caller-side contract violation that is
//! detected eagerly, before any partial result is produced.

use thiserror::Error;

/// Errors raised by the rough-set engine.
#[derive(Debug, Error)]
pub enum RoughSetError {
    /// A named column is absent from the table schema.
    #[error("column '{column}' not found in table columns {available:?}")]
    ColumnNotFound {
        /// The missing column name
        column: String,
        /// Columns that do exist in the table
        available: Vec<String>,
    },

    /// The identifier column contains a repeated value.
    #[error("identifier column '{column}' has duplicate value '{value}'")]
    DuplicateIdentifier {
        /// Name of the identifier column
        column: String,
        /// The first value seen more than once
        value: String,
    },

    /// The table has no rows, so no partition or ratio is defined over it.
    #[error("table has no rows")]
    EmptyTable,

    /// A role column has a dtype outside the supported symbolic set.
    #[error("column '{column}' has unsupported type {dtype}")]
    UnsupportedColumnType {
        /// Name of the offending column
        column: String,
        /// The polars dtype that could not be converted
        dtype: String,
    },

    /// A partition was requested over an empty attribute list.
    #[error("attribute set is empty")]
    EmptyAttributeSet,

    /// A requested decision value does not occur in the decision column.
    #[error("decision value '{value}' does not occur in column '{column}'")]
    UnknownDecisionValue {
        /// Name of the decision column
        column: String,
        /// The value that was requested
        value: String,
    },
}
