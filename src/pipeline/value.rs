//! Discrete cell values with non-coercing equality.
//!
//! Decision tables are symbolic: two cells are equal only when they hold the
//! same variant and the same value. An integer 1 never equals the string "1",
//! and a null cell equals another null cell and nothing else. Floats use
//! total-order semantics so they can live in keys and sets.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use polars::prelude::AnyValue;

/// A single cell of a decision table or rule.
#[derive(Debug, Clone)]
pub enum Value {
    /// Missing cell; equal only to another missing cell
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Convert a polars `AnyValue` into a `Value`.
    ///
    /// Returns `None` for dtypes outside the symbolic set (nested types,
    /// temporal types, and `u64` values that do not fit in `i64`).
    pub fn from_any(value: &AnyValue) -> Option<Value> {
        match value {
            AnyValue::Null => Some(Value::Null),
            AnyValue::Boolean(b) => Some(Value::Bool(*b)),
            AnyValue::String(s) => Some(Value::Str((*s).to_string())),
            AnyValue::StringOwned(s) => Some(Value::Str(s.to_string())),
            AnyValue::Int8(v) => Some(Value::Int(i64::from(*v))),
            AnyValue::Int16(v) => Some(Value::Int(i64::from(*v))),
            AnyValue::Int32(v) => Some(Value::Int(i64::from(*v))),
            AnyValue::Int64(v) => Some(Value::Int(*v)),
            AnyValue::UInt8(v) => Some(Value::Int(i64::from(*v))),
            AnyValue::UInt16(v) => Some(Value::Int(i64::from(*v))),
            AnyValue::UInt32(v) => Some(Value::Int(i64::from(*v))),
            AnyValue::UInt64(v) => i64::try_from(*v).ok().map(Value::Int),
            AnyValue::Float32(v) => Some(Value::Float(f64::from(*v))),
            AnyValue::Float64(v) => Some(Value::Float(*v)),
            _ => None,
        }
    }

    /// Convert back into an owned `AnyValue` for DataFrame construction.
    pub fn to_any(&self) -> AnyValue<'static> {
        match self {
            Value::Null => AnyValue::Null,
            Value::Bool(b) => AnyValue::Boolean(*b),
            Value::Int(v) => AnyValue::Int64(*v),
            Value::Float(v) => AnyValue::Float64(*v),
            Value::Str(s) => AnyValue::StringOwned(s.as_str().into()),
        }
    }

    /// Render as a JSON value for report export.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(v) => serde_json::Value::from(*v),
            Value::Float(v) => serde_json::Value::from(*v),
            Value::Str(s) => serde_json::Value::from(s.as_str()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    fn variant_rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) => 2,
            Value::Float(_) => 3,
            Value::Str(_) => 4,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b) == Ordering::Equal,
            (Value::Str(a), Value::Str(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.variant_rank());
        match self {
            Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Int(v) => v.hash(state),
            Value::Float(v) => state.write_u64(v.to_bits()),
            Value::Str(s) => s.hash(state),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::Str(a), Value::Str(b)) => a.cmp(b),
            _ => self.variant_rank().cmp(&other.variant_rank()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, ""),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::NamedFrom;

    #[test]
    fn test_no_cross_type_coercion() {
        assert_ne!(Value::Int(1), Value::Str("1".to_string()));
        assert_ne!(Value::Int(1), Value::Float(1.0));
        assert_ne!(Value::Bool(true), Value::Int(1));
    }

    #[test]
    fn test_null_equals_only_null() {
        assert_eq!(Value::Null, Value::Null);
        assert_ne!(Value::Null, Value::Int(0));
        assert_ne!(Value::Null, Value::Str(String::new()));
    }

    #[test]
    fn test_from_any_integer_widths() {
        assert_eq!(Value::from_any(&AnyValue::Int8(3)), Some(Value::Int(3)));
        assert_eq!(Value::from_any(&AnyValue::UInt32(3)), Some(Value::Int(3)));
        assert_eq!(
            Value::from_any(&AnyValue::UInt64(u64::MAX)),
            None,
            "u64 values beyond i64 range are unsupported"
        );
    }

    #[test]
    fn test_from_any_rejects_nested_types() {
        let nested = AnyValue::List(polars::prelude::Series::new("x".into(), [1i64, 2]));
        assert_eq!(Value::from_any(&nested), None);
    }

    #[test]
    fn test_any_value_round_trip() {
        for value in [
            Value::Null,
            Value::Bool(true),
            Value::Int(-5),
            Value::Float(2.5),
            Value::Str("晴".to_string()),
        ] {
            let back = Value::from_any(&value.to_any()).unwrap();
            assert_eq!(back, value);
        }
    }

    #[test]
    fn test_ordering_is_total() {
        let mut values = vec![
            Value::Str("b".to_string()),
            Value::Int(2),
            Value::Null,
            Value::Float(1.5),
            Value::Int(1),
        ];
        values.sort();
        assert_eq!(values[0], Value::Null);
        assert_eq!(values[1], Value::Int(1));
    }
}
