//! Scalar values and column types

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{CodecError, Result};

/// Declared type of a key or column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnType {
    String,
    Int64,
    Boolean,
    Double,
}

impl ColumnType {
    /// Schema name of the type (`STRING`, `INT64`, `BOOLEAN`, `DOUBLE`)
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::String => "STRING",
            ColumnType::Int64 => "INT64",
            ColumnType::Boolean => "BOOLEAN",
            ColumnType::Double => "DOUBLE",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = CodecError;

    /// Parse a schema type name. Matching is exact and case-sensitive.
    fn from_str(name: &str) -> Result<Self> {
        match name {
            "STRING" => Ok(ColumnType::String),
            "INT64" => Ok(ColumnType::Int64),
            "BOOLEAN" => Ok(ColumnType::Boolean),
            "DOUBLE" => Ok(ColumnType::Double),
            other => Err(CodecError::UnsupportedColumnType(other.to_string())),
        }
    }
}

/// A single typed value: exactly one of string, int64, boolean or double
///
/// Serializes untagged, so a row's columns render as plain JSON values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    String(String),
    Int64(i64),
    Boolean(bool),
    Double(f64),
}

impl ScalarValue {
    /// Build a value from an untyped number.
    ///
    /// A number with no fractional remainder (`n % 1 == 0`) becomes `Int64`,
    /// anything else becomes `Double`. Magnitude is not considered: `5.0`
    /// and `1e20` are both integral, the latter saturating to `i64::MAX`.
    /// NaN and the infinities are never integral.
    pub fn from_number(value: f64) -> Self {
        if value % 1.0 == 0.0 {
            ScalarValue::Int64(value as i64)
        } else {
            ScalarValue::Double(value)
        }
    }

    /// The column type this value is tagged with on the wire
    pub fn column_type(&self) -> ColumnType {
        match self {
            ScalarValue::String(_) => ColumnType::String,
            ScalarValue::Int64(_) => ColumnType::Int64,
            ScalarValue::Boolean(_) => ColumnType::Boolean,
            ScalarValue::Double(_) => ColumnType::Double,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ScalarValue::Int64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ScalarValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ScalarValue::Double(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::String(s) => write!(f, "{:?}", s),
            ScalarValue::Int64(v) => write!(f, "{}", v),
            ScalarValue::Boolean(v) => write!(f, "{}", v),
            ScalarValue::Double(v) => write!(f, "{:?}", v),
        }
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::String(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::String(value.to_string())
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Int64(value)
    }
}

impl From<i32> for ScalarValue {
    fn from(value: i32) -> Self {
        ScalarValue::Int64(i64::from(value))
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Boolean(value)
    }
}

/// Always `Double`; use [`ScalarValue::from_number`] for integral inference
impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        ScalarValue::Double(value)
    }
}
