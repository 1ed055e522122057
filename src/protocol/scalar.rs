//! Scalar codec
//!
//! Maps [`ScalarValue`] and [`ColumnType`] to and from the tagged wire
//! scalar. Pure and stateless.
//!
//! ## Wire Format
//! ```text
//! ┌───────────────┬──────────────────────────────────────────┐
//! │ column_type   │ exactly one of                           │
//! │ (enum, req.)  │ string_value / int64_value /             │
//! │               │ bool_value / double_value                │
//! └───────────────┴──────────────────────────────────────────┘
//! ```

use crate::error::{CodecError, Result};
use crate::types::{ColumnType, ScalarValue};
use crate::wire;

// =============================================================================
// Column Types
// =============================================================================

/// Wire enum value for a column type
pub fn encode_column_type(column_type: ColumnType) -> i32 {
    let wire_type = match column_type {
        ColumnType::String => wire::ColumnType::String,
        ColumnType::Int64 => wire::ColumnType::Int64,
        ColumnType::Boolean => wire::ColumnType::Boolean,
        ColumnType::Double => wire::ColumnType::Double,
    };
    wire_type as i32
}

/// Wire enum value for a schema type name such as `"INT64"`
pub fn encode_column_type_name(name: &str) -> Result<i32> {
    name.parse::<ColumnType>().map(encode_column_type)
}

/// Column type for a wire enum value; unknown values are rejected
pub fn decode_column_type(raw: i32) -> Result<ColumnType> {
    match wire::ColumnType::try_from(raw) {
        Ok(wire::ColumnType::String) => Ok(ColumnType::String),
        Ok(wire::ColumnType::Int64) => Ok(ColumnType::Int64),
        Ok(wire::ColumnType::Boolean) => Ok(ColumnType::Boolean),
        Ok(wire::ColumnType::Double) => Ok(ColumnType::Double),
        Err(_) => Err(CodecError::UnknownValueType(raw)),
    }
}

// =============================================================================
// Values
// =============================================================================

/// Encode a value as a tagged wire scalar
pub fn encode_value(value: &ScalarValue) -> wire::ColumnValue {
    let mut encoded = wire::ColumnValue {
        column_type: encode_column_type(value.column_type()),
        ..Default::default()
    };

    match value {
        ScalarValue::String(s) => encoded.string_value = Some(s.clone()),
        ScalarValue::Int64(v) => encoded.int64_value = Some(*v),
        ScalarValue::Boolean(v) => encoded.bool_value = Some(*v),
        ScalarValue::Double(v) => encoded.double_value = Some(*v),
    }

    encoded
}

/// Decode a tagged wire scalar.
///
/// The tag alone selects the field. A selected field that is absent reads
/// as its protobuf default, the same as any unset proto2 optional.
pub fn decode_value(value: &wire::ColumnValue) -> Result<ScalarValue> {
    let decoded = match decode_column_type(value.column_type)? {
        ColumnType::String => ScalarValue::String(value.string_value.clone().unwrap_or_default()),
        ColumnType::Int64 => ScalarValue::Int64(value.int64_value.unwrap_or_default()),
        ColumnType::Boolean => ScalarValue::Boolean(value.bool_value.unwrap_or_default()),
        ColumnType::Double => ScalarValue::Double(value.double_value.unwrap_or_default()),
    };
    Ok(decoded)
}
