//! Dynamic value adapters
//!
//! Build typed parameters out of loosely-typed `serde_json::Value`s, using
//! the runtime shape of each value to pick its scalar type:
//!
//! | JSON value                 | Result                      |
//! |----------------------------|-----------------------------|
//! | string                     | `ScalarValue::String`       |
//! | bool                       | `ScalarValue::Boolean`      |
//! | number, `n % 1 == 0`       | `ScalarValue::Int64`        |
//! | number, fractional         | `ScalarValue::Double`       |
//! | null / array / object      | `UnsupportedType`           |
//!
//! A column or row object whose `action` field equals `"DELETE"` is a
//! delete marker.

use serde_json::{Map, Number, Value};

use crate::error::{CodecError, Result};
use crate::types::{ColumnUpdate, PrimaryKey, RowWrite, ScalarValue};

const DELETE_ACTION: &str = "DELETE";

/// Infer a scalar from a JSON value
pub fn scalar(value: &Value) -> Result<ScalarValue> {
    match value {
        Value::String(s) => Ok(ScalarValue::String(s.clone())),
        Value::Bool(b) => Ok(ScalarValue::Boolean(*b)),
        Value::Number(n) => number(n),
        Value::Null => Err(CodecError::UnsupportedType("null".to_string())),
        Value::Array(_) => Err(CodecError::UnsupportedType("array".to_string())),
        Value::Object(_) => Err(CodecError::UnsupportedType("object".to_string())),
    }
}

fn number(n: &Number) -> Result<ScalarValue> {
    // Integers that fit keep full precision; everything else takes the
    // modulo-one test on its f64 value.
    if let Some(i) = n.as_i64() {
        return Ok(ScalarValue::Int64(i));
    }
    n.as_f64()
        .map(ScalarValue::from_number)
        .ok_or_else(|| CodecError::UnsupportedType(format!("number {}", n)))
}

fn is_delete(value: &Value) -> bool {
    value.get("action").and_then(Value::as_str) == Some(DELETE_ACTION)
}

fn present<'a>(object: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    object.get(field).filter(|v| !v.is_null())
}

fn as_object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| CodecError::UnsupportedType(format!("{} must be an object", what)))
}

/// `{ "partitionKey": .., "rowKey"?: .. }`
///
/// A `rowKey` that is present and not null is kept, including `false` and `0`.
pub fn primary_key(value: &Value) -> Result<PrimaryKey> {
    let object = as_object(value, "key")?;
    let partition_key = present(object, "partitionKey")
        .ok_or(CodecError::MissingField("partitionKey"))?;

    Ok(PrimaryKey {
        partition_key: scalar(partition_key)?,
        row_key: present(object, "rowKey").map(scalar).transpose()?,
    })
}

/// One UpdateRow column: a delete marker or a value to put
pub fn column_update(name: &str, value: &Value) -> Result<ColumnUpdate> {
    if is_delete(value) {
        Ok(ColumnUpdate::delete(name))
    } else {
        Ok(ColumnUpdate::put(name, scalar(value)?))
    }
}

/// All UpdateRow columns of a `name -> value | {action: "DELETE"}` object
pub fn update_columns(columns: &Map<String, Value>) -> Result<Vec<ColumnUpdate>> {
    columns
        .iter()
        .map(|(name, value)| column_update(name, value))
        .collect()
}

/// PutRow columns: `[{ "columnName": .., "columnValue": .. }, ..]`
pub fn put_columns(value: &Value) -> Result<Vec<(String, ScalarValue)>> {
    let entries = value
        .as_array()
        .ok_or_else(|| CodecError::UnsupportedType("columns must be an array".to_string()))?;

    entries
        .iter()
        .map(|entry| -> Result<(String, ScalarValue)> {
            let object = as_object(entry, "column")?;
            let name = object
                .get("columnName")
                .and_then(Value::as_str)
                .ok_or(CodecError::MissingField("columnName"))?;
            let value = object
                .get("columnValue")
                .ok_or(CodecError::MissingField("columnValue"))?;
            Ok((name.to_string(), scalar(value)?))
        })
        .collect()
}

/// One BatchWriteRow entry.
///
/// - `{key, action: "DELETE", columns: [names]}` removes the named columns
/// - `{key, action: "DELETE"}` removes the whole row
/// - `{key, columns: {name: value}}` writes the row
pub fn row_write(value: &Value) -> Result<RowWrite> {
    let object = as_object(value, "row")?;
    let key = primary_key(object.get("key").ok_or(CodecError::MissingField("key"))?)?;

    if is_delete(value) {
        let columns = match present(object, "columns") {
            Some(names) => Some(column_names(names)?),
            None => None,
        };
        return Ok(RowWrite::Delete { key, columns });
    }

    let columns = match present(object, "columns") {
        Some(columns) => as_object(columns, "columns")?
            .iter()
            .map(|(name, value)| scalar(value).map(|v| (name.clone(), v)))
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };
    Ok(RowWrite::Put { key, columns })
}

fn column_names(value: &Value) -> Result<Vec<String>> {
    let names = value
        .as_array()
        .ok_or_else(|| CodecError::UnsupportedType("column names must be an array".to_string()))?;

    names
        .iter()
        .map(|name| {
            name.as_str()
                .map(str::to_string)
                .ok_or_else(|| CodecError::UnsupportedType("column name must be a string".to_string()))
        })
        .collect()
}
