//! Key and row codec
//!
//! Composes primary keys and rows out of tagged scalars, and takes them
//! apart again.

use std::collections::BTreeMap;

use crate::error::{CodecError, Result};
use crate::types::{PrimaryKey, Row, ScalarValue};
use crate::wire;

use super::scalar::{decode_value, encode_value};

// =============================================================================
// Primary Keys
// =============================================================================

/// Encode a primary key. The row key goes out iff it is present.
pub fn encode_key(key: &PrimaryKey) -> wire::PrimaryKey {
    wire::PrimaryKey {
        partition_key: Some(encode_value(&key.partition_key)),
        row_key: key.row_key.as_ref().map(encode_value),
    }
}

/// Decode a primary key. The row key comes back iff the wire carries one.
pub fn decode_key(key: &wire::PrimaryKey) -> Result<PrimaryKey> {
    let partition_key = key
        .partition_key
        .as_ref()
        .ok_or(CodecError::MissingField("partition_key"))?;

    Ok(PrimaryKey {
        partition_key: decode_value(partition_key)?,
        row_key: key.row_key.as_ref().map(decode_value).transpose()?,
    })
}

// =============================================================================
// Rows
// =============================================================================

/// Encode attribute columns in caller order
pub fn encode_columns(columns: &[(String, ScalarValue)]) -> Vec<wire::Column> {
    columns
        .iter()
        .map(|(name, value)| wire::Column {
            column_name: name.clone(),
            column_value: Some(encode_value(value)),
        })
        .collect()
}

pub fn encode_row(key: &PrimaryKey, columns: &[(String, ScalarValue)]) -> wire::Row {
    wire::Row {
        primary_key: Some(encode_key(key)),
        attribute_columns: encode_columns(columns),
    }
}

/// Decode attribute columns into a name map; a repeated name keeps the last value
pub fn decode_columns(columns: &[wire::Column]) -> Result<BTreeMap<String, ScalarValue>> {
    let mut decoded = BTreeMap::new();
    for column in columns {
        let value = column
            .column_value
            .as_ref()
            .ok_or(CodecError::MissingField("column_value"))?;
        decoded.insert(column.column_name.clone(), decode_value(value)?);
    }
    Ok(decoded)
}

pub fn decode_row(row: &wire::Row) -> Result<Row> {
    let key = row
        .primary_key
        .as_ref()
        .ok_or(CodecError::MissingField("primary_key"))?;

    Ok(Row {
        key: decode_key(key)?,
        columns: decode_columns(&row.attribute_columns)?,
    })
}

pub fn decode_rows(rows: &[wire::Row]) -> Result<Vec<Row>> {
    rows.iter().map(decode_row).collect()
}
