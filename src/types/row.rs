//! Rows, column updates and batch row writes

use std::collections::BTreeMap;

use serde::Serialize;

use super::{PrimaryKey, ScalarValue};

/// A decoded row: key plus attribute columns keyed by name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub key: PrimaryKey,
    pub columns: BTreeMap<String, ScalarValue>,
}

impl Row {
    /// Look up an attribute column by name
    pub fn get(&self, name: &str) -> Option<&ScalarValue> {
        self.columns.get(name)
    }
}

/// One entry of an update: set a column or remove it
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnUpdate {
    Put { name: String, value: ScalarValue },
    Delete { name: String },
}

impl ColumnUpdate {
    pub fn put(name: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        ColumnUpdate::Put {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn delete(name: impl Into<String>) -> Self {
        ColumnUpdate::Delete { name: name.into() }
    }

    pub fn name(&self) -> &str {
        match self {
            ColumnUpdate::Put { name, .. } | ColumnUpdate::Delete { name } => name,
        }
    }
}

/// One row operation inside a batch write
#[derive(Debug, Clone, PartialEq)]
pub enum RowWrite {
    /// Write the row with the given attribute columns
    Put {
        key: PrimaryKey,
        columns: Vec<(String, ScalarValue)>,
    },

    /// `columns: None` removes the whole row; `Some(names)` removes only
    /// the named columns (an empty list still goes out as a column update)
    Delete {
        key: PrimaryKey,
        columns: Option<Vec<String>>,
    },
}

impl RowWrite {
    pub fn put(key: PrimaryKey, columns: Vec<(String, ScalarValue)>) -> Self {
        RowWrite::Put { key, columns }
    }

    pub fn delete_row(key: PrimaryKey) -> Self {
        RowWrite::Delete { key, columns: None }
    }

    pub fn delete_columns<I, S>(key: PrimaryKey, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RowWrite::Delete {
            key,
            columns: Some(names.into_iter().map(Into::into).collect()),
        }
    }

    pub fn key(&self) -> &PrimaryKey {
        match self {
            RowWrite::Put { key, .. } | RowWrite::Delete { key, .. } => key,
        }
    }
}
