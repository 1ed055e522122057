//! Table schema and description

use std::fmt;

use serde::{Serialize, Serializer};

use super::ColumnType;

/// Key layout of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSchema {
    pub partition_key_type: ColumnType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_key_type: Option<ColumnType>,
}

impl TableSchema {
    pub fn new(partition_key_type: ColumnType) -> Self {
        Self {
            partition_key_type,
            row_key_type: None,
        }
    }

    pub fn with_row_key(partition_key_type: ColumnType, row_key_type: ColumnType) -> Self {
        Self {
            partition_key_type,
            row_key_type: Some(row_key_type),
        }
    }
}

/// Reserved read/write capacity of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionedThroughput {
    pub read_capacity_units: u64,
    pub write_capacity_units: u64,
}

impl ProvisionedThroughput {
    pub fn new(read_capacity_units: u64, write_capacity_units: u64) -> Self {
        Self {
            read_capacity_units,
            write_capacity_units,
        }
    }
}

/// Lifecycle state of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Creating,
    Updating,
    Deleting,
    Active,
    Inactive,
    /// A status code this client does not know
    Unknown(i32),
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableStatus::Creating => f.write_str("creating"),
            TableStatus::Updating => f.write_str("updating"),
            TableStatus::Deleting => f.write_str("deleting"),
            TableStatus::Active => f.write_str("active"),
            TableStatus::Inactive => f.write_str("inactive"),
            TableStatus::Unknown(code) => write!(f, "UnKnown:{}", code),
        }
    }
}

impl Serialize for TableStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Table metadata as reported by the service
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDescription {
    pub table_id: String,
    pub table_name: String,
    #[serde(rename = "tableStatus")]
    pub status: TableStatus,
    pub schema: TableSchema,
    #[serde(rename = "creationDateTime")]
    pub creation_time: i64,
    pub provisioned_throughput: ProvisionedThroughput,
}
