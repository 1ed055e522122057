//! Primary key

use serde::Serialize;

use super::ScalarValue;

/// Partition key plus an optional row key
///
/// Row key presence is structural: `Some(Boolean(false))` or `Some(Int64(0))`
/// is a present row key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryKey {
    pub partition_key: ScalarValue,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_key: Option<ScalarValue>,
}

impl PrimaryKey {
    /// Key with a partition key only
    pub fn new(partition_key: impl Into<ScalarValue>) -> Self {
        Self {
            partition_key: partition_key.into(),
            row_key: None,
        }
    }

    /// Key with both partition and row key
    pub fn with_row_key(
        partition_key: impl Into<ScalarValue>,
        row_key: impl Into<ScalarValue>,
    ) -> Self {
        Self {
            partition_key: partition_key.into(),
            row_key: Some(row_key.into()),
        }
    }
}
