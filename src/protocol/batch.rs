//! Batch operations
//!
//! Both batch requests wrap exactly one group. The outer envelope and the
//! group (and, for writes, every sub-request) share the same table name
//! and log id.
//!
//! ## BatchWriteRow Partitioning
//! ```text
//! RowWrite::Put                      -> put_rows
//! RowWrite::Delete { Some(names) }   -> update_rows (one DELETE per name)
//! RowWrite::Delete { None }          -> delete_rows
//! ```

use crate::error::Result;
use crate::types::{ColumnUpdate, LogId, PrimaryKey, Row, RowWrite};
use crate::wire;

use super::key::{decode_rows, encode_key, encode_row};
use super::row_ops::encode_update;
use super::status::{check_status, single_group};
use super::Operation;

// =============================================================================
// BatchGetRow
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct BatchGetRowParams {
    pub table_name: String,
    pub keys: Vec<PrimaryKey>,
    /// Columns to return; empty means all
    pub columns: Vec<String>,
    /// Defaults to `false` on the wire when unset
    pub strong_consistent: Option<bool>,
}

impl BatchGetRowParams {
    pub fn new(table_name: impl Into<String>, keys: Vec<PrimaryKey>) -> Self {
        Self {
            table_name: table_name.into(),
            keys,
            columns: Vec::new(),
            strong_consistent: None,
        }
    }

    pub fn columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn strong_consistent(mut self, strong: bool) -> Self {
        self.strong_consistent = Some(strong);
        self
    }
}

pub struct BatchGetRow;

impl Operation for BatchGetRow {
    const NAME: &'static str = "BatchGetRow";
    type Params = BatchGetRowParams;
    type Request = wire::BatchGetRowRequest;
    type Response = wire::BatchGetRowResponse;
    type Output = Vec<Row>;

    fn build_request(params: &Self::Params, log_id: LogId) -> Self::Request {
        let log_id = log_id.to_wire();
        let group = wire::GetRowsRequest {
            log_id,
            table_name: params.table_name.clone(),
            primary_keys: params.keys.iter().map(encode_key).collect(),
            column_names: params.columns.clone(),
            is_strong_consistent_read: Some(params.strong_consistent.unwrap_or(false)),
        };

        wire::BatchGetRowRequest {
            log_id,
            get_rows: vec![group],
        }
    }

    fn parse_payload(response: Self::Response) -> Result<Self::Output> {
        let group = single_group(response.get_rows, "get_rows")?;
        check_status(&group)?;
        decode_rows(&group.rows)
    }
}

// =============================================================================
// BatchWriteRow
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct BatchWriteRowParams {
    pub table_name: String,
    pub rows: Vec<RowWrite>,
}

impl BatchWriteRowParams {
    pub fn new(table_name: impl Into<String>, rows: Vec<RowWrite>) -> Self {
        Self {
            table_name: table_name.into(),
            rows,
        }
    }

    pub fn row(mut self, row: RowWrite) -> Self {
        self.rows.push(row);
        self
    }
}

pub struct BatchWriteRow;

impl Operation for BatchWriteRow {
    const NAME: &'static str = "BatchWriteRow";
    type Params = BatchWriteRowParams;
    type Request = wire::BatchWriteRowRequest;
    type Response = wire::BatchWriteRowResponse;
    type Output = ();

    fn build_request(params: &Self::Params, log_id: LogId) -> Self::Request {
        let log_id = log_id.to_wire();
        let table_name = &params.table_name;

        let mut put_rows = Vec::new();
        let mut update_rows = Vec::new();
        let mut delete_rows = Vec::new();

        for row in &params.rows {
            match row {
                RowWrite::Put { key, columns } => put_rows.push(wire::PutRowRequest {
                    log_id,
                    table_name: table_name.clone(),
                    row: Some(encode_row(key, columns)),
                }),
                RowWrite::Delete {
                    key,
                    columns: Some(names),
                } => update_rows.push(wire::UpdateRowRequest {
                    log_id,
                    table_name: table_name.clone(),
                    primary_key: Some(encode_key(key)),
                    column_updates: names
                        .iter()
                        .map(|name| encode_update(&ColumnUpdate::delete(name.as_str())))
                        .collect(),
                }),
                RowWrite::Delete { key, columns: None } => {
                    delete_rows.push(wire::DeleteRowRequest {
                        log_id,
                        table_name: table_name.clone(),
                        primary_key: Some(encode_key(key)),
                    })
                }
            }
        }

        tracing::trace!(
            puts = put_rows.len(),
            updates = update_rows.len(),
            deletes = delete_rows.len(),
            "Partitioned batch write"
        );

        wire::BatchWriteRowRequest {
            log_id,
            write_rows: vec![wire::WriteRowsRequest {
                log_id,
                table_name: table_name.clone(),
                put_rows,
                update_rows,
                delete_rows,
            }],
        }
    }

    fn parse_payload(response: Self::Response) -> Result<Self::Output> {
        let group = single_group(response.write_rows, "write_rows")?;
        check_status(&group)
    }
}
