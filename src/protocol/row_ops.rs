//! Single-row operations
//!
//! PutRow, GetRow, DeleteRow and UpdateRow each address one row by its
//! primary key. Only GetRow has a payload in its response.

use crate::error::Result;
use crate::types::{ColumnUpdate, LogId, PrimaryKey, Row, ScalarValue};
use crate::wire;

use super::key::{decode_row, encode_key, encode_row};
use super::scalar::encode_value;
use super::Operation;

// =============================================================================
// Parameters
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct PutRowParams {
    pub table_name: String,
    pub key: PrimaryKey,
    pub columns: Vec<(String, ScalarValue)>,
}

impl PutRowParams {
    pub fn new(table_name: impl Into<String>, key: PrimaryKey) -> Self {
        Self {
            table_name: table_name.into(),
            key,
            columns: Vec::new(),
        }
    }

    /// Append an attribute column
    pub fn column(mut self, name: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        self.columns.push((name.into(), value.into()));
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetRowParams {
    pub table_name: String,
    pub key: PrimaryKey,
    /// Columns to return; empty means all
    pub columns: Vec<String>,
    /// Defaults to `false` on the wire when unset
    pub strong_consistent: Option<bool>,
}

impl GetRowParams {
    pub fn new(table_name: impl Into<String>, key: PrimaryKey) -> Self {
        Self {
            table_name: table_name.into(),
            key,
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

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteRowParams {
    pub table_name: String,
    pub key: PrimaryKey,
}

impl DeleteRowParams {
    pub fn new(table_name: impl Into<String>, key: PrimaryKey) -> Self {
        Self {
            table_name: table_name.into(),
            key,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRowParams {
    pub table_name: String,
    pub key: PrimaryKey,
    pub updates: Vec<ColumnUpdate>,
}

impl UpdateRowParams {
    pub fn new(table_name: impl Into<String>, key: PrimaryKey) -> Self {
        Self {
            table_name: table_name.into(),
            key,
            updates: Vec::new(),
        }
    }

    pub fn put(mut self, name: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        self.updates.push(ColumnUpdate::put(name, value));
        self
    }

    pub fn delete(mut self, name: impl Into<String>) -> Self {
        self.updates.push(ColumnUpdate::delete(name));
        self
    }
}

// =============================================================================
// Operations
// =============================================================================

pub struct PutRow;

impl Operation for PutRow {
    const NAME: &'static str = "PutRow";
    type Params = PutRowParams;
    type Request = wire::PutRowRequest;
    type Response = wire::PutRowResponse;
    type Output = ();

    fn build_request(params: &Self::Params, log_id: LogId) -> Self::Request {
        wire::PutRowRequest {
            log_id: log_id.to_wire(),
            table_name: params.table_name.clone(),
            row: Some(encode_row(&params.key, &params.columns)),
        }
    }

    fn parse_payload(_response: Self::Response) -> Result<Self::Output> {
        Ok(())
    }
}

pub struct GetRow;

impl Operation for GetRow {
    const NAME: &'static str = "GetRow";
    type Params = GetRowParams;
    type Request = wire::GetRowRequest;
    type Response = wire::GetRowResponse;
    /// `None` when the service found no such row
    type Output = Option<Row>;

    fn build_request(params: &Self::Params, log_id: LogId) -> Self::Request {
        wire::GetRowRequest {
            log_id: log_id.to_wire(),
            table_name: params.table_name.clone(),
            primary_key: Some(encode_key(&params.key)),
            column_names: params.columns.clone(),
            is_strong_consistent_read: Some(params.strong_consistent.unwrap_or(false)),
        }
    }

    fn parse_payload(response: Self::Response) -> Result<Self::Output> {
        response.row.as_ref().map(decode_row).transpose()
    }
}

pub struct DeleteRow;

impl Operation for DeleteRow {
    const NAME: &'static str = "DeleteRow";
    type Params = DeleteRowParams;
    type Request = wire::DeleteRowRequest;
    type Response = wire::DeleteRowResponse;
    type Output = ();

    fn build_request(params: &Self::Params, log_id: LogId) -> Self::Request {
        wire::DeleteRowRequest {
            log_id: log_id.to_wire(),
            table_name: params.table_name.clone(),
            primary_key: Some(encode_key(&params.key)),
        }
    }

    fn parse_payload(_response: Self::Response) -> Result<Self::Output> {
        Ok(())
    }
}

pub struct UpdateRow;

impl Operation for UpdateRow {
    const NAME: &'static str = "UpdateRow";
    type Params = UpdateRowParams;
    type Request = wire::UpdateRowRequest;
    type Response = wire::UpdateRowResponse;
    type Output = ();

    fn build_request(params: &Self::Params, log_id: LogId) -> Self::Request {
        wire::UpdateRowRequest {
            log_id: log_id.to_wire(),
            table_name: params.table_name.clone(),
            primary_key: Some(encode_key(&params.key)),
            column_updates: params.updates.iter().map(encode_update).collect(),
        }
    }

    fn parse_payload(_response: Self::Response) -> Result<Self::Output> {
        Ok(())
    }
}

/// Encode one column update; DELETE entries carry no value
pub(crate) fn encode_update(update: &ColumnUpdate) -> wire::ColumnUpdate {
    match update {
        ColumnUpdate::Put { name, value } => wire::ColumnUpdate {
            column_name: name.clone(),
            action: wire::ActionType::Put as i32,
            column_value: Some(encode_value(value)),
        },
        ColumnUpdate::Delete { name } => wire::ColumnUpdate {
            column_name: name.clone(),
            action: wire::ActionType::Delete as i32,
            column_value: None,
        },
    }
}
