//! Range scan

use serde::Serialize;

use crate::error::Result;
use crate::types::{LogId, PrimaryKey, Row};
use crate::wire;

use super::key::{decode_key, decode_rows, encode_key};
use super::Operation;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScanParams {
    pub table_name: String,
    /// Columns to return; empty means all
    pub columns: Vec<String>,
    /// Left unset on the wire when `None`
    pub strong_consistent: Option<bool>,
    /// Inclusive lower bound
    pub start_key: Option<PrimaryKey>,
    /// Exclusive upper bound
    pub end_key: Option<PrimaryKey>,
    pub limit: Option<i32>,
}

impl ScanParams {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Default::default()
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

    pub fn start_key(mut self, key: PrimaryKey) -> Self {
        self.start_key = Some(key);
        self
    }

    pub fn end_key(mut self, key: PrimaryKey) -> Self {
        self.end_key = Some(key);
        self
    }

    pub fn limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Continue a scan from where a previous page stopped
    pub fn resume_from(mut self, output: &ScanOutput) -> Self {
        self.start_key = output.next_start_key.clone();
        self
    }
}

/// One page of scan results
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanOutput {
    pub rows: Vec<Row>,

    /// Where the next page starts; `None` once the scan reached the end
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_start_key: Option<PrimaryKey>,
}

impl ScanOutput {
    pub fn is_complete(&self) -> bool {
        self.next_start_key.is_none()
    }
}

pub struct Scan;

impl Operation for Scan {
    const NAME: &'static str = "Scan";
    type Params = ScanParams;
    type Request = wire::ScanRequest;
    type Response = wire::ScanResponse;
    type Output = ScanOutput;

    fn build_request(params: &Self::Params, log_id: LogId) -> Self::Request {
        wire::ScanRequest {
            log_id: log_id.to_wire(),
            table_name: params.table_name.clone(),
            column_names: params.columns.clone(),
            is_strong_consistent_read: params.strong_consistent,
            inclusive_start_key: params.start_key.as_ref().map(encode_key),
            exclusive_end_key: params.end_key.as_ref().map(encode_key),
            limit: params.limit,
        }
    }

    fn parse_payload(response: Self::Response) -> Result<Self::Output> {
        Ok(ScanOutput {
            rows: decode_rows(&response.rows)?,
            next_start_key: response.next_start_key.as_ref().map(decode_key).transpose()?,
        })
    }
}
