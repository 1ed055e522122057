//! Batch messages
//!
//! Each batch envelope nests a repeated group message. The client always
//! sends exactly one group and expects exactly one back.

use super::base::{ConsumedCapacity, PrimaryKey, Row};
use super::row::{DeleteRowRequest, PutRowRequest, UpdateRowRequest};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetRowsRequest {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
    #[prost(string, required, tag = "2")]
    pub table_name: String,
    #[prost(message, repeated, tag = "3")]
    pub primary_keys: Vec<PrimaryKey>,
    #[prost(string, repeated, tag = "4")]
    pub column_names: Vec<String>,
    #[prost(bool, optional, tag = "5")]
    pub is_strong_consistent_read: Option<bool>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BatchGetRowRequest {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
    #[prost(message, repeated, tag = "2")]
    pub get_rows: Vec<GetRowsRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetRowsResponse {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
    #[prost(int32, required, tag = "2")]
    pub code: i32,
    #[prost(string, required, tag = "3")]
    pub msg: String,
    #[prost(string, optional, tag = "4")]
    pub table_name: Option<String>,
    #[prost(message, repeated, tag = "5")]
    pub rows: Vec<Row>,
    #[prost(message, optional, tag = "6")]
    pub unprocessed_rows: Option<GetRowsRequest>,
    #[prost(message, optional, tag = "7")]
    pub consumed_capacity: Option<ConsumedCapacity>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BatchGetRowResponse {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
    #[prost(int32, required, tag = "2")]
    pub code: i32,
    #[prost(string, required, tag = "3")]
    pub msg: String,
    #[prost(message, repeated, tag = "4")]
    pub get_rows: Vec<GetRowsResponse>,
    #[prost(message, optional, tag = "5")]
    pub consumed_capacity: Option<ConsumedCapacity>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WriteRowsRequest {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
    #[prost(string, required, tag = "2")]
    pub table_name: String,
    #[prost(message, repeated, tag = "3")]
    pub put_rows: Vec<PutRowRequest>,
    #[prost(message, repeated, tag = "4")]
    pub update_rows: Vec<UpdateRowRequest>,
    #[prost(message, repeated, tag = "5")]
    pub delete_rows: Vec<DeleteRowRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BatchWriteRowRequest {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
    #[prost(message, repeated, tag = "2")]
    pub write_rows: Vec<WriteRowsRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WriteRowsResponse {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
    #[prost(int32, required, tag = "2")]
    pub code: i32,
    #[prost(string, required, tag = "3")]
    pub msg: String,
    #[prost(string, optional, tag = "4")]
    pub table_name: Option<String>,
    #[prost(message, optional, tag = "5")]
    pub unprocessed_rows: Option<WriteRowsRequest>,
    #[prost(message, optional, tag = "6")]
    pub consumed_capacity: Option<ConsumedCapacity>,
    #[prost(bool, optional, tag = "7")]
    pub processed: Option<bool>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BatchWriteRowResponse {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
    #[prost(int32, required, tag = "2")]
    pub code: i32,
    #[prost(string, required, tag = "3")]
    pub msg: String,
    #[prost(message, repeated, tag = "4")]
    pub write_rows: Vec<WriteRowsResponse>,
    #[prost(message, optional, tag = "5")]
    pub consumed_capacity: Option<ConsumedCapacity>,
}
