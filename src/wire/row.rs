//! Single-row and scan messages

use super::base::{ColumnUpdate, ConsumedCapacity, PrimaryKey, Row};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PutRowRequest {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
    #[prost(string, required, tag = "2")]
    pub table_name: String,
    #[prost(message, optional, tag = "3")]
    pub row: Option<Row>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PutRowResponse {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
    #[prost(int32, required, tag = "2")]
    pub code: i32,
    #[prost(string, required, tag = "3")]
    pub msg: String,
    #[prost(message, optional, tag = "4")]
    pub consumed_capacity: Option<ConsumedCapacity>,
    #[prost(bool, optional, tag = "5")]
    pub processed: Option<bool>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetRowRequest {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
    #[prost(string, required, tag = "2")]
    pub table_name: String,
    #[prost(message, optional, tag = "3")]
    pub primary_key: Option<PrimaryKey>,
    #[prost(string, repeated, tag = "4")]
    pub column_names: Vec<String>,
    #[prost(bool, optional, tag = "5")]
    pub is_strong_consistent_read: Option<bool>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetRowResponse {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
    #[prost(int32, required, tag = "2")]
    pub code: i32,
    #[prost(string, required, tag = "3")]
    pub msg: String,
    #[prost(message, optional, tag = "4")]
    pub row: Option<Row>,
    #[prost(message, optional, tag = "5")]
    pub consumed_capacity: Option<ConsumedCapacity>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteRowRequest {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
    #[prost(string, required, tag = "2")]
    pub table_name: String,
    #[prost(message, optional, tag = "3")]
    pub primary_key: Option<PrimaryKey>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteRowResponse {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
    #[prost(int32, required, tag = "2")]
    pub code: i32,
    #[prost(string, required, tag = "3")]
    pub msg: String,
    #[prost(message, optional, tag = "4")]
    pub consumed_capacity: Option<ConsumedCapacity>,
    #[prost(bool, optional, tag = "5")]
    pub processed: Option<bool>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateRowRequest {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
    #[prost(string, required, tag = "2")]
    pub table_name: String,
    #[prost(message, optional, tag = "3")]
    pub primary_key: Option<PrimaryKey>,
    #[prost(message, repeated, tag = "4")]
    pub column_updates: Vec<ColumnUpdate>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateRowResponse {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
    #[prost(int32, required, tag = "2")]
    pub code: i32,
    #[prost(string, required, tag = "3")]
    pub msg: String,
    #[prost(message, optional, tag = "4")]
    pub consumed_capacity: Option<ConsumedCapacity>,
    #[prost(bool, optional, tag = "5")]
    pub processed: Option<bool>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ScanRequest {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
    #[prost(string, required, tag = "2")]
    pub table_name: String,
    #[prost(string, repeated, tag = "3")]
    pub column_names: Vec<String>,
    #[prost(bool, optional, tag = "4")]
    pub is_strong_consistent_read: Option<bool>,
    #[prost(message, optional, tag = "5")]
    pub inclusive_start_key: Option<PrimaryKey>,
    #[prost(message, optional, tag = "6")]
    pub exclusive_end_key: Option<PrimaryKey>,
    #[prost(int32, optional, tag = "7")]
    pub limit: Option<i32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ScanResponse {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
    #[prost(int32, required, tag = "2")]
    pub code: i32,
    #[prost(string, required, tag = "3")]
    pub msg: String,
    #[prost(message, repeated, tag = "4")]
    pub rows: Vec<Row>,
    #[prost(message, optional, tag = "5")]
    pub next_start_key: Option<PrimaryKey>,
    #[prost(message, optional, tag = "6")]
    pub consumed_capacity: Option<ConsumedCapacity>,
}
