//! Table management messages

use super::base::{ColumnType, ProvisionedThroughput, TableDescription};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateTableRequest {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
    #[prost(string, required, tag = "2")]
    pub table_name: String,
    #[prost(enumeration = "ColumnType", required, tag = "3")]
    pub partition_key_type: i32,
    #[prost(enumeration = "ColumnType", optional, tag = "4")]
    pub row_key_type: Option<i32>,
    #[prost(message, optional, tag = "5")]
    pub provisioned_throughput: Option<ProvisionedThroughput>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateTableResponse {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
    #[prost(int32, required, tag = "2")]
    pub code: i32,
    #[prost(string, required, tag = "3")]
    pub msg: String,
    #[prost(message, optional, tag = "4")]
    pub table_description: Option<TableDescription>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteTableRequest {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
    #[prost(string, required, tag = "2")]
    pub table_name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteTableResponse {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
    #[prost(int32, required, tag = "2")]
    pub code: i32,
    #[prost(string, required, tag = "3")]
    pub msg: String,
    #[prost(message, optional, tag = "4")]
    pub table_description: Option<TableDescription>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DescribeTableRequest {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
    #[prost(string, required, tag = "2")]
    pub table_name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DescribeTableResponse {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
    #[prost(int32, required, tag = "2")]
    pub code: i32,
    #[prost(string, required, tag = "3")]
    pub msg: String,
    #[prost(message, optional, tag = "4")]
    pub table_description: Option<TableDescription>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListTablesRequest {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListTablesResponse {
    #[prost(int64, required, tag = "1")]
    pub log_id: i64,
    #[prost(int32, required, tag = "2")]
    pub code: i32,
    #[prost(string, required, tag = "3")]
    pub msg: String,
    #[prost(string, repeated, tag = "4")]
    pub table_names: Vec<String>,
}
