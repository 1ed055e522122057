//! Table management operations
//!
//! CreateTable, DeleteTable and DescribeTable all answer with a
//! [`TableDescription`]; ListTables answers with table names.

use crate::error::{CodecError, Result};
use crate::types::{LogId, ProvisionedThroughput, TableDescription, TableSchema, TableStatus};
use crate::wire;

use super::scalar::{decode_column_type, encode_column_type};
use super::Operation;

// =============================================================================
// Parameters
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTableParams {
    pub table_name: String,
    pub schema: TableSchema,
    pub provisioned_throughput: ProvisionedThroughput,
}

impl CreateTableParams {
    pub fn new(
        table_name: impl Into<String>,
        schema: TableSchema,
        provisioned_throughput: ProvisionedThroughput,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            schema,
            provisioned_throughput,
        }
    }
}

/// Parameters naming a single table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNameParams {
    pub table_name: String,
}

impl TableNameParams {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
        }
    }
}

// =============================================================================
// Operations
// =============================================================================

pub struct CreateTable;

impl Operation for CreateTable {
    const NAME: &'static str = "CreateTable";
    type Params = CreateTableParams;
    type Request = wire::CreateTableRequest;
    type Response = wire::CreateTableResponse;
    type Output = TableDescription;

    fn build_request(params: &Self::Params, log_id: LogId) -> Self::Request {
        wire::CreateTableRequest {
            log_id: log_id.to_wire(),
            table_name: params.table_name.clone(),
            partition_key_type: encode_column_type(params.schema.partition_key_type),
            row_key_type: params.schema.row_key_type.map(encode_column_type),
            provisioned_throughput: Some(wire::ProvisionedThroughput {
                read_capacity_units: params.provisioned_throughput.read_capacity_units as i64,
                write_capacity_units: params.provisioned_throughput.write_capacity_units as i64,
            }),
        }
    }

    fn parse_payload(response: Self::Response) -> Result<Self::Output> {
        decode_description(response.table_description.as_ref())
    }
}

pub struct DeleteTable;

impl Operation for DeleteTable {
    const NAME: &'static str = "DeleteTable";
    type Params = TableNameParams;
    type Request = wire::DeleteTableRequest;
    type Response = wire::DeleteTableResponse;
    type Output = TableDescription;

    fn build_request(params: &Self::Params, log_id: LogId) -> Self::Request {
        wire::DeleteTableRequest {
            log_id: log_id.to_wire(),
            table_name: params.table_name.clone(),
        }
    }

    fn parse_payload(response: Self::Response) -> Result<Self::Output> {
        decode_description(response.table_description.as_ref())
    }
}

pub struct DescribeTable;

impl Operation for DescribeTable {
    const NAME: &'static str = "DescribeTable";
    type Params = TableNameParams;
    type Request = wire::DescribeTableRequest;
    type Response = wire::DescribeTableResponse;
    type Output = TableDescription;

    fn build_request(params: &Self::Params, log_id: LogId) -> Self::Request {
        wire::DescribeTableRequest {
            log_id: log_id.to_wire(),
            table_name: params.table_name.clone(),
        }
    }

    fn parse_payload(response: Self::Response) -> Result<Self::Output> {
        decode_description(response.table_description.as_ref())
    }
}

pub struct ListTables;

impl Operation for ListTables {
    const NAME: &'static str = "ListTables";
    type Params = ();
    type Request = wire::ListTablesRequest;
    type Response = wire::ListTablesResponse;
    type Output = Vec<String>;

    fn build_request(_params: &Self::Params, log_id: LogId) -> Self::Request {
        wire::ListTablesRequest {
            log_id: log_id.to_wire(),
        }
    }

    fn parse_payload(response: Self::Response) -> Result<Self::Output> {
        Ok(response.table_names)
    }
}

// =============================================================================
// Table Description
// =============================================================================

fn decode_status(raw: i32) -> TableStatus {
    match wire::TableStatus::try_from(raw) {
        Ok(wire::TableStatus::CreatingTable) => TableStatus::Creating,
        Ok(wire::TableStatus::UpdatingTable) => TableStatus::Updating,
        Ok(wire::TableStatus::DeletingTable) => TableStatus::Deleting,
        Ok(wire::TableStatus::ActiveTable) => TableStatus::Active,
        Ok(wire::TableStatus::InActiveTable) => TableStatus::Inactive,
        Err(_) => TableStatus::Unknown(raw),
    }
}

fn decode_description(description: Option<&wire::TableDescription>) -> Result<TableDescription> {
    let description = description.ok_or(CodecError::MissingField("table_description"))?;
    let throughput = description
        .provisioned_throughput
        .as_ref()
        .ok_or(CodecError::MissingField("provisioned_throughput"))?;

    Ok(TableDescription {
        table_id: description.table_id.clone(),
        table_name: description.table_name.clone(),
        status: decode_status(description.table_status),
        schema: TableSchema {
            partition_key_type: decode_column_type(description.partition_key_type)?,
            row_key_type: description.row_key_type.map(decode_column_type).transpose()?,
        },
        creation_time: description.creation_date_time,
        provisioned_throughput: ProvisionedThroughput {
            read_capacity_units: throughput.read_capacity_units as u64,
            write_capacity_units: throughput.write_capacity_units as u64,
        },
    })
}
