//! Table Operation Tests
//!
//! These tests verify:
//! - CreateTable / DeleteTable / DescribeTable / ListTables request shapes
//! - TableDescription decoding, including unknown status codes
//! - Status checking ahead of payload decoding

#[path = "../common/mod.rs"]
mod common;

use common::{description, to_bytes};
use prost::Message;
use tablecodec::protocol::{
    decode_response, encode_request, CreateTable, CreateTableParams, DeleteTable, DescribeTable,
    ListTables, TableNameParams,
};
use tablecodec::wire;
use tablecodec::{
    CodecError, ColumnType, LogId, ProvisionedThroughput, TableSchema, TableStatus,
};

fn create_params(schema: TableSchema) -> CreateTableParams {
    CreateTableParams::new("users", schema, ProvisionedThroughput::new(100, 50))
}

fn create_response(description: Option<wire::TableDescription>) -> Vec<u8> {
    to_bytes(&wire::CreateTableResponse {
        log_id: 9,
        code: 0,
        msg: String::new(),
        table_description: description,
    })
}

// =============================================================================
// CreateTable
// =============================================================================

#[test]
fn test_create_table_without_row_key() {
    let params = create_params(TableSchema::new(ColumnType::String));
    let bytes = encode_request::<CreateTable>(&params, LogId::new(1)).unwrap();
    let request = wire::CreateTableRequest::decode(&bytes[..]).unwrap();

    assert_eq!(request.log_id, 1);
    assert_eq!(request.table_name, "users");
    assert_eq!(request.partition_key_type, wire::ColumnType::String as i32);
    assert_eq!(request.row_key_type, None);

    let throughput = request.provisioned_throughput.unwrap();
    assert_eq!(throughput.read_capacity_units, 100);
    assert_eq!(throughput.write_capacity_units, 50);
}

#[test]
fn test_create_table_with_row_key() {
    let params = create_params(TableSchema::with_row_key(ColumnType::Int64, ColumnType::Double));
    let bytes = encode_request::<CreateTable>(&params, LogId::new(2)).unwrap();
    let request = wire::CreateTableRequest::decode(&bytes[..]).unwrap();

    assert_eq!(request.partition_key_type, wire::ColumnType::Int64 as i32);
    assert_eq!(request.row_key_type, Some(wire::ColumnType::Double as i32));
}

#[test]
fn test_create_table_decodes_description() {
    common::init_tracing();
    let bytes = create_response(Some(description(
        wire::TableStatus::ActiveTable as i32,
        wire::ColumnType::String as i32,
        Some(wire::ColumnType::Int64 as i32),
    )));

    let response = decode_response::<CreateTable>(&bytes).unwrap();
    let table = response.payload;

    assert_eq!(response.info.log_id, LogId::new(9));
    assert_eq!(response.info.consumed_capacity, 0);
    assert_eq!(table.table_id, "tid-1");
    assert_eq!(table.table_name, "users");
    assert_eq!(table.status, TableStatus::Active);
    assert_eq!(
        table.schema,
        TableSchema::with_row_key(ColumnType::String, ColumnType::Int64)
    );
    assert_eq!(table.creation_time, 1_700_000_000_000);
    assert_eq!(table.provisioned_throughput, ProvisionedThroughput::new(100, 50));
}

#[test]
fn test_description_unknown_status_is_kept() {
    let bytes = create_response(Some(description(42, wire::ColumnType::String as i32, None)));
    let table = decode_response::<CreateTable>(&bytes).unwrap().payload;

    assert_eq!(table.status, TableStatus::Unknown(42));
    assert_eq!(table.status.to_string(), "UnKnown:42");
    assert_eq!(table.schema.row_key_type, None);
}

#[test]
fn test_description_unknown_key_type_rejected() {
    let bytes = create_response(Some(description(
        wire::TableStatus::CreatingTable as i32,
        17,
        None,
    )));
    assert!(matches!(
        decode_response::<CreateTable>(&bytes),
        Err(CodecError::UnknownValueType(17))
    ));
}

#[test]
fn test_description_missing_on_success() {
    let bytes = create_response(None);
    assert!(matches!(
        decode_response::<CreateTable>(&bytes),
        Err(CodecError::MissingField("table_description"))
    ));
}

#[test]
fn test_create_table_service_error() {
    let bytes = to_bytes(&wire::CreateTableResponse {
        log_id: 1,
        code: 409,
        msg: "table already exists".to_string(),
        table_description: None,
    });

    match decode_response::<CreateTable>(&bytes) {
        Err(CodecError::ServiceError { code, message }) => {
            assert_eq!(code, 409);
            assert_eq!(message, "table already exists");
        }
        other => panic!("Expected ServiceError, got {:?}", other),
    }
}

#[test]
fn test_table_status_names() {
    let cases = [
        (wire::TableStatus::CreatingTable, "creating"),
        (wire::TableStatus::UpdatingTable, "updating"),
        (wire::TableStatus::DeletingTable, "deleting"),
        (wire::TableStatus::ActiveTable, "active"),
        (wire::TableStatus::InActiveTable, "inactive"),
    ];
    for (status, name) in cases {
        let bytes = create_response(Some(description(
            status as i32,
            wire::ColumnType::String as i32,
            None,
        )));
        let table = decode_response::<CreateTable>(&bytes).unwrap().payload;
        assert_eq!(table.status.to_string(), name);
    }
}

// =============================================================================
// DeleteTable / DescribeTable
// =============================================================================

#[test]
fn test_delete_and_describe_requests() {
    let params = TableNameParams::new("orders");

    let bytes = encode_request::<DeleteTable>(&params, LogId::new(5)).unwrap();
    let request = wire::DeleteTableRequest::decode(&bytes[..]).unwrap();
    assert_eq!((request.log_id, request.table_name.as_str()), (5, "orders"));

    let bytes = encode_request::<DescribeTable>(&params, LogId::new(6)).unwrap();
    let request = wire::DescribeTableRequest::decode(&bytes[..]).unwrap();
    assert_eq!((request.log_id, request.table_name.as_str()), (6, "orders"));
}

#[test]
fn test_describe_table_decodes_description() {
    let bytes = to_bytes(&wire::DescribeTableResponse {
        log_id: 3,
        code: 0,
        msg: String::new(),
        table_description: Some(description(
            wire::TableStatus::DeletingTable as i32,
            wire::ColumnType::Boolean as i32,
            None,
        )),
    });
    let table = decode_response::<DescribeTable>(&bytes).unwrap().payload;

    assert_eq!(table.status, TableStatus::Deleting);
    assert_eq!(table.schema, TableSchema::new(ColumnType::Boolean));
}

// =============================================================================
// ListTables
// =============================================================================

#[test]
fn test_list_tables_request_has_only_log_id() {
    let bytes = encode_request::<ListTables>(&(), LogId::new(77)).unwrap();
    let request = wire::ListTablesRequest::decode(&bytes[..]).unwrap();
    assert_eq!(request.log_id, 77);
}

#[test]
fn test_list_tables_keeps_order() {
    let bytes = to_bytes(&wire::ListTablesResponse {
        log_id: 1,
        code: 0,
        msg: String::new(),
        table_names: vec!["zeta".to_string(), "alpha".to_string(), "mid".to_string()],
    });
    let names = decode_response::<ListTables>(&bytes).unwrap().payload;
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_list_tables_empty() {
    let bytes = to_bytes(&wire::ListTablesResponse {
        log_id: 1,
        code: 0,
        msg: String::new(),
        table_names: vec![],
    });
    assert!(decode_response::<ListTables>(&bytes).unwrap().payload.is_empty());
}
