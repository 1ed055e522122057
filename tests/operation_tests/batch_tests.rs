//! Batch Operation Tests
//!
//! These tests verify:
//! - A single group sharing table name and log id on the request side
//! - BatchWriteRow partitioning into put/update/delete sub-lists
//! - Exactly-one-group enforcement on both batch decode paths

#[path = "../common/mod.rs"]
mod common;

use common::{int_value, string_value, to_bytes, wire_key, wire_row};
use prost::Message;
use tablecodec::protocol::{
    decode_response, encode_request, single_group, BatchGetRow, BatchGetRowParams, BatchWriteRow,
    BatchWriteRowParams,
};
use tablecodec::wire;
use tablecodec::{CodecError, LogId, PrimaryKey, RowWrite, ScalarValue};

fn get_group(code: i32, rows: Vec<wire::Row>) -> wire::GetRowsResponse {
    wire::GetRowsResponse {
        log_id: 1,
        code,
        msg: if code == 0 { String::new() } else { "group failed".to_string() },
        table_name: Some("T".to_string()),
        rows,
        ..Default::default()
    }
}

fn get_response(groups: Vec<wire::GetRowsResponse>) -> Vec<u8> {
    to_bytes(&wire::BatchGetRowResponse {
        log_id: 1,
        code: 0,
        msg: String::new(),
        get_rows: groups,
        consumed_capacity: None,
    })
}

fn write_group() -> wire::WriteRowsResponse {
    wire::WriteRowsResponse {
        log_id: 1,
        code: 0,
        msg: String::new(),
        table_name: Some("T".to_string()),
        ..Default::default()
    }
}

fn write_response(groups: Vec<wire::WriteRowsResponse>) -> Vec<u8> {
    to_bytes(&wire::BatchWriteRowResponse {
        log_id: 1,
        code: 0,
        msg: String::new(),
        write_rows: groups,
        consumed_capacity: None,
    })
}

// =============================================================================
// Group Cardinality
// =============================================================================

#[test]
fn test_single_group_helper() {
    assert_eq!(single_group(vec![7], "g").unwrap(), 7);
    assert!(matches!(
        single_group(Vec::<i32>::new(), "g"),
        Err(CodecError::ProtocolViolation { group: "g", count: 0 })
    ));
    assert!(matches!(
        single_group(vec![1, 2], "g"),
        Err(CodecError::ProtocolViolation { group: "g", count: 2 })
    ));
}

#[test]
fn test_batch_get_rejects_zero_or_two_groups() {
    common::init_tracing();
    for count in [0usize, 2] {
        let groups = (0..count).map(|_| get_group(0, vec![])).collect();
        match decode_response::<BatchGetRow>(&get_response(groups)) {
            Err(CodecError::ProtocolViolation { group, count: got }) => {
                assert_eq!(group, "get_rows");
                assert_eq!(got, count);
            }
            other => panic!("Expected ProtocolViolation, got {:?}", other),
        }
    }
}

#[test]
fn test_batch_write_rejects_zero_or_two_groups() {
    for count in [0usize, 2] {
        let groups = (0..count).map(|_| write_group()).collect();
        match decode_response::<BatchWriteRow>(&write_response(groups)) {
            Err(CodecError::ProtocolViolation { group, count: got }) => {
                assert_eq!(group, "write_rows");
                assert_eq!(got, count);
            }
            other => panic!("Expected ProtocolViolation, got {:?}", other),
        }
    }
}

#[test]
fn test_batch_write_single_group_succeeds() {
    let response = decode_response::<BatchWriteRow>(&write_response(vec![write_group()])).unwrap();
    let () = response.payload;
}

#[test]
fn test_outer_status_checked_before_groups() {
    let bytes = to_bytes(&wire::BatchWriteRowResponse {
        log_id: 1,
        code: 500,
        msg: "internal".to_string(),
        write_rows: vec![],
        consumed_capacity: None,
    });
    assert!(matches!(
        decode_response::<BatchWriteRow>(&bytes),
        Err(CodecError::ServiceError { code: 500, .. })
    ));
}

// =============================================================================
// BatchGetRow
// =============================================================================

#[test]
fn test_batch_get_request_single_group() {
    let keys = vec![PrimaryKey::new("a"), PrimaryKey::with_row_key("b", 2)];
    let params = BatchGetRowParams::new("T", keys);
    let bytes = encode_request::<BatchGetRow>(&params, LogId::new(55)).unwrap();
    let request = wire::BatchGetRowRequest::decode(&bytes[..]).unwrap();

    assert_eq!(request.log_id, 55);
    assert_eq!(request.get_rows.len(), 1);

    let group = &request.get_rows[0];
    assert_eq!(group.log_id, 55);
    assert_eq!(group.table_name, "T");
    assert_eq!(
        group.primary_keys,
        vec![
            wire_key(string_value("a"), None),
            wire_key(string_value("b"), Some(int_value(2))),
        ]
    );
    assert!(group.column_names.is_empty());
    assert_eq!(group.is_strong_consistent_read, Some(false));
}

#[test]
fn test_batch_get_request_columns_and_consistency() {
    let params = BatchGetRowParams::new("T", vec![PrimaryKey::new("a")])
        .columns(["x"])
        .strong_consistent(true);
    let bytes = encode_request::<BatchGetRow>(&params, LogId::new(1)).unwrap();
    let request = wire::BatchGetRowRequest::decode(&bytes[..]).unwrap();

    assert_eq!(request.get_rows[0].column_names, vec!["x"]);
    assert_eq!(request.get_rows[0].is_strong_consistent_read, Some(true));
}

#[test]
fn test_batch_get_decodes_rows() {
    let rows = vec![
        wire_row(wire_key(string_value("a"), None), vec![("n", int_value(1))]),
        wire_row(wire_key(string_value("b"), None), vec![("n", int_value(2))]),
    ];
    let rows = decode_response::<BatchGetRow>(&get_response(vec![get_group(0, rows)]))
        .unwrap()
        .payload;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].key, PrimaryKey::new("a"));
    assert_eq!(rows[1].get("n"), Some(&ScalarValue::Int64(2)));
}

#[test]
fn test_batch_get_group_error() {
    let bytes = get_response(vec![get_group(7, vec![])]);
    match decode_response::<BatchGetRow>(&bytes) {
        Err(CodecError::ServiceError { code, message }) => {
            assert_eq!(code, 7);
            assert_eq!(message, "group failed");
        }
        other => panic!("Expected ServiceError, got {:?}", other),
    }
}

// =============================================================================
// BatchWriteRow
// =============================================================================

#[test]
fn test_batch_write_partitions_rows() {
    let params = BatchWriteRowParams::new("T", vec![])
        .row(RowWrite::put(
            PrimaryKey::new("p"),
            vec![("c".to_string(), ScalarValue::Int64(1))],
        ))
        .row(RowWrite::delete_row(PrimaryKey::new("d")))
        .row(RowWrite::delete_columns(PrimaryKey::new("u"), ["x", "y"]));
    let bytes = encode_request::<BatchWriteRow>(&params, LogId::new(99)).unwrap();
    let request = wire::BatchWriteRowRequest::decode(&bytes[..]).unwrap();

    assert_eq!(request.log_id, 99);
    assert_eq!(request.write_rows.len(), 1);

    let group = &request.write_rows[0];
    assert_eq!((group.log_id, group.table_name.as_str()), (99, "T"));
    assert_eq!(group.put_rows.len(), 1);
    assert_eq!(group.update_rows.len(), 1);
    assert_eq!(group.delete_rows.len(), 1);

    let put = &group.put_rows[0];
    assert_eq!((put.log_id, put.table_name.as_str()), (99, "T"));
    let row = put.row.as_ref().unwrap();
    assert_eq!(row.primary_key, Some(wire_key(string_value("p"), None)));
    assert_eq!(row.attribute_columns[0].column_value, Some(int_value(1)));

    let update = &group.update_rows[0];
    assert_eq!((update.log_id, update.table_name.as_str()), (99, "T"));
    assert_eq!(update.primary_key, Some(wire_key(string_value("u"), None)));
    let names: Vec<_> = update.column_updates.iter().map(|u| u.column_name.as_str()).collect();
    assert_eq!(names, vec!["x", "y"]);
    assert!(update
        .column_updates
        .iter()
        .all(|u| u.action == wire::ActionType::Delete as i32 && u.column_value.is_none()));

    let delete = &group.delete_rows[0];
    assert_eq!((delete.log_id, delete.table_name.as_str()), (99, "T"));
    assert_eq!(delete.primary_key, Some(wire_key(string_value("d"), None)));
}

#[test]
fn test_batch_write_empty_column_list_is_column_delete() {
    let params = BatchWriteRowParams::new(
        "T",
        vec![RowWrite::delete_columns(PrimaryKey::new("u"), Vec::<String>::new())],
    );
    let bytes = encode_request::<BatchWriteRow>(&params, LogId::new(1)).unwrap();
    let group = wire::BatchWriteRowRequest::decode(&bytes[..]).unwrap().write_rows.remove(0);

    assert_eq!(group.update_rows.len(), 1);
    assert!(group.update_rows[0].column_updates.is_empty());
    assert!(group.delete_rows.is_empty());
}
