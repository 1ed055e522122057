//! Codec Tests
//!
//! These tests verify:
//! - Log id generation and propagation through the configured codec
//! - Request and response size limits
//! - Malformed buffers surface as decode errors

#[path = "../common/mod.rs"]
mod common;

use common::{capacity, to_bytes};
use prost::Message;
use tablecodec::config::DEFAULT_MAX_MESSAGE_SIZE;
use tablecodec::protocol::{ListTables, PutRow, PutRowParams};
use tablecodec::wire;
use tablecodec::{Codec, CodecConfig, CodecError, LogId, PrimaryKey};

fn put_params() -> PutRowParams {
    PutRowParams::new("T", PrimaryKey::new("p1")).column("n", 42)
}

// =============================================================================
// Config
// =============================================================================

#[test]
fn test_default_config() {
    let config = CodecConfig::default();
    assert_eq!(config.max_request_size, DEFAULT_MAX_MESSAGE_SIZE);
    assert_eq!(config.max_response_size, DEFAULT_MAX_MESSAGE_SIZE);
}

#[test]
fn test_config_builder() {
    let config = CodecConfig::builder()
        .max_request_size(128)
        .max_response_size(256)
        .build();
    assert_eq!(config.max_request_size, 128);
    assert_eq!(config.max_response_size, 256);

    let codec = Codec::new(config);
    assert_eq!(codec.config().max_request_size, 128);
}

// =============================================================================
// Encode
// =============================================================================

#[test]
fn test_encode_assigns_fresh_log_id() {
    common::init_tracing();
    let codec = Codec::default();

    let first = codec.encode::<PutRow>(&put_params()).unwrap();
    let second = codec.encode::<PutRow>(&put_params()).unwrap();

    assert_eq!(first.operation, "PutRow");
    assert_ne!(first.log_id, second.log_id);

    let request = wire::PutRowRequest::decode(first.body.clone()).unwrap();
    assert_eq!(LogId::from_wire(request.log_id), first.log_id);
}

#[test]
fn test_encode_with_caller_log_id() {
    let codec = Codec::default();
    let log_id = LogId::parse("18446744073709551615").unwrap();

    let encoded = codec.encode_with_log_id::<ListTables>(&(), log_id).unwrap();
    let request = wire::ListTablesRequest::decode(encoded.body).unwrap();

    assert_eq!(encoded.log_id, log_id);
    assert_eq!(request.log_id, -1);
    assert_eq!(LogId::from_wire(request.log_id).to_string(), "18446744073709551615");
}

#[test]
fn test_encode_rejects_oversized_request() {
    let codec = Codec::new(CodecConfig::builder().max_request_size(4).build());
    match codec.encode::<PutRow>(&put_params()) {
        Err(CodecError::MessageTooLarge { size, limit }) => {
            assert!(size > 4);
            assert_eq!(limit, 4);
        }
        other => panic!("Expected MessageTooLarge, got {:?}", other),
    }
}

// =============================================================================
// Decode
// =============================================================================

#[test]
fn test_decode_through_codec() {
    let codec = Codec::default();
    let bytes = to_bytes(&wire::PutRowResponse {
        log_id: 42,
        code: 0,
        msg: String::new(),
        consumed_capacity: capacity(3),
        processed: Some(true),
    });

    let response = codec.decode::<PutRow>(&bytes).unwrap();
    assert_eq!(response.info.log_id, LogId::new(42));
    assert_eq!(response.info.consumed_capacity, 3);
}

#[test]
fn test_decode_rejects_oversized_response() {
    let codec = Codec::new(CodecConfig::builder().max_response_size(8).build());
    let bytes = vec![0u8; 9];
    assert!(matches!(
        codec.decode::<PutRow>(&bytes),
        Err(CodecError::MessageTooLarge { size: 9, limit: 8 })
    ));
}

#[test]
fn test_decode_malformed_bytes() {
    let codec = Codec::default();
    // Field 1, varint wire type, but the varint never terminates
    let bytes = [0x08, 0xFF, 0xFF];
    let err = codec.decode::<PutRow>(&bytes).unwrap_err();

    assert!(matches!(err, CodecError::Decode(_)));
    assert!(!err.is_retryable());
}

#[test]
fn test_response_info_serializes_log_id_as_string() {
    let codec = Codec::default();
    let bytes = to_bytes(&wire::ListTablesResponse {
        log_id: -1,
        code: 0,
        msg: String::new(),
        table_names: vec!["t".to_string()],
    });
    let response = codec.decode::<ListTables>(&bytes).unwrap();

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        serde_json::json!({
            "info": { "logId": "18446744073709551615", "consumedCapacity": 0 },
            "payload": ["t"]
        })
    );
}
