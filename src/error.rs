//! Error types for tablecodec
//!
//! Provides a unified error type for all encode/decode operations.

use thiserror::Error;

/// Result type alias using CodecError
pub type Result<T> = std::result::Result<T, CodecError>;

/// Unified error type for tablecodec operations
#[derive(Debug, Error)]
pub enum CodecError {
    // -------------------------------------------------------------------------
    // Encode-time Errors
    // -------------------------------------------------------------------------
    /// A native value has no scalar mapping (null, array, object, ...)
    #[error("not supported type: {0}")]
    UnsupportedType(String),

    /// A declared column type name is outside STRING/INT64/BOOLEAN/DOUBLE
    #[error("Type name:{0} not supported")]
    UnsupportedColumnType(String),

    #[error("Invalid log id: {0}")]
    InvalidLogId(String),

    #[error("Encode error: {0}")]
    Encode(#[from] prost::EncodeError),

    // -------------------------------------------------------------------------
    // Decode-time Errors
    // -------------------------------------------------------------------------
    /// A wire type tag matched none of the known column types
    #[error("UnKnownValue: column type {0}")]
    UnknownValueType(i32),

    /// The service answered with a non-success status code
    #[error("Service error {code}: {message}")]
    ServiceError { code: i32, message: String },

    /// A batch response did not carry exactly one group
    #[error("batch {group} length must be 1 but {count}")]
    ProtocolViolation { group: &'static str, count: usize },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Decode error: {0}")]
    Decode(#[from] prost::DecodeError),

    // -------------------------------------------------------------------------
    // Size Limits
    // -------------------------------------------------------------------------
    #[error("Message too large: {size} bytes (max {limit})")]
    MessageTooLarge { size: usize, limit: usize },
}

impl CodecError {
    /// True for errors reported by the service itself
    pub fn is_service_error(&self) -> bool {
        matches!(self, CodecError::ServiceError { .. })
    }

    /// Whether an outer retry layer may try the call again.
    /// Only service errors qualify.
    pub fn is_retryable(&self) -> bool {
        self.is_service_error()
    }
}
