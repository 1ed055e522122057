//! Protocol codec
//!
//! Encoding and decoding entry points for every [`Operation`].
//!
//! ## Decode Order
//! 1. Size guard (config limit)
//! 2. Protobuf decode of the response envelope
//! 3. Status check (no payload is touched on failure)
//! 4. Log id and consumed capacity
//! 5. Operation payload

use bytes::{Bytes, BytesMut};
use prost::Message;

use crate::config::CodecConfig;
use crate::error::{CodecError, Result};
use crate::types::LogId;

use super::response::{Response, ResponseInfo};
use super::status::check_status;
use super::Operation;

// =============================================================================
// Pure Encode/Decode
// =============================================================================

/// Encode a request for `Op` carrying the given log id
pub fn encode_request<Op: Operation>(params: &Op::Params, log_id: LogId) -> Result<Bytes> {
    let request = Op::build_request(params, log_id);
    let mut buf = BytesMut::with_capacity(request.encoded_len());
    request.encode(&mut buf)?;
    Ok(buf.freeze())
}

/// Decode a response for `Op`
pub fn decode_response<Op: Operation>(bytes: &[u8]) -> Result<Response<Op::Output>> {
    let message = Op::Response::decode(bytes)?;
    check_status(&message)?;

    let info = ResponseInfo::from_envelope(&message);
    let payload = Op::parse_payload(message)?;

    Ok(Response { info, payload })
}

// =============================================================================
// Configured Codec
// =============================================================================

/// An encoded request ready for the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRequest {
    /// Operation name, e.g. `"PutRow"`
    pub operation: &'static str,

    /// Correlation id carried in the request
    pub log_id: LogId,

    /// Protobuf-encoded request body
    pub body: Bytes,
}

/// Encoder/decoder applying size limits and logging
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode a request with a freshly generated log id
    pub fn encode<Op: Operation>(&self, params: &Op::Params) -> Result<EncodedRequest> {
        self.encode_with_log_id::<Op>(params, LogId::generate())
    }

    /// Encode a request with a caller-supplied log id
    pub fn encode_with_log_id<Op: Operation>(
        &self,
        params: &Op::Params,
        log_id: LogId,
    ) -> Result<EncodedRequest> {
        let body = encode_request::<Op>(params, log_id)?;
        if body.len() > self.config.max_request_size {
            return Err(CodecError::MessageTooLarge {
                size: body.len(),
                limit: self.config.max_request_size,
            });
        }

        tracing::debug!(
            operation = Op::NAME,
            log_id = %log_id,
            bytes = body.len(),
            "Encoded request"
        );

        Ok(EncodedRequest {
            operation: Op::NAME,
            log_id,
            body,
        })
    }

    /// Decode a response buffer received for `Op`
    pub fn decode<Op: Operation>(&self, bytes: &[u8]) -> Result<Response<Op::Output>> {
        if bytes.len() > self.config.max_response_size {
            return Err(CodecError::MessageTooLarge {
                size: bytes.len(),
                limit: self.config.max_response_size,
            });
        }

        let response = decode_response::<Op>(bytes)?;

        tracing::debug!(
            operation = Op::NAME,
            log_id = %response.info.log_id,
            bytes = bytes.len(),
            consumed_capacity = response.info.consumed_capacity,
            "Decoded response"
        );

        Ok(response)
    }
}
