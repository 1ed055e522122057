//! Response definitions
//!
//! Decoded results handed back to callers.

use serde::Serialize;

use crate::types::LogId;
use crate::wire::Envelope;

/// Metadata common to every successful response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseInfo {
    /// Echoed correlation id
    pub log_id: LogId,

    /// Capacity units charged for the call; 0 when the service reports none
    pub consumed_capacity: u64,
}

impl ResponseInfo {
    pub fn from_envelope<E: Envelope>(envelope: &E) -> Self {
        Self {
            log_id: LogId::from_wire(envelope.log_id()),
            consumed_capacity: envelope
                .consumed_capacity()
                .map(|c| c.capacity_units as u64)
                .unwrap_or(0),
        }
    }
}

/// A decoded response: common metadata plus the operation's payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response<T> {
    pub info: ResponseInfo,
    pub payload: T,
}

impl<T> Response<T> {
    pub fn into_payload(self) -> T {
        self.payload
    }
}
