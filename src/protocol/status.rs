//! Response status and batch group checks

use crate::error::{CodecError, Result};
use crate::wire::{Envelope, CODE_OK};

/// Fail with `ServiceError` unless the envelope reports success.
///
/// Runs before any payload is looked at.
pub fn check_status<E: Envelope>(envelope: &E) -> Result<()> {
    let code = envelope.code();
    if code == CODE_OK {
        return Ok(());
    }

    tracing::warn!(
        code,
        log_id = envelope.log_id() as u64,
        "Service returned error: {}",
        envelope.msg()
    );

    Err(CodecError::ServiceError {
        code,
        message: envelope.msg().to_string(),
    })
}

/// Take the one group out of a batch response.
///
/// Any count other than 1 is a `ProtocolViolation`.
pub fn single_group<T>(mut groups: Vec<T>, group: &'static str) -> Result<T> {
    if groups.len() != 1 {
        tracing::warn!(group, count = groups.len(), "Batch response group count is not 1");
        return Err(CodecError::ProtocolViolation {
            group,
            count: groups.len(),
        });
    }

    groups
        .pop()
        .ok_or(CodecError::ProtocolViolation { group, count: 0 })
}
