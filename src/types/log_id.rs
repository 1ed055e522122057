//! Correlation identifiers
//!
//! Every request carries a 64-bit `log_id` that the service echoes back.
//! The wire field is a signed int64; the client treats the value as an
//! opaque unsigned token and always displays it as an unsigned decimal.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Serialize, Serializer};

use crate::error::{CodecError, Result};

/// Opaque 64-bit request correlation token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogId(u64);

impl LogId {
    /// Draw a fresh identifier from two independent random 32-bit halves.
    ///
    /// Not cryptographic; collisions are unlikely, not impossible.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let high: u32 = rng.gen();
        let low: u32 = rng.gen();
        LogId((u64::from(high) << 32) | u64::from(low))
    }

    /// Parse a caller-supplied identifier written as an unsigned decimal
    pub fn parse(decimal: &str) -> Result<Self> {
        decimal
            .parse::<u64>()
            .map(LogId)
            .map_err(|e| CodecError::InvalidLogId(format!("{:?}: {}", decimal, e)))
    }

    pub fn new(value: u64) -> Self {
        LogId(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Reinterpret the signed wire field as unsigned
    pub fn from_wire(raw: i64) -> Self {
        LogId(raw as u64)
    }

    pub fn to_wire(&self) -> i64 {
        self.0 as i64
    }
}

impl fmt::Display for LogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LogId {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        LogId::parse(s)
    }
}

impl From<u64> for LogId {
    fn from(value: u64) -> Self {
        LogId(value)
    }
}

/// Serialized as a decimal string so JSON consumers never see a lossy number
impl Serialize for LogId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
