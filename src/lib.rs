//! # tablecodec
//!
//! Typed-value codec and request/response marshaling for a tabular
//! key-value storage RPC protocol:
//! - Tagged scalar values (string / int64 / boolean / double)
//! - Primary key and row composition
//! - Request builders and response parsers for nine service operations
//! - Decode-time checks: status codes, batch group cardinality, unsigned ids
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Caller (typed params / JSON)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Codec  (limits, logging)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │        Operations  (build_request / parse_payload)           │
//! └──────┬──────────────┬──────────────┬───────────────┬────────┘
//!        │              │              │               │
//!        ▼              ▼              ▼               ▼
//!  ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌─────────────┐
//!  │  Scalar   │  │  Key/Row  │  │  Status   │  │   LogId     │
//!  │  codec    │  │  codec    │  │  checks   │  │  generator  │
//!  └─────┬─────┘  └─────┬─────┘  └───────────┘  └─────────────┘
//!        └──────┬───────┘
//!               ▼
//!        ┌─────────────┐
//!        │ Wire (prost)│ ──▶ opaque bytes to/from the transport
//!        └─────────────┘
//! ```
//!
//! Transport, retries and authentication live outside this crate.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod types;
pub mod wire;
pub mod protocol;
pub mod json;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CodecError, Result};
pub use config::CodecConfig;
pub use types::{
    ColumnType, ColumnUpdate, LogId, PrimaryKey, ProvisionedThroughput, Row, RowWrite,
    ScalarValue, TableDescription, TableSchema, TableStatus,
};
pub use protocol::{Codec, EncodedRequest, Operation, Response, ResponseInfo};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of tablecodec
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
