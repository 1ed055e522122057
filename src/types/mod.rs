//! Types Module
//!
//! Caller-facing value types. Everything here is a plain value: built per
//! call, never mutated after construction, and free of wire concerns.
//!
//! ## Responsibilities
//! - Scalar values and column types
//! - Primary keys and rows
//! - Column updates and batch row writes
//! - Table schema and description
//! - Correlation identifiers

mod value;
mod key;
mod row;
mod table;
mod log_id;

pub use value::{ColumnType, ScalarValue};
pub use key::PrimaryKey;
pub use row::{ColumnUpdate, Row, RowWrite};
pub use table::{ProvisionedThroughput, TableDescription, TableSchema, TableStatus};
pub use log_id::LogId;
