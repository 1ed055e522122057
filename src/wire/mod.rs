//! Wire Module
//!
//! Protobuf message definitions for the table service (proto2 `table.proto`,
//! package `com.kingsoft.services.table.proto`).
//!
//! ## Envelope Layout
//! ```text
//! Request                       Response
//! ┌────────────────────┐        ┌────────────────────┐
//! │ log_id  (int64, 1) │        │ log_id  (int64, 1) │
//! ├────────────────────┤        │ code    (int32, 2) │
//! │ operation fields   │        │ msg     (string,3) │
//! └────────────────────┘        ├────────────────────┤
//!                               │ operation fields   │
//!                               └────────────────────┘
//! ```
//!
//! Enum-typed fields stay as raw `i32` in the structs so that an unknown
//! value reaches the decoder instead of being folded into a default.

mod base;
mod table;
mod row;
mod batch;

pub use base::{
    ActionType, Column, ColumnType, ColumnUpdate, ColumnValue, ConsumedCapacity, PrimaryKey,
    ProvisionedThroughput, Row, TableDescription, TableStatus, CODE_OK,
};
pub use table::{
    CreateTableRequest, CreateTableResponse, DeleteTableRequest, DeleteTableResponse,
    DescribeTableRequest, DescribeTableResponse, ListTablesRequest, ListTablesResponse,
};
pub use row::{
    DeleteRowRequest, DeleteRowResponse, GetRowRequest, GetRowResponse, PutRowRequest,
    PutRowResponse, ScanRequest, ScanResponse, UpdateRowRequest, UpdateRowResponse,
};
pub use batch::{
    BatchGetRowRequest, BatchGetRowResponse, BatchWriteRowRequest, BatchWriteRowResponse,
    GetRowsRequest, GetRowsResponse, WriteRowsRequest, WriteRowsResponse,
};

/// Common response header shared by every response message
pub trait Envelope {
    fn log_id(&self) -> i64;
    fn code(&self) -> i32;
    fn msg(&self) -> &str;

    /// Capacity consumed by the call, when the message carries it
    fn consumed_capacity(&self) -> Option<&ConsumedCapacity> {
        None
    }
}

macro_rules! impl_envelope {
    (capacity: $($ty:ty),+ $(,)?) => {
        $(
            impl Envelope for $ty {
                fn log_id(&self) -> i64 {
                    self.log_id
                }

                fn code(&self) -> i32 {
                    self.code
                }

                fn msg(&self) -> &str {
                    &self.msg
                }

                fn consumed_capacity(&self) -> Option<&ConsumedCapacity> {
                    self.consumed_capacity.as_ref()
                }
            }
        )+
    };
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Envelope for $ty {
                fn log_id(&self) -> i64 {
                    self.log_id
                }

                fn code(&self) -> i32 {
                    self.code
                }

                fn msg(&self) -> &str {
                    &self.msg
                }
            }
        )+
    };
}

impl_envelope!(
    CreateTableResponse,
    DeleteTableResponse,
    DescribeTableResponse,
    ListTablesResponse,
);

impl_envelope!(
    capacity: PutRowResponse,
    GetRowResponse,
    DeleteRowResponse,
    UpdateRowResponse,
    ScanResponse,
    BatchGetRowResponse,
    BatchWriteRowResponse,
    GetRowsResponse,
    WriteRowsResponse,
);
