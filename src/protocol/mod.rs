//! Protocol Module
//!
//! Request builders and response parsers for the table service.
//!
//! ## Operations
//! | Operation     | Response payload                   |
//! |---------------|------------------------------------|
//! | CreateTable   | TableDescription                   |
//! | DeleteTable   | TableDescription                   |
//! | DescribeTable | TableDescription                   |
//! | ListTables    | table names                        |
//! | PutRow        | none                               |
//! | GetRow        | Option<Row>                        |
//! | DeleteRow     | none                               |
//! | UpdateRow     | none                               |
//! | Scan          | rows + optional continuation key   |
//! | BatchGetRow   | rows (exactly one group)           |
//! | BatchWriteRow | none (exactly one group)           |
//!
//! Every operation is a marker type implementing [`Operation`]; building
//! and parsing are pure functions with no shared state.

mod scalar;
mod key;
mod status;
mod response;
mod table_ops;
mod row_ops;
mod scan;
mod batch;
mod codec;

pub use scalar::{
    decode_column_type, decode_value, encode_column_type, encode_column_type_name, encode_value,
};
pub use key::{decode_key, decode_row, encode_key, encode_row};
pub use status::{check_status, single_group};
pub use response::{Response, ResponseInfo};
pub use table_ops::{
    CreateTable, CreateTableParams, DeleteTable, DescribeTable, ListTables, TableNameParams,
};
pub use row_ops::{
    DeleteRow, DeleteRowParams, GetRow, GetRowParams, PutRow, PutRowParams, UpdateRow,
    UpdateRowParams,
};
pub use scan::{Scan, ScanOutput, ScanParams};
pub use batch::{BatchGetRow, BatchGetRowParams, BatchWriteRow, BatchWriteRowParams};
pub use codec::{decode_response, encode_request, Codec, EncodedRequest};

use crate::error::Result;
use crate::types::LogId;
use crate::wire::Envelope;

/// A request builder / response parser pair for one service call
pub trait Operation {
    /// Service method name
    const NAME: &'static str;

    /// Typed caller input
    type Params;

    /// Wire request message
    type Request: prost::Message;

    /// Wire response message
    type Response: prost::Message + Default + Envelope;

    /// Decoded payload handed back to the caller
    type Output;

    /// Build the wire request. Pure; `log_id` is used as given.
    fn build_request(params: &Self::Params, log_id: LogId) -> Self::Request;

    /// Decode the payload of a response whose status already checked out
    fn parse_payload(response: Self::Response) -> Result<Self::Output>;
}
