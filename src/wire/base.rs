//! Shared wire messages: tagged scalars, keys, rows and table metadata

/// Status code carried by every successful response
pub const CODE_OK: i32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ColumnType {
    String = 1,
    Int64 = 2,
    Boolean = 3,
    Double = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TableStatus {
    CreatingTable = 1,
    UpdatingTable = 2,
    DeletingTable = 3,
    ActiveTable = 4,
    InActiveTable = 5,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ActionType {
    Put = 1,
    Delete = 2,
}

/// Tagged scalar: a type discriminant plus exactly one populated value field
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ColumnValue {
    #[prost(enumeration = "ColumnType", required, tag = "1")]
    pub column_type: i32,
    #[prost(string, optional, tag = "2")]
    pub string_value: Option<String>,
    #[prost(int64, optional, tag = "3")]
    pub int64_value: Option<i64>,
    #[prost(bool, optional, tag = "4")]
    pub bool_value: Option<bool>,
    #[prost(double, optional, tag = "5")]
    pub double_value: Option<f64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PrimaryKey {
    #[prost(message, optional, tag = "1")]
    pub partition_key: Option<ColumnValue>,
    #[prost(message, optional, tag = "2")]
    pub row_key: Option<ColumnValue>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Column {
    #[prost(string, required, tag = "1")]
    pub column_name: String,
    #[prost(message, optional, tag = "2")]
    pub column_value: Option<ColumnValue>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Row {
    #[prost(message, optional, tag = "1")]
    pub primary_key: Option<PrimaryKey>,
    #[prost(message, repeated, tag = "2")]
    pub attribute_columns: Vec<Column>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ColumnUpdate {
    #[prost(string, required, tag = "1")]
    pub column_name: String,
    #[prost(enumeration = "ActionType", required, tag = "2")]
    pub action: i32,
    /// Present only for PUT
    #[prost(message, optional, tag = "3")]
    pub column_value: Option<ColumnValue>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProvisionedThroughput {
    #[prost(int64, required, tag = "1")]
    pub read_capacity_units: i64,
    #[prost(int64, required, tag = "2")]
    pub write_capacity_units: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConsumedCapacity {
    /// Unsigned on exposure
    #[prost(int64, required, tag = "1")]
    pub capacity_units: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TableDescription {
    #[prost(string, required, tag = "1")]
    pub table_id: String,
    #[prost(string, required, tag = "2")]
    pub table_name: String,
    #[prost(enumeration = "TableStatus", required, tag = "3")]
    pub table_status: i32,
    #[prost(enumeration = "ColumnType", required, tag = "4")]
    pub partition_key_type: i32,
    #[prost(enumeration = "ColumnType", optional, tag = "5")]
    pub row_key_type: Option<i32>,
    #[prost(int64, required, tag = "6")]
    pub creation_date_time: i64,
    #[prost(message, optional, tag = "7")]
    pub provisioned_throughput: Option<ProvisionedThroughput>,
}
