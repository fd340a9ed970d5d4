pub mod adapter;
pub mod message;
pub mod record;
pub mod schema;

pub use adapter::build_records;
pub use message::{DataMessage, NO_DATA_SENTINEL, sample_columns, sample_rows};
pub use record::{GroupTag, Record};
pub use schema::{COLUMN_COUNT, CellValue, ColumnInfo, ColumnType};
