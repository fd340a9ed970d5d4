use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("row {row} carries {actual} values, schema describes {expected}")]
    SchemaMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("group `{label}` has no records")]
    EmptyGroup { label: String },

    #[error("no record belongs to the test group")]
    NoTestRegion,
}
