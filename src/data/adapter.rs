use tracing::debug;

use crate::data::record::{GroupTag, Record};
use crate::data::schema::{COLUMN_COUNT, CellValue, ColumnInfo, ColumnType};
use crate::error::{ChartError, ChartResult};

/// Converts the row-oriented table into typed records, one per row.
///
/// Output order equals input order (row i in, record i out); the category
/// axis and the test-region boundary both depend on it. Cells are validated
/// against the declared schema here so malformed rows fail loudly instead of
/// producing silently missing fields downstream.
pub fn build_records(
    columns: &[ColumnInfo],
    rows: &[Vec<CellValue>],
) -> ChartResult<Vec<Record>> {
    validate_schema(columns)?;

    let mut records = Vec::with_capacity(rows.len());
    for (row_index, row) in rows.iter().enumerate() {
        if row.len() != columns.len() {
            return Err(ChartError::SchemaMismatch {
                row: row_index,
                expected: columns.len(),
                actual: row.len(),
            });
        }

        let category = text_cell(&row[0], &columns[0], row_index)?.to_owned();
        let group = GroupTag::parse(text_cell(&row[1], &columns[1], row_index)?);
        let metric1 = number_cell(&row[2], &columns[2], row_index)?;
        let metric2 = number_cell(&row[3], &columns[3], row_index)?;

        records.push(Record {
            category,
            group,
            metric1,
            metric2,
        });
    }

    debug!(record_count = records.len(), "built records from tabular payload");
    Ok(records)
}

fn validate_schema(columns: &[ColumnInfo]) -> ChartResult<()> {
    if columns.len() != COLUMN_COUNT {
        return Err(ChartError::InvalidData(format!(
            "schema must describe {COLUMN_COUNT} columns, got {}",
            columns.len()
        )));
    }

    for (index, expected) in [
        ColumnType::String,
        ColumnType::String,
        ColumnType::Number,
        ColumnType::Number,
    ]
    .into_iter()
    .enumerate()
    {
        if columns[index].column_type != expected {
            return Err(ChartError::InvalidData(format!(
                "column `{}` must be declared {expected:?}",
                columns[index].label
            )));
        }
    }

    Ok(())
}

fn text_cell<'a>(
    cell: &'a CellValue,
    column: &ColumnInfo,
    row_index: usize,
) -> ChartResult<&'a str> {
    cell.as_text().ok_or_else(|| {
        ChartError::InvalidData(format!(
            "row {row_index}: column `{}` expects a string value",
            column.label
        ))
    })
}

fn number_cell(cell: &CellValue, column: &ColumnInfo, row_index: usize) -> ChartResult<f64> {
    let value = cell.as_number().ok_or_else(|| {
        ChartError::InvalidData(format!(
            "row {row_index}: column `{}` expects a numeric value",
            column.label
        ))
    })?;
    if !value.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "row {row_index}: column `{}` value must be finite",
            column.label
        )));
    }
    Ok(value)
}
