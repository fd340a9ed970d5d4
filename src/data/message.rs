use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::data::schema::{CellValue, ColumnInfo, ColumnType};
use crate::error::{ChartError, ChartResult};

/// `availableRowCount` value meaning "no real data; use the sample".
pub const NO_DATA_SENTINEL: i64 = -1;

/// Inbound payload pushed by the host application.
///
/// Field names follow the host's camelCase wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataMessage {
    pub result_name: String,
    pub available_row_count: i64,
    #[serde(default)]
    pub columns: Vec<ColumnInfo>,
    #[serde(default)]
    pub data: Vec<Vec<CellValue>>,
}

impl DataMessage {
    /// Whether the payload carries a real dataset rather than the sentinel.
    #[must_use]
    pub fn has_real_data(&self) -> bool {
        self.available_row_count >= 0
    }

    /// Parses the raw JSON payload handed over by the host event boundary.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse data message payload: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize data message payload: {e}"))
        })
    }
}

/// Fixed schema of the built-in sample dataset.
#[must_use]
pub fn sample_columns() -> Vec<ColumnInfo> {
    vec![
        ColumnInfo::new("date", ColumnType::String),
        ColumnInfo::new("flag", ColumnType::String),
        ColumnInfo::new("Variable 1", ColumnType::Number),
        ColumnInfo::new("Variable 2", ColumnType::Number),
    ]
}

/// Synthetic sample rows: ten monthly points, random integer values in
/// [95, 105], the first seven in the baseline group and the rest in test.
#[must_use]
pub fn sample_rows<R: Rng>(rng: &mut R) -> Vec<Vec<CellValue>> {
    const MONTHS: [&str; 10] = [
        "2020-01-01",
        "2020-02-01",
        "2020-03-01",
        "2020-04-01",
        "2020-05-01",
        "2020-06-01",
        "2020-07-01",
        "2020-08-01",
        "2020-09-01",
        "2020-10-01",
    ];
    const BASELINE_ROWS: usize = 7;

    MONTHS
        .iter()
        .enumerate()
        .map(|(index, month)| {
            let flag = if index < BASELINE_ROWS { "B" } else { "T" };
            vec![
                CellValue::from(*month),
                CellValue::from(flag),
                CellValue::Number(f64::from(rng.gen_range(95..=105))),
                CellValue::Number(f64::from(rng.gen_range(95..=105))),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{DataMessage, NO_DATA_SENTINEL, sample_rows};

    #[test]
    fn sentinel_message_reports_no_real_data() {
        let message = DataMessage {
            result_name: "dd91".to_owned(),
            available_row_count: NO_DATA_SENTINEL,
            columns: Vec::new(),
            data: Vec::new(),
        };
        assert!(!message.has_real_data());
    }

    #[test]
    fn sample_rows_follow_the_fixed_group_split() {
        let mut rng = StdRng::seed_from_u64(7);
        let rows = sample_rows(&mut rng);
        assert_eq!(rows.len(), 10);
        for (index, row) in rows.iter().enumerate() {
            let expected = if index < 7 { "B" } else { "T" };
            assert_eq!(row[1].as_text(), Some(expected));
            let value = row[2].as_number().expect("numeric cell");
            assert!((95.0..=105.0).contains(&value));
            assert_eq!(value.fract(), 0.0);
        }
    }
}
