use bandchart_rs::ChartError;
use bandchart_rs::data::{CellValue, ColumnInfo, ColumnType, GroupTag, build_records};

fn standard_columns() -> Vec<ColumnInfo> {
    vec![
        ColumnInfo::new("date", ColumnType::String),
        ColumnInfo::new("flag", ColumnType::String),
        ColumnInfo::new("Variable 1", ColumnType::Number),
        ColumnInfo::new("Variable 2", ColumnType::Number),
    ]
}

fn row(date: &str, flag: &str, metric1: f64, metric2: f64) -> Vec<CellValue> {
    vec![
        CellValue::from(date),
        CellValue::from(flag),
        CellValue::Number(metric1),
        CellValue::Number(metric2),
    ]
}

#[test]
fn records_keep_positional_identity() {
    let rows = vec![
        row("2020-01-01", "B", 100.0, 100.0),
        row("2020-02-01", "B", 102.0, 98.0),
        row("2020-03-01", "T", 105.0, 95.0),
    ];

    let records = build_records(&standard_columns(), &rows).expect("adapt");
    assert_eq!(records.len(), 3);

    assert_eq!(records[1].category, "2020-02-01");
    assert_eq!(records[1].group, GroupTag::Baseline);
    assert_eq!(records[1].metric1, 102.0);
    assert_eq!(records[1].metric2, 98.0);

    assert_eq!(records[2].category, "2020-03-01");
    assert!(records[2].group.is_test());
}

#[test]
fn unknown_group_labels_are_preserved() {
    let rows = vec![row("2020-01-01", "Q", 1.0, 2.0)];

    let records = build_records(&standard_columns(), &rows).expect("adapt");
    assert_eq!(records[0].group, GroupTag::Other("Q".to_owned()));
    assert!(!records[0].group.is_baseline());
    assert!(!records[0].group.is_test());
}

#[test]
fn short_row_reports_schema_mismatch_with_position() {
    let rows = vec![
        row("2020-01-01", "B", 100.0, 100.0),
        vec![
            CellValue::from("2020-02-01"),
            CellValue::from("B"),
            CellValue::Number(102.0),
        ],
    ];

    let result = build_records(&standard_columns(), &rows);
    assert!(matches!(
        result,
        Err(ChartError::SchemaMismatch {
            row: 1,
            expected: 4,
            actual: 3
        })
    ));
}

#[test]
fn mistyped_cell_is_rejected() {
    let rows = vec![vec![
        CellValue::from("2020-01-01"),
        CellValue::from("B"),
        CellValue::from("not a number"),
        CellValue::Number(100.0),
    ]];

    let result = build_records(&standard_columns(), &rows);
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn schema_must_describe_exactly_four_columns() {
    let columns = vec![
        ColumnInfo::new("date", ColumnType::String),
        ColumnInfo::new("flag", ColumnType::String),
    ];

    let result = build_records(&columns, &[]);
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn schema_with_wrong_column_types_is_rejected() {
    let columns = vec![
        ColumnInfo::new("date", ColumnType::Number),
        ColumnInfo::new("flag", ColumnType::String),
        ColumnInfo::new("Variable 1", ColumnType::Number),
        ColumnInfo::new("Variable 2", ColumnType::Number),
    ];

    let result = build_records(&columns, &[]);
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn empty_table_adapts_to_no_records() {
    let records = build_records(&standard_columns(), &[]).expect("adapt");
    assert!(records.is_empty());
}
