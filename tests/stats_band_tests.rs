use approx::assert_relative_eq;
use bandchart_rs::ChartError;
use bandchart_rs::core::{ConfidenceBand, population_std_dev};
use bandchart_rs::data::{GroupTag, Record};

fn record(category: &str, group: &str, metric1: f64, metric2: f64) -> Record {
    Record::new(category, GroupTag::parse(group), metric1, metric2)
}

#[test]
fn band_matches_reference_dataset() {
    let records = vec![
        record("2020-01-01", "B", 100.0, 100.0),
        record("2020-02-01", "B", 102.0, 98.0),
        record("2020-03-01", "T", 105.0, 95.0),
    ];

    let band = ConfidenceBand::from_baseline(&records).expect("band");
    assert_relative_eq!(band.mean, 101.0, epsilon = 1e-9);
    assert_relative_eq!(band.lower, 99.04, epsilon = 1e-9);
    assert_relative_eq!(band.upper, 102.96, epsilon = 1e-9);
}

#[test]
fn band_ignores_test_and_unknown_groups() {
    let records = vec![
        record("a", "B", 10.0, 0.0),
        record("b", "T", 1_000.0, 0.0),
        record("c", "X", -1_000.0, 0.0),
        record("d", "B", 14.0, 0.0),
    ];

    let band = ConfidenceBand::from_baseline(&records).expect("band");
    assert_relative_eq!(band.mean, 12.0, epsilon = 1e-9);
    // Population std dev of [10, 14] is 2.
    assert_relative_eq!(band.width(), 2.0 * 1.96 * 2.0, epsilon = 1e-9);
}

#[test]
fn single_baseline_record_collapses_the_band() {
    let records = vec![record("only", "B", 101.0, 99.0)];

    let band = ConfidenceBand::from_baseline(&records).expect("band");
    assert_eq!(band.lower, band.mean);
    assert_eq!(band.upper, band.mean);
    assert_relative_eq!(band.mean, 101.0, epsilon = 1e-12);
}

#[test]
fn empty_baseline_group_is_reported() {
    let records = vec![
        record("a", "T", 1.0, 2.0),
        record("b", "X", 3.0, 4.0),
    ];

    let result = ConfidenceBand::from_baseline(&records);
    assert!(matches!(
        result,
        Err(ChartError::EmptyGroup { label }) if label == "B"
    ));
}

#[test]
fn band_uses_population_std_dev() {
    let values = [100.0, 102.0, 104.0];
    let std_dev = population_std_dev(&values).expect("std dev");
    let band = ConfidenceBand::from_values(&values).expect("band");

    assert_relative_eq!(band.upper - band.mean, 1.96 * std_dev, epsilon = 1e-12);
    assert_relative_eq!(band.mean - band.lower, 1.96 * std_dev, epsilon = 1e-12);
}
