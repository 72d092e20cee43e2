//! Pivot behavior tests.

use casetrend_model::AggregatedRecord;
use casetrend_transform::pivot;
use chrono::NaiveDate;

fn day(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, day).unwrap()
}

fn record(day_of_month: u32, country: &str, total_cases: u64) -> AggregatedRecord {
    AggregatedRecord {
        date: day(day_of_month),
        country: country.to_string(),
        total_cases,
    }
}

#[test]
fn columns_follow_first_appearance_order() {
    let records = vec![
        record(22, "US", 1),
        record(22, "Belgium", 0),
        record(23, "Belgium", 4),
        record(23, "US", 3),
    ];

    let table = pivot(&records).unwrap();

    let columns: Vec<&str> = table.columns().iter().map(String::as_str).collect();
    assert_eq!(columns, vec!["US", "Belgium"]);
    assert_eq!(table.dates(), &[day(22), day(23)]);
}

#[test]
fn absent_pairs_stay_null() {
    let records = vec![
        record(22, "US", 1),
        record(22, "Belgium", 0),
        record(23, "US", 3),
    ];

    let table = pivot(&records).unwrap();

    assert_eq!(table.cell(0, "US"), Some(1.0));
    assert_eq!(table.cell(0, "Belgium"), Some(0.0));
    assert_eq!(table.cell(1, "US"), Some(3.0));
    assert_eq!(table.cell(1, "Belgium"), None);
}

#[test]
fn late_columns_backfill_null_for_earlier_dates() {
    let records = vec![record(22, "US", 1), record(24, "Belgium", 7)];

    let table = pivot(&records).unwrap();

    assert_eq!(table.cell(0, "Belgium"), None);
    assert_eq!(table.cell(1, "Belgium"), Some(7.0));
    assert_eq!(table.cell(1, "US"), None);
}

#[test]
fn duplicate_pairs_keep_the_last_value() {
    let records = vec![record(22, "US", 1), record(22, "US", 2)];

    let table = pivot(&records).unwrap();

    assert_eq!(table.height(), 1);
    assert_eq!(table.cell(0, "US"), Some(2.0));
}

#[test]
fn pivot_is_deterministic() {
    let records = vec![
        record(22, "US", 1),
        record(22, "Belgium", 0),
        record(23, "US", 3),
    ];

    let first = pivot(&records).unwrap();
    let second = pivot(&records).unwrap();

    assert_eq!(first.columns(), second.columns());
    assert_eq!(first.dates(), second.dates());
    for (row, _) in first.dates().iter().enumerate() {
        for column in first.columns() {
            assert_eq!(first.cell(row, column), second.cell(row, column));
        }
    }
}

#[test]
fn empty_input_yields_empty_table() {
    let table = pivot(&[]).unwrap();
    assert!(table.is_empty());
    assert!(table.columns().is_empty());
}
