//! Per-capita derivation tests, including the reference scenario.

use std::collections::BTreeMap;

use casetrend_model::{AggregatedRecord, CaseRecord};
use casetrend_transform::{TransformError, filter_and_aggregate, per_capita, pivot};
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

fn populations() -> BTreeMap<String, u64> {
    BTreeMap::from([
        ("US".to_string(), 100_000_000),
        ("Belgium".to_string(), 10_000_000),
    ])
}

#[test]
fn scales_each_cell_by_its_population() {
    let table = pivot(&[record(22, "US", 50_000), record(22, "Belgium", 2_000)]).unwrap();

    let capita = per_capita(&table, &populations()).unwrap();

    let us = capita.cell(0, "US").unwrap();
    let belgium = capita.cell(0, "Belgium").unwrap();
    assert!((us - 50.0).abs() < 1e-9);
    assert!((belgium - 20.0).abs() < 1e-9);
}

#[test]
fn column_order_matches_the_source_table() {
    let table = pivot(&[record(22, "US", 1), record(22, "Belgium", 2)]).unwrap();
    let capita = per_capita(&table, &populations()).unwrap();
    assert_eq!(capita.columns(), table.columns());
    assert_eq!(capita.dates(), table.dates());
}

#[test]
fn null_cells_stay_null() {
    let table = pivot(&[record(22, "US", 1), record(23, "Belgium", 2)]).unwrap();
    let capita = per_capita(&table, &populations()).unwrap();
    assert_eq!(capita.cell(0, "Belgium"), None);
    assert_eq!(capita.cell(1, "US"), None);
}

#[test]
fn missing_population_is_fatal() {
    let table = pivot(&[record(22, "US", 1), record(22, "France", 2)]).unwrap();

    let err = per_capita(&table, &populations()).unwrap_err();

    match err {
        TransformError::MissingPopulation(inner) => assert_eq!(inner.country, "France"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_table_derives_an_empty_table() {
    let table = pivot(&[]).unwrap();
    let capita = per_capita(&table, &populations()).unwrap();
    assert!(capita.is_empty());
}

// The worked example: three source rows, two countries, one absent pair.
#[test]
fn reference_scenario_end_to_end() {
    let records = vec![
        CaseRecord {
            date: day(22),
            country: "US".to_string(),
            confirmed: Some(1),
            recovered: Some(0),
            deaths: Some(0),
        },
        CaseRecord {
            date: day(22),
            country: "Belgium".to_string(),
            confirmed: Some(0),
            recovered: Some(0),
            deaths: Some(0),
        },
        CaseRecord {
            date: day(23),
            country: "US".to_string(),
            confirmed: Some(2),
            recovered: Some(1),
            deaths: Some(0),
        },
    ];
    let countries = vec!["US".to_string(), "Belgium".to_string()];

    let selected = filter_and_aggregate(&records, &countries);
    let wide = pivot(&selected).unwrap();
    let capita = per_capita(&wide, &populations()).unwrap();

    assert_eq!(wide.cell(0, "US"), Some(1.0));
    assert_eq!(wide.cell(0, "Belgium"), Some(0.0));
    assert_eq!(wide.cell(1, "US"), Some(3.0));
    assert_eq!(wide.cell(1, "Belgium"), None);

    assert!((capita.cell(0, "US").unwrap() - 0.001).abs() < 1e-12);
    assert_eq!(capita.cell(0, "Belgium"), Some(0.0));
    assert_eq!(capita.cell(1, "Belgium"), None);
}
