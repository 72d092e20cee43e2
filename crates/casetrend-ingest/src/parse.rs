//! CSV parsing into typed case records.
//!
//! Required columns: `Date`, `Country`, `Confirmed`, `Recovered`, `Deaths`.
//! Headers are matched case-insensitively after trimming whitespace and a
//! UTF-8 BOM. Empty count cells stay absent, never zero.

use casetrend_model::CaseRecord;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::DataSourceError;

const DATE: &str = "Date";
const COUNTRY: &str = "Country";
const CONFIRMED: &str = "Confirmed";
const RECOVERED: &str = "Recovered";
const DEATHS: &str = "Deaths";

struct ColumnIndex {
    date: usize,
    country: usize,
    confirmed: usize,
    recovered: usize,
    deaths: usize,
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn find_column(headers: &[String], name: &'static str) -> Result<usize, DataSourceError> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(name))
        .ok_or(DataSourceError::MissingColumn(name))
}

fn field<'a>(record: &'a StringRecord, idx: usize) -> &'a str {
    record.get(idx).unwrap_or("").trim()
}

fn parse_count(
    record: &StringRecord,
    idx: usize,
    column: &'static str,
    record_number: u64,
) -> Result<Option<u64>, DataSourceError> {
    let value = field(record, idx);
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<u64>()
        .map(Some)
        .map_err(|_| DataSourceError::InvalidCount {
            record: record_number,
            column,
            value: value.to_string(),
        })
}

/// Parse CSV text into one record per (date, country) row.
pub fn parse_records(text: &str) -> Result<Vec<CaseRecord>, DataSourceError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();
    let columns = ColumnIndex {
        date: find_column(&headers, DATE)?,
        country: find_column(&headers, COUNTRY)?,
        confirmed: find_column(&headers, CONFIRMED)?,
        recovered: find_column(&headers, RECOVERED)?,
        deaths: find_column(&headers, DEATHS)?,
    };

    let mut records = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let record_number = (idx as u64) + 1;

        let date_value = field(&record, columns.date);
        let date = NaiveDate::parse_from_str(date_value, "%Y-%m-%d").map_err(|_| {
            DataSourceError::InvalidDate {
                record: record_number,
                value: date_value.to_string(),
            }
        })?;

        records.push(CaseRecord {
            date,
            country: field(&record, columns.country).to_string(),
            confirmed: parse_count(&record, columns.confirmed, CONFIRMED, record_number)?,
            recovered: parse_count(&record, columns.recovered, RECOVERED, record_number)?,
            deaths: parse_count(&record, columns.deaths, DEATHS, record_number)?,
        });
    }
    debug!(records = records.len(), "parsed source records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_basic_rows() {
        let text = "Date,Country,Confirmed,Recovered,Deaths\n\
                    2020-01-22,US,1,0,0\n\
                    2020-01-23,Belgium,2,1,0\n";
        let records = parse_records(text).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].country, "US");
        assert_eq!(
            records[0].date,
            NaiveDate::from_ymd_opt(2020, 1, 22).unwrap()
        );
        assert_eq!(records[0].confirmed, Some(1));
        assert_eq!(records[1].total_cases(), 3);
    }

    #[test]
    fn empty_counts_stay_absent() {
        let text = "Date,Country,Confirmed,Recovered,Deaths\n\
                    2020-01-22,Belgium,,,\n";
        let records = parse_records(text).unwrap();

        assert_eq!(records[0].confirmed, None);
        assert_eq!(records[0].recovered, None);
        assert_eq!(records[0].deaths, None);
        assert_eq!(records[0].total_cases(), 0);
    }

    #[test]
    fn headers_match_case_insensitively_and_skip_bom() {
        let text = "\u{feff}date,COUNTRY,confirmed,recovered,deaths\n\
                    2020-01-22,US,1,0,0\n";
        let records = parse_records(text).unwrap();
        assert_eq!(records[0].country, "US");
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let text = "Date,Country,Confirmed,Recovered\n2020-01-22,US,1,0\n";
        let err = parse_records(text).unwrap_err();
        assert!(matches!(err, DataSourceError::MissingColumn("Deaths")));
    }

    #[test]
    fn bad_date_is_fatal() {
        let text = "Date,Country,Confirmed,Recovered,Deaths\n\
                    01/22/2020,US,1,0,0\n";
        let err = parse_records(text).unwrap_err();
        assert!(matches!(err, DataSourceError::InvalidDate { record: 1, .. }));
    }

    #[test]
    fn bad_count_is_fatal() {
        let text = "Date,Country,Confirmed,Recovered,Deaths\n\
                    2020-01-22,US,many,0,0\n";
        let err = parse_records(text).unwrap_err();
        assert!(matches!(
            err,
            DataSourceError::InvalidCount {
                column: "Confirmed",
                ..
            }
        ));
    }
}
