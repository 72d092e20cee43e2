//! Country selection and total-case aggregation.

use std::collections::BTreeSet;

use casetrend_model::{AggregatedRecord, CaseRecord};
use tracing::debug;

/// Keep records for allowlisted countries and derive their totals.
///
/// Matching is case-sensitive and exact. Source order is preserved, and an
/// allowlist entry that never appears in the data simply contributes no
/// records.
pub fn filter_and_aggregate(records: &[CaseRecord], countries: &[String]) -> Vec<AggregatedRecord> {
    let allowed: BTreeSet<&str> = countries.iter().map(String::as_str).collect();
    let selected: Vec<AggregatedRecord> = records
        .iter()
        .filter(|record| allowed.contains(record.country.as_str()))
        .map(|record| AggregatedRecord {
            date: record.date,
            country: record.country.clone(),
            total_cases: record.total_cases(),
        })
        .collect();
    debug!(
        input = records.len(),
        selected = selected.len(),
        "filtered records to configured countries"
    );
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(country: &str, confirmed: u64) -> CaseRecord {
        CaseRecord {
            date: NaiveDate::from_ymd_opt(2020, 1, 22).unwrap(),
            country: country.to_string(),
            confirmed: Some(confirmed),
            recovered: Some(1),
            deaths: None,
        }
    }

    #[test]
    fn keeps_only_allowlisted_countries_in_source_order() {
        let records = vec![record("US", 5), record("France", 9), record("Belgium", 2)];
        let countries = vec!["Belgium".to_string(), "US".to_string()];

        let selected = filter_and_aggregate(&records, &countries);

        let names: Vec<&str> = selected.iter().map(|r| r.country.as_str()).collect();
        assert_eq!(names, vec!["US", "Belgium"]);
        assert_eq!(selected[0].total_cases, 6);
        assert_eq!(selected[1].total_cases, 3);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let records = vec![record("us", 5)];
        let countries = vec!["US".to_string()];
        assert!(filter_and_aggregate(&records, &countries).is_empty());
    }

    #[test]
    fn absent_allowlist_entries_are_not_an_error() {
        let records = vec![record("US", 5)];
        let countries = vec!["US".to_string(), "Atlantis".to_string()];
        assert_eq!(filter_and_aggregate(&records, &countries).len(), 1);
    }
}
