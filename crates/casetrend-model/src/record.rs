//! Row-level record types flowing from ingestion into selection.

use chrono::NaiveDate;

/// One row of the source dataset: cumulative counts for a country on a day.
///
/// Counts are cumulative and may be absent for early dates in the feed; an
/// absent count is distinct from zero and comes from an empty CSV cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRecord {
    pub date: NaiveDate,
    pub country: String,
    pub confirmed: Option<u64>,
    pub recovered: Option<u64>,
    pub deaths: Option<u64>,
}

impl CaseRecord {
    /// Sum of the three counts, treating absent values as zero.
    pub fn total_cases(&self) -> u64 {
        self.confirmed.unwrap_or(0) + self.recovered.unwrap_or(0) + self.deaths.unwrap_or(0)
    }
}

/// A selected record with its derived total. Fixed after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedRecord {
    pub date: NaiveDate,
    pub country: String,
    pub total_cases: u64,
}

impl From<CaseRecord> for AggregatedRecord {
    fn from(record: CaseRecord) -> Self {
        let total_cases = record.total_cases();
        Self {
            date: record.date,
            country: record.country,
            total_cases,
        }
    }
}
