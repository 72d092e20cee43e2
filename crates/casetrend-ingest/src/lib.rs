//! Dataset ingestion: fetching the source resource and parsing it into
//! typed case records.
//!
//! Any failure here is fatal for the run; there is no retry and no partial
//! result.

mod error;
mod fetch;
mod parse;

pub use error::DataSourceError;
pub use fetch::fetch_source;
pub use parse::parse_records;

use casetrend_model::CaseRecord;

/// Fetch a source and parse it in one step.
pub fn load_records(source: &str) -> Result<Vec<CaseRecord>, DataSourceError> {
    let text = fetch_source(source)?;
    parse_records(&text)
}
