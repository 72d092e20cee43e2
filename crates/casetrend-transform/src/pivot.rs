//! Pivot of aggregated records into the wide layout.

use std::collections::HashMap;

use casetrend_model::AggregatedRecord;
use chrono::NaiveDate;
use tracing::debug;

use crate::{TransformError, WideTable};

/// Pivot records into a date-indexed wide table.
///
/// Row order follows the order dates first appear in the input; column order
/// follows the order countries first appear. A (date, country) pair absent
/// from the input stays null. Duplicate pairs keep the last value seen.
pub fn pivot(records: &[AggregatedRecord]) -> Result<WideTable, TransformError> {
    let mut dates: Vec<NaiveDate> = Vec::new();
    let mut date_rows: HashMap<NaiveDate, usize> = HashMap::new();
    let mut countries: Vec<String> = Vec::new();
    let mut country_cols: HashMap<String, usize> = HashMap::new();
    let mut cells: Vec<Vec<Option<f64>>> = Vec::new();

    for record in records {
        let row = match date_rows.get(&record.date) {
            Some(&row) => row,
            None => {
                let row = dates.len();
                dates.push(record.date);
                date_rows.insert(record.date, row);
                for column in &mut cells {
                    column.push(None);
                }
                row
            }
        };
        let col = match country_cols.get(record.country.as_str()) {
            Some(&col) => col,
            None => {
                let col = countries.len();
                countries.push(record.country.clone());
                country_cols.insert(record.country.clone(), col);
                cells.push(vec![None; dates.len()]);
                col
            }
        };
        cells[col][row] = Some(record.total_cases as f64);
    }

    debug!(
        rows = dates.len(),
        columns = countries.len(),
        "pivoted records into wide table"
    );
    WideTable::from_columns(dates, countries.into_iter().zip(cells).collect())
}
