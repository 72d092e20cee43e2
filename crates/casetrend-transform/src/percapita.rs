//! Per-capita normalization of a wide table.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{MissingPopulationError, TransformError, WideTable};

/// Rates are expressed per 100,000 people.
pub const PER_100K: f64 = 100_000.0;

/// Derive the per-capita view: `cell / population * 100_000`.
///
/// Every denominator is resolved before any output is built, so a missing
/// population entry fails without producing a partial table. Null cells stay
/// null and column order is preserved exactly.
pub fn per_capita(
    table: &WideTable,
    populations: &BTreeMap<String, u64>,
) -> Result<WideTable, TransformError> {
    let mut denominators = Vec::with_capacity(table.columns().len());
    for country in table.columns() {
        let population =
            populations
                .get(country)
                .copied()
                .ok_or_else(|| MissingPopulationError {
                    country: country.clone(),
                })?;
        denominators.push(population as f64);
    }

    let mut columns = Vec::with_capacity(table.columns().len());
    for (country, denominator) in table.columns().iter().zip(denominators) {
        let cells: Vec<Option<f64>> = (0..table.height())
            .map(|row| {
                table
                    .cell(row, country)
                    .map(|value| value / denominator * PER_100K)
            })
            .collect();
        columns.push((country.clone(), cells));
    }

    debug!(columns = columns.len(), "derived per-capita table");
    WideTable::from_columns(table.dates().to_vec(), columns)
}
