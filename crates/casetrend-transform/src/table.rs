//! Date-indexed wide table over a polars frame.

use chrono::NaiveDate;
use polars::prelude::{AnyValue, Column, DataFrame, IntoColumn, NamedFrom, Series};

use crate::TransformError;

/// A date-indexed table with one nullable Float64 column per country.
///
/// Rows follow the date order of the source data and `columns` captures the
/// order the country columns were created in; every downstream consumer
/// must use that order. A null cell means the (date, country) pair was
/// absent from the input, which is not the same as zero.
#[derive(Debug, Clone)]
pub struct WideTable {
    dates: Vec<NaiveDate>,
    columns: Vec<String>,
    data: DataFrame,
}

impl WideTable {
    /// Build from a date index and `(name, cells)` pairs.
    ///
    /// Column order is taken from the pairs as given; every cell vector must
    /// be as long as the date index.
    pub fn from_columns(
        dates: Vec<NaiveDate>,
        columns: Vec<(String, Vec<Option<f64>>)>,
    ) -> Result<Self, TransformError> {
        let mut names = Vec::with_capacity(columns.len());
        let mut cols: Vec<Column> = Vec::with_capacity(columns.len());
        for (name, cells) in columns {
            cols.push(Series::new(name.as_str().into(), cells).into_column());
            names.push(name);
        }
        let data = DataFrame::new(cols)?;
        Ok(Self {
            dates,
            columns: names,
            data,
        })
    }

    /// The date index, in row order.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Country columns in table order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The backing frame.
    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn height(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Cell at (row, column name); `None` for absent pairs, out-of-range
    /// rows, and unknown columns.
    pub fn cell(&self, row: usize, column: &str) -> Option<f64> {
        let column = self.data.column(column).ok()?;
        match column.get(row).ok()? {
            AnyValue::Float64(value) => Some(value),
            _ => None,
        }
    }

    /// All cells of one column in row order; `None` for unknown columns.
    pub fn column_values(&self, column: &str) -> Option<Vec<Option<f64>>> {
        if self.data.column(column).is_err() {
            return None;
        }
        Some((0..self.height()).map(|row| self.cell(row, column)).collect())
    }

    /// Largest non-null cell of a column; `None` when the column is unknown
    /// or entirely null.
    pub fn column_max(&self, column: &str) -> Option<f64> {
        self.column_values(column)?
            .into_iter()
            .flatten()
            .fold(None, |max, value| match max {
                Some(current) if current >= value => Some(current),
                _ => Some(value),
            })
    }

    /// Largest non-null cell across the whole table.
    pub fn max(&self) -> Option<f64> {
        self.columns
            .iter()
            .filter_map(|column| self.column_max(column))
            .fold(None, |max, value| match max {
                Some(current) if current >= value => Some(current),
                _ => Some(value),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, day).unwrap()
    }

    fn sample() -> WideTable {
        WideTable::from_columns(
            vec![day(22), day(23)],
            vec![
                ("US".to_string(), vec![Some(1.0), Some(3.0)]),
                ("Belgium".to_string(), vec![Some(0.0), None]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn cell_distinguishes_null_from_zero() {
        let table = sample();
        assert_eq!(table.cell(0, "Belgium"), Some(0.0));
        assert_eq!(table.cell(1, "Belgium"), None);
        assert_eq!(table.cell(0, "Nowhere"), None);
    }

    #[test]
    fn column_max_ignores_nulls() {
        let table = sample();
        assert_eq!(table.column_max("US"), Some(3.0));
        assert_eq!(table.column_max("Belgium"), Some(0.0));
    }

    #[test]
    fn table_max_spans_all_columns() {
        assert_eq!(sample().max(), Some(3.0));
    }

    #[test]
    fn empty_table_has_no_max() {
        let table = WideTable::from_columns(Vec::new(), Vec::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.max(), None);
    }
}
