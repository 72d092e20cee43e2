use polars::prelude::PolarsError;
use thiserror::Error;

/// A table column has no entry in the population map.
///
/// Fatal for the run: silently skipping the series would leave the
/// per-capita chart missing a country that the absolute chart shows.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no population entry for country '{country}'")]
pub struct MissingPopulationError {
    pub country: String,
}

/// Failure while reshaping records into tables.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    MissingPopulation(#[from] MissingPopulationError),
    #[error("frame construction: {0}")]
    Frame(#[from] PolarsError),
}
