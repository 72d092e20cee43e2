//! Selection, aggregation, and reshaping of case records.
//!
//! [`filter_and_aggregate`] keeps allowlisted countries and derives totals,
//! [`pivot`] turns the record stream into a date-indexed wide table, and
//! [`per_capita`] derives the rate-per-100,000 view of a wide table.

mod error;
mod percapita;
mod pivot;
mod select;
mod table;

pub use error::{MissingPopulationError, TransformError};
pub use percapita::{PER_100K, per_capita};
pub use pivot::pivot;
pub use select::filter_and_aggregate;
pub use table::WideTable;
