use thiserror::Error;

/// Failure to retrieve or parse the input resource.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("record {record}: invalid date '{value}'")]
    InvalidDate { record: u64, value: String },
    #[error("record {record}: invalid count '{value}' in column '{column}'")]
    InvalidCount {
        record: u64,
        column: &'static str,
        value: String,
    },
}
