//! Source retrieval for http(s) URLs and local files.

use std::fs;

use tracing::debug;

use crate::DataSourceError;

/// Retrieve the raw text of a source.
///
/// `http://` and `https://` sources go over the network; `file://` URLs and
/// bare paths read from disk. The call blocks until the resource is fully
/// retrieved or fails.
pub fn fetch_source(source: &str) -> Result<String, DataSourceError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        fetch_url(source)
    } else if let Some(path) = source.strip_prefix("file://") {
        read_file(path)
    } else {
        read_file(source)
    }
}

fn fetch_url(url: &str) -> Result<String, DataSourceError> {
    debug!(url, "fetching remote source");
    let fetch_err = |source: reqwest::Error| DataSourceError::Fetch {
        url: url.to_string(),
        source,
    };
    let response = reqwest::blocking::get(url)
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(fetch_err)?;
    response.text().map_err(fetch_err)
}

fn read_file(path: &str) -> Result<String, DataSourceError> {
    debug!(path, "reading local source");
    fs::read_to_string(path).map_err(|source| DataSourceError::Io {
        path: path.to_string(),
        source,
    })
}
