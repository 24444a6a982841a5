//! Source acquisition: read the Part 6 document from a local standards
//! directory or fetch it from the published URL.

use std::path::Path;

use crate::config::{PART06_FILENAME, SourceSpec};
use crate::error::GenerateError;

/// User agent string for download requests.
const USER_AGENT_VALUE: &str = concat!("uid-dict-gen/", env!("CARGO_PKG_VERSION"));

/// Obtain the full document text for the given source.
///
/// Local mode resolves `part06.xml` inside the directory; a missing file
/// is fatal. Network mode performs one blocking GET with no retry.
pub fn acquire(source: &SourceSpec) -> Result<String, GenerateError> {
    match source {
        SourceSpec::LocalDir(dir) => read_local(dir),
        SourceSpec::Download { url } => download(url),
    }
}

fn read_local(dir: &Path) -> Result<String, GenerateError> {
    let path = dir.join(PART06_FILENAME);
    tracing::debug!(path = %path.display(), "reading local standard document");
    std::fs::read_to_string(&path).map_err(|source| GenerateError::Read { path, source })
}

fn download(url: &str) -> Result<String, GenerateError> {
    tracing::info!(%url, "downloading standard document");
    let network = |error: reqwest::Error| GenerateError::Download {
        url: url.to_string(),
        message: error.to_string(),
    };
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT_VALUE)
        .build()
        .map_err(network)?;
    let body = client
        .get(url)
        .send()
        .and_then(reqwest::blocking::Response::error_for_status)
        .and_then(|response| response.text())
        .map_err(network)?;
    tracing::info!(bytes = body.len(), "download complete, processing");
    Ok(body)
}
