//! IDL loading from text, a local file, or a URL

use crate::cli::IdlSource;
use crate::error::{ViewerError, ViewerResult};
use crate::idl::{normalize, Program};
use log::info;
use std::path::Path;
use std::time::Duration;

/// Default timeout for URL fetches
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Load a program from the specified source.
pub async fn load_program(source: IdlSource, http_timeout_secs: u64) -> ViewerResult<Program> {
    match source {
        IdlSource::File(path) => load_program_from_file(&path),
        IdlSource::Url(url) => fetch_program_from_url(&url, http_timeout_secs).await,
    }
}

/// Parse IDL JSON text and normalize it.
///
/// Invalid JSON is a [`ViewerError::ParseError`] and the normalizer never
/// runs; a valid document with the wrong shape is a
/// [`ViewerError::FormatError`].
pub fn load_program_from_str(json_str: &str) -> ViewerResult<Program> {
    let value: serde_json::Value = serde_json::from_str(json_str)?;
    normalize(&value)
}

/// Load a program from a local JSON file.
pub fn load_program_from_file(path: &str) -> ViewerResult<Program> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(ViewerError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("File not found: {}", path.display()),
        )));
    }

    info!("loading IDL from {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    load_program_from_str(&contents)
}

/// Fetch a program from a remote URL.
pub async fn fetch_program_from_url(url: &str, timeout_secs: u64) -> ViewerResult<Program> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| ViewerError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

    info!("fetching IDL from {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ViewerError::NetworkError(format!("HTTP request failed: {}", e)))?;

    if !response.status().is_success() {
        return Err(ViewerError::HttpError {
            status: response.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| ViewerError::NetworkError(format!("Failed to read response body: {}", e)))?;

    load_program_from_str(&body)
}
