//! Reading HAR files into a JSON tree.
//!
//! The archive is kept as an untyped `serde_json::Value` so the extraction
//! engine can walk arbitrary paths; only `log.entries` is required, and that
//! is checked by the extractor.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{HarxError, Result};

/// Parses HAR bytes. Anything that is valid JSON is accepted here.
pub fn parse_archive(bytes: &[u8], origin: &str) -> Result<Value> {
    serde_json::from_slice(bytes).map_err(|source| HarxError::Parse {
        what: origin.to_string(),
        source,
    })
}

/// Reads and parses the HAR file at `path`.
pub fn load_archive(path: &Path) -> Result<Value> {
    let bytes = fs::read(path).map_err(|e| HarxError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read archive");
    parse_archive(&bytes, &path.display().to_string())
}
