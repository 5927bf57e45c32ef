//! HAR (HTTP Archive) input: loading archives and reading entry fields.
//!
//! Entries are plain JSON values; the helpers below resolve the fixed HAR 1.2
//! sub-paths and treat malformed shapes as absent.

mod parse;
pub mod paths;

pub use parse::{load_archive, parse_archive};
pub use paths::{Method, MimeType};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;

use crate::access::{access_str, Path};
use crate::error::{HarxError, Result};

/// `content.encoding` value browsers use for binary bodies.
pub const BASE64: &str = "base64";

fn field<'a>(entry: &'a Value, path: &Path) -> Option<&'a str> {
    access_str(entry, path).ok().flatten()
}

pub fn request_url(entry: &Value) -> Option<&str> {
    field(entry, &paths::URL)
}

pub fn request_method(entry: &Value) -> Option<&str> {
    field(entry, &paths::METHOD)
}

pub fn mime_type(entry: &Value) -> Option<&str> {
    field(entry, &paths::MIMETYPE)
}

/// Response body as captured. Binary bodies are kept as the archive stores them.
pub fn response_text(entry: &Value) -> Option<&str> {
    field(entry, &paths::TEXT)
}

pub fn content_encoding(entry: &Value) -> Option<&str> {
    field(entry, &paths::ENCODING)
}

/// Response body as bytes, undoing a base64 `content.encoding`.
///
/// `Ok(None)` when the entry has no `text`. Unknown encodings are passed
/// through unchanged.
pub fn response_body(entry: &Value) -> Result<Option<Vec<u8>>> {
    let Some(text) = response_text(entry) else {
        return Ok(None);
    };
    match content_encoding(entry) {
        Some(encoding) if encoding.eq_ignore_ascii_case(BASE64) => STANDARD
            .decode(text)
            .map(Some)
            .map_err(|source| HarxError::Decode {
                what: request_url(entry).unwrap_or("<no url>").to_string(),
                encoding: encoding.to_string(),
                source,
            }),
        Some(other) => {
            tracing::debug!(encoding = other, "unsupported body encoding, keeping text");
            Ok(Some(text.as_bytes().to_vec()))
        }
        None => Ok(Some(text.as_bytes().to_vec())),
    }
}
