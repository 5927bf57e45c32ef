//! Error taxonomy for extraction.
//!
//! `HarxError` covers archive-, document- and media-level failures; which of
//! them abort a file is decided by the caller (see `driver`). `AccessError`
//! is raised by the deep accessor when a sequence is mis-indexed and is never
//! swallowed.

use std::path::PathBuf;

/// Failure while walking a path through nested JSON.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// Literal or computed index past the end of a sequence.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// Name key used against a sequence.
    #[error("cannot index a sequence with key {0:?}")]
    NotAnIndex(String),
    /// A computed selector could not produce a key.
    #[error("selector `{selector}` failed: {reason}")]
    Selector {
        selector: &'static str,
        reason: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum HarxError {
    /// Archive does not expose a non-empty `log.entries` sequence.
    #[error("input does not have values at `log.entries`; is it a valid HAR file?")]
    InputFormat,
    /// Text that should hold JSON could not be parsed.
    #[error("cannot parse JSON in {what}: {source}")]
    Parse {
        what: String,
        #[source]
        source: serde_json::Error,
    },
    /// Output could not be serialized.
    #[error("cannot encode {what}: {source}")]
    Encode {
        what: String,
        #[source]
        source: serde_json::Error,
    },
    /// A captured body could not be decoded from its HAR `encoding`.
    #[error("cannot decode {encoding} body of {what}: {source}")]
    Decode {
        what: String,
        encoding: String,
        #[source]
        source: base64::DecodeError,
    },
    /// An expected field is absent.
    #[error("missing field `{0}`")]
    MissingField(String),
    #[error(transparent)]
    Access(#[from] AccessError),
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown recipe `{0}`")]
    UnknownRecipe(String),
}

impl HarxError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HarxError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for failures that only invalidate one document or media item.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            HarxError::Parse { .. } | HarxError::Decode { .. } | HarxError::MissingField(_)
        )
    }
}

pub type Result<T, E = HarxError> = std::result::Result<T, E>;
