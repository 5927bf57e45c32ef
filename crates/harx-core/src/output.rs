//! Items emitted by recipes and consumed by sinks.

use std::fmt;

use serde_json::Value;

use crate::pluck::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Binary,
    Stream,
    Single,
}

/// One emission of a recipe. `sink` names the destination (file name).
#[derive(Clone, PartialEq)]
pub enum Output {
    /// Media body as bytes. `encoding` is the HAR `content.encoding` it was
    /// decoded from, if any.
    Binary {
        sink: String,
        content: Vec<u8>,
        encoding: Option<String>,
    },
    /// One line of a JSON Lines stream.
    Record { sink: String, record: Record },
    /// A standalone JSON document.
    Single { sink: String, value: Value },
}

impl Output {
    pub fn kind(&self) -> OutputKind {
        match self {
            Output::Binary { .. } => OutputKind::Binary,
            Output::Record { .. } => OutputKind::Stream,
            Output::Single { .. } => OutputKind::Single,
        }
    }

    pub fn sink(&self) -> &str {
        match self {
            Output::Binary { sink, .. } | Output::Record { sink, .. } | Output::Single { sink, .. } => {
                sink
            }
        }
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Binary { sink, content, .. } => {
                write!(f, "<Output Binary {sink} {} bytes>", content.len())
            }
            Output::Record { sink, record } => {
                let text = Value::Object(record.clone()).to_string();
                write!(f, "<Output Stream {sink} {}>", preview(&text))
            }
            Output::Single { sink, value } => {
                write!(f, "<Output Single {sink} {}>", preview(&value.to_string()))
            }
        }
    }
}

fn preview(text: &str) -> &str {
    match text.char_indices().nth(20) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}
