//! Reels: per-item metadata and media from the feed API.
//!
//! Feed responses look like `{"reels": {"<user id>": {"items": [...]}}}`.
//! Every item becomes one record in `<user id>.jsonl`; the tallest image
//! candidate and video version referenced by the item are looked up in the
//! same archive and emitted as binaries.

use serde_json::{Map, Value};

use crate::access::Selector;
use crate::error::{HarxError, Result};
use crate::extract::extract;
use crate::har::{content_encoding, request_url, response_body, response_text, Method, MimeType};
use crate::output::Output;
use crate::path;
use crate::pluck::{pluck, FieldSpec};
use crate::predicate::Predicate;
use crate::url_model::{derive_media_filename, record_sink_name};

use super::{Outputs, Recipe};

/// Plucked fields holding media URLs, in emission order.
const MEDIA_FIELDS: [&str; 2] = ["image_url", "video_url"];

pub struct Reels {
    api_fragment: String,
    fields: FieldSpec,
}

impl Reels {
    pub fn new(api_fragment: &str) -> Self {
        Reels {
            api_fragment: api_fragment.to_string(),
            fields: Self::metadata_spec(),
        }
    }

    /// Field spec applied to every item.
    pub fn metadata_spec() -> FieldSpec {
        FieldSpec::new()
            .field("id", path!["id"])
            .field("taken_at", path!["taken_at"])
            .field("user", path!["user"])
            .field("caption", path!["accessibility_caption"])
            .field(
                "image_url",
                path![
                    "image_versions2",
                    "candidates",
                    Selector::max_by("height"),
                    "url"
                ],
            )
            .field(
                "video_url",
                path!["video_versions", Selector::max_by("height"), "url"],
            )
    }

    fn documents_predicate(&self) -> Predicate {
        Predicate::new()
            .mime(MimeType::JSON)
            .url(self.api_fragment.as_str())
            .method(Method::GET)
    }

    /// The item's record, then its media, each built only when pulled.
    fn item_outputs<'a>(
        &self,
        archive: &'a Value,
        user: &str,
        item: &Value,
    ) -> impl Iterator<Item = Result<Output>> + 'a {
        let (first, media) = match pluck(item, &self.fields) {
            Ok(metadata) => {
                tracing::debug!(user, id = ?metadata.get("id"), "metadata parsed");
                let media: Vec<String> = MEDIA_FIELDS
                    .iter()
                    .filter_map(|field| metadata.get(*field).and_then(Value::as_str))
                    .map(str::to_string)
                    .collect();
                let record = Output::Record {
                    sink: record_sink_name(user),
                    record: metadata,
                };
                (Ok(record), media)
            }
            Err(err) => (Err(err.into()), Vec::new()),
        };

        let media = media
            .into_iter()
            .filter_map(move |url| match media_output(archive, &url) {
                Ok(output) => output.map(Ok),
                Err(err) if err.is_recoverable() => {
                    tracing::warn!(%url, %err, "skipping media");
                    None
                }
                Err(err) => Some(Err(err)),
            });
        std::iter::once(first).chain(media)
    }
}

impl Recipe for Reels {
    fn name(&self) -> &str {
        "reels"
    }

    fn description(&self) -> &str {
        "reel item metadata (JSON Lines per user) and their highest-resolution media"
    }

    fn run<'a>(&'a self, archive: &'a Value) -> Result<Outputs<'a>> {
        let docs = extract(archive, &self.documents_predicate())?;
        tracing::info!(documents = docs.len(), "reels: candidate documents");

        let outputs = docs
            .into_iter()
            .filter_map(decode_document)
            .flat_map(user_items)
            .flat_map(move |(user, item)| self.item_outputs(archive, &user, &item));
        Ok(Box::new(outputs))
    }
}

/// Parses the JSON body of a candidate document, or logs why it is skipped.
fn decode_document(entry: &Value) -> Option<Value> {
    let url = request_url(entry).unwrap_or("<no url>");
    let Some(text) = response_text(entry) else {
        tracing::warn!(url, "empty response in document, skipping");
        return None;
    };
    match serde_json::from_str(text) {
        Ok(doc) => Some(doc),
        Err(source) => {
            let err = HarxError::Parse {
                what: url.to_string(),
                source,
            };
            tracing::warn!(%err, "cannot parse document, skipping");
            None
        }
    }
}

/// `(user id, item)` pairs of a decoded feed document.
fn user_items(doc: Value) -> impl Iterator<Item = (String, Value)> {
    let users = match take(doc, "reels") {
        Some(Value::Object(users)) => users,
        _ => {
            tracing::debug!("document has no reels");
            Map::new()
        }
    };
    users.into_iter().flat_map(|(user, payload)| {
        let items = match take(payload, "items") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        };
        tracing::debug!(%user, items = items.len(), "processing items for user");
        items.into_iter().map(move |item| (user.clone(), item))
    })
}

fn take(value: Value, key: &str) -> Option<Value> {
    match value {
        Value::Object(mut map) => map.remove(key),
        _ => None,
    }
}

/// Binary output for the first captured GET of `url`.
///
/// Only the first matching entry is used, so a media file fetched over
/// several connections is written once.
fn media_output(archive: &Value, url: &str) -> Result<Option<Output>> {
    let hits = extract(archive, &Predicate::new().url(url).method(Method::GET))?;
    let Some(entry) = hits.first() else {
        tracing::info!(url, "media not captured in archive");
        return Ok(None);
    };
    if hits.len() > 1 {
        tracing::debug!(url, matches = hits.len(), "using first captured response");
    }
    let content = response_body(entry)?
        .ok_or_else(|| HarxError::MissingField("response.content.text".to_string()))?;
    Ok(Some(Output::Binary {
        sink: derive_media_filename(url),
        content,
        encoding: content_encoding(entry).map(str::to_string),
    }))
}
