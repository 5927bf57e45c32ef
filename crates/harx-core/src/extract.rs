//! Selecting log entries from an archive.

use serde_json::Value;

use crate::access::access;
use crate::error::{HarxError, Result};
use crate::har::paths;
use crate::predicate::{matches, Predicate};

/// Returns the archive's `log.entries`.
///
/// Fails with [`HarxError::InputFormat`] when the sequence is absent, empty or
/// not a sequence.
pub fn entries(archive: &Value) -> Result<&[Value]> {
    match access(archive, &paths::ENTRIES) {
        Ok(Some(Value::Array(entries))) if !entries.is_empty() => Ok(entries.as_slice()),
        _ => Err(HarxError::InputFormat),
    }
}

/// All entries of `archive` matching `predicate`, in archive order.
pub fn extract<'a>(archive: &'a Value, predicate: &Predicate) -> Result<Vec<&'a Value>> {
    let found: Vec<&Value> = entries(archive)?
        .iter()
        .filter(|entry| matches(entry, predicate))
        .collect();
    tracing::trace!(?predicate, matched = found.len(), "extract");
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::har::{response_text, MimeType};
    use serde_json::json;

    fn minimal() -> Value {
        json!({"log": {"entries": [
            {
                "request": {"url": "https://i.example/api/v1/a.jpg", "method": "GET"},
                "response": {"content": {"mimeType": "image/jpeg", "text": "Hi, I am a JPEG."}}
            },
            {
                "request": {"url": "https://v.example/b.mp4", "method": "GET"},
                "response": {"content": {"mimeType": "video/mp4", "text": "Hi, I am a MP4 video."}}
            },
            {
                "request": {"url": "https://www.example/api/v1/feed/", "method": "GET"},
                "response": {"content": {"mimeType": "application/json", "text": "Hi, I am a JSON file."}}
            }
        ]}})
    }

    #[test]
    fn first_match_per_predicate() {
        let har = minimal();
        let cases = [
            (Predicate::new().mime(MimeType::JPEG), "Hi, I am a JPEG."),
            (Predicate::new().mime(MimeType::MP4), "Hi, I am a MP4 video."),
            (Predicate::new().mime(MimeType::JSON), "Hi, I am a JSON file."),
            (Predicate::new().url("api/v1"), "Hi, I am a JPEG."),
            (Predicate::new().mime(MimeType::JPEG).url("api/v1"), "Hi, I am a JPEG."),
        ];
        for (predicate, expected) in cases {
            let found = extract(&har, &predicate).unwrap();
            assert_eq!(response_text(found[0]), Some(expected), "{predicate:?}");
        }
    }

    #[test]
    fn preserves_order_without_dedup() {
        let har = json!({"log": {"entries": [
            {"request": {"url": "https://x/1"}},
            {"request": {"url": "https://y/2"}},
            {"request": {"url": "https://x/1"}},
            {"request": {"url": "https://x/3"}}
        ]}});
        let urls: Vec<_> = extract(&har, &Predicate::new().url("https://x/"))
            .unwrap()
            .into_iter()
            .map(|e| e["request"]["url"].as_str().unwrap())
            .collect();
        assert_eq!(urls, ["https://x/1", "https://x/1", "https://x/3"]);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let har = minimal();
        let found = extract(&har, &Predicate::new().mime(MimeType::PNG)).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn missing_or_empty_entries_is_input_format_error() {
        for har in [
            json!({}),
            json!({"log": {}}),
            json!({"log": {"entries": []}}),
            json!({"log": {"entries": {"0": {}}}}),
            json!([1, 2, 3]),
        ] {
            let err = extract(&har, &Predicate::new().url("x")).unwrap_err();
            assert!(matches!(err, HarxError::InputFormat), "{har}");
        }
    }
}
