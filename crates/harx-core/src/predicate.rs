//! Entry filter: MIME substring, URL substring and exact HTTP method.
//!
//! Criteria that are `None` are disabled. A criterion that is set but whose
//! field is missing from the entry makes the whole match false, whatever the
//! other criteria say. With no criterion set nothing matches.

use serde_json::Value;

use crate::access::{access_str, Path};
use crate::har::paths;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    pub mime: Option<String>,
    pub url: Option<String>,
    pub method: Option<String>,
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    pub fn url(mut self, fragment: impl Into<String>) -> Self {
        self.url = Some(fragment.into());
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.mime.is_none() && self.url.is_none() && self.method.is_none()
    }
}

type FieldTest = fn(&str, &str) -> bool;

/// Returns whether `entry` satisfies every criterion set on `predicate`.
pub fn matches(entry: &Value, predicate: &Predicate) -> bool {
    let criteria: [(Option<&str>, &Path, FieldTest); 3] = [
        (predicate.mime.as_deref(), &paths::MIMETYPE, contains),
        (predicate.method.as_deref(), &paths::METHOD, equals),
        (predicate.url.as_deref(), &paths::URL, contains),
    ];

    let mut result: Option<bool> = None;
    for (wanted, path, test) in criteria {
        let Some(wanted) = wanted else {
            continue;
        };
        let value = match access_str(entry, path) {
            Ok(Some(value)) => value,
            Ok(None) => return false,
            Err(err) => {
                tracing::trace!(%err, "entry field not reachable");
                return false;
            }
        };
        let hit = test(value, wanted);
        result = Some(result.map_or(hit, |acc| acc && hit));
    }
    result.unwrap_or(false)
}

fn contains(value: &str, wanted: &str) -> bool {
    value.contains(wanted)
}

fn equals(value: &str, wanted: &str) -> bool {
    value == wanted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::har::{Method, MimeType};
    use serde_json::json;

    fn jpeg() -> Value {
        json!({"response": {"content": {"mimeType": "image/jpeg"}}})
    }

    fn jpeg_at_test_com() -> Value {
        json!({
            "request": {"url": "https://www.test.com", "method": "GET"},
            "response": {"content": {"mimeType": "image/jpeg"}}
        })
    }

    #[test]
    fn mime_only() {
        assert!(matches(&jpeg(), &Predicate::new().mime(MimeType::JPEG)));
        assert!(!matches(&jpeg(), &Predicate::new().mime(MimeType::MP4)));
        let mp4 = json!({"response": {"content": {"mimeType": "video/mp4"}}});
        assert!(!matches(&mp4, &Predicate::new().mime(MimeType::JPEG)));
    }

    #[test]
    fn mime_is_substring() {
        let entry = json!({"response": {"content": {"mimeType": "application/json; charset=utf-8"}}});
        assert!(matches(&entry, &Predicate::new().mime(MimeType::JSON)));
    }

    #[test]
    fn empty_predicate_never_matches() {
        assert!(Predicate::new().is_empty());
        assert!(!matches(&jpeg(), &Predicate::new()));
        assert!(!matches(&jpeg_at_test_com(), &Predicate::new()));
    }

    #[test]
    fn url_only() {
        let entry = json!({"request": {"url": "https://www.test.com"}});
        assert!(matches(&entry, &Predicate::new().url("test.com")));
        assert!(matches(&jpeg_at_test_com(), &Predicate::new().url("test.com")));
    }

    #[test]
    fn criteria_are_anded() {
        let entry = jpeg_at_test_com();
        assert!(matches(&entry, &Predicate::new().mime(MimeType::JPEG).url("test.com")));
        assert!(!matches(&entry, &Predicate::new().mime(MimeType::MP4).url("test.com")));
        assert!(!matches(&entry, &Predicate::new().mime(MimeType::JPEG).url("other.org")));
        assert!(matches(
            &entry,
            &Predicate::new().mime(MimeType::JPEG).url("test.com").method(Method::GET)
        ));
        assert!(!matches(
            &entry,
            &Predicate::new().url("test.com").method(Method::POST)
        ));
    }

    #[test]
    fn missing_field_is_false_even_if_others_match() {
        // mime matches, but the entry has no request.url
        assert!(!matches(&jpeg(), &Predicate::new().mime(MimeType::JPEG).url("/api/v1/feed/")));
        // url matches, but the entry has no request.method
        let entry = json!({"request": {"url": "https://www.test.com"}});
        assert!(!matches(&entry, &Predicate::new().url("test.com").method(Method::GET)));
    }

    #[test]
    fn method_is_exact() {
        let entry = json!({"request": {"url": "u", "method": "GET"}});
        assert!(matches(&entry, &Predicate::new().method("GET")));
        assert!(!matches(&entry, &Predicate::new().method("get")));
        assert!(!matches(&entry, &Predicate::new().method("GE")));
    }

    #[test]
    fn malformed_entry_does_not_match() {
        let entry = json!({"request": [1, 2], "response": {"content": {"mimeType": 7}}});
        assert!(!matches(&entry, &Predicate::new().url("x")));
        assert!(!matches(&entry, &Predicate::new().mime("7")));
    }
}
