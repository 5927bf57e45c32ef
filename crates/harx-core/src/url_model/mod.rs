//! Local filenames for media and record sinks.

mod path;
mod sanitize;

pub use path::filename_from_url_path;
pub use sanitize::sanitize_filename_for_linux;

/// Fallback when a media URL yields no usable name.
const DEFAULT_MEDIA_FILENAME: &str = "media.bin";

/// Filename for a media blob: the URL's last path segment, sanitized.
///
/// - `derive_media_filename("https://cdn.example/v/t51/1_n.jpg?x=1")` → `"1_n.jpg"`
/// - `derive_media_filename("https://cdn.example/")` → `"media.bin"`
pub fn derive_media_filename(url: &str) -> String {
    filename_from_url_path(url)
        .map(|raw| sanitize_filename_for_linux(&raw))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_MEDIA_FILENAME.to_string())
}

/// JSON Lines sink name for records owned by `owner` (e.g. a user id).
pub fn record_sink_name(owner: &str) -> String {
    let stem = sanitize_filename_for_linux(owner);
    if stem.is_empty() {
        "unknown.jsonl".to_string()
    } else {
        format!("{stem}.jsonl")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_filename_from_url() {
        assert_eq!(
            derive_media_filename("https://cdn.example/v/t51/1_n.jpg?x=1"),
            "1_n.jpg"
        );
    }

    #[test]
    fn media_filename_fallback() {
        assert_eq!(derive_media_filename("https://cdn.example/"), "media.bin");
        assert_eq!(derive_media_filename("https://cdn.example/.."), "media.bin");
    }

    #[test]
    fn record_sink_names() {
        assert_eq!(record_sink_name("1234567"), "1234567.jsonl");
        assert_eq!(record_sink_name("../etc"), "etc.jsonl");
        assert_eq!(record_sink_name(""), "unknown.jsonl");
    }
}
