//! Builder for HAR archives and feed documents.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::path::Path;

pub const FEED_URL: &str = "https://www.instagram.com/api/v1/feed/reels_media/?reel_ids=1";

#[derive(Default)]
pub struct HarBuilder {
    entries: Vec<Value>,
}

impl HarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, method: &str, url: &str, mime: &str, text: Option<&str>) -> Self {
        let mut content = json!({ "mimeType": mime, "size": text.map_or(0, str::len) });
        if let Some(text) = text {
            content["text"] = json!(text);
        }
        self.entries.push(json!({
            "startedDateTime": "2023-01-01T00:00:00.000Z",
            "request": { "method": method, "url": url, "headers": [] },
            "response": { "status": 200, "headers": [], "content": content }
        }));
        self
    }

    /// GET returning `doc` as JSON.
    pub fn feed(self, url: &str, doc: &Value) -> Self {
        self.entry("GET", url, "application/json; charset=utf-8", Some(&doc.to_string()))
    }

    /// GET returning `text` as a JSON response that does not parse.
    pub fn broken_feed(self, url: &str, text: &str) -> Self {
        self.entry("GET", url, "application/json", Some(text))
    }

    pub fn media(self, url: &str, mime: &str, body: &str) -> Self {
        self.entry("GET", url, mime, Some(body))
    }

    /// GET whose body is stored with a HAR `content.encoding`.
    pub fn encoded_media(mut self, url: &str, mime: &str, text: &str, encoding: &str) -> Self {
        self = self.media(url, mime, text);
        if let Some(entry) = self.entries.last_mut() {
            entry["response"]["content"]["encoding"] = json!(encoding);
        }
        self
    }

    pub fn build(self) -> Value {
        json!({
            "log": {
                "version": "1.2",
                "creator": { "name": "fixture", "version": "0" },
                "entries": self.entries
            }
        })
    }

    pub fn write_to(self, path: &Path) {
        std::fs::write(path, self.build().to_string()).unwrap();
    }
}

/// One reel item with image candidates and video versions as `(height, url)`.
/// Empty slices leave the corresponding field out.
pub fn reel_item(id: &str, images: &[(u64, &str)], videos: &[(u64, &str)]) -> Value {
    let mut item = json!({
        "id": id,
        "taken_at": 1_672_531_200,
        "user": { "pk": "1", "username": "someone" },
        "accessibility_caption": format!("caption for {id}")
    });
    if !images.is_empty() {
        let candidates: Vec<Value> = images
            .iter()
            .map(|(h, url)| json!({ "height": h, "width": h, "url": url }))
            .collect();
        item["image_versions2"] = json!({ "candidates": candidates });
    }
    if !videos.is_empty() {
        item["video_versions"] = videos
            .iter()
            .map(|(h, url)| json!({ "height": h, "width": h, "type": 101, "url": url }))
            .collect();
    }
    item
}

pub fn feed_doc(user: &str, items: Vec<Value>) -> Value {
    json!({ "reels": { user: { "id": user, "items": items } }, "status": "ok" })
}
