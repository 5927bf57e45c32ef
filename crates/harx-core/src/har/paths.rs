//! Fixed accessor paths into HAR entries, plus well-known values.

use std::sync::LazyLock;

use crate::access::Path;
use crate::path;

/// `log.entries` of an archive.
pub static ENTRIES: LazyLock<Path> = LazyLock::new(|| path!["log", "entries"]);
/// `response.content.mimeType` of an entry.
pub static MIMETYPE: LazyLock<Path> =
    LazyLock::new(|| path!["response", "content", "mimeType"]);
/// `request.url` of an entry.
pub static URL: LazyLock<Path> = LazyLock::new(|| path!["request", "url"]);
/// `request.method` of an entry.
pub static METHOD: LazyLock<Path> = LazyLock::new(|| path!["request", "method"]);
/// `response.content.text` of an entry.
pub static TEXT: LazyLock<Path> = LazyLock::new(|| path!["response", "content", "text"]);
/// `response.content.encoding` of an entry (HAR 1.2, optional).
pub static ENCODING: LazyLock<Path> =
    LazyLock::new(|| path!["response", "content", "encoding"]);

/// MIME types the recipes filter on.
pub struct MimeType;

impl MimeType {
    pub const JPEG: &'static str = "image/jpeg";
    pub const PNG: &'static str = "image/png";
    pub const MP4: &'static str = "video/mp4";
    pub const JSON: &'static str = "application/json";
}

/// HTTP methods the recipes filter on.
pub struct Method;

impl Method {
    pub const GET: &'static str = "GET";
    pub const POST: &'static str = "POST";
}
