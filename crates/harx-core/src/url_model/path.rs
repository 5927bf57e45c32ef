//! Trailing path segment of a media URL.

/// Last non-empty path segment of `url`, without query or fragment.
///
/// Relative or otherwise unparsable URLs are split by hand so that captured
/// references like `/v/t51/abc.jpg?x=1` still yield `abc.jpg`.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let segment = match url::Url::parse(url) {
        Ok(parsed) => last_segment(parsed.path())?.to_string(),
        Err(_) => {
            let path = url.split(['?', '#']).next().unwrap_or_default();
            last_segment(path)?.to_string()
        }
    };
    match segment.as_str() {
        "." | ".." => None,
        _ => Some(segment),
    }
}

fn last_segment(path: &str) -> Option<&str> {
    path.rsplit('/').find(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdn_media_url() {
        assert_eq!(
            filename_from_url_path(
                "https://scontent.cdninstagram.com/v/t51.2885-15/123_456_n.jpg?stp=dst-jpg&_nc_ht=x"
            )
            .as_deref(),
            Some("123_456_n.jpg")
        );
        assert_eq!(
            filename_from_url_path("https://video.example/o1/v/t16/f1/clip.mp4#t=3").as_deref(),
            Some("clip.mp4")
        );
    }

    #[test]
    fn trailing_slash_uses_previous_segment() {
        assert_eq!(
            filename_from_url_path("https://example.com/media/abc/").as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn root_or_empty() {
        assert_eq!(filename_from_url_path("https://example.com/"), None);
        assert_eq!(filename_from_url_path("https://example.com"), None);
        assert_eq!(filename_from_url_path(""), None);
    }

    #[test]
    fn relative_reference() {
        assert_eq!(
            filename_from_url_path("/v/t51/abc.jpg?x=1").as_deref(),
            Some("abc.jpg")
        );
    }
}
