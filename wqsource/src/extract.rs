//! Video identifier extraction
//!
//! Pure mapping from raw URLs to canonical video ids. An unrecognized URL
//! shape is a filtering signal, not an error: callers drop such URLs.

use once_cell::sync::Lazy;
use regex::Regex;

// L'identifiant s'arrête au premier '&', saut de ligne, '?' ou '#'
static VIDEO_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([^&\n?#]+)")
        .expect("invalid video id regex")
});

/// Extracts the canonical video id from a URL
///
/// Recognizes the `youtube.com/watch?v=ID` and `youtu.be/ID` shapes and
/// returns `None` for everything else. Deterministic, no I/O.
///
/// # Example
///
/// ```
/// use wqsource::extract_video_id;
///
/// assert_eq!(
///     extract_video_id("https://youtu.be/abc123?si=xyz"),
///     Some("abc123".to_string())
/// );
/// assert_eq!(extract_video_id("https://vimeo.com/12345"), None);
/// ```
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_watch_urls() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            extract_video_id("http://youtube.com/watch?v=abc123"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_extracts_short_urls() {
        assert_eq!(
            extract_video_id("https://youtu.be/abc123"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_id_stops_at_delimiters() {
        assert_eq!(
            extract_video_id("https://youtube.com/watch?v=abc&t=42s"),
            Some("abc".to_string())
        );
        assert_eq!(
            extract_video_id("https://youtu.be/abc?si=sharing"),
            Some("abc".to_string())
        );
        assert_eq!(
            extract_video_id("https://youtu.be/abc#t=30"),
            Some("abc".to_string())
        );
        assert_eq!(
            extract_video_id("https://youtu.be/abc\nhttps://youtu.be/def"),
            Some("abc".to_string())
        );
    }

    #[test]
    fn test_unrecognized_urls_yield_none() {
        assert_eq!(extract_video_id("https://vimeo.com/12345"), None);
        assert_eq!(extract_video_id("https://youtube.com/playlist?list=PL123"), None);
        assert_eq!(extract_video_id("not a url at all"), None);
        assert_eq!(extract_video_id(""), None);
    }
}
