//! Queue record type

use serde::{Deserialize, Serialize};

/// A single video pending playback.
///
/// Identity is the canonical `id`: two items carrying the same id are the
/// same logical video regardless of how their `url` is written
/// (`youtube.com/watch?v=` vs `youtu.be/`). The id is always derived from
/// the url by the identifier extractor, never assigned independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoItem {
    /// Canonical video identifier (non-empty)
    pub id: String,
    /// Original source URL the id was extracted from
    pub url: String,
    /// Optional display title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl VideoItem {
    /// Creates an item from an extracted id and its source URL
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            title: None,
        }
    }

    /// Attaches a display title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_omitted_when_absent() {
        let item = VideoItem::new("abc", "https://youtu.be/abc");
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("title"));

        let titled = item.with_title("Some video");
        let json = serde_json::to_string(&titled).unwrap();
        assert!(json.contains("\"title\":\"Some video\""));
    }

    #[test]
    fn test_deserialize_without_title() {
        let item: VideoItem =
            serde_json::from_str(r#"{"id":"abc","url":"https://youtu.be/abc"}"#).unwrap();
        assert_eq!(item.id, "abc");
        assert!(item.title.is_none());
    }
}
