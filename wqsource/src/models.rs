//! Data model for the remote queue document

use serde::{Deserialize, Serialize};

/// The remote queue document: `{ "queue": ["<url>", ...] }`
///
/// Any well-formed JSON object missing the `queue` field deserializes to
/// an empty list rather than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueDocument {
    /// Raw video URLs in playback order
    #[serde(default)]
    pub queue: Vec<String>,
}

impl QueueDocument {
    /// Number of raw URLs in the document
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// True when the document carries no URLs
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_queue_field_defaults_to_empty() {
        let doc: QueueDocument = serde_json::from_str(r#"{"name": "something else"}"#).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_queue_field_preserves_order() {
        let doc: QueueDocument =
            serde_json::from_str(r#"{"queue": ["https://youtu.be/a", "https://youtu.be/b"]}"#)
                .unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.queue[0], "https://youtu.be/a");
        assert_eq!(doc.queue[1], "https://youtu.be/b");
    }
}
