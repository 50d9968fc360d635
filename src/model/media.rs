// MediaPost — one published item, simplified to the fields the analysis needs.
//
// Posts arrive in API return order, which is not guaranteed chronological.
// Time-based analyses sort internally; everything else preserves the given
// order (top-N selection is a stable sort over it).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Media type as reported by the Graph API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    #[default]
    Image,
    Video,
    CarouselAlbum,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::CarouselAlbum => "carousel",
        }
    }
}

/// A single published post with its engagement counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaPost {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub media_type: MediaType,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub comment_count: u64,
    /// Publish time as reported by the API. Posts without a parseable
    /// timestamp are excluded from time-based analyses.
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub permalink: String,
}

impl MediaPost {
    /// Combined engagement: likes + comments (shares/saves are not available
    /// from the source data).
    pub fn engagement(&self) -> u64 {
        self.like_count + self.comment_count
    }

    /// The caption text, or empty when absent.
    pub fn caption_text(&self) -> &str {
        self.caption.as_deref().unwrap_or("")
    }

    /// Parse the post's timestamp. The Graph API emits offsets both with and
    /// without a colon ("+00:00" and "+0000"), so try RFC 3339 first and fall
    /// back to the compact form.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z"))
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with_timestamp(ts: &str) -> MediaPost {
        MediaPost {
            timestamp: Some(ts.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn parses_rfc3339_timestamp() {
        let post = post_with_timestamp("2024-01-01T12:30:00+00:00");
        assert!(post.published_at().is_some());
    }

    #[test]
    fn parses_compact_offset_timestamp() {
        // The Graph API's usual shape
        let post = post_with_timestamp("2024-01-01T12:30:00+0000");
        assert!(post.published_at().is_some());
    }

    #[test]
    fn unparseable_timestamp_is_none() {
        let post = post_with_timestamp("yesterday");
        assert!(post.published_at().is_none());
    }

    #[test]
    fn missing_counts_default_to_zero() {
        let post: MediaPost = serde_json::from_str(r#"{"id":"1"}"#).unwrap();
        assert_eq!(post.engagement(), 0);
        assert_eq!(post.media_type, MediaType::Image);
    }

    #[test]
    fn media_type_parses_graph_api_strings() {
        let post: MediaPost =
            serde_json::from_str(r#"{"id":"1","media_type":"CAROUSEL_ALBUM"}"#).unwrap();
        assert_eq!(post.media_type, MediaType::CarouselAlbum);
    }
}
