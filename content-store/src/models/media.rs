use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Media attachment kind matching database media_kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "media_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Other,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
            MediaKind::Other => "other",
        }
    }

    /// Parse a media kind; unknown values are rejected
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "image" => Some(MediaKind::Image),
            "video" => Some(MediaKind::Video),
            "audio" => Some(MediaKind::Audio),
            "other" => Some(MediaKind::Other),
            _ => None,
        }
    }
}

/// Media entity - an attachment on a post
#[derive(Debug, Clone, FromRow)]
pub struct Media {
    pub id: Uuid,
    pub media_type: MediaKind,
    pub url: String,
    pub post_id: Uuid,
}

/// External representation of a media attachment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaView {
    pub id: Uuid,
    pub media_type: MediaKind,
    pub url: String,
}

impl Media {
    pub fn to_view(&self) -> MediaView {
        MediaView {
            id: self.id,
            media_type: self.media_type,
            url: self.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_round_trip() {
        for kind in ["image", "video", "audio", "other"] {
            assert_eq!(MediaKind::from_str(kind).unwrap().as_str(), kind);
        }
    }

    #[test]
    fn test_media_kind_rejects_unknown_values() {
        assert!(MediaKind::from_str("gif").is_none());
        assert!(MediaKind::from_str("").is_none());
    }

    #[test]
    fn test_view_fields_and_string_values() {
        let media = Media {
            id: Uuid::new_v4(),
            media_type: MediaKind::Image,
            url: "https://cdn.holonet.example/falcon.png".to_string(),
            post_id: Uuid::new_v4(),
        };

        let json = serde_json::to_value(media.to_view()).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 3);
        assert_eq!(object["media_type"], "image");
        assert_eq!(object["url"], "https://cdn.holonet.example/falcon.png");
        assert!(object.contains_key("id"));
        assert!(!object.contains_key("post_id"));
    }
}
