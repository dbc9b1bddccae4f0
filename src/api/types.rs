//! Wire and domain types for the video API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Video visibility as used in the `visibility` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::Private => "Private",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Public => Self::Private,
            Self::Private => Self::Public,
        }
    }
}

/// Video record exactly as returned by `GET /videos/`
#[derive(Debug, Clone, Deserialize)]
pub struct VideoResponse {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub video_file: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Video as shown in the browser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub visibility: Visibility,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<VideoResponse> for Video {
    fn from(resp: VideoResponse) -> Self {
        Self {
            id: resp.id,
            title: resp.title,
            description: resp.description,
            visibility: resp.visibility,
            video_url: resp.video_file.filter(|s| !s.is_empty()),
            thumbnail_url: resp.thumbnail.filter(|s| !s.is_empty()),
            created_at: resp.created_at,
        }
    }
}

/// Body of the registration request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_repeat: String,
}

/// Fields of a multipart video upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoUpload {
    pub title: String,
    pub description: String,
    pub file_path: PathBuf,
    pub visibility: Visibility,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_video_from_full_response() {
        let json = r#"{
            "id": 7,
            "title": "Sunset",
            "description": "Timelapse",
            "visibility": "private",
            "video_file": "http://localhost/media/sunset.mp4",
            "thumbnail": "",
            "created_at": "2024-05-01T12:00:00Z"
        }"#;
        let resp: VideoResponse = serde_json::from_str(json).unwrap();
        let video = Video::from(resp);

        assert_eq!(video.id, 7);
        assert_eq!(video.visibility, Visibility::Private);
        assert_eq!(
            video.video_url.as_deref(),
            Some("http://localhost/media/sunset.mp4")
        );
        assert_eq!(video.thumbnail_url, None);
        assert!(video.created_at.is_some());
    }

    #[test]
    fn test_video_from_minimal_response() {
        let json = r#"{"id": 1, "title": "Clip", "unknown": true}"#;
        let resp: VideoResponse = serde_json::from_str(json).unwrap();
        let video = Video::from(resp);
        assert_eq!(video.description, "");
        assert_eq!(video.visibility, Visibility::Public);
        assert!(video.created_at.is_none());
    }

    #[test]
    fn test_registration_uses_snake_case_keys() {
        let registration = Registration {
            username: "alice".into(),
            email: "alice@example.com".into(),
            password: "secret123".into(),
            password_repeat: "secret123".into(),
        };
        let value = serde_json::to_value(&registration).unwrap();
        assert_eq!(value["password_repeat"], "secret123");
    }

    #[test]
    fn test_visibility_query_values() {
        assert_eq!(Visibility::Public.as_str(), "public");
        assert_eq!(Visibility::Private.as_str(), "private");
        assert_eq!(Visibility::Public.toggle(), Visibility::Private);
    }
}
