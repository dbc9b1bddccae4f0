//! HTTP client for the video API
//!
//! Thin reqwest wrapper: every call maps a non-success status to
//! [`ApiError::Http`] carrying the response body.

use super::{ApiClientTrait, ApiError, Registration, Video, VideoResponse, VideoUpload, Visibility};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::time::Duration;

const VIDEOS_PATH: &str = "videos/";
const REGISTRATION_PATH: &str = "auth/registration/";
const USER_PATH: &str = "auth/user/";

/// Client for the remote video API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
    /// Base URL, always ending with `/`
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = if body.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        } else {
            body
        };
        Err(ApiError::http(status.as_u16(), message))
    }
}

#[async_trait]
impl ApiClientTrait for ApiClient {
    async fn list_videos(&self, visibility: Visibility) -> Result<Vec<Video>, ApiError> {
        let response = self
            .http_client
            .get(self.endpoint(VIDEOS_PATH))
            .query(&[("visibility", visibility.as_str())])
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let body = response.text().await?;
        let records: Vec<VideoResponse> =
            serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))?;
        Ok(records.into_iter().map(Video::from).collect())
    }

    async fn upload_video(&self, upload: &VideoUpload) -> Result<(), ApiError> {
        let bytes = tokio::fs::read(&upload.file_path).await?;
        let file_name = upload
            .file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let form = Form::new()
            .text("title", upload.title.clone())
            .text("description", upload.description.clone())
            .text("visibility", upload.visibility.as_str())
            .part("video_file", Part::bytes(bytes).file_name(file_name));

        let response = self
            .http_client
            .post(self.endpoint(VIDEOS_PATH))
            .multipart(form)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn register_user(&self, registration: &Registration) -> Result<(), ApiError> {
        let response = self
            .http_client
            .post(self.endpoint(REGISTRATION_PATH))
            .json(registration)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn delete_user(&self) -> Result<(), ApiError> {
        let response = self
            .http_client
            .delete(self.endpoint(USER_PATH))
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }
}

/// Require an http(s) URL and append a trailing slash
fn normalize_base_url(base_url: &str) -> Result<String, ApiError> {
    let trimmed = base_url.trim();
    let has_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    if !has_scheme || trimmed.len() <= "https://".len() {
        return Err(ApiError::InvalidUrl(base_url.to_string()));
    }
    if trimmed.ends_with('/') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{trimmed}/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_appends_slash() {
        assert_eq!(
            normalize_base_url("http://localhost:8000/api").unwrap(),
            "http://localhost:8000/api/"
        );
        assert_eq!(
            normalize_base_url("https://videos.example.com/").unwrap(),
            "https://videos.example.com/"
        );
    }

    #[test]
    fn test_normalize_rejects_bad_urls() {
        assert!(matches!(
            normalize_base_url("localhost:8000"),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(normalize_base_url("http://").is_err());
        assert!(normalize_base_url("").is_err());
    }

    #[test]
    fn test_endpoints() {
        let client = ApiClient::new("http://localhost:8000/api", Duration::from_secs(5)).unwrap();
        assert_eq!(client.endpoint(VIDEOS_PATH), "http://localhost:8000/api/videos/");
        assert_eq!(
            client.endpoint(REGISTRATION_PATH),
            "http://localhost:8000/api/auth/registration/"
        );
    }

    #[tokio::test]
    async fn test_upload_missing_file_is_io_error() {
        let client = ApiClient::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
        let upload = VideoUpload {
            title: "t".into(),
            description: "d".into(),
            file_path: "/definitely/not/here.mp4".into(),
            visibility: Visibility::Public,
        };
        let err = client.upload_video(&upload).await.unwrap_err();
        assert!(matches!(err, ApiError::Io(_)));
    }
}
