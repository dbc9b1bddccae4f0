//! Trait abstraction for the API client to enable mocking in tests

use super::{ApiError, Registration, Video, VideoUpload, Visibility};
use async_trait::async_trait;

/// Trait for remote API operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiClientTrait: Send + Sync {
    /// List videos with the given visibility
    async fn list_videos(&self, visibility: Visibility) -> Result<Vec<Video>, ApiError>;

    /// Upload a video file with its metadata as multipart form data
    async fn upload_video(&self, upload: &VideoUpload) -> Result<(), ApiError>;

    /// Register a new user account
    async fn register_user(&self, registration: &Registration) -> Result<(), ApiError>;

    /// Delete the current user account
    async fn delete_user(&self) -> Result<(), ApiError>;
}
