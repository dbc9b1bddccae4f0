//! Video lists backed by the remote API

use super::{ApiClientTrait, ApiError, Video, VideoUpload, Visibility};

/// Holds the last fetched public and private video lists.
///
/// Fetch failures are logged and leave the previous list in place; uploads
/// return their result to the caller.
pub struct DataManager {
    client: Box<dyn ApiClientTrait>,
    pub public_videos: Vec<Video>,
    pub private_videos: Vec<Video>,
}

impl DataManager {
    pub fn new(client: Box<dyn ApiClientTrait>) -> Self {
        Self {
            client,
            public_videos: Vec::new(),
            private_videos: Vec::new(),
        }
    }

    pub fn client(&self) -> &dyn ApiClientTrait {
        self.client.as_ref()
    }

    pub fn videos(&self, visibility: Visibility) -> &[Video] {
        match visibility {
            Visibility::Public => &self.public_videos,
            Visibility::Private => &self.private_videos,
        }
    }

    /// Refresh the public list. Returns whether the fetch succeeded.
    pub async fn get_public_videos(&mut self) -> bool {
        self.fetch(Visibility::Public).await
    }

    /// Refresh the private list. Returns whether the fetch succeeded.
    pub async fn get_private_videos(&mut self) -> bool {
        self.fetch(Visibility::Private).await
    }

    async fn fetch(&mut self, visibility: Visibility) -> bool {
        match self.client.list_videos(visibility).await {
            Ok(videos) => {
                tracing::debug!("fetched {} {} videos", videos.len(), visibility.as_str());
                match visibility {
                    Visibility::Public => self.public_videos = videos,
                    Visibility::Private => self.private_videos = videos,
                }
                true
            }
            Err(err) => {
                tracing::error!("failed to fetch {} videos: {err}", visibility.as_str());
                false
            }
        }
    }

    pub async fn upload_video(&self, upload: &VideoUpload) -> Result<(), ApiError> {
        tracing::info!("uploading {:?} as {:?}", upload.file_path, upload.title);
        self.client.upload_video(upload).await
    }
}
