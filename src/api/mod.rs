//! Remote API module: REST client, wire types and the video data manager

mod client;
mod data_manager;
mod error;
mod traits;
mod types;

pub use client::ApiClient;
pub use data_manager::DataManager;
pub use error::ApiError;
pub use traits::ApiClientTrait;
pub use types::{Registration, Video, VideoResponse, VideoUpload, Visibility};

#[cfg(test)]
pub use traits::MockApiClientTrait;
