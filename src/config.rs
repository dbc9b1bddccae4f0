//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::state::signup_form::MIN_PASSWORD_LENGTH;

/// Default API base URL
const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Environment variable overriding the configured base URL
pub const API_URL_ENV: &str = "VIDBOARD_API_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Base URL of the video API
    pub api_base_url: Option<String>,
    /// Request timeout in seconds
    pub request_timeout_secs: Option<u64>,
    /// Minimum password length enforced by the sign-up form
    pub min_password_length: Option<usize>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "vidboard", "vidboard")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: AppConfig = serde_json::from_str(&content)?;
                tracing::debug!("loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// API base URL: environment, then config file, then default
    pub fn base_url(&self) -> String {
        self.base_url_with_env(std::env::var(API_URL_ENV).ok())
    }

    fn base_url_with_env(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn min_password_length(&self) -> usize {
        self.min_password_length.unwrap_or(MIN_PASSWORD_LENGTH)
    }
}
