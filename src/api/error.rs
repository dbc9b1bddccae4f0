//! API error types

/// Errors that can occur during API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP error response from the API.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Network error during API call.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Base URL or endpoint could not be joined into a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Reading the file to upload failed.
    #[error("Cannot read upload file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse API response.
    #[error("Response parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Creates a new HTTP error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
