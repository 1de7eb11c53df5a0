// src/error.rs
// Standardized error types for counsel

use thiserror::Error;

/// Main error type for the counsel library
#[derive(Error, Debug)]
pub enum CounselError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Convenience type alias for Result using CounselError
pub type Result<T> = std::result::Result<T, CounselError>;

impl From<CounselError> for String {
    fn from(err: CounselError) -> Self {
        err.to_string()
    }
}
