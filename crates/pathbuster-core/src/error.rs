//! Error types for pathbuster

use thiserror::Error;

/// Result type alias using pathbuster Error
pub type Result<T> = std::result::Result<T, Error>;

/// pathbuster error types
#[derive(Error, Debug)]
pub enum Error {
    // === Target Errors ===
    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    // === Input Errors ===
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("No usable targets in file: {path}")]
    NoTargets { path: String },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(String),

    // === HTTP Errors ===
    #[error("HTTP client error: {0}")]
    Http(String),
}
