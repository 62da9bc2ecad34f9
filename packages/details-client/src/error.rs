//! Metadata lookup error types

use thiserror::Error;

/// Metadata lookup client errors
#[derive(Error, Debug)]
pub enum DetailsError {
    /// No lookup endpoint configured
    #[error("song details API URL is not configured")]
    MissingBaseUrl,

    /// Invalid input provided to a client method
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Lookup API answered with a non-success status
    #[error("song details API returned status {0}")]
    Status(u16),

    /// JSON parsing failed
    #[error("Failed to parse song details response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Request timeout
    #[error("Request to song details API timed out")]
    Timeout,
}

/// Result type for metadata lookup operations
pub type DetailsResult<T> = Result<T, DetailsError>;
