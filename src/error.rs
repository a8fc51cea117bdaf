//! Custom error types for arxiv-digest.
//!
//! This module defines all error types used throughout the crate.
//! All functions return `Result<T, DigestError>` instead of using `unwrap()`.

use thiserror::Error;

/// Main error type for arxiv-digest operations.
///
/// Uses `thiserror` for ergonomic error handling and automatic `Display` implementation.
#[derive(Debug, Error)]
pub enum DigestError {
    /// Network/HTTP transport error while retrieving a feed
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Feed host answered with a non-success status
    #[error("API error: {code} - {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message
        message: String,
    },

    /// Feed payload is not well-formed XML
    #[error("Format error: {0}")]
    Format(String),

    /// Filter document has neither list nor tiered-object shape
    #[error("Data shape error: {0}")]
    DataShape(String),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV export error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias using `DigestError`
pub type Result<T> = std::result::Result<T, DigestError>;

impl DigestError {
    /// Whether this is an expected retrieval failure (transport, status or
    /// payload) as opposed to a bad request such as an unusable category.
    pub fn is_per_category(&self) -> bool {
        matches!(
            self,
            DigestError::Network(_) | DigestError::Api { .. } | DigestError::Format(_)
        )
    }
}
