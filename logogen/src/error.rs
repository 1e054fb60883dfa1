//! Error types for logo generation.

use thiserror::Error;

/// Errors that can occur during logo generation.
#[derive(Debug, Error)]
pub enum Error {
    /// API key missing or rejected by the upstream service.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// API returned a non-success response.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code of the upstream response.
        status: u16,
        /// Upstream error body, surfaced verbatim.
        message: String,
    },

    /// Network or HTTP transport error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Well-formed response that carried no inline image data.
    #[error("No image data found in the response.")]
    NoImageData,

    /// Failed to decode the base64 image payload.
    #[error("failed to decode: {0}")]
    Decode(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error (e.g., saving the image to disk).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for logo generation operations.
pub type Result<T> = std::result::Result<T, Error>;
