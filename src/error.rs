//! Error types for blockgrid library.

use std::io;
use thiserror::Error;

/// Result type alias for blockgrid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers.
///
/// Irregularities inside the block graph (missing fields, unknown block
/// types, dangling child references) are never reported here; they only
/// make the reconstructed tables sparser.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON is well-formed but is not a recognition response.
    #[error("Invalid analysis response: {0}")]
    InvalidResponse(String),

    /// Confidence threshold outside the 0-100 scale.
    #[error("Confidence threshold {0} is outside 0-100")]
    InvalidConfidence(f64),

    /// Error during rendering (report, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
