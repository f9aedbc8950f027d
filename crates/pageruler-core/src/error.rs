//! Error types for the ambient layer around the measuring core.
//!
//! Geometry and the selection cycle never fail; these errors come from
//! parsing host input and from talking to the host.

use thiserror::Error;

/// Errors raised by message handling, configuration and host glue.
#[derive(Debug, Error)]
pub enum RulerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Invalid rectangle: {0}")]
    InvalidRect(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("DOM error: {0}")]
    Dom(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for fallible ruler operations.
pub type RulerResult<T> = Result<T, RulerError>;
