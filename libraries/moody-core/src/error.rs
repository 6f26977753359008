/// Core error types for Moody Player
use thiserror::Error;

use crate::types::SongId;

/// Result type alias using `MoodyError`
pub type Result<T> = std::result::Result<T, MoodyError>;

/// Core error type for Moody Player
#[derive(Error, Debug)]
pub enum MoodyError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Song not found
    #[error("Song not found: {0}")]
    SongNotFound(SongId),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl MoodyError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for MoodyError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
