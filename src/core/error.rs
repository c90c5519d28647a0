//! Error types for board persistence

use thiserror::Error;

/// Errors raised while reading or writing the board snapshot
#[derive(Error, Debug)]
pub enum StorageError {
    /// No window or local storage in this environment
    #[error("Local storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read stored board: {0}")]
    Read(String),

    #[error("Failed to write board: {0}")]
    Write(String),

    /// Stored data exists but is not a valid snapshot
    #[error("Stored board is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Failed to serialize board: {0}")]
    Serialize(String),
}
