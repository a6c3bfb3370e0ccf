//! Error types for DevNotes core operations.
//!
//! Lookup misses and malformed persisted data are not errors in this crate;
//! they are handled as no-ops and empty collections. What remains are
//! storage failures and bad input, which the CLI maps to user-facing messages.

use thiserror::Error;

/// Result type alias for DevNotes operations.
pub type Result<T> = std::result::Result<T, DevNotesError>;

/// Core error type for DevNotes operations.
#[derive(Debug, Error)]
pub enum DevNotesError {
    /// Storage backend error (read/write failure)
    #[error("Storage error: {0}")]
    Storage(String),

    /// The key-value store refused a write because it would exceed its quota
    #[error("Storage quota exceeded: {needed} bytes needed, {quota} bytes allowed")]
    QuotaExceeded { needed: usize, quota: usize },

    /// Serialization or deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for DevNotesError {
    fn from(err: std::io::Error) -> Self {
        DevNotesError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for DevNotesError {
    fn from(err: serde_json::Error) -> Self {
        DevNotesError::Serialization(err.to_string())
    }
}
