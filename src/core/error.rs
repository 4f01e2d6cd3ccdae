//! Error types for the CLI core.
//!
//! - [`SelectQueryError`] - database index extraction from `SELECT` queries
//! - [`StorageError`] - persistence through the key-value storage seam

use thiserror::Error;

/// Failure to read a database index out of a `SELECT` query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectQueryError {
    /// The query is not a `SELECT` statement.
    #[error("Invalid command")]
    InvalidCommand,
    /// The index argument is missing or not a base-10 integer.
    #[error("Parsing error")]
    ParseError,
}

/// Storage errors for persisted CLI state.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failed to serialize the value to JSON.
    #[error("failed to serialize `{key}`: {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// The backing store rejected the write.
    #[error("failed to write `{key}` to storage: {reason}")]
    WriteFailed { key: String, reason: String },
}
