//! Error handling for locus-store
//!
//! Store errors degrade to cache misses at engine call sites; they are
//! still structured here so tests and the CLI can report them.

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Persistent cache error taxonomy
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying database failure
    #[error("Persistence failure during {operation}: {message}")]
    Persistence { operation: String, message: String },

    /// Stored value could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A migration failed to apply
    #[error("Migration {migration_id} failed: {message}")]
    Migration {
        migration_id: String,
        message: String,
    },
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(operation: &str, err: rusqlite::Error) -> StoreError {
    StoreError::Persistence {
        operation: operation.to_string(),
        message: err.to_string(),
    }
}
