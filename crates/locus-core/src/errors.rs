use thiserror::Error;

/// Result type alias using LocusError
pub type Result<T> = std::result::Result<T, LocusError>;

/// Error taxonomy for Locus operations
///
/// Per-location remote failures are not represented here: they are data
/// (the `LocationEntry::LoadError` variant), not control flow. This enum
/// covers the faults that can surface from the engine or its collaborators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocusError {
    /// Network/transport failure on a status or detail query
    #[error("Transport failure during {operation}: {message}")]
    Transport { operation: String, message: String },

    /// Response did not match the expected shape
    #[error("Malformed response for {context}: {message}")]
    MalformedResponse { context: String, message: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Persistent cache failure (degrades to a miss at call sites)
    #[error("Cache failure during {operation}: {message}")]
    Cache { operation: String, message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl LocusError {
    /// Create a transport error for the given operation
    pub fn transport(operation: impl Into<String>, message: impl Into<String>) -> Self {
        LocusError::Transport {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a cache error for the given operation
    pub fn cache(operation: impl Into<String>, message: impl Into<String>) -> Self {
        LocusError::Cache {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// Conversion from serde_json::Error to LocusError
impl From<serde_json::Error> for LocusError {
    fn from(err: serde_json::Error) -> Self {
        LocusError::Serialization {
            message: err.to_string(),
        }
    }
}
