use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::repository::Repository;

/// Load state reported by the remote for a code location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadStatus {
    /// The location is still loading on the remote side
    Loading,
    /// The location loaded successfully
    Loaded,
    /// The location failed to load
    Failed,
}

/// One row of the lightweight status summary
///
/// `version_key` is an opaque fingerprint that changes whenever the remote
/// location's underlying definition changes; it does not change per poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationStatusEntry {
    /// Location name, unique within a snapshot
    pub name: String,

    /// Remote-reported load state
    pub load_status: LoadStatus,

    /// Opaque definition fingerprint
    pub version_key: String,
}

impl LocationStatusEntry {
    /// Create a status entry
    pub fn new(
        name: impl Into<String>,
        load_status: LoadStatus,
        version_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            load_status,
            version_key: version_key.into(),
        }
    }
}

/// Opaque error payload returned by the remote
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteError {
    /// Human-readable message
    pub message: String,

    /// Remote stack frames, if any
    #[serde(default)]
    pub stack: Vec<String>,
}

impl RemoteError {
    /// Create an error payload with a message and no stack
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: Vec::new(),
        }
    }
}

/// Successful detail payload for a code location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationData {
    /// Location name
    pub name: String,

    /// Load state at the time the detail was produced
    pub load_status: LoadStatus,

    /// Definition fingerprint at the time the detail was produced
    pub version_key: String,

    /// Nested repository definitions
    pub repositories: Vec<Repository>,

    /// When this payload was retrieved or produced
    pub updated_at: DateTime<Utc>,
}

/// Last-known detail for a code location: success or load error
///
/// Entries are only ever written whole. Consumers must match exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LocationEntry {
    /// The detail query returned a full location payload
    Loaded(LocationData),
    /// The detail query returned an error payload, or transport failed
    LoadError {
        /// Location name the failed query was keyed by
        name: String,
        /// The opaque error payload
        error: RemoteError,
    },
}

impl LocationEntry {
    /// The location name this entry is keyed by
    pub fn name(&self) -> &str {
        match self {
            LocationEntry::Loaded(data) => &data.name,
            LocationEntry::LoadError { name, .. } => name,
        }
    }

    /// The cached load status, if this entry carries one
    ///
    /// Error entries have no load status: they never agree with the
    /// status summary and therefore stay eligible for refetch.
    pub fn load_status(&self) -> Option<LoadStatus> {
        match self {
            LocationEntry::Loaded(data) => Some(data.load_status),
            LocationEntry::LoadError { .. } => None,
        }
    }

    /// Whether this entry is the success variant
    pub fn is_loaded(&self) -> bool {
        matches!(self, LocationEntry::Loaded(_))
    }
}
