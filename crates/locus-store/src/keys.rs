//! Cache key namespacing
//!
//! Keys carry a caller-supplied prefix so multiple deployments or cache
//! instances never collide in one store.

/// Schema version for the cached status snapshot payload
pub const STATUS_SCHEMA_VERSION: u32 = 1;

/// Schema version for cached location detail payloads
pub const LOCATION_SCHEMA_VERSION: u32 = 1;

/// Namespaced cache key builder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheKeys {
    prefix: String,
}

impl CacheKeys {
    /// Create a key builder with the given deployment prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Key for the cached status snapshot
    pub fn status_key(&self) -> String {
        format!("{}/CodeLocationStatus", self.prefix)
    }

    /// Key for the cached detail entry of a location
    pub fn location_key(&self, name: &str) -> String {
        format!("{}/LocationWorkspace/{}", self.prefix, name)
    }
}
