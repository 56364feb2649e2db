//! The persistent cache contract
//!
//! A versioned key-to-value store. Values are opaque JSON; the schema
//! version passed by the caller gates reads, so a payload written under
//! an older schema reads back as a miss rather than a decode failure.

use async_trait::async_trait;

use crate::errors::Result;

/// Versioned key-value cache for workspace payloads
///
/// Writes are fire-and-forget from the engine's perspective: a failed
/// write costs durability across restarts, never in-memory correctness.
#[async_trait]
pub trait WorkspaceCache: Send + Sync {
    /// Read the value stored under `key`, or `None` on a miss
    ///
    /// A stored value whose version does not match `version` is a miss.
    async fn get(&self, key: &str, version: u32) -> Result<Option<serde_json::Value>>;

    /// Store `value` under `key` with the given schema version
    ///
    /// Overwrites any previous value and version for the key.
    async fn set(&self, key: &str, version: u32, value: serde_json::Value) -> Result<()>;

    /// Remove the value stored under `key`, if any
    async fn delete(&self, key: &str) -> Result<()>;
}
