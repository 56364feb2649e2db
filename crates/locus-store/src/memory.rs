//! In-memory cache backend
//!
//! Same contract as the SQLite backend, with no durability. Used by the
//! engine test suites and as a degraded mode when no cache path is given.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::cache::WorkspaceCache;
use crate::errors::Result;

/// Volatile cache over a HashMap
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, (u32, serde_json::Value)>>,
}

impl MemoryCache {
    /// Create an empty in-memory cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys (any version)
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the cache holds no keys
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl WorkspaceCache for MemoryCache {
    async fn get(&self, key: &str, version: u32) -> Result<Option<serde_json::Value>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).and_then(|(stored_version, value)| {
            (*stored_version == version).then(|| value.clone())
        }))
    }

    async fn set(&self, key: &str, version: u32, value: serde_json::Value) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), (version, value));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }
}
