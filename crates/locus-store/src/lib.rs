//! Locus Store - Persistent cache layer
//!
//! Provides:
//! - `WorkspaceCache`: the versioned key-value cache contract
//! - SQLite implementation with an embedded migrations runner
//! - In-memory implementation for tests and cache-less degraded mode
//! - Cache key namespacing across deployments

pub mod cache;
pub mod errors;
pub mod keys;
pub mod memory;
pub mod migrations;
pub mod sqlite;

// Re-export key types
pub use cache::WorkspaceCache;
pub use errors::{Result, StoreError};
pub use keys::CacheKeys;
pub use memory::MemoryCache;
pub use sqlite::SqliteCache;
