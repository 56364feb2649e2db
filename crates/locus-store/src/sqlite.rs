//! SQLite-backed persistent cache
//!
//! One `cache_entries` table holds opaque JSON values keyed by string,
//! each tagged with the schema version it was written under. Reads with
//! a different version are misses, so schema bumps invalidate cleanly.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension};
use tokio::sync::Mutex;

use crate::cache::WorkspaceCache;
use crate::errors::{from_rusqlite, Result};
use crate::migrations;

/// Persistent cache over a SQLite database
pub struct SqliteCache {
    conn: Mutex<Connection>,
}

impl SqliteCache {
    /// Open (or create) a cache database at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut conn = Connection::open(path).map_err(|e| from_rusqlite("open", e))?;
        configure(&conn)?;
        migrations::apply_migrations(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory cache database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory().map_err(|e| from_rusqlite("open", e))?;
        migrations::apply_migrations(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

/// Configure a connection with optimal settings
fn configure(conn: &Connection) -> Result<()> {
    // WAL mode for better concurrency
    conn.pragma_update(None, "journal_mode", "WAL")
        .map_err(|e| from_rusqlite("configure", e))?;

    Ok(())
}

#[async_trait::async_trait]
impl WorkspaceCache for SqliteCache {
    async fn get(&self, key: &str, version: u32) -> Result<Option<serde_json::Value>> {
        let conn = self.conn.lock().await;

        let row: Option<(u32, String)> = conn
            .query_row(
                "SELECT version, value FROM cache_entries WHERE key = ?1",
                [key],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()
            .map_err(|e| from_rusqlite("get", e))?;

        match row {
            Some((stored_version, raw)) if stored_version == version => {
                Ok(Some(serde_json::from_str(&raw)?))
            }
            // Version drift reads as a miss
            _ => Ok(None),
        }
    }

    async fn set(&self, key: &str, version: u32, value: serde_json::Value) -> Result<()> {
        let conn = self.conn.lock().await;
        let raw = serde_json::to_string(&value)?;
        let now = chrono::Utc::now().timestamp();

        conn.execute(
            "INSERT INTO cache_entries (key, version, value, updated_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(key) DO UPDATE SET
                 version = excluded.version,
                 value = excluded.value,
                 updated_at = excluded.updated_at",
            rusqlite::params![key, version, raw, now],
        )
        .map_err(|e| from_rusqlite("set", e))?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let conn = self.conn.lock().await;
        conn.execute("DELETE FROM cache_entries WHERE key = ?1", [key])
            .map_err(|e| from_rusqlite("delete", e))?;
        Ok(())
    }
}
