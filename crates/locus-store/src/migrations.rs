//! Embedded migrations runner
//!
//! Applies migrations idempotently, recording applied ids in a
//! `schema_version` table. Each migration runs in its own transaction.

use rusqlite::Connection;

use crate::errors::{from_rusqlite, Result, StoreError};

/// A single embedded migration
pub struct Migration {
    /// Stable identifier, ordered lexicographically
    pub id: &'static str,
    /// Migration SQL, executed as a batch
    pub sql: &'static str,
}

/// All migrations, in application order
pub fn migrations() -> Vec<Migration> {
    vec![Migration {
        id: "0001_cache_entries",
        sql: "CREATE TABLE IF NOT EXISTS cache_entries (
                key TEXT PRIMARY KEY,
                version INTEGER NOT NULL,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );",
    }]
}

/// Apply all pending migrations to the database
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    create_schema_version_table(conn)?;

    for migration in migrations() {
        apply_migration(conn, migration.id, migration.sql)?;
    }

    Ok(())
}

/// Create the schema_version table if it doesn't exist
fn create_schema_version_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL
        )",
        [],
    )
    .map_err(|e| from_rusqlite("create_schema_version", e))?;

    Ok(())
}

/// Apply a single migration if not already applied
fn apply_migration(conn: &mut Connection, migration_id: &str, sql: &str) -> Result<()> {
    let already_applied: bool = conn
        .query_row(
            "SELECT 1 FROM schema_version WHERE migration_id = ?",
            [migration_id],
            |_| Ok(true),
        )
        .unwrap_or(false);

    if already_applied {
        return Ok(());
    }

    let tx = conn
        .transaction()
        .map_err(|e| from_rusqlite("begin_migration", e))?;

    tx.execute_batch(sql).map_err(|e| StoreError::Migration {
        migration_id: migration_id.to_string(),
        message: e.to_string(),
    })?;

    let now = chrono::Utc::now().timestamp();
    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at) VALUES (?, ?)",
        rusqlite::params![migration_id, now],
    )
    .map_err(|e| from_rusqlite("record_migration", e))?;

    tx.commit().map_err(|e| from_rusqlite("commit_migration", e))?;

    Ok(())
}
