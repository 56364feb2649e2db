//! Cache bootstrap
//!
//! On startup, before any live poll completes, the entry store is
//! hydrated from the persistent cache: read the last-cached status
//! snapshot, then a cached detail entry per name. Every decodable entry
//! seeds the store, but only success entries seed the previous snapshot,
//! so anything failed or missing is refetched once live data arrives.
//! All cache failures degrade to misses.

use locus_core::{LocationEntry, LocationStatusEntry, StatusSnapshot};
use locus_store::keys::{LOCATION_SCHEMA_VERSION, STATUS_SCHEMA_VERSION};
use locus_store::{CacheKeys, WorkspaceCache};
use tracing::debug;

use crate::entry_store::EntryStore;

/// What hydration recovered from the persistent cache
#[derive(Debug, Default)]
pub struct BootstrapOutcome {
    /// Entries recovered from the cache, success and error variants alike
    pub entries: EntryStore,

    /// Seed for the previous snapshot: only names whose cached entry is
    /// the success variant, so everything else compares as unknown
    pub previous: StatusSnapshot,
}

/// Hydrate the entry store from the persistent cache
///
/// Infallible by design: an empty outcome is a valid result of a cold or
/// unavailable cache, and the caller proceeds cache-less.
pub async fn hydrate(cache: &dyn WorkspaceCache, keys: &CacheKeys) -> BootstrapOutcome {
    let cached_snapshot = match read_cached_snapshot(cache, keys).await {
        Some(snapshot) => snapshot,
        None => {
            debug!("no cached status snapshot; starting cold");
            return BootstrapOutcome::default();
        }
    };

    let mut outcome = BootstrapOutcome::default();
    let mut recovered_statuses: Vec<LocationStatusEntry> = Vec::new();

    for status in cached_snapshot.iter() {
        let Some(entry) = read_cached_entry(cache, keys, &status.name).await else {
            continue;
        };

        if entry.is_loaded() {
            recovered_statuses.push(status.clone());
        }
        outcome.entries.insert(entry);
    }

    outcome.previous = StatusSnapshot::from_entries(recovered_statuses);
    debug!(
        entries = outcome.entries.len(),
        seeded = outcome.previous.len(),
        "hydrated entry store from cache"
    );
    outcome
}

async fn read_cached_snapshot(
    cache: &dyn WorkspaceCache,
    keys: &CacheKeys,
) -> Option<StatusSnapshot> {
    let value = match cache.get(&keys.status_key(), STATUS_SCHEMA_VERSION).await {
        Ok(value) => value?,
        Err(e) => {
            debug!(error = %e, "cached status snapshot unreadable; treating as miss");
            return None;
        }
    };

    match serde_json::from_value(value) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            debug!(error = %e, "cached status snapshot malformed; treating as miss");
            None
        }
    }
}

async fn read_cached_entry(
    cache: &dyn WorkspaceCache,
    keys: &CacheKeys,
    name: &str,
) -> Option<LocationEntry> {
    let value = match cache
        .get(&keys.location_key(name), LOCATION_SCHEMA_VERSION)
        .await
    {
        Ok(value) => value?,
        Err(e) => {
            debug!(name, error = %e, "cached entry unreadable; treating as miss");
            return None;
        }
    };

    match serde_json::from_value(value) {
        Ok(entry) => Some(entry),
        Err(e) => {
            debug!(name, error = %e, "cached entry malformed; treating as miss");
            None
        }
    }
}
