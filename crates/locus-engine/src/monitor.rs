//! The workspace monitor
//!
//! Owns all cross-cutting state (previous snapshot, entry store, the
//! single-flight guard) behind one mutex, and drives the reconciliation
//! loop: poll status, plan the pass, evict, fetch stale locations
//! concurrently, apply results. The mutex is never held across a fetch
//! batch, so the readable surface stays live and a snapshot arriving
//! mid-batch is suppressed rather than queued behind the lock.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use locus_core::view::build_repo_options;
use locus_core::{
    LocationEntry, LocationStatusEntry, RemoteError, RepositoryOption, StatusSnapshot,
};
use locus_store::keys::{LOCATION_SCHEMA_VERSION, STATUS_SCHEMA_VERSION};
use locus_store::{CacheKeys, WorkspaceCache};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::bootstrap;
use crate::client::{LocationResult, StatusResult, WorkspaceClient};
use crate::entry_store::EntryStore;
use crate::reconcile::plan_pass;

/// Monitor tunables
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Fixed polling cadence for the status summary query
    pub poll_interval: Duration,

    /// Cache key namespace for this deployment
    pub key_prefix: String,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
            key_prefix: "locus".to_string(),
        }
    }
}

/// Startup phase gate
///
/// Cache hydration must report completion before the first live
/// comparison runs; ordering is enforced by this enum, never by timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Hydrating,
    Live,
}

/// All mutable monitor state, serialized behind one lock
struct MonitorState {
    phase: Phase,
    /// Latest observed status snapshot, for readers
    statuses: StatusSnapshot,
    /// Snapshot of the last completed reconciliation pass
    previous: StatusSnapshot,
    entries: EntryStore,
    /// Global single-flight guard over fetch batches
    refetching: bool,
    /// Snapshot that arrived mid-batch; input to the next pass
    pending: Option<StatusSnapshot>,
}

/// Consistent, race-free view handed to collaborators
#[derive(Debug, Clone)]
pub struct WorkspaceState {
    /// True until every name in the latest snapshot has some entry
    pub loading: bool,

    /// All known entries (success and error variants), in name order
    pub entries: Vec<LocationEntry>,

    /// Latest status summary, keyed by location name
    pub status_by_name: BTreeMap<String, LocationStatusEntry>,

    /// Derived repository options, sorted by composite key
    pub all_options: Vec<RepositoryOption>,
}

/// Maintains the client-side view of remote code locations
pub struct WorkspaceMonitor {
    client: Arc<dyn WorkspaceClient>,
    cache: Arc<dyn WorkspaceCache>,
    keys: CacheKeys,
    poll_interval: Duration,
    state: Mutex<MonitorState>,
}

impl WorkspaceMonitor {
    /// Create a monitor over the given query client and persistent cache
    pub fn new(
        client: Arc<dyn WorkspaceClient>,
        cache: Arc<dyn WorkspaceCache>,
        config: MonitorConfig,
    ) -> Self {
        Self {
            client,
            cache,
            keys: CacheKeys::new(config.key_prefix),
            poll_interval: config.poll_interval,
            state: Mutex::new(MonitorState {
                phase: Phase::Hydrating,
                statuses: StatusSnapshot::new(),
                previous: StatusSnapshot::new(),
                entries: EntryStore::new(),
                refetching: false,
                pending: None,
            }),
        }
    }

    /// Hydrate the entry store from the persistent cache and go live
    ///
    /// Must complete (or be skipped via [`skip_hydration`]) before the
    /// first live snapshot produces any comparison.
    ///
    /// [`skip_hydration`]: WorkspaceMonitor::skip_hydration
    pub async fn hydrate(&self) {
        let outcome = bootstrap::hydrate(self.cache.as_ref(), &self.keys).await;

        let deferred = {
            let mut state = self.state.lock().await;
            state.entries = outcome.entries;
            state.previous = outcome.previous;
            state.phase = Phase::Live;
            // A snapshot that arrived during hydration was deferred;
            // reconcile it now that cached truth is in place.
            (!state.statuses.is_empty()).then(|| state.statuses.clone())
        };

        if let Some(snapshot) = deferred {
            self.observe_status(snapshot).await;
        }
    }

    /// Go live without reading the persistent cache
    pub async fn skip_hydration(&self) {
        let mut state = self.state.lock().await;
        state.phase = Phase::Live;
    }

    /// Issue one status poll and reconcile the response
    ///
    /// A transport failure or remote error payload skips the pass and
    /// retains all prior state.
    pub async fn poll_once(&self) {
        let snapshot = match self.client.fetch_status().await {
            Ok(StatusResult::Entries(entries)) => StatusSnapshot::from_entries(entries),
            Ok(StatusResult::Error(error)) => {
                warn!(message = %error.message, "status query returned an error; pass skipped");
                return;
            }
            Err(e) => {
                warn!(error = %e, "status query failed; pass skipped");
                return;
            }
        };

        match serde_json::to_value(&snapshot) {
            Ok(value) => {
                if let Err(e) = self
                    .cache
                    .set(&self.keys.status_key(), STATUS_SCHEMA_VERSION, value)
                    .await
                {
                    warn!(error = %e, "failed to persist status snapshot");
                }
            }
            Err(e) => warn!(error = %e, "status snapshot not serializable; skipping cache write"),
        }

        self.observe_status(snapshot).await;
    }

    /// Reconcile one status snapshot against prior state
    ///
    /// While a fetch batch is in flight, an incoming snapshot updates the
    /// readable surface only and becomes the input to the next pass once
    /// the batch completes.
    pub async fn observe_status(&self, snapshot: StatusSnapshot) {
        let mut next = Some(snapshot);

        while let Some(current) = next.take() {
            let (to_fetch, to_evict) = {
                let mut state = self.state.lock().await;

                if state.phase == Phase::Hydrating {
                    // No cached truth yet: record for readers, defer the
                    // comparison instead of fetching prematurely.
                    state.statuses = current;
                    return;
                }

                if state.refetching {
                    debug!("pass suppressed: fetch batch in flight");
                    state.statuses = current.clone();
                    state.pending = Some(current);
                    return;
                }

                let plan = plan_pass(&current, &state.previous, &state.entries);
                for name in &plan.to_evict {
                    state.entries.remove(name);
                }
                // Replaced exactly once per pass, after the plan is computed
                state.previous = current.clone();
                state.statuses = current;

                if !plan.to_fetch.is_empty() {
                    state.refetching = true;
                }
                (plan.to_fetch, plan.to_evict)
            };

            for name in &to_evict {
                info!(name, "location vanished; evicting");
                if let Err(e) = self.cache.delete(&self.keys.location_key(name)).await {
                    warn!(name, error = %e, "failed to delete cached entry");
                }
            }

            if to_fetch.is_empty() {
                return;
            }

            debug!(count = to_fetch.len(), "fetching stale locations");
            join_all(to_fetch.iter().map(|name| self.fetch_and_store(name))).await;

            let mut state = self.state.lock().await;
            state.refetching = false;
            next = state.pending.take();
        }
    }

    /// Fetch one location's detail, store it, and persist it
    ///
    /// Always a live read. A transport failure becomes the error variant
    /// for this location and never affects the rest of the batch.
    async fn fetch_and_store(&self, name: &str) -> LocationEntry {
        let entry = match self.client.fetch_location(name).await {
            Ok(LocationResult::Loaded(data)) => LocationEntry::Loaded(data),
            Ok(LocationResult::Error(error)) => LocationEntry::LoadError {
                name: name.to_string(),
                error,
            },
            Err(e) => LocationEntry::LoadError {
                name: name.to_string(),
                error: RemoteError::new(e.to_string()),
            },
        };

        match serde_json::to_value(&entry) {
            Ok(value) => {
                if let Err(e) = self
                    .cache
                    .set(&self.keys.location_key(name), LOCATION_SCHEMA_VERSION, value)
                    .await
                {
                    warn!(name, error = %e, "failed to persist entry");
                }
            }
            Err(e) => warn!(name, error = %e, "entry not serializable; skipping cache write"),
        }

        let mut state = self.state.lock().await;
        state.entries.insert(entry.clone());
        entry
    }

    /// Sequentially refetch every currently known location
    ///
    /// Exposed to collaborators as the bulk refresh operation; each
    /// result updates the entry store and cache as it lands.
    pub async fn refetch_all(&self) -> Vec<LocationEntry> {
        let names: Vec<String> = {
            let state = self.state.lock().await;
            state.statuses.names().map(str::to_string).collect()
        };

        let mut results = Vec::with_capacity(names.len());
        for name in &names {
            results.push(self.fetch_and_store(name).await);
        }
        results
    }

    /// Project the current state into a consistent readable view
    pub async fn state(&self) -> WorkspaceState {
        let state = self.state.lock().await;

        let loading = state.phase == Phase::Hydrating
            || state
                .statuses
                .names()
                .any(|name| !state.entries.contains(name));

        WorkspaceState {
            loading,
            entries: state.entries.list().into_iter().cloned().collect(),
            status_by_name: state.statuses.as_map().clone(),
            all_options: build_repo_options(state.entries.list()),
        }
    }

    /// Run the polling loop forever, with an immediate first poll
    pub async fn run(&self) {
        let mut ticker = tokio::time::interval(self.poll_interval);
        loop {
            // First tick resolves immediately (leading semantics)
            ticker.tick().await;
            self.poll_once().await;
        }
    }
}
