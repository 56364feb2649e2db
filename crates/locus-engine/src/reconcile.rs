//! The per-pass reconciliation planner
//!
//! A pure, synchronous comparison of the current status snapshot against
//! the previous snapshot and the entry store. It decides which locations
//! need a detail refetch and which vanished and must be evicted. All
//! effects (fetching, eviction, replacing the previous snapshot) belong
//! to the caller.

use std::collections::BTreeSet;

use locus_core::StatusSnapshot;

use crate::entry_store::EntryStore;

/// The output of one reconciliation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcilePlan {
    /// Location names requiring a detail refetch, in name order
    pub to_fetch: Vec<String>,

    /// Location names that vanished and must be evicted, in name order
    pub to_evict: Vec<String>,
}

impl ReconcilePlan {
    /// Whether the pass requires no work at all
    pub fn is_noop(&self) -> bool {
        self.to_fetch.is_empty() && self.to_evict.is_empty()
    }
}

/// Compute the refetch and eviction sets for one pass
///
/// A name is fetched iff it is newly observed, its version key changed,
/// its summary load status transitioned, or the cached entry's load
/// status disagrees with the summary. The version key alone is not
/// enough: it is only meaningful when a load actually succeeded, so a
/// failed-then-recovered location is caught by the status comparison.
///
/// Eviction is the union of names known to the previous snapshot and
/// names held in the entry store that are absent from the current
/// snapshot, de-duplicated.
pub fn plan_pass(
    current: &StatusSnapshot,
    previous: &StatusSnapshot,
    entries: &EntryStore,
) -> ReconcilePlan {
    let to_fetch = current
        .iter()
        .filter(|status| {
            let prev = previous.get(&status.name);
            let cached_status = entries.cached_load_status(&status.name);

            prev.map(|p| p.version_key.as_str()) != Some(status.version_key.as_str())
                || prev.map(|p| p.load_status) != Some(status.load_status)
                || cached_status != Some(status.load_status)
        })
        .map(|status| status.name.clone())
        .collect();

    let to_evict: BTreeSet<String> = previous
        .names()
        .chain(entries.names())
        .filter(|name| !current.contains(name))
        .map(str::to_string)
        .collect();

    ReconcilePlan {
        to_fetch,
        to_evict: to_evict.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use locus_core::{
        LoadStatus, LocationData, LocationEntry, LocationStatusEntry, RemoteError,
    };

    fn snapshot(entries: &[(&str, LoadStatus, &str)]) -> StatusSnapshot {
        StatusSnapshot::from_entries(
            entries
                .iter()
                .map(|(name, status, version)| LocationStatusEntry::new(*name, *status, *version)),
        )
    }

    fn loaded_entry(name: &str, status: LoadStatus) -> LocationEntry {
        LocationEntry::Loaded(LocationData {
            name: name.to_string(),
            load_status: status,
            version_key: "v1".to_string(),
            repositories: Vec::new(),
            updated_at: Utc::now(),
        })
    }

    fn error_entry(name: &str) -> LocationEntry {
        LocationEntry::LoadError {
            name: name.to_string(),
            error: RemoteError::new("load failed"),
        }
    }

    fn store_with(entries: Vec<LocationEntry>) -> EntryStore {
        let mut store = EntryStore::new();
        for entry in entries {
            store.insert(entry);
        }
        store
    }

    #[test]
    fn test_identical_snapshots_agreeing_store_is_noop() {
        let s = snapshot(&[
            ("a", LoadStatus::Loaded, "v1"),
            ("b", LoadStatus::Loaded, "v1"),
        ]);
        let store = store_with(vec![
            loaded_entry("a", LoadStatus::Loaded),
            loaded_entry("b", LoadStatus::Loaded),
        ]);

        let plan = plan_pass(&s, &s, &store);
        assert!(plan.is_noop());
    }

    #[test]
    fn test_newly_observed_names_are_fetched() {
        let current = snapshot(&[
            ("a", LoadStatus::Loaded, "v1"),
            ("b", LoadStatus::Loaded, "v1"),
        ]);

        let plan = plan_pass(&current, &StatusSnapshot::new(), &EntryStore::new());
        assert_eq!(plan.to_fetch, vec!["a", "b"]);
        assert!(plan.to_evict.is_empty());
    }

    #[test]
    fn test_version_key_change_triggers_fetch_despite_same_status() {
        let previous = snapshot(&[("a", LoadStatus::Loaded, "v1")]);
        let current = snapshot(&[("a", LoadStatus::Loaded, "v2")]);
        let store = store_with(vec![loaded_entry("a", LoadStatus::Loaded)]);

        let plan = plan_pass(&current, &previous, &store);
        assert_eq!(plan.to_fetch, vec!["a"]);
    }

    #[test]
    fn test_status_transition_triggers_fetch() {
        let previous = snapshot(&[("a", LoadStatus::Loading, "v1")]);
        let current = snapshot(&[("a", LoadStatus::Loaded, "v1")]);
        let store = store_with(vec![loaded_entry("a", LoadStatus::Loading)]);

        let plan = plan_pass(&current, &previous, &store);
        assert_eq!(plan.to_fetch, vec!["a"]);
    }

    #[test]
    fn test_stale_cached_status_triggers_fetch_without_version_drift() {
        // Previous summary already agrees with the current one, but the
        // cached entry was produced by a failed attempt: status-only
        // staleness must still force a refetch.
        let s = snapshot(&[("a", LoadStatus::Loaded, "v1")]);
        let store = store_with(vec![loaded_entry("a", LoadStatus::Failed)]);

        let plan = plan_pass(&s, &s, &store);
        assert_eq!(plan.to_fetch, vec!["a"]);
    }

    #[test]
    fn test_error_entries_stay_eligible_for_refetch() {
        let s = snapshot(&[("a", LoadStatus::Failed, "v1")]);
        let store = store_with(vec![error_entry("a")]);

        // An error entry carries no load status, so it never agrees
        let plan = plan_pass(&s, &s, &store);
        assert_eq!(plan.to_fetch, vec!["a"]);
    }

    #[test]
    fn test_missing_entry_triggers_fetch_even_with_stable_summary() {
        let s = snapshot(&[("a", LoadStatus::Loaded, "v1")]);

        let plan = plan_pass(&s, &s, &EntryStore::new());
        assert_eq!(plan.to_fetch, vec!["a"]);
    }

    #[test]
    fn test_vanished_names_are_evicted_from_previous_and_store() {
        let previous = snapshot(&[
            ("a", LoadStatus::Loaded, "v1"),
            ("b", LoadStatus::Loaded, "v1"),
        ]);
        let current = snapshot(&[("a", LoadStatus::Loaded, "v1")]);
        // "c" is only in the entry store: a fetch completed after its
        // location was already dropped from the summary.
        let store = store_with(vec![
            loaded_entry("a", LoadStatus::Loaded),
            loaded_entry("b", LoadStatus::Loaded),
            loaded_entry("c", LoadStatus::Loaded),
        ]);

        let plan = plan_pass(&current, &previous, &store);
        assert_eq!(plan.to_evict, vec!["b", "c"]);
        // The removed names are not fetched
        assert!(plan.to_fetch.is_empty());
    }

    #[test]
    fn test_eviction_union_deduplicates() {
        let previous = snapshot(&[("b", LoadStatus::Loaded, "v1")]);
        let current = StatusSnapshot::new();
        let store = store_with(vec![loaded_entry("b", LoadStatus::Loaded)]);

        let plan = plan_pass(&current, &previous, &store);
        assert_eq!(plan.to_evict, vec!["b"]);
    }

    #[test]
    fn test_idempotence_on_unchanged_inputs() {
        let s = snapshot(&[
            ("a", LoadStatus::Loaded, "v1"),
            ("b", LoadStatus::Failed, "v2"),
        ]);
        let store = store_with(vec![
            loaded_entry("a", LoadStatus::Loaded),
            loaded_entry("b", LoadStatus::Failed),
        ]);

        let first = plan_pass(&s, &s, &store);
        let second = plan_pass(&s, &s, &store);
        assert!(first.is_noop());
        assert_eq!(first, second);
    }

    #[test]
    fn test_fetch_and_evict_in_one_pass() {
        let previous = snapshot(&[
            ("gone", LoadStatus::Loaded, "v1"),
            ("stays", LoadStatus::Loaded, "v1"),
        ]);
        let current = snapshot(&[
            ("stays", LoadStatus::Loaded, "v2"),
            ("new", LoadStatus::Loading, "v1"),
        ]);
        let store = store_with(vec![
            loaded_entry("gone", LoadStatus::Loaded),
            loaded_entry("stays", LoadStatus::Loaded),
        ]);

        let plan = plan_pass(&current, &previous, &store);
        assert_eq!(plan.to_fetch, vec!["new", "stays"]);
        assert_eq!(plan.to_evict, vec!["gone"]);
    }
}
