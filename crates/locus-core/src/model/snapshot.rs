use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::location::LocationStatusEntry;

/// One generation of ground truth about which locations exist
///
/// Re-created wholesale on every poll response; never merged incrementally.
/// Keyed by location name with no ordering significance, though BTreeMap
/// iteration keeps downstream computations deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    entries: BTreeMap<String, LocationStatusEntry>,
}

impl StatusSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from a list of status entries, keyed by name
    ///
    /// A duplicate name keeps the later entry, mirroring a keyed reduce.
    pub fn from_entries(entries: impl IntoIterator<Item = LocationStatusEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.name.clone(), entry))
                .collect(),
        }
    }

    /// Get the status entry for a location name
    pub fn get(&self, name: &str) -> Option<&LocationStatusEntry> {
        self.entries.get(name)
    }

    /// Whether the snapshot contains a location name
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate location names in lexicographic order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate status entries in name order
    pub fn iter(&self) -> impl Iterator<Item = &LocationStatusEntry> {
        self.entries.values()
    }

    /// Number of locations in the snapshot
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow the underlying name-to-entry map
    pub fn as_map(&self) -> &BTreeMap<String, LocationStatusEntry> {
        &self.entries
    }
}
