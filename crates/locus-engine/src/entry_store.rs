//! In-memory store of last-known location details
//!
//! Entries are written only whole: a detail fetch completion or a cache
//! hydration inserts, the eviction step removes. Nothing else mutates it.

use std::collections::BTreeMap;

use locus_core::{LoadStatus, LocationEntry};

/// Mapping of location name to last-known detail entry
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: BTreeMap<String, LocationEntry>,
}

impl EntryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the entry for a location name
    pub fn get(&self, name: &str) -> Option<&LocationEntry> {
        self.entries.get(name)
    }

    /// Whether the store holds an entry (success or error) for a name
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Insert an entry under its own name, overwriting any previous entry
    pub fn insert(&mut self, entry: LocationEntry) {
        self.entries.insert(entry.name().to_string(), entry);
    }

    /// Remove the entry for a name, if present
    pub fn remove(&mut self, name: &str) -> Option<LocationEntry> {
        self.entries.remove(name)
    }

    /// The cached load status for a name
    ///
    /// `None` when the name is absent or its entry is the error variant;
    /// an error entry never agrees with the status summary.
    pub fn cached_load_status(&self, name: &str) -> Option<LoadStatus> {
        self.entries.get(name).and_then(LocationEntry::load_status)
    }

    /// Iterate location names in lexicographic order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// List all entries in name order
    pub fn list(&self) -> Vec<&LocationEntry> {
        self.entries.values().collect()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
