//! The remote query seam
//!
//! The engine issues exactly two query shapes against the remote: a cheap
//! status summary of all locations, and a per-name detail query. Both
//! responses are discriminated results; transport is left to the
//! implementation behind the trait.

use async_trait::async_trait;
use locus_core::{LocationData, LocationStatusEntry, RemoteError, Result};
use serde::{Deserialize, Serialize};

/// Response to the parameterless status summary query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatusResult {
    /// One status entry per known location
    Entries(Vec<LocationStatusEntry>),
    /// The remote answered with an opaque error payload
    Error(RemoteError),
}

/// Response to the per-name detail query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LocationResult {
    /// Full location detail payload
    Loaded(LocationData),
    /// The remote answered with an opaque error payload
    Error(RemoteError),
}

/// Issues the two workspace queries against the remote
///
/// Detail fetches always hit the live remote: the engine only asks for a
/// location it has already decided is stale, so there is no read cache at
/// this seam. `Err` means transport failure; remote-side failures arrive
/// as the `Error` variants.
#[async_trait]
pub trait WorkspaceClient: Send + Sync {
    /// Fetch the lightweight status summary of all locations
    async fn fetch_status(&self) -> Result<StatusResult>;

    /// Fetch the detail payload for a single location
    ///
    /// Safe to invoke concurrently across different names.
    async fn fetch_location(&self, name: &str) -> Result<LocationResult>;
}
