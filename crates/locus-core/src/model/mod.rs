//! Domain model for the workspace view
//!
//! - `location`: status entries, detail entries, remote errors
//! - `repository`: nested repository definitions and derived options
//! - `snapshot`: the per-poll status snapshot

pub mod location;
pub mod repository;
pub mod snapshot;

pub use location::{LoadStatus, LocationData, LocationEntry, LocationStatusEntry, RemoteError};
pub use repository::{Repository, RepositoryOption, Schedule, Sensor};
pub use snapshot::StatusSnapshot;
