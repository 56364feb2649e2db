//! Locus Core - Shared domain model for the workspace view
//!
//! Provides:
//! - Domain model: status snapshots, location entries, repositories
//! - Error taxonomy (`LocusError`) and `Result` alias
//! - Logging facility built on tracing
//! - Pure derived-view projection (repository options)

pub mod errors;
pub mod logging;
pub mod model;
pub mod view;

// Re-export key types
pub use errors::{LocusError, Result};
pub use model::{
    LoadStatus, LocationData, LocationEntry, LocationStatusEntry, RemoteError, Repository,
    RepositoryOption, Schedule, Sensor, StatusSnapshot,
};
