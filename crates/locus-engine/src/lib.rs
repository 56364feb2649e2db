//! Locus Engine - Reconciliation layer
//!
//! Maintains the client-side view of remote code locations:
//! - `WorkspaceClient`: the status/detail query seam
//! - `EntryStore`: last-known detail per location
//! - `reconcile`: the pure per-pass refetch/eviction planner
//! - `bootstrap`: cache hydration before the first live comparison
//! - `WorkspaceMonitor`: polling loop, single-flight fetch batches,
//!   and the readable state surface

pub mod bootstrap;
pub mod client;
pub mod entry_store;
pub mod monitor;
pub mod reconcile;

// Re-export key types
pub use client::{LocationResult, StatusResult, WorkspaceClient};
pub use entry_store::EntryStore;
pub use monitor::{MonitorConfig, WorkspaceMonitor, WorkspaceState};
pub use reconcile::{plan_pass, ReconcilePlan};
