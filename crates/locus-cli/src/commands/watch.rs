//! Run the polling monitor until interrupted

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use locus_engine::{MonitorConfig, WorkspaceMonitor};
use locus_store::{MemoryCache, SqliteCache, WorkspaceCache};
use tracing::info;

use crate::http::HttpWorkspaceClient;

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Base URL of the workspace endpoint
    #[arg(long)]
    pub url: String,

    /// Polling cadence for the status summary, in seconds
    #[arg(long, default_value_t = 5)]
    pub interval_secs: u64,

    /// Path to the persistent cache database; omit to run cache-less
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Cache key prefix namespacing this deployment
    #[arg(long, default_value = "locus")]
    pub prefix: String,
}

pub async fn execute(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let client = Arc::new(HttpWorkspaceClient::new(args.url.clone()));

    let cache: Arc<dyn WorkspaceCache> = match &args.db {
        Some(path) => Arc::new(SqliteCache::open(path)?),
        None => {
            info!("no cache path given; running cache-less");
            Arc::new(MemoryCache::new())
        }
    };

    let monitor = WorkspaceMonitor::new(
        client,
        cache,
        MonitorConfig {
            poll_interval: Duration::from_secs(args.interval_secs),
            key_prefix: args.prefix,
        },
    );

    monitor.hydrate().await;
    info!(url = %args.url, "watching workspace");

    tokio::select! {
        _ = monitor.run() => {}
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted; shutting down");
        }
    }

    let state = monitor.state().await;
    info!(
        locations = state.status_by_name.len(),
        entries = state.entries.len(),
        options = state.all_options.len(),
        "final workspace state"
    );

    Ok(())
}
