//! One-shot status summary command

use clap::Args;
use locus_engine::{StatusResult, WorkspaceClient};

use crate::http::HttpWorkspaceClient;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Base URL of the workspace endpoint
    #[arg(long)]
    pub url: String,
}

pub async fn execute(args: StatusArgs) -> Result<(), Box<dyn std::error::Error>> {
    let client = HttpWorkspaceClient::new(args.url);

    match client.fetch_status().await? {
        StatusResult::Entries(entries) => {
            if entries.is_empty() {
                println!("No code locations reported.");
                return Ok(());
            }
            for entry in entries {
                println!(
                    "{}\t{:?}\t{}",
                    entry.name, entry.load_status, entry.version_key
                );
            }
            Ok(())
        }
        StatusResult::Error(error) => Err(format!("remote error: {}", error.message).into()),
    }
}
