//! Locus CLI
//!
//! Command-line interface for the workspace monitor

use clap::{Parser, Subcommand, ValueEnum};
use locus_core::logging::{self, Profile};

mod commands;
mod http;

#[derive(Debug, Parser)]
#[command(name = "locus")]
#[command(about = "Locus - Continuously-refreshed view of remote code locations", long_about = None)]
struct Cli {
    /// Logging profile
    #[arg(long, value_enum, default_value_t = LogProfile::Dev, global = true)]
    log_profile: LogProfile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    /// Human-readable output
    Dev,
    /// JSON structured output
    Prod,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the polling monitor until interrupted
    Watch(commands::watch::WatchArgs),
    /// One-shot status summary query
    Status(commands::status::StatusArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init(match cli.log_profile {
        LogProfile::Dev => Profile::Development,
        LogProfile::Prod => Profile::Production,
    });

    let result = match cli.command {
        Commands::Watch(args) => commands::watch::execute(args).await,
        Commands::Status(args) => commands::status::execute(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
