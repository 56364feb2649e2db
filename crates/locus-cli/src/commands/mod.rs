//! CLI commands

pub mod status;
pub mod watch;
