//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod job;

pub use job::JobCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;
use crate::notify::Notifier;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Job inspection and monitoring
    Job {
        #[command(subcommand)]
        command: JobCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config, notifier: &Notifier) -> Result<()> {
    match command {
        Commands::Job { command } => job::handle_job_command(command, config, notifier).await,
    }
}
