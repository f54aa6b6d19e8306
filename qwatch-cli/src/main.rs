//! qwatch CLI
//!
//! Command-line interface for inspecting and watching jobs on a remote backend.

mod commands;
mod config;
mod id_resolver;
mod notify;
mod types;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use notify::{Capabilities, Notifier};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "qwatch")]
#[command(about = "Watch jobs on a remote backend", long_about = None)]
struct Cli {
    /// Backend URL
    #[arg(long, global = true, env = "QWATCH_BACKEND_URL", default_value = "http://localhost:8080")]
    backend_url: String,

    /// Disable colored notifications even on a terminal
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never land on the status line
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let notifier = Notifier::from_capabilities(Capabilities::detect(cli.plain));
    let config = Config {
        backend_url: cli.backend_url,
    };

    if let Err(err) = handle_command(cli.command, &config, &notifier).await {
        notifier.raise_pretty(err, &mut std::io::stderr())?;
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_url_after_subcommand() {
        let cli = Cli::try_parse_from([
            "qwatch",
            "job",
            "watch",
            "3f2a",
            "--backend-url",
            "http://backend:9000",
            "--plain",
        ])
        .unwrap();

        assert_eq!(cli.backend_url, "http://backend:9000");
        assert!(cli.plain);
    }

    #[test]
    fn test_backend_url_before_subcommand() {
        let cli = Cli::try_parse_from([
            "qwatch",
            "--backend-url",
            "https://jobs.example.com",
            "job",
            "list",
        ])
        .unwrap();

        assert_eq!(cli.backend_url, "https://jobs.example.com");
        assert!(!cli.plain);
    }
}
