//! Job command handlers
//!
//! Handles listing jobs, showing their status and queue position, and
//! watching a job until it finishes.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::Subcommand;
use colored::*;
use qwatch_client::BackendClient;
use qwatch_core::domain::job::{Job, JobStatus};
use qwatch_core::domain::queue::QueueInfo;
use qwatch_core::dto::job::JobSummary;
use qwatch_core::handle::JobHandle;
use qwatch_monitor::config::parse_interval;
use qwatch_monitor::{MonitorConfig, estimator, job_monitor};
use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::id_resolver::resolve_job_id;
use crate::notify::{MessageKind, Notifier};
use crate::types::IdOrPrefix;

/// Job subcommands
#[derive(Subcommand)]
pub enum JobCommands {
    /// List all jobs
    List,
    /// Show job details
    Status {
        /// Job ID or unambiguous prefix
        id: String,
    },
    /// Show queue position and estimated wait
    Queue {
        /// Job ID or unambiguous prefix
        id: String,
    },
    /// Follow a job until it is done, cancelled or failed
    Watch {
        /// Job ID or unambiguous prefix
        id: String,

        /// Seconds between status queries (adapts to queue position if unset)
        #[arg(short, long, value_parser = parse_interval)]
        interval: Option<Duration>,

        /// Don't print anything while watching
        #[arg(short, long)]
        quiet: bool,
    },
}

/// Handle job commands
pub async fn handle_job_command(
    command: JobCommands,
    config: &Config,
    notifier: &Notifier,
) -> Result<()> {
    let client = config.client()?;

    match command {
        JobCommands::List => list_jobs(&client).await,
        JobCommands::Status { id } => show_status(&client, &id).await,
        JobCommands::Queue { id } => show_queue(&client, &id).await,
        JobCommands::Watch {
            id,
            interval,
            quiet,
        } => watch_job(&client, &id, interval, quiet, notifier).await,
    }
}

/// List all jobs
async fn list_jobs(client: &BackendClient) -> Result<()> {
    let jobs = client.list_jobs().await.context("Failed to list jobs")?;

    if jobs.is_empty() {
        println!("{}", "No jobs found.".yellow());
    } else {
        println!("{}", format!("Found {} job(s):", jobs.len()).bold());
        println!();
        for job in jobs {
            print_job_summary(&job);
        }
    }

    Ok(())
}

/// Show a single job
async fn show_status(client: &BackendClient, id: &str) -> Result<()> {
    let uuid = resolve(client, id).await?;
    let job = client.get_job(uuid).await.context("Failed to fetch job")?;

    print_job_details(&job);

    Ok(())
}

/// Show where a job sits in its backend queue
async fn show_queue(client: &BackendClient, id: &str) -> Result<()> {
    let uuid = resolve(client, id).await?;
    let info = client
        .get_queue_info(uuid)
        .await
        .context("Failed to fetch queue information")?;

    println!("{}", format!("Queue for job {}:", uuid).bold());
    print_queue_info(&info);

    Ok(())
}

/// Watch a job until it reaches a terminal status
async fn watch_job(
    client: &BackendClient,
    id: &str,
    interval: Option<Duration>,
    quiet: bool,
    notifier: &Notifier,
) -> Result<()> {
    let uuid = resolve(client, id).await?;

    let mut monitor_config =
        MonitorConfig::from_env().context("Invalid monitor settings in environment")?;
    if let Some(interval) = interval {
        monitor_config = monitor_config.with_interval(interval);
    }
    if quiet {
        monitor_config = monitor_config.with_quiet(true);
    }
    monitor_config.validate()?;

    info!("Watching job {} ({:?})", uuid, monitor_config);

    let job = client.remote_job(uuid);
    let mut stdout = std::io::stdout();
    job_monitor(&job, &monitor_config, &mut stdout)
        .await
        .with_context(|| format!("Lost track of job {}", uuid))?;

    let status = job
        .status()
        .await
        .context("Failed to fetch final job status")?;

    if !monitor_config.quiet {
        let (text, kind) = finish_message(uuid, status);
        if !notifier.message_pretty(&text, kind, &mut std::io::stderr())? {
            println!("{}", text);
        }
    }

    if status == JobStatus::Error {
        bail!("Job {} incurred an error", uuid);
    }

    Ok(())
}

/// Resolve a user-supplied job ID or prefix
async fn resolve(client: &BackendClient, id: &str) -> Result<Uuid> {
    let id_or_prefix = IdOrPrefix::parse(id);
    resolve_job_id(client, &id_or_prefix).await
}

/// Closing line shown after a watch
fn finish_message(id: Uuid, status: JobStatus) -> (String, MessageKind) {
    let kind = match status {
        JobStatus::Done => MessageKind::Success,
        JobStatus::Cancelled | JobStatus::Error => MessageKind::Warning,
        _ => MessageKind::Info,
    };

    (format!("Job {} finished: {}", id, status.value()), kind)
}

/// Print a job summary line
fn print_job_summary(job: &JobSummary) {
    println!("  {} Job {}", "▸".cyan(), job.id.to_string().dimmed());
    if let Some(name) = &job.name {
        println!("    Name:      {}", name);
    }
    println!("    Backend:   {}", job.backend);
    println!("    Status:    {}", colorize_status(&job.status));
    println!(
        "    Submitted: {}",
        job.submitted_at
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .dimmed()
    );
    println!();
}

/// Print detailed job information
fn print_job_details(job: &Job) {
    println!("{}", "Job Details:".bold());
    println!("  ID:        {}", job.id.to_string().cyan());
    if let Some(name) = &job.name {
        println!("  Name:      {}", name);
    }
    println!("  Backend:   {}", job.backend);
    println!(
        "  Status:    {} ({})",
        colorize_status(&job.status),
        job.status.value()
    );
    println!(
        "  Submitted: {}",
        job.submitted_at.format("%Y-%m-%d %H:%M:%S")
    );

    if let Some(completed) = job.completed_at {
        println!("  Completed: {}", completed.format("%Y-%m-%d %H:%M:%S"));

        let duration = completed.signed_duration_since(job.submitted_at);
        println!("  Duration:  {}s", duration.num_seconds());
    }

    if job.status == JobStatus::Queued {
        if let Some(info) = &job.queue_info {
            println!("\n{}", "Queue:".bold());
            print_queue_info(info);
        }
    }
}

/// Print queue position and estimates
fn print_queue_info(info: &QueueInfo) {
    let position = info
        .position
        .map(|p| p.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    println!("  Position:        {}", position.cyan());

    match info.estimated_start_time {
        Some(start) => {
            println!("  Estimated start: {}", start.format("%Y-%m-%d %H:%M:%S"));
            let wait = estimator::estimate_wait(Some(start), Utc::now());
            if wait.is_empty() {
                println!("  Estimated wait:  {}", "any moment now".dimmed());
            } else {
                println!("  Estimated wait:  {}", wait);
            }
        }
        None => println!("  Estimated start: {}", "unknown".dimmed()),
    }

    if let Some(complete) = info.estimated_complete_time {
        println!(
            "  Estimated end:   {}",
            complete.format("%Y-%m-%d %H:%M:%S")
        );
    }
}

/// Colorize job status for display
fn colorize_status(status: &JobStatus) -> ColoredString {
    let name = status.name();
    match status {
        JobStatus::Initializing | JobStatus::Validating => name.dimmed(),
        JobStatus::Queued => name.yellow(),
        JobStatus::Running => name.cyan(),
        JobStatus::Done => name.green(),
        JobStatus::Cancelled => name.dimmed(),
        JobStatus::Error => name.red(),
    }
}
