//! qwatch Monitor
//!
//! Watches a job on a remote backend until it is done, cancelled or failed,
//! keeping a single self-overwriting status line up to date.
//!
//! Architecture:
//! - Poller: queries the job and decides when to stop and how long to sleep
//! - Estimator: queue annotation and queue-aware polling interval
//! - Render: in-place line drawing with padding against stale characters
//!
//! # Example
//!
//! ```no_run
//! use qwatch_core::handle::JobHandle;
//! use qwatch_monitor::{MonitorConfig, job_monitor};
//!
//! async fn wait_for<J: JobHandle>(job: &J) -> Result<(), qwatch_monitor::MonitorError<J::Error>> {
//!     let mut stdout = std::io::stdout();
//!     job_monitor(job, &MonitorConfig::default(), &mut stdout).await
//! }
//! ```

pub mod config;
pub mod error;
pub mod estimator;
mod poller;
pub mod render;

pub use config::MonitorConfig;
pub use error::{ConfigError, MonitorError};
pub use poller::{Clock, JobMonitor};

use std::io::Write;

use qwatch_core::handle::JobHandle;

/// Monitors `job` until it reaches a terminal status
///
/// Progress goes to `out` unless `config.quiet` is set. Returns once the job
/// is done, cancelled or failed; errors from the job or the sink are passed
/// through untouched.
pub async fn job_monitor<J, W>(
    job: &J,
    config: &MonitorConfig,
    out: &mut W,
) -> Result<(), MonitorError<J::Error>>
where
    J: JobHandle + ?Sized,
    W: Write + ?Sized,
{
    JobMonitor::new(job, config.clone()).run(out).await
}
