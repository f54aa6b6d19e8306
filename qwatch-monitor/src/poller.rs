//! Job status poller
//!
//! Polls a job until it reaches a terminal status, keeping a single status
//! line up to date on the way. While the job is queued the line carries the
//! queue position and an estimated wait, and the polling interval follows the
//! queue position unless the caller pinned it. An unknown position drops the
//! interval to the minimum either way.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use qwatch_core::domain::job::JobStatus;
use qwatch_core::handle::JobHandle;
use tokio::time;
use tracing::{debug, info};

use crate::config::MonitorConfig;
use crate::error::MonitorError;
use crate::{estimator, render};

/// Source of the current time for wait estimates
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Watches one job and reports its progress to an output sink
pub struct JobMonitor<'a, J: ?Sized> {
    job: &'a J,
    config: MonitorConfig,
    clock: Clock,
}

/// Per-run loop state
struct PollState {
    msg: String,
    prev_msg: String,
    interval: Duration,
    interval_set: bool,
    /// Longest message drawn so far, in characters
    msg_len: usize,
}

impl PollState {
    fn new(msg: String, config: &MonitorConfig) -> Self {
        Self {
            msg_len: msg.chars().count(),
            prev_msg: msg.clone(),
            msg,
            interval: config.initial_interval(),
            interval_set: config.interval_set(),
        }
    }
}

impl<'a, J> JobMonitor<'a, J>
where
    J: JobHandle + ?Sized,
{
    /// Creates a monitor for `job`
    pub fn new(job: &'a J, config: MonitorConfig) -> Self {
        Self {
            job,
            config,
            clock: Arc::new(Utc::now),
        }
    }

    /// Replaces the clock used for wait estimates
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        self.clock = Arc::new(clock);
        self
    }

    /// Polls until the job is done, cancelled or failed
    ///
    /// Any error from the job handle or the sink ends the run and is returned
    /// as is. Nothing is written when the monitor is quiet.
    pub async fn run<W>(&self, out: &mut W) -> Result<(), MonitorError<J::Error>>
    where
        W: Write + ?Sized,
    {
        let quiet = self.config.quiet;

        let mut status = self.job.status().await.map_err(MonitorError::Job)?;
        let mut state = PollState::new(status.value().to_string(), &self.config);

        debug!(
            "Monitoring job (initial status: {}, interval: {:?}, pinned: {})",
            status, state.interval, state.interval_set
        );

        if !quiet {
            render::draw(out, &state.msg)?;
        }

        while !status.is_terminal() {
            time::sleep(state.interval).await;

            status = self.job.status().await.map_err(MonitorError::Job)?;
            let mut msg = status.value().to_string();

            if status == JobStatus::Queued {
                let info = self.job.queue_info().await.map_err(MonitorError::Job)?;
                let position = self.job.queue_position().await.map_err(MonitorError::Job)?;

                let wait = estimator::estimate_wait(info.estimated_start_time, (self.clock)());
                msg.push_str(&estimator::annotation(position, &wait));

                state.interval =
                    estimator::next_interval(position, state.interval, state.interval_set);
            } else if !state.interval_set {
                state.interval = estimator::MIN_INTERVAL;
            }

            state.msg = render::pad(msg, &mut state.msg_len);

            if state.msg != state.prev_msg && !quiet {
                render::draw(out, &state.msg)?;
                state.prev_msg = state.msg.clone();
            }

            debug!(
                "Polled job status {} (next interval: {:?})",
                status, state.interval
            );
        }

        if !quiet {
            render::finish(out)?;
        }

        info!("Job reached terminal status {}", status);
        Ok(())
    }
}
