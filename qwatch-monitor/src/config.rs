//! Monitor configuration
//!
//! Polling interval and output settings for a monitoring run.

use std::time::Duration;

use crate::error::ConfigError;

/// Interval used when the caller doesn't pick one
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Monitor configuration
///
/// An explicit interval pins the polling rate while the queue position is
/// known. Leaving it unset lets the monitor adapt the rate to the position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonitorConfig {
    /// Time between status queries, `None` to let the monitor decide
    pub interval: Option<Duration>,

    /// Suppress all output
    pub quiet: bool,
}

impl MonitorConfig {
    /// Creates a configuration with defaults: adaptive interval, not quiet
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the polling interval
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Sets whether output is suppressed
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Interval for the first sleep
    pub fn initial_interval(&self) -> Duration {
        self.interval.unwrap_or(DEFAULT_INTERVAL)
    }

    /// Whether the interval was chosen by the caller
    pub fn interval_set(&self) -> bool {
        self.interval.is_some()
    }

    /// Creates configuration from environment variables
    ///
    /// Recognised variables:
    /// - QWATCH_POLL_INTERVAL (optional, seconds, fractional allowed)
    /// - QWATCH_QUIET (optional, `1`/`true`/`yes` to enable)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let interval = lookup("QWATCH_POLL_INTERVAL")
            .map(|raw| parse_interval(&raw))
            .transpose()?;

        let quiet = lookup("QWATCH_QUIET")
            .map(|raw| {
                matches!(
                    raw.trim().to_ascii_lowercase().as_str(),
                    "1" | "true" | "yes"
                )
            })
            .unwrap_or(false);

        Ok(Self { interval, quiet })
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(interval) = self.interval {
            if interval.is_zero() {
                return Err(ConfigError::InvalidInterval(format!("{:?}", interval)));
            }
        }

        Ok(())
    }
}

/// Parses a number of seconds into a polling interval
pub fn parse_interval(raw: &str) -> Result<Duration, ConfigError> {
    let secs: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidInterval(raw.to_string()))?;

    if !secs.is_finite() || secs <= 0.0 {
        return Err(ConfigError::InvalidInterval(raw.to_string()));
    }

    Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::InvalidInterval(raw.to_string()))
}
