//! Error types for the monitor

use thiserror::Error;

/// Errors that abort a monitoring run
///
/// The monitor has no failure modes of its own: every variant carries the
/// collaborator's error untouched.
#[derive(Debug, Error)]
pub enum MonitorError<E>
where
    E: std::error::Error + 'static,
{
    /// The job handle failed to answer a query
    #[error(transparent)]
    Job(E),

    /// Writing to the output sink failed
    #[error(transparent)]
    Output(#[from] std::io::Error),
}

/// Invalid monitor configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("poll interval must be a positive, finite number of seconds (got {0})")]
    InvalidInterval(String),
}
