//! Queue domain types
//!
//! Describes where a queued job sits on its backend and when the backend
//! expects to start it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Queue information for a job waiting on a backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueInfo {
    /// Rank among waiting jobs, 1 being next to run. `None` when unknown.
    pub position: Option<u32>,

    /// When the backend predicts the job will begin executing
    pub estimated_start_time: Option<DateTime<Utc>>,

    /// When the backend predicts the job will finish
    pub estimated_complete_time: Option<DateTime<Utc>>,
}
