//! Job domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::queue::QueueInfo;

/// A job submitted to a remote backend
///
/// Snapshot returned by the backend; re-fetched on every query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub name: Option<String>,
    pub backend: String,
    pub status: JobStatus,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub queue_info: Option<QueueInfo>,
}

/// Job lifecycle status as reported by the backend
///
/// Serialized as its machine tag (`"QUEUED"`, `"DONE"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Initializing,
    Validating,
    Queued,
    Running,
    Done,
    Cancelled,
    Error,
}

impl JobStatus {
    /// Every status, in lifecycle order
    pub const ALL: [JobStatus; 7] = [
        JobStatus::Initializing,
        JobStatus::Validating,
        JobStatus::Queued,
        JobStatus::Running,
        JobStatus::Done,
        JobStatus::Cancelled,
        JobStatus::Error,
    ];

    /// Machine tag of the status
    pub fn name(&self) -> &'static str {
        match self {
            JobStatus::Initializing => "INITIALIZING",
            JobStatus::Validating => "VALIDATING",
            JobStatus::Queued => "QUEUED",
            JobStatus::Running => "RUNNING",
            JobStatus::Done => "DONE",
            JobStatus::Cancelled => "CANCELLED",
            JobStatus::Error => "ERROR",
        }
    }

    /// Human-readable label shown to users
    pub fn value(&self) -> &'static str {
        match self {
            JobStatus::Initializing => "job is being initialized",
            JobStatus::Validating => "job is being validated",
            JobStatus::Queued => "job is queued",
            JobStatus::Running => "job is actively running",
            JobStatus::Done => "job has successfully run",
            JobStatus::Cancelled => "job has been cancelled",
            JobStatus::Error => "job incurred error",
        }
    }

    /// Whether no further transition can happen from this status
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobStatus::Done | JobStatus::Cancelled | JobStatus::Error
        )
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        let terminal: Vec<_> = JobStatus::ALL
            .iter()
            .filter(|s| s.is_terminal())
            .copied()
            .collect();
        assert_eq!(
            terminal,
            vec![JobStatus::Done, JobStatus::Cancelled, JobStatus::Error]
        );
    }

    #[test]
    fn test_status_serializes_as_tag() {
        let json = serde_json::to_string(&JobStatus::Queued).unwrap();
        assert_eq!(json, "\"QUEUED\"");

        let parsed: JobStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(parsed, JobStatus::Cancelled);
    }

    #[test]
    fn test_name_matches_serialized_tag() {
        for status in JobStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json.trim_matches('"'), status.name());
        }
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(JobStatus::Running.to_string(), "RUNNING");
        assert_eq!(JobStatus::Running.value(), "job is actively running");
    }
}
