//! Job DTOs exchanged with the backend

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::job::{Job, JobStatus};

/// Lightweight status answer for polling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatusResponse {
    pub job_id: Uuid,
    pub status: JobStatus,
}

/// Job summary for listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: Uuid,
    pub name: Option<String>,
    pub backend: String,
    pub status: JobStatus,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

impl From<Job> for JobSummary {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            name: job.name,
            backend: job.backend,
            status: job.status,
            submitted_at: job.submitted_at,
        }
    }
}
