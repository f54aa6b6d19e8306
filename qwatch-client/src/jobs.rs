//! Job-related API endpoints

use qwatch_core::domain::job::{Job, JobStatus};
use qwatch_core::domain::queue::QueueInfo;
use qwatch_core::dto::job::{JobStatusResponse, JobSummary};
use tracing::debug;
use uuid::Uuid;

use crate::BackendClient;
use crate::error::{ClientError, Result};
use crate::remote::RemoteJob;

impl BackendClient {
    /// List all jobs known to the backend
    pub async fn list_jobs(&self) -> Result<Vec<JobSummary>> {
        let response = self.client.get(self.url("jobs")).send().await?;

        self.handle_response(response).await
    }

    /// Get a job by ID
    ///
    /// # Arguments
    /// * `job_id` - The job UUID
    ///
    /// # Returns
    /// The full job snapshot, including queue information when queued
    pub async fn get_job(&self, job_id: Uuid) -> Result<Job> {
        let response = self
            .client
            .get(self.url(&format!("jobs/{}", job_id)))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get the current status of a job
    ///
    /// Always hits the backend; nothing is cached.
    pub async fn get_job_status(&self, job_id: Uuid) -> Result<JobStatus> {
        let response = self
            .client
            .get(self.url(&format!("jobs/{}/status", job_id)))
            .send()
            .await?;

        let body: JobStatusResponse = self.handle_response(response).await?;
        if body.job_id != job_id {
            return Err(ClientError::JobMismatch {
                expected: job_id,
                actual: body.job_id,
            });
        }

        debug!("Job {} status: {}", job_id, body.status);
        Ok(body.status)
    }

    /// Get queue information for a job
    ///
    /// # Arguments
    /// * `job_id` - The job UUID
    ///
    /// # Returns
    /// Queue position and start estimate. Fields are `None` when the
    /// backend has no estimate.
    pub async fn get_queue_info(&self, job_id: Uuid) -> Result<QueueInfo> {
        let response = self
            .client
            .get(self.url(&format!("jobs/{}/queue", job_id)))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get a pollable handle to a job
    pub fn remote_job(&self, job_id: Uuid) -> RemoteJob {
        RemoteJob::new(self.clone(), job_id)
    }
}
