//! Remote job handle
//!
//! Adapts [`BackendClient`] to the [`JobHandle`] trait so a job living on the
//! backend can be handed straight to the monitor.

use async_trait::async_trait;
use qwatch_core::domain::job::JobStatus;
use qwatch_core::domain::queue::QueueInfo;
use qwatch_core::handle::JobHandle;
use uuid::Uuid;

use crate::BackendClient;
use crate::error::ClientError;

/// A job on the backend, addressed by ID
///
/// The backend has no position-only endpoint, so `queue_position` is the
/// trait default and costs a second `GET /api/jobs/{id}/queue`. Within one
/// poll the position and the start estimate can therefore come from two
/// different queue snapshots.
#[derive(Debug, Clone)]
pub struct RemoteJob {
    client: BackendClient,
    job_id: Uuid,
}

impl RemoteJob {
    /// Create a handle for `job_id` on the backend behind `client`
    pub fn new(client: BackendClient, job_id: Uuid) -> Self {
        Self { client, job_id }
    }

    /// ID of the job this handle points at
    pub fn id(&self) -> Uuid {
        self.job_id
    }
}

#[async_trait]
impl JobHandle for RemoteJob {
    type Error = ClientError;

    async fn status(&self) -> Result<JobStatus, ClientError> {
        self.client.get_job_status(self.job_id).await
    }

    async fn queue_info(&self) -> Result<QueueInfo, ClientError> {
        self.client.get_queue_info(self.job_id).await
    }
}
