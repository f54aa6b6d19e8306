//! Job handle abstraction
//!
//! The monitor only talks to a job through this trait, so any transport
//! (HTTP backend, in-process simulator, test double) can be watched.

use async_trait::async_trait;

use crate::domain::job::JobStatus;
use crate::domain::queue::QueueInfo;

/// A handle to a job running on a remote backend
///
/// Every call goes to the source of truth; implementations must not cache.
#[async_trait]
pub trait JobHandle: Send + Sync {
    /// Error raised by the underlying transport
    type Error: std::error::Error + Send + Sync + 'static;

    /// Current status of the job
    async fn status(&self) -> Result<JobStatus, Self::Error>;

    /// Queue information. Only meaningful while the job is queued.
    async fn queue_info(&self) -> Result<QueueInfo, Self::Error>;

    /// Position in the queue, `None` when the backend doesn't know
    ///
    /// The default asks [`queue_info`](Self::queue_info) again, so the
    /// position may come from a newer snapshot than an earlier
    /// `queue_info` call. Override it when the transport can answer this
    /// more cheaply.
    async fn queue_position(&self) -> Result<Option<u32>, Self::Error> {
        Ok(self.queue_info().await?.position)
    }
}
