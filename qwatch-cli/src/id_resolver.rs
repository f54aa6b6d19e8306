//! ID resolver module
//!
//! Resolves job ID prefixes to full UUIDs by querying the backend, so users
//! can type a short, unambiguous prefix instead of a full UUID.

use anyhow::{Context, Result, anyhow};
use qwatch_client::BackendClient;
use qwatch_core::dto::job::JobSummary;
use uuid::Uuid;

use crate::types::IdOrPrefix;

/// Resolve a job ID or prefix to a full UUID
///
/// Full UUIDs are returned without touching the backend.
///
/// # Errors
/// Returns an error if:
/// - No job matches the prefix
/// - Multiple jobs match the prefix (ambiguous)
/// - API call fails
pub async fn resolve_job_id(client: &BackendClient, id_or_prefix: &IdOrPrefix) -> Result<Uuid> {
    if let Some(uuid) = id_or_prefix.as_uuid() {
        return Ok(uuid);
    }

    let jobs = client
        .list_jobs()
        .await
        .context("Failed to fetch jobs for ID resolution")?;

    pick_unique(&jobs, id_or_prefix)
}

/// Pick the single job matching `id_or_prefix`
fn pick_unique(jobs: &[JobSummary], id_or_prefix: &IdOrPrefix) -> Result<Uuid> {
    let matches: Vec<_> = jobs.iter().filter(|j| id_or_prefix.matches(&j.id)).collect();

    match matches.as_slice() {
        [] => Err(anyhow!(
            "No job found with ID starting with '{}'",
            id_or_prefix
        )),
        [job] => Ok(job.id),
        _ => {
            let ids: Vec<String> = matches.iter().map(|j| j.id.to_string()).collect();
            Err(anyhow!(
                "Ambiguous prefix '{}' matches multiple jobs: {}",
                id_or_prefix,
                ids.join(", ")
            ))
        }
    }
}
