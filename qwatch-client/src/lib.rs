//! qwatch HTTP Client
//!
//! A small, type-safe HTTP client for a remote job backend.
//!
//! The client covers the read side of the backend API (jobs, statuses,
//! queue information) and provides [`RemoteJob`], a [`JobHandle`]
//! implementation the monitor can poll.
//!
//! # Example
//!
//! ```no_run
//! use qwatch_client::BackendClient;
//! use qwatch_core::handle::JobHandle;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = BackendClient::new("http://localhost:8080");
//!     let job = client.remote_job(Uuid::new_v4());
//!
//!     println!("Job status: {}", job.status().await?);
//!     Ok(())
//! }
//! ```
//!
//! [`JobHandle`]: qwatch_core::handle::JobHandle

pub mod error;
mod jobs;
mod remote;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use remote::RemoteJob;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the job backend API
#[derive(Debug, Clone)]
pub struct BackendClient {
    /// Base URL of the backend (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl BackendClient {
    /// Create a new backend client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the backend API (e.g., "http://localhost:8080")
    ///
    /// # Example
    /// ```
    /// use qwatch_client::BackendClient;
    ///
    /// let client = BackendClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new backend client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use qwatch_client::BackendClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = BackendClient::with_client("http://localhost:8080", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the backend
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an absolute URL for an API path
    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Non-success status codes become [`ClientError::ApiError`].
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
