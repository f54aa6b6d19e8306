//! Configuration module
//!
//! Handles CLI configuration such as the backend URL.

use anyhow::{Result, bail};
use qwatch_client::BackendClient;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the job backend
    pub backend_url: String,
}

impl Config {
    /// Checks the backend URL is usable
    pub fn validate(&self) -> Result<()> {
        if self.backend_url.is_empty() {
            bail!("backend_url cannot be empty");
        }

        if !self.backend_url.starts_with("http://") && !self.backend_url.starts_with("https://") {
            bail!("backend_url must start with http:// or https://");
        }

        Ok(())
    }

    /// Builds a client for the configured backend
    pub fn client(&self) -> Result<BackendClient> {
        self.validate()?;
        Ok(BackendClient::new(&self.backend_url))
    }
}
