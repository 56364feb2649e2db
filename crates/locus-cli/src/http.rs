//! HTTP implementation of the workspace query seam
//!
//! Speaks a small JSON protocol against a remote workspace endpoint:
//! `GET {base}/workspace/status` and `GET {base}/workspace/locations/{name}`,
//! each answering the corresponding discriminated result.

use async_trait::async_trait;
use locus_core::{LocusError, Result};
use locus_engine::{LocationResult, StatusResult, WorkspaceClient};

/// Workspace client over HTTP
pub struct HttpWorkspaceClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpWorkspaceClient {
    /// Create a client against the given base URL (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl WorkspaceClient for HttpWorkspaceClient {
    async fn fetch_status(&self) -> Result<StatusResult> {
        let url = format!("{}/workspace/status", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LocusError::transport("fetch_status", e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| LocusError::MalformedResponse {
                context: "status query".to_string(),
                message: e.to_string(),
            })
    }

    async fn fetch_location(&self, name: &str) -> Result<LocationResult> {
        let url = format!("{}/workspace/locations/{}", self.base_url, name);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LocusError::transport("fetch_location", e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| LocusError::MalformedResponse {
                context: format!("detail query for {name}"),
                message: e.to_string(),
            })
    }
}
