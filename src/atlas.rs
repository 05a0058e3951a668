//! Thin client for the Atlas Admin API
//!
//! Two call shapes: list the project's clusters, and pause one cluster by
//! name. The Admin API authenticates with HTTP digest, so every request goes
//! through the challenge/response round trip that `diqwest` layers on top of
//! reqwest. Only the first page of the cluster list is fetched.

use crate::cluster::{Cluster, ClustersPage};
use crate::config::Credentials;
use crate::error::{AtlasctlError, Result};
use diqwest::WithDigestAuth;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

/// Versioned media type required by the Atlas Admin API
pub const ATLAS_MEDIA_TYPE: &str = "application/vnd.atlas.2024-08-05+json";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct AtlasClient {
    http: reqwest::Client,
    base_url: String,
    project_id: String,
    credentials: Credentials,
}

impl AtlasClient {
    pub fn new(base_url: &str, project_id: &str, credentials: Credentials) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
            credentials,
        })
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Fetch the project's clusters (first page only, API order).
    ///
    /// Any non-200 response is an error carrying the response body; callers
    /// treat that as fatal for the pass.
    pub async fn list_clusters(&self) -> Result<Vec<Cluster>> {
        let url = format!(
            "{}/api/atlas/v2/groups/{}/clusters",
            self.base_url, self.project_id
        );
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, ATLAS_MEDIA_TYPE)
            .send_with_digest_auth(&self.credentials.public_key, &self.credentials.private_key)
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(AtlasctlError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let page: ClustersPage = response.json().await?;
        Ok(page.results)
    }

    /// Set `paused=true` on one cluster.
    ///
    /// Errors are returned to the caller; whether a failed pause aborts the
    /// run is the workflow's call, not the client's.
    pub async fn pause_cluster(&self, cluster_name: &str) -> Result<()> {
        let url = format!(
            "{}/api/atlas/v2/groups/{}/clusters/{}",
            self.base_url,
            self.project_id,
            urlencoding::encode(cluster_name)
        );
        debug!("PATCH {}", url);

        let response = self
            .http
            .patch(&url)
            .header(CONTENT_TYPE, ATLAS_MEDIA_TYPE)
            .header(ACCEPT, ATLAS_MEDIA_TYPE)
            .json(&serde_json::json!({ "paused": true }))
            .send_with_digest_auth(&self.credentials.public_key, &self.credentials.private_key)
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(AtlasctlError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
