//! Typed view of the Atlas cluster payload
//!
//! Only the fields atlasctl reads are modeled; everything else in the API
//! response is ignored by serde. Every level the API may omit is an `Option`
//! or defaults to empty, so absence is handled explicitly rather than
//! panicking mid-pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// First page of `GET /groups/{projectId}/clusters`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClustersPage {
    #[serde(default)]
    pub results: Vec<Cluster>,
}

/// A cluster as returned by the Atlas Admin API (read-only view)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub name: String,
    #[serde(default)]
    pub paused: bool,
    #[serde(default)]
    pub replication_specs: Vec<ReplicationSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationSpec {
    #[serde(default)]
    pub region_configs: Vec<RegionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electable_specs: Option<ElectableSpecs>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectableSpecs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_size: Option<String>,
}

impl Cluster {
    /// Instance tier, e.g. "M0" or "M10".
    ///
    /// Only the first replication spec's first region config is inspected;
    /// multi-region clusters are assumed to carry the same tier everywhere.
    pub fn tier(&self) -> Option<&str> {
        self.replication_specs
            .first()?
            .region_configs
            .first()?
            .electable_specs
            .as_ref()?
            .instance_size
            .as_deref()
    }
}
