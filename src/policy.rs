//! Pause policy
//!
//! Pure decision logic over a fetched cluster. The workflow owns the side
//! effects (API calls, logging); this module only classifies.

use crate::cluster::Cluster;

/// Free and shared tiers that cost nothing to leave running.
/// Atlas also rejects pause requests for these.
pub const SHARED_TIERS: [&str; 3] = ["M0", "M2", "M5"];

/// Outcome of the pause policy for a single cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PauseDecision {
    /// Dedicated tier, not paused: issue the pause request
    Pause(String),
    /// Cluster reports paused=true
    AlreadyPaused,
    /// No replication specs in the payload; nothing to inspect
    NoReplicationSpecs,
    /// Replication specs present but no instance size at the expected path
    UnknownTier,
    /// Free/shared tier, left running
    SharedTier(String),
}

/// Classify one cluster. Checks are ordered: pause state first, then
/// payload shape, then tier.
pub fn decide(cluster: &Cluster) -> PauseDecision {
    if cluster.paused {
        return PauseDecision::AlreadyPaused;
    }

    if cluster.replication_specs.is_empty() {
        return PauseDecision::NoReplicationSpecs;
    }

    match cluster.tier() {
        None => PauseDecision::UnknownTier,
        Some(tier) if SHARED_TIERS.contains(&tier) => PauseDecision::SharedTier(tier.to_string()),
        Some(tier) => PauseDecision::Pause(tier.to_string()),
    }
}
