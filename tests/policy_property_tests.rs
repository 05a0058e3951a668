//! Property-based tests for the pause policy
//!
//! These tests use proptest to generate random cluster shapes and verify
//! that the policy invariants hold across a wide range of inputs.

use atlasctl::cluster::{Cluster, ElectableSpecs, RegionConfig, ReplicationSpec};
use atlasctl::policy::{decide, PauseDecision, SHARED_TIERS};
use proptest::prelude::*;

fn cluster(name: &str, paused: bool, tier: Option<String>) -> Cluster {
    Cluster {
        name: name.to_string(),
        paused,
        replication_specs: vec![ReplicationSpec {
            region_configs: vec![RegionConfig {
                electable_specs: Some(ElectableSpecs {
                    instance_size: tier,
                }),
            }],
        }],
        state_name: None,
        create_date: None,
    }
}

proptest! {
    #[test]
    fn test_paused_clusters_are_always_skipped(
        tier in "M[0-9]{1,3}",
        name in "[a-z][a-z0-9-]{0,20}"
    ) {
        let decision = decide(&cluster(&name, true, Some(tier)));
        prop_assert_eq!(decision, PauseDecision::AlreadyPaused);
    }

    #[test]
    fn test_dedicated_tiers_are_always_paused(tier in "M[0-9]{1,3}") {
        prop_assume!(!SHARED_TIERS.contains(&tier.as_str()));

        let decision = decide(&cluster("prod", false, Some(tier.clone())));
        prop_assert_eq!(decision, PauseDecision::Pause(tier));
    }

    #[test]
    fn test_shared_tiers_are_always_skipped(idx in 0usize..3) {
        let tier = SHARED_TIERS[idx];
        let decision = decide(&cluster("sandbox", false, Some(tier.to_string())));
        prop_assert_eq!(decision, PauseDecision::SharedTier(tier.to_string()));
    }

    #[test]
    fn test_empty_replication_specs_never_pause(
        paused in any::<bool>(),
        name in "[a-z][a-z0-9-]{0,20}"
    ) {
        let bare = Cluster {
            name,
            paused,
            replication_specs: Vec::new(),
            state_name: None,
            create_date: None,
        };

        let decision = decide(&bare);
        prop_assert!(!matches!(decision, PauseDecision::Pause(_)));
    }

    #[test]
    fn test_missing_tier_never_pauses(name in "[a-z][a-z0-9-]{0,20}") {
        let decision = decide(&cluster(&name, false, None));
        prop_assert_eq!(decision, PauseDecision::UnknownTier);
    }
}
