//! Single-pass orchestration over the project's clusters
//!
//! One invocation fetches the cluster list, classifies each cluster with the
//! pause policy, and issues pause requests sequentially. A failed fetch
//! aborts the pass; a failed pause is logged and the pass continues with the
//! next cluster. Outcomes are observable through the logs and the returned
//! summary.

use crate::atlas::AtlasClient;
use crate::error::Result;
use crate::policy::{self, PauseDecision};
use comfy_table::{Cell, Table};
use console::style;
use serde::Serialize;
use tracing::{error, info};

/// Counts for one pause pass
#[derive(Debug, Default, Clone, Serialize)]
pub struct PauseSummary {
    pub examined: usize,
    pub paused: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Run one pause pass over the project.
///
/// With `dry_run` set, qualifying clusters are counted as paused but no
/// PATCH request is sent.
pub async fn run_pause(client: &AtlasClient, dry_run: bool) -> Result<PauseSummary> {
    let clusters = client.list_clusters().await?;
    info!(
        "Fetched {} cluster(s) for project {}",
        clusters.len(),
        client.project_id()
    );

    let mut summary = PauseSummary::default();

    for cluster in &clusters {
        summary.examined += 1;

        match policy::decide(cluster) {
            PauseDecision::AlreadyPaused => {
                info!("Skipping cluster {} because it is already paused", cluster.name);
                summary.skipped += 1;
            }
            PauseDecision::NoReplicationSpecs => {
                error!("No replication specs found for cluster {}", cluster.name);
                summary.skipped += 1;
            }
            PauseDecision::UnknownTier => {
                error!("Could not determine tier for cluster {}", cluster.name);
                summary.skipped += 1;
            }
            PauseDecision::SharedTier(tier) => {
                info!("Skipping cluster {} with tier {}", cluster.name, tier);
                summary.skipped += 1;
            }
            PauseDecision::Pause(tier) => {
                if dry_run {
                    info!("Would pause cluster {} with tier {}", cluster.name, tier);
                    summary.paused += 1;
                    continue;
                }

                info!("Pausing cluster {} with tier {}", cluster.name, tier);
                match client.pause_cluster(&cluster.name).await {
                    Ok(()) => {
                        info!("Cluster paused: {}", cluster.name);
                        summary.paused += 1;
                    }
                    Err(e) => {
                        // Isolated per cluster; keep going
                        error!("Failed to pause cluster {}: {}", cluster.name, e);
                        summary.failed += 1;
                    }
                }
            }
        }
    }

    info!("Applicable clusters have been processed.");
    Ok(summary)
}

/// Fetch and display the project's clusters without mutating anything.
pub async fn show_clusters(client: &AtlasClient, output_format: &str) -> Result<()> {
    let clusters = client.list_clusters().await?;

    if output_format == "json" {
        println!("{}", serde_json::to_string_pretty(&clusters)?);
        return Ok(());
    }

    if clusters.is_empty() {
        println!("No clusters in project {}", client.project_id());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Name", "Tier", "State", "Paused", "Created"]);

    for cluster in &clusters {
        let tier = cluster.tier().unwrap_or("-");
        let state = cluster.state_name.as_deref().unwrap_or("-");
        let paused_cell = if cluster.paused {
            Cell::new("yes").fg(comfy_table::Color::Yellow)
        } else {
            Cell::new("no").fg(comfy_table::Color::Green)
        };
        let created = cluster
            .create_date
            .map(|d| d.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| "-".to_string());

        table.add_row(vec![
            Cell::new(&cluster.name),
            Cell::new(tier),
            Cell::new(state),
            paused_cell,
            Cell::new(created),
        ]);
    }

    println!("{}", table);
    println!();

    let pausable = clusters
        .iter()
        .filter(|c| matches!(policy::decide(c), PauseDecision::Pause(_)))
        .count();
    println!(
        "{} cluster(s), {} would be paused by 'atlasctl pause'",
        clusters.len(),
        style(pausable).cyan()
    );

    Ok(())
}
