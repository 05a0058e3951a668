use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use atlasctl::atlas::AtlasClient;
use atlasctl::config::{self, Config, Credentials};
use atlasctl::workflow::{self, PauseSummary};

#[derive(Parser)]
#[command(name = "atlasctl")]
#[command(
    about = "Cost-control CLI for MongoDB Atlas clusters",
    long_about = "atlasctl pauses the dedicated-tier clusters of a MongoDB Atlas project.\n\nMeant to run from a scheduler (cron, systemd timer, CI job):\n  atlasctl pause          # pause every dedicated-tier cluster that is running\n  atlasctl pause --dry-run\n  atlasctl list           # inspect the project without changing anything\n\nFree/shared tiers (M0, M2, M5) and already-paused clusters are left alone.\nCredentials come from ATLAS_PUBLIC_KEY / ATLAS_PRIVATE_KEY or the config file."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    output: String,

    /// Atlas project (group) id, overrides the config file
    #[arg(long, global = true, env = "ATLAS_PROJECT_ID")]
    project_id: Option<String>,

    /// Atlas programmatic API public key
    #[arg(long, global = true, env = "ATLAS_PUBLIC_KEY", hide_env_values = true)]
    public_key: Option<String>,

    /// Atlas programmatic API private key
    #[arg(long, global = true, env = "ATLAS_PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pause all dedicated-tier clusters in the project
    Pause {
        /// Show what would be paused without calling the API
        #[arg(long)]
        dry_run: bool,
    },
    /// List clusters with tier and pause state
    List,
    /// Initialize atlasctl configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = ".atlasctl.toml")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging - the logs are the only record of what a scheduled pass
    // did, so INFO stays on by default
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Load config
    let config = Config::load(cli.config.as_deref())?;

    // Execute command
    match &cli.command {
        Commands::Pause { dry_run } => {
            let client = build_client(&cli, &config)?;
            let summary = workflow::run_pause(&client, *dry_run).await.map_err(|e| {
                tracing::error!("Error in processing clusters: {}", e);
                e
            })?;
            print_summary(&summary, *dry_run, &cli.output)?;
        }
        Commands::List => {
            let client = build_client(&cli, &config)?;
            workflow::show_clusters(&client, &cli.output).await?;
        }
        Commands::Init { output } => {
            config::init_config(output)?;
        }
    }

    Ok(())
}

fn build_client(cli: &Cli, config: &Config) -> Result<AtlasClient> {
    let project_id = config.resolve_project_id(cli.project_id.clone())?;
    let credentials = Credentials::resolve(
        cli.public_key.clone(),
        cli.private_key.clone(),
        &config.atlas,
    )?;
    Ok(AtlasClient::new(
        &config.atlas.base_url,
        &project_id,
        credentials,
    )?)
}

fn print_summary(summary: &PauseSummary, dry_run: bool, output_format: &str) -> Result<()> {
    if output_format == "json" {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    if dry_run {
        println!(
            "Dry run: {} of {} cluster(s) would be paused",
            style(summary.paused).cyan(),
            summary.examined
        );
        return Ok(());
    }

    println!(
        "Examined {} cluster(s): {} paused, {} skipped",
        summary.examined,
        style(summary.paused).green(),
        summary.skipped
    );
    if summary.failed > 0 {
        println!(
            "{} {} cluster(s) failed to pause - see log output above",
            style("WARNING:").red().bold(),
            summary.failed
        );
    }

    Ok(())
}
