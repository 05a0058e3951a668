use crate::error::ConfigError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "https://cloud.mongodb.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub atlas: AtlasConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasConfig {
    /// Atlas project (group) the pass operates on
    #[serde(default)]
    pub project_id: String,
    /// API endpoint; only overridden in tests
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Programmatic API key pair. Prefer the ATLAS_PUBLIC_KEY /
    /// ATLAS_PRIVATE_KEY environment variables over storing these on disk.
    pub public_key: Option<String>,
    pub private_key: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            atlas: AtlasConfig {
                project_id: String::new(), // Set per deployment
                base_url: default_base_url(),
                public_key: None,
                private_key: None,
            },
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            // Try .atlasctl.toml in current dir, then ~/.config/atlasctl/config.toml
            let local = PathBuf::from(".atlasctl.toml");
            if local.exists() {
                local
            } else {
                dirs::config_dir()
                    .map(|d| d.join("atlasctl").join("config.toml"))
                    .unwrap_or_else(|| PathBuf::from(".atlasctl.toml"))
            }
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
            let config: Config = toml::from_str(&content).with_context(|| {
                format!(
                    "Failed to parse config: {}\n  Tip: Run 'atlasctl init' to create a new config file",
                    config_path.display()
                )
            })?;
            Ok(config)
        } else {
            // Use defaults but warn if user explicitly provided a path
            if path.is_some() {
                eprintln!("WARNING: Config file not found: {}", config_path.display());
                eprintln!("   Using default configuration. Run 'atlasctl init' to create a config file.");
            }
            Ok(Config::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Project id after CLI/env override, validated non-empty.
    pub fn resolve_project_id(
        &self,
        override_id: Option<String>,
    ) -> std::result::Result<String, ConfigError> {
        override_id
            .filter(|id| !id.is_empty())
            .or_else(|| {
                if self.atlas.project_id.is_empty() {
                    None
                } else {
                    Some(self.atlas.project_id.clone())
                }
            })
            .ok_or_else(|| ConfigError::MissingField("atlas.project_id".to_string()))
    }
}

/// Atlas programmatic API key pair, resolved once at startup and passed
/// down explicitly. Never cached across invocations.
#[derive(Clone)]
pub struct Credentials {
    pub public_key: String,
    pub private_key: String,
}

impl Credentials {
    /// CLI/env values win over the config file.
    pub fn resolve(
        public_key: Option<String>,
        private_key: Option<String>,
        config: &AtlasConfig,
    ) -> std::result::Result<Self, ConfigError> {
        let public_key = public_key
            .or_else(|| config.public_key.clone())
            .ok_or_else(|| ConfigError::MissingField("ATLAS_PUBLIC_KEY".to_string()))?;
        let private_key = private_key
            .or_else(|| config.private_key.clone())
            .ok_or_else(|| ConfigError::MissingField("ATLAS_PRIVATE_KEY".to_string()))?;
        Ok(Self {
            public_key,
            private_key,
        })
    }
}

// Keys must never end up in logs or error chains
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

pub fn init_config(output: &Path) -> Result<()> {
    let config = Config::default();
    config.save(output)?;
    println!("Created config file: {}", output.display());
    println!("   Set atlas.project_id before running 'atlasctl pause'.");
    Ok(())
}
