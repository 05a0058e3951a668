//! Error types for atlasctl
//!
//! Library code uses `crate::error::Result<T>` which returns `AtlasctlError`.
//! CLI code uses `anyhow::Result<T>` for top-level error handling; the
//! conversion happens at the CLI boundary so error chains are preserved.
//!
//! There are two failure modes that matter operationally:
//!
//! - A failed cluster list (`Api`/`Http`/`Auth` out of `list_clusters`) is
//!   fatal: the pass aborts before any pause is attempted.
//! - A failed pause (`Api`/`Http`/`Auth` out of `pause_cluster`) is isolated
//!   to that cluster: the workflow logs it and moves on.
//!
//! Nothing is retried. One scheduled invocation is one pass; the next pass
//! picks up whatever this one missed.

use thiserror::Error;

/// Main error type for atlasctl
#[derive(Error, Debug)]
pub enum AtlasctlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Atlas API error: status {status} - {body}")]
    Api { status: u16, body: String },

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP digest exchange failed: {0}")]
    Auth(#[from] diqwest::error::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Failed to parse config: {0}")]
    ParseError(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AtlasctlError>;
