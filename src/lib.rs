//! Follow-Grid: a GitHub follower/following report generator
//!
//! This crate fetches the authenticated account's profile, followers and
//! followed accounts from the GitHub REST API and renders them as an
//! avatar grid in a Markdown document with inline HTML.

pub mod config;
pub mod github;
pub mod model;
pub mod output;

use thiserror::Error;

/// Main error type for Follow-Grid operations
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build request for {endpoint}: {message}")]
    Request { endpoint: String, message: String },

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Failed to read response body from {url}: {source}")]
    Body { url: String, source: reqwest::Error },

    #[error("Failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: String,
        source: serde_json::Error,
    },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Fetch task failed: {0}")]
    Task(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Environment variable {0} does not hold a valid Unicode token")]
    InvalidToken(String),
}

/// Result type alias for Follow-Grid operations
pub type Result<T> = std::result::Result<T, ReportError>;

// Re-export commonly used types
pub use config::Config;
pub use github::{collect_follow_graph, GithubClient};
pub use model::{FollowGraph, UserRecord};
pub use output::{format_report, write_report};
