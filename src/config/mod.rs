//! Configuration module for Follow-Grid
//!
//! Every setting has a default, so the tool runs without any configuration
//! file. An optional TOML file can override the API base, page size,
//! token variable, timeouts, decode policy and output path.
//!
//! # Example
//!
//! ```no_run
//! use follow_grid::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("follow-grid.toml")).unwrap();
//! println!("Report will be written to: {}", config.output.path);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, DecodePolicy, GithubConfig, OutputConfig};

// Re-export parser functions
pub use parser::{load_config, load_or_default, parse_config, resolve_token};
