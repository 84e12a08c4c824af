//! Output module for generating the follower report
//!
//! This module handles:
//! - Formatting the profile header and the two avatar grids
//! - Writing the finished document to disk

mod markdown;

pub use markdown::{format_report, format_table, format_user, GRID_COLUMNS};

use crate::model::FollowGraph;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create {path}: {source}")]
    Create {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Renders the report and writes it to `output_path`
///
/// Any existing file is truncated and replaced.
///
/// # Arguments
///
/// * `graph` - Profile and both relationship lists
/// * `output_path` - Path where the report should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(OutputError)` - Failed to create or write the file
pub fn write_report(graph: &FollowGraph, output_path: &Path) -> OutputResult<()> {
    let report = format_report(graph);

    let mut file = File::create(output_path).map_err(|source| OutputError::Create {
        path: output_path.display().to_string(),
        source,
    })?;
    file.write_all(report.as_bytes())?;
    file.flush()?;

    tracing::info!("Wrote {} bytes to {}", report.len(), output_path.display());

    Ok(())
}
