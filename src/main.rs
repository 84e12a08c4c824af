//! Follow-Grid main entry point
//!
//! This is the command-line interface for the Follow-Grid report generator.

use anyhow::Context;
use clap::Parser;
use follow_grid::config::load_or_default;
use follow_grid::output::{format_user, write_report};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Follow-Grid: a GitHub follower report generator
///
/// Fetches the profile, followers and followed accounts of the user owning
/// the token in $TOKEN and writes them as an avatar grid to ./README.md.
/// No arguments are required.
#[derive(Parser, Debug)]
#[command(name = "follow-grid")]
#[command(version)]
#[command(about = "Renders your GitHub followers and following as an avatar grid", long_about = None)]
struct Cli {
    /// Optional TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the report here instead of the configured path
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = load_or_default(cli.config.as_deref()).context("Failed to load configuration")?;
    let output_path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output.path));

    // Any fetch failure ends the run before anything is written
    let graph = match follow_grid::github::collect(&config.github).await {
        Ok(graph) => graph,
        Err(e) => {
            tracing::error!("Failed to collect follow data: {}", e);
            return Err(e).context("Failed to collect follow data");
        }
    };

    println!("{}", format_user(&graph.profile));

    write_report(&graph, &output_path)
        .with_context(|| format!("Failed to write report to {}", output_path.display()))?;

    tracing::info!(
        "Report for {} written to {}",
        graph.profile.login,
        output_path.display()
    );

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("follow_grid=info,warn"),
            1 => EnvFilter::new("follow_grid=debug,info"),
            2 => EnvFilter::new("follow_grid=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
