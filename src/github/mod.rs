//! GitHub access: fetching, pagination, decoding and coordination
//!
//! This module contains everything between the configuration and the
//! renderer:
//! - Endpoint URL construction
//! - HTTP fetching with the bearer token
//! - Byte-length driven pagination of list endpoints
//! - JSON decoding into user records
//! - Concurrent collection of the three report inputs

mod coordinator;
mod decoder;
mod endpoint;
mod fetcher;
mod pager;

pub use coordinator::collect_follow_graph;
pub use decoder::{decode_profile, decode_users};
pub use endpoint::Endpoint;
pub use fetcher::{build_http_client, GithubClient, PageSource, GITHUB_MEDIA_TYPE};
pub use pager::{collect_users, fetch_profile, page_was_full, PAGE_SIZE};

use crate::config::{resolve_token, GithubConfig};
use crate::model::FollowGraph;
use crate::Result;

/// Collects everything the report needs
///
/// Reads the token once from the configured environment variable, builds
/// the client and runs the three fetches concurrently.
///
/// # Arguments
///
/// * `config` - The GitHub access configuration
///
/// # Returns
///
/// * `Ok(FollowGraph)` - Profile and both lists
/// * `Err(ReportError)` - An unusable token, or any request, transport, body or
///   strict decode failure
pub async fn collect(config: &GithubConfig) -> Result<FollowGraph> {
    let token = resolve_token(config)?;
    let client = GithubClient::new(config, token)?;
    collect_follow_graph(client).await
}
