//! Fetch coordinator - runs the three report fetches side by side
//!
//! The profile, follower list and following list are fetched by three
//! independent tokio tasks. Each task owns the accumulator it fills and
//! hands it back when it finishes; nothing is shared between them. The
//! results are merged into a [`FollowGraph`] only after all three complete.
//!
//! The join is fail-fast: the first task error aborts the remaining tasks
//! and is returned to the caller.

use crate::github::endpoint::Endpoint;
use crate::github::fetcher::GithubClient;
use crate::github::pager::{collect_users, fetch_profile};
use crate::model::FollowGraph;
use crate::{ReportError, Result};
use tokio::task::{AbortHandle, JoinHandle};

/// Fetches the profile, followers and following concurrently
///
/// # Returns
///
/// * `Ok(FollowGraph)` - All three fetches completed
/// * `Err(ReportError)` - The first failure from any of the tasks
pub async fn collect_follow_graph(client: GithubClient) -> Result<FollowGraph> {
    tracing::info!("Fetching profile, followers and following from {}", client.api_base());

    let profile_task = tokio::spawn({
        let client = client.clone();
        async move { fetch_profile(&client).await }
    });
    let followers_task = tokio::spawn({
        let client = client.clone();
        async move { collect_users(&client, Endpoint::Followers).await }
    });
    let following_task = tokio::spawn(async move { collect_users(&client, Endpoint::Following).await });

    let abort_handles = [
        profile_task.abort_handle(),
        followers_task.abort_handle(),
        following_task.abort_handle(),
    ];

    let joined = tokio::try_join!(
        join_task(Endpoint::SelfProfile, profile_task),
        join_task(Endpoint::Followers, followers_task),
        join_task(Endpoint::Following, following_task),
    );

    match joined {
        Ok((profile, followers, following)) => {
            tracing::info!(
                "Collected {}: {} followers, {} following",
                profile.login,
                followers.len(),
                following.len()
            );
            Ok(FollowGraph {
                profile,
                followers,
                following,
            })
        }
        Err(e) => {
            abort_all(&abort_handles);
            Err(e)
        }
    }
}

/// Awaits one fetch task, turning a panic or cancellation into an error
async fn join_task<T>(endpoint: Endpoint, handle: JoinHandle<Result<T>>) -> Result<T> {
    match handle.await {
        Ok(Ok(value)) => {
            tracing::debug!("{} fetch finished", endpoint);
            Ok(value)
        }
        Ok(Err(e)) => {
            tracing::error!("{} fetch failed: {}", endpoint, e);
            Err(e)
        }
        Err(e) => Err(ReportError::Task(format!("{} fetch task: {}", endpoint, e))),
    }
}

fn abort_all(handles: &[AbortHandle]) {
    for handle in handles {
        handle.abort();
    }
}
