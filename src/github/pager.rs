//! Pagination driver
//!
//! List endpoints are walked page by page starting at 1. A page whose raw
//! body is at least [`PAGE_SIZE`] bytes long counts as full and the next page
//! is requested; a shorter body ends the walk. The threshold is fixed and
//! does not follow the configured `per_page`. It compares the
//! body's byte length, not its item count, so a short final page whose JSON
//! is long enough costs one extra request that comes back empty.

use crate::github::decoder::{decode_profile, decode_users};
use crate::github::endpoint::Endpoint;
use crate::github::fetcher::PageSource;
use crate::model::UserRecord;
use crate::Result;

/// Byte length at which a list page counts as full
pub const PAGE_SIZE: usize = 100;

/// Whether a page body of `body_len` bytes means another page should be fetched
pub fn page_was_full(body_len: usize, page_size: usize) -> bool {
    body_len >= page_size
}

/// Fetches and decodes the authenticated user's profile
///
/// Always a single request, whatever the response size.
pub async fn fetch_profile<S: PageSource>(source: &S) -> Result<UserRecord> {
    let body = source.fetch_page(Endpoint::SelfProfile, 1).await?;
    decode_profile(&body, source.decode_policy())
}

/// Fetches every page of a list endpoint and returns the users in page order
///
/// # Arguments
///
/// * `source` - Where pages come from
/// * `endpoint` - [`Endpoint::Followers`] or [`Endpoint::Following`]
pub async fn collect_users<S: PageSource>(source: &S, endpoint: Endpoint) -> Result<Vec<UserRecord>> {
    debug_assert!(endpoint.is_paginated(), "{} is not a list endpoint", endpoint);

    let mut users = Vec::new();
    let mut page = 1u32;

    loop {
        let body = source.fetch_page(endpoint, page).await?;
        let batch = decode_users(&body, endpoint, source.decode_policy())?;

        tracing::debug!(
            "{} page {}: {} users, {} bytes",
            endpoint,
            page,
            batch.len(),
            body.len()
        );
        users.extend(batch);

        if !page_was_full(body.len(), PAGE_SIZE) {
            break;
        }
        page += 1;
    }

    Ok(users)
}
