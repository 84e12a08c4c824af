//! GitHub REST endpoint shapes
//!
//! The report needs three endpoints: the authenticated user's profile and
//! the two paginated relationship lists.

use std::fmt;
use url::Url;

/// One of the three endpoints the report is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /user`
    SelfProfile,
    /// `GET /user/followers`
    Followers,
    /// `GET /user/following`
    Following,
}

impl Endpoint {
    /// Path relative to the API base
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::SelfProfile => "user",
            Endpoint::Followers => "user/followers",
            Endpoint::Following => "user/following",
        }
    }

    /// Whether the endpoint returns a paginated list
    pub fn is_paginated(self) -> bool {
        !matches!(self, Endpoint::SelfProfile)
    }

    /// Builds the request URL for this endpoint
    ///
    /// `per_page` and `page` are appended only for list endpoints. A path
    /// on `api_base` (as used by GitHub Enterprise, e.g. `/api/v3`) is kept.
    pub fn url(self, api_base: &Url, per_page: usize, page: u32) -> Result<Url, url::ParseError> {
        let mut base = api_base.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut url = base.join(self.path())?;
        if self.is_paginated() {
            url.query_pairs_mut()
                .append_pair("per_page", &per_page.to_string())
                .append_pair("page", &page.to_string());
        }

        Ok(url)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Endpoint::SelfProfile => "self",
            Endpoint::Followers => "followers",
            Endpoint::Following => "following",
        };
        f.write_str(name)
    }
}
