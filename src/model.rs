//! Report data model
//!
//! A [`UserRecord`] describes either the report subject or one account in
//! the follower/following lists. [`FollowGraph`] holds everything the
//! renderer needs once all fetches have finished.

use serde::Deserialize;

/// One GitHub account as shown in the report
///
/// Decoded from the subset of the GitHub user object the report uses;
/// other fields are ignored and missing ones decode to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    /// Avatar image URL
    #[serde(default)]
    pub avatar_url: String,

    /// Profile page URL
    #[serde(rename = "html_url", default)]
    pub profile_url: String,

    /// Account login name
    #[serde(default)]
    pub login: String,
}

impl UserRecord {
    /// Creates a record from its three parts
    pub fn new(
        avatar_url: impl Into<String>,
        profile_url: impl Into<String>,
        login: impl Into<String>,
    ) -> Self {
        Self {
            avatar_url: avatar_url.into(),
            profile_url: profile_url.into(),
            login: login.into(),
        }
    }
}

/// The subject's profile plus both relationship lists
///
/// Lists keep insertion order across pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowGraph {
    pub profile: UserRecord,
    pub followers: Vec<UserRecord>,
    pub following: Vec<UserRecord>,
}
