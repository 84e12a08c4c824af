//! JSON decoding of GitHub responses
//!
//! Bodies are decoded into [`UserRecord`]s. What happens to a body that is
//! not the expected JSON depends on the configured [`DecodePolicy`].

use crate::config::DecodePolicy;
use crate::github::endpoint::Endpoint;
use crate::model::UserRecord;
use crate::{ReportError, Result};
use serde::de::DeserializeOwned;

/// Decodes the authenticated user's profile
pub fn decode_profile(body: &[u8], policy: DecodePolicy) -> Result<UserRecord> {
    decode(body, Endpoint::SelfProfile, policy)
}

/// Decodes one page of a follower or following list
pub fn decode_users(body: &[u8], endpoint: Endpoint, policy: DecodePolicy) -> Result<Vec<UserRecord>> {
    decode(body, endpoint, policy)
}

fn decode<T>(body: &[u8], endpoint: Endpoint, policy: DecodePolicy) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match serde_json::from_slice(body) {
        Ok(value) => Ok(value),
        Err(source) => match policy {
            DecodePolicy::Lenient => {
                tracing::warn!(
                    "Ignoring undecodable {} response ({} bytes): {}",
                    endpoint,
                    body.len(),
                    source
                );
                Ok(T::default())
            }
            DecodePolicy::Strict => Err(ReportError::Decode {
                endpoint: endpoint.to_string(),
                source,
            }),
        },
    }
}
