//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests to the GitHub API, including:
//! - Building the HTTP client with timeouts and user agent
//! - Attaching the bearer token and GitHub media type headers
//! - Returning raw response bodies for the pager and decoder
//!
//! There is no retry logic. Any request construction, transport or body
//! read failure is returned to the caller as a fatal error.

use crate::config::{DecodePolicy, GithubConfig};
use crate::github::endpoint::Endpoint;
use crate::{ConfigError, ReportError, Result};
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use std::fmt;
use std::future::Future;
use std::time::Duration;
use url::Url;

/// Media type GitHub recommends for REST v3 requests
pub const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Source of raw API pages
///
/// Implemented by [`GithubClient`]; the pager only depends on this trait so
/// that pagination can be driven against scripted responses.
pub trait PageSource {
    /// How malformed JSON bodies are handled
    fn decode_policy(&self) -> DecodePolicy;

    /// Fetches one page of `endpoint` and returns the raw body
    ///
    /// `page` is ignored for [`Endpoint::SelfProfile`].
    fn fetch_page(&self, endpoint: Endpoint, page: u32)
        -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The GitHub access configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &GithubConfig) -> std::result::Result<Client, reqwest::Error> {
    // GitHub rejects requests without a User-Agent
    let user_agent = format!("follow-grid/{}", env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Authenticated client for the three report endpoints
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    api_base: Url,
    token: String,
    per_page: usize,
    decode_policy: DecodePolicy,
}

impl GithubClient {
    /// Creates a client from configuration and an already-resolved token
    ///
    /// The token is used verbatim; an empty token is accepted.
    pub fn new(config: &GithubConfig, token: impl Into<String>) -> Result<Self> {
        let api_base = Url::parse(&config.api_base)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid api-base: {}", e)))?;
        let client = build_http_client(config)?;

        Ok(Self {
            client,
            api_base,
            token: token.into(),
            per_page: config.per_page,
            decode_policy: config.decode_policy,
        })
    }

    /// Page size sent as the `per_page` query parameter
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Base URL requests are resolved against
    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    fn authorization(&self, endpoint: Endpoint) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token)).map_err(|e| {
            ReportError::Request {
                endpoint: endpoint.to_string(),
                message: format!("token is not a valid header value: {}", e),
            }
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for GithubClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubClient")
            .field("api_base", &self.api_base.as_str())
            .field("token", &"<redacted>")
            .field("per_page", &self.per_page)
            .field("decode_policy", &self.decode_policy)
            .finish()
    }
}

impl PageSource for GithubClient {
    fn decode_policy(&self) -> DecodePolicy {
        self.decode_policy
    }

    async fn fetch_page(&self, endpoint: Endpoint, page: u32) -> Result<Vec<u8>> {
        let url = endpoint
            .url(&self.api_base, self.per_page, page)
            .map_err(|e| ReportError::Request {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })?;
        let authorization = self.authorization(endpoint)?;

        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(AUTHORIZATION, authorization)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|source| ReportError::Http {
                url: url.to_string(),
                source,
            })?;

        // Status is not an error on its own; the body still goes through the decoder
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("GitHub returned {} for {}", status, url);
        }

        let body = response.bytes().await.map_err(|source| ReportError::Body {
            url: url.to_string(),
            source,
        })?;

        tracing::debug!("Received {} bytes from {} page {}", body.len(), endpoint, page);

        Ok(body.to_vec())
    }
}
