use serde::Deserialize;

/// Default GitHub REST API base URL
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default page size, the largest `per_page` GitHub accepts
pub const DEFAULT_PER_PAGE: usize = 100;

/// Default environment variable holding the bearer token
pub const DEFAULT_TOKEN_ENV: &str = "TOKEN";

/// Default report location, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "./README.md";

/// Main configuration structure for Follow-Grid
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// GitHub API access configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Base URL of the REST API
    #[serde(rename = "api-base")]
    pub api_base: String,

    /// Page size sent as `per_page`
    #[serde(rename = "per-page")]
    pub per_page: usize,

    /// Name of the environment variable holding the bearer token
    #[serde(rename = "token-env")]
    pub token_env: String,

    /// Whole-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connect timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// What to do with a response body that is not valid JSON
    #[serde(rename = "decode-policy")]
    pub decode_policy: DecodePolicy,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            per_page: DEFAULT_PER_PAGE,
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            decode_policy: DecodePolicy::default(),
        }
    }
}

/// Handling of malformed JSON bodies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Log a warning and continue with an empty record or an empty page
    #[default]
    Lenient,
    /// Abort the run
    Strict,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the generated report, overwritten on every run
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_OUTPUT_PATH.to_string(),
        }
    }
}
