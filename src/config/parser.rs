use crate::config::types::{Config, GithubConfig};
use crate::config::validation::validate;
use crate::ConfigError;
use std::env::VarError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use follow_grid::config::load_config;
///
/// let config = load_config(Path::new("follow-grid.toml")).unwrap();
/// println!("Page size: {}", config.github.per_page);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
///
/// Missing sections and keys fall back to their defaults.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// Loads the configuration file if one was given, otherwise the defaults
pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => {
            let config = Config::default();
            validate(&config)?;
            Ok(config)
        }
    }
}

/// Reads the bearer token from the configured environment variable
///
/// The token is not validated and is used exactly as set. An unset
/// variable yields an empty token, which is still sent with every request.
/// A variable that is set but not valid Unicode cannot be sent verbatim and
/// is rejected.
pub fn resolve_token(config: &GithubConfig) -> Result<String, ConfigError> {
    match std::env::var(&config.token_env) {
        Ok(token) => Ok(token),
        Err(VarError::NotPresent) => {
            tracing::warn!(
                "Environment variable {} is not set, sending an empty bearer token",
                config.token_env
            );
            Ok(String::new())
        }
        Err(VarError::NotUnicode(_)) => Err(ConfigError::InvalidToken(config.token_env.clone())),
    }
}
