//! Configuration loader
//!
//! Loads client configuration from environment variables, falling back to
//! the compiled defaults for anything unset.
//!
//! ## Environment Variables
//! - `CLASSBRIDGE_API_BASE_URL`: default backend base URL
//! - `CLASSBRIDGE_API_TIMEOUT_SECS`: transport timeout in seconds (unset means no timeout)
//! - `CLASSBRIDGE_API_USER_AGENT`: User-Agent header override

use std::time::Duration;

use classbridge_domain::constants::{ENV_API_BASE_URL, ENV_API_TIMEOUT_SECS, ENV_API_USER_AGENT};

use crate::api::{ApiClientConfig, ApiError};

/// Load configuration from the environment
///
/// # Errors
/// Returns `ApiError::Config` if a variable is set but has an invalid value.
pub fn load() -> Result<ApiClientConfig, ApiError> {
    let config = load_from_env()?;
    tracing::debug!(base_url = %config.default_base_url, "configuration loaded");
    Ok(config)
}

/// Load configuration from environment variables
///
/// Unset or blank variables keep their compiled defaults.
///
/// # Errors
/// Returns `ApiError::Config` if `CLASSBRIDGE_API_TIMEOUT_SECS` is not a
/// whole number of seconds.
pub fn load_from_env() -> Result<ApiClientConfig, ApiError> {
    let mut config = ApiClientConfig::default();

    if let Some(base_url) = env_var(ENV_API_BASE_URL) {
        config.default_base_url = base_url;
    }

    if let Some(raw) = env_var(ENV_API_TIMEOUT_SECS) {
        let secs: u64 = raw
            .parse()
            .map_err(|err| ApiError::Config(format!("invalid {ENV_API_TIMEOUT_SECS}: {err}")))?;
        config.timeout = Some(Duration::from_secs(secs));
    }

    if let Some(agent) = env_var(ENV_API_USER_AGENT) {
        config.user_agent = agent;
    }

    Ok(config)
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
