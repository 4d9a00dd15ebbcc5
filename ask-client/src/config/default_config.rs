//! Default client config loaded from environment variables.
//!
//! # Environment variables
//!
//! - `RAG_API_URL`             = backend base URL (default `http://localhost:8000`)
//! - `RAG_HEALTH_TIMEOUT_SECS` = optional health probe timeout (u64)

use crate::{
    config::client_config::AskClientConfig,
    error_handler::{Result, parse_opt_u64, validate_http_endpoint, value_or_default},
};

/// Local development backend address used when `RAG_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Constructs the client config from environment.
///
/// # Errors
///
/// - [`ConfigError::InvalidFormat`](crate::error_handler::ConfigError::InvalidFormat)
///   if `RAG_API_URL` is not an http(s) URL
/// - [`ConfigError::InvalidNumber`](crate::error_handler::ConfigError::InvalidNumber)
///   if `RAG_HEALTH_TIMEOUT_SECS` is not a number
pub fn config_from_env() -> Result<AskClientConfig> {
    config_from_values(
        std::env::var("RAG_API_URL").ok().as_deref(),
        std::env::var("RAG_HEALTH_TIMEOUT_SECS").ok().as_deref(),
    )
}

/// Builds the config from raw variable values, as read from the environment.
///
/// # Errors
/// See [`config_from_env`].
pub fn config_from_values(
    api_url: Option<&str>,
    health_timeout_secs: Option<&str>,
) -> Result<AskClientConfig> {
    let base_url = value_or_default(api_url, DEFAULT_API_URL);
    validate_http_endpoint("RAG_API_URL", &base_url)?;
    let health_timeout_secs = parse_opt_u64("RAG_HEALTH_TIMEOUT_SECS", health_timeout_secs)?;

    Ok(AskClientConfig {
        base_url,
        health_timeout_secs,
    })
}

/// Same as [`config_from_env`], but an explicit URL (e.g. from a CLI flag) wins.
///
/// # Errors
/// See [`config_from_env`]; the override is validated the same way.
pub fn config_with_override(url: Option<&str>) -> Result<AskClientConfig> {
    apply_url_override(config_from_env()?, url)
}

/// Replaces `cfg.base_url` with `url` unless it is missing or blank.
///
/// # Errors
/// [`ConfigError::InvalidFormat`](crate::error_handler::ConfigError::InvalidFormat)
/// if the override is not an http(s) URL.
pub fn apply_url_override(mut cfg: AskClientConfig, url: Option<&str>) -> Result<AskClientConfig> {
    if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
        validate_http_endpoint("RAG_API_URL", url)?;
        cfg.base_url = url.to_string();
    }
    Ok(cfg)
}
