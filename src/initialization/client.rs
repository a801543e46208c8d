//! HTTP client initialization.
//!
//! This module provides functions to initialize HTTP clients with proper
//! configuration for content fetching and redirect handling.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error_handling::InitializationError;
use reqwest::ClientBuilder;

/// Builds the settings shared by both clients.
///
/// Certificate verification is controlled by `config.verify_certificates`.
/// It is off by default because requests sent straight to an IP address
/// almost never present a certificate for that IP.
fn base_builder(config: &Config) -> ClientBuilder {
    if !config.verify_certificates {
        log::debug!("TLS certificate verification is disabled");
    }
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .danger_accept_invalid_certs(!config.verify_certificates)
}

/// Initializes the HTTP client used for GET requests.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - Timeout from the config
/// - Certificate verification per the config
/// - reqwest's default redirect policy (a fetch reports the page it lands on)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = base_builder(config).build()?;
    Ok(Arc::new(client))
}

/// Initializes a shared HTTP client for redirect resolution.
///
/// Creates a `reqwest::Client` with redirects disabled so the redirect chain
/// can be followed (and bounded) manually.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_redirect_client(
    config: &Config,
) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = base_builder(config)
        .redirect(reqwest::redirect::Policy::none())
        .build()?;
    Ok(Arc::new(client))
}
