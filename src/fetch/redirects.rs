//! HTTP redirect chain resolution.
//!
//! This module follows redirect chains manually with HEAD requests so every
//! hop is visible and the chain length is bounded.

use log::{debug, error, warn};
use reqwest::Url;

use crate::app::url::{base_url, is_url};
use crate::config::REDIRECT_STATUS_CODES;

/// Returns `true` for the status codes that are followed as redirects.
pub fn is_redirect_status(status: u16) -> bool {
    REDIRECT_STATUS_CODES.contains(&status)
}

/// Turns a `Location` header value into an absolute URL.
///
/// - A fully qualified URL is used as is.
/// - An absolute path (`/path`) is appended to the base URL
///   (`scheme://host[:port]`) of `current`.
/// - Any other relative form (`page.html`, `../up`, `//host/x`) is joined
///   against `current`.
///
/// # Returns
///
/// `None` if the location is empty or cannot be made absolute.
pub fn resolve_location(current: &str, location: &str) -> Option<String> {
    let location = location.trim();
    if location.is_empty() {
        return None;
    }
    if is_url(location) {
        return Some(location.to_string());
    }
    if location.starts_with('/') && !location.starts_with("//") {
        return base_url(current).map(|base| format!("{base}{location}"));
    }
    let base = Url::parse(current).ok()?;
    base.join(location).ok().map(String::from)
}

/// Resolves the final destination of `url` by following its redirect chain.
///
/// Each hop is a HEAD request sent with the redirect-disabled client. A hop
/// whose status is one of `REDIRECT_STATUS_CODES` is followed through its
/// `Location` header; anything else ends the chain.
///
/// This never fails. The chain stops at the last URL reached when:
/// - a request fails (logged as an error),
/// - a redirect has no usable `Location` header (logged as a warning),
/// - `max_hops` redirects have been followed (logged as a warning).
///
/// # Arguments
///
/// * `url` - The initial URL to start from
/// * `max_hops` - Maximum number of redirects to follow
/// * `client` - HTTP client with redirects disabled
pub async fn resolve_redirects(url: &str, max_hops: usize, client: &reqwest::Client) -> String {
    let mut current = url.to_string();

    for _ in 0..max_hops {
        let resp = match client.head(&current).send().await {
            Ok(resp) => resp,
            Err(e) => {
                error!("Request to {current} failed: {e}");
                return current;
            }
        };

        let status = resp.status().as_u16();
        if !is_redirect_status(status) {
            return current;
        }

        let location = resp
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|value| value.to_str().ok());
        let Some(location) = location else {
            warn!("Redirect status {status} for {current} but no usable Location header");
            return current;
        };

        match resolve_location(&current, location) {
            Some(next) => {
                debug!("{current} redirects ({status}) to {next}");
                current = next;
            }
            None => {
                warn!("Redirect status {status} for {current} with unusable Location {location:?}");
                return current;
            }
        }
    }

    warn!("Stopped following redirects from {url} after {max_hops} hops at {current}");
    current
}
