//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including timeouts, redirect limits, and the score bands used to label
//! a domain.

// Network operation timeouts
/// Per-request timeout in seconds for both the HEAD (redirect resolution)
/// and GET (content fetch) requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// DNS query timeout in seconds
/// Most DNS queries complete in <1s, 3s provides a good buffer while failing fast
pub const DNS_TIMEOUT_SECS: u64 = 3;

/// Default User-Agent string for HTTP requests.
///
/// Some CDNs refuse or challenge obvious tooling user agents, which would
/// skew the comparison between the domain and its IPs. Users can override
/// this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Redirect handling
/// Maximum number of redirect hops to follow
/// Prevents infinite redirect loops and excessive request chains
pub const MAX_REDIRECT_HOPS: usize = 10;

/// HTTP status codes treated as redirects when resolving a redirect chain.
pub const REDIRECT_STATUS_CODES: [u16; 5] = [301, 302, 303, 307, 308];

// Score bands
/// Scores at or above this value mean the domain and one of its IPs serve
/// practically the same content.
pub const NOT_BEHIND_PROXY_THRESHOLD: f64 = 0.99;
/// Scores in `[PROBABLY_NOT_THRESHOLD, NOT_BEHIND_PROXY_THRESHOLD)` are
/// close enough to assume there is probably no proxy in between.
pub const PROBABLY_NOT_THRESHOLD: f64 = 0.70;

/// Numeric score reported for a domain that could not be classified.
pub const UNCLASSIFIABLE_SCORE: f64 = -1.0;
