//! Fetched page data.

use reqwest::header::HeaderMap;

/// A fetched HTTP response: status, headers and body text.
#[derive(Debug, Clone)]
pub struct Page {
    /// URL the response was served from (after any automatic redirects)
    pub url: String,
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
}

impl Page {
    /// Creates a page with no headers, mostly useful for tests and fakes.
    pub fn new(url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}
