// Shared test helpers: an in-memory `Transport` for classifier and runner tests.
//
// DNS answers, redirect targets and page bodies are all configured up front;
// every fetch is recorded so tests can assert which URLs were (not) requested.

use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Mutex;

use async_trait::async_trait;
use reverse_proxy_check::error_handling::RequestErrorKind;
use reverse_proxy_check::fetch::Page;
use reverse_proxy_check::{FetchError, ProbeError, Transport};

#[derive(Default)]
pub struct FakeTransport {
    dns: HashMap<String, Vec<Ipv4Addr>>,
    redirects: HashMap<String, String>,
    pages: HashMap<String, String>,
    fetched: Mutex<Vec<String>>,
    redirect_lookups: Mutex<Vec<String>>,
}

#[allow(dead_code)] // Not every test file uses every helper
impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `domain` resolve to `ips` (domains without an entry fail to resolve).
    pub fn with_dns(mut self, domain: &str, ips: &[[u8; 4]]) -> Self {
        self.dns
            .insert(domain.to_string(), ips.iter().map(|&o| Ipv4Addr::from(o)).collect());
        self
    }

    /// Makes the redirect chain of `from` end at `to`.
    pub fn with_redirect(mut self, from: &str, to: &str) -> Self {
        self.redirects.insert(from.to_string(), to.to_string());
        self
    }

    /// Serves `body` at `url` (URLs without a page fail to fetch).
    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    pub fn redirect_lookups(&self) -> Vec<String> {
        self.redirect_lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn resolve_ipv4(&self, domain: &str) -> Result<Vec<Ipv4Addr>, ProbeError> {
        self.dns
            .get(domain)
            .cloned()
            .ok_or_else(|| ProbeError::Resolution {
                domain: domain.to_string(),
                reason: "NXDOMAIN".to_string(),
            })
    }

    async fn resolve_redirects(&self, url: &str) -> String {
        self.redirect_lookups.lock().unwrap().push(url.to_string());
        self.redirects
            .get(url)
            .cloned()
            .unwrap_or_else(|| url.to_string())
    }

    async fn fetch(&self, url: &str) -> Result<Page, FetchError> {
        self.fetched.lock().unwrap().push(url.to_string());
        match self.pages.get(url) {
            Some(body) => Ok(Page::new(url, 200, body.clone())),
            None => Err(FetchError::Request {
                url: url.to_string(),
                kind: RequestErrorKind::Connect,
                message: "connection refused".to_string(),
            }),
        }
    }
}
