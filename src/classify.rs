//! Reverse proxy / CDN classification.
//!
//! A domain is compared against each of its own IPv4 addresses:
//!
//! 1. resolve the domain to its IPv4 addresses,
//! 2. fetch `http://{domain}` (after following its redirects),
//! 3. for every IP, in resolution order, follow the redirects of
//!    `http://{ip}`. If the chain ends on a URL mentioning the domain, the
//!    IP serves the domain itself and the check stops with a score of `1.0`.
//!    Otherwise the IP's page is fetched and compared with the domain's page,
//! 4. the best similarity over all IPs is the score.
//!
//! A CDN or reverse proxy usually answers direct-IP requests with an edge
//! error page or a different site, so a low score hints at one.

use std::net::Ipv4Addr;
use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;
use log::{debug, info};

use crate::config::{NOT_BEHIND_PROXY_THRESHOLD, PROBABLY_NOT_THRESHOLD};
use crate::dns;
use crate::error_handling::{FetchError, ProbeError};
use crate::fetch::{self, Page};
use crate::similarity::similarity;

/// The network operations a classification needs.
///
/// `NetworkTransport` is the real implementation; tests substitute
/// in-memory fakes.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Resolves `domain` to its IPv4 addresses, in resolution order.
    async fn resolve_ipv4(&self, domain: &str) -> Result<Vec<Ipv4Addr>, ProbeError>;

    /// Follows the redirect chain of `url` and returns the final URL.
    /// Never fails: on any problem the last URL reached is returned.
    async fn resolve_redirects(&self, url: &str) -> String;

    /// Fetches `url` with a GET request.
    async fn fetch(&self, url: &str) -> Result<Page, FetchError>;
}

/// `Transport` over real DNS and HTTP.
#[derive(Clone)]
pub struct NetworkTransport {
    resolver: Arc<TokioAsyncResolver>,
    client: Arc<reqwest::Client>,
    redirect_client: Arc<reqwest::Client>,
    max_redirect_hops: usize,
}

impl NetworkTransport {
    /// Creates a transport from initialized resources.
    ///
    /// `redirect_client` must have automatic redirects disabled (see
    /// `initialization::init_redirect_client`).
    pub fn new(
        resolver: Arc<TokioAsyncResolver>,
        client: Arc<reqwest::Client>,
        redirect_client: Arc<reqwest::Client>,
        max_redirect_hops: usize,
    ) -> Self {
        Self {
            resolver,
            client,
            redirect_client,
            max_redirect_hops,
        }
    }
}

#[async_trait]
impl Transport for NetworkTransport {
    async fn resolve_ipv4(&self, domain: &str) -> Result<Vec<Ipv4Addr>, ProbeError> {
        dns::resolve_ipv4(domain, &self.resolver).await
    }

    async fn resolve_redirects(&self, url: &str) -> String {
        fetch::resolve_redirects(url, self.max_redirect_hops, &self.redirect_client).await
    }

    async fn fetch(&self, url: &str) -> Result<Page, FetchError> {
        fetch::fetch(url, &self.client).await
    }
}

/// Outcome of a successful classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    /// Best similarity in `[0.0, 1.0]`; `1.0` when an IP redirected back to the domain.
    pub score: f64,
    /// IP whose content was most similar, if any IP content was compared.
    pub best_ip: Option<Ipv4Addr>,
    /// IP whose redirect chain led back to the domain, ending the check early.
    pub short_circuit_ip: Option<Ipv4Addr>,
}

impl Assessment {
    pub fn verdict(&self) -> Verdict {
        Verdict::from_score(self.score)
    }
}

/// Label for a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The sentinel score: resolution or fetch failure.
    Unclassifiable,
    /// Score `>= 0.99`.
    NotBehindProxy,
    /// Score in `[0.70, 0.99)`.
    ProbablyNotBehindProxy,
    /// Score `< 0.70`.
    LikelyBehindProxy,
}

impl Verdict {
    /// Maps a score onto its band. Negative scores and `NaN` are unclassifiable.
    pub fn from_score(score: f64) -> Self {
        if score.is_nan() || score < 0.0 {
            Verdict::Unclassifiable
        } else if score >= NOT_BEHIND_PROXY_THRESHOLD {
            Verdict::NotBehindProxy
        } else if score >= PROBABLY_NOT_THRESHOLD {
            Verdict::ProbablyNotBehindProxy
        } else {
            Verdict::LikelyBehindProxy
        }
    }

    /// Whether the domain counts as using a CDN / reverse proxy in the summary.
    /// `None` for unclassifiable domains, which belong to neither list.
    pub fn uses_proxy(self) -> Option<bool> {
        match self {
            Verdict::Unclassifiable => None,
            Verdict::NotBehindProxy | Verdict::ProbablyNotBehindProxy => Some(false),
            Verdict::LikelyBehindProxy => Some(true),
        }
    }
}

/// Odds, in percent with two decimals, that a domain with this score uses a
/// reverse proxy: `round((1 - score) * 10000) / 100`, rounding half to even.
pub fn reverse_proxy_odds(score: f64) -> f64 {
    ((1.0 - score) * 10000.0).round_ties_even() / 100.0
}

/// Classifies `domain`.
///
/// # Errors
///
/// - `ProbeError::Resolution` if the domain has no resolvable IPv4 address,
/// - `ProbeError::DomainFetch` if the domain's own page cannot be fetched,
/// - `ProbeError::NoIpContent` if no IP produced content to compare and none
///   redirected back to the domain.
pub async fn classify<T>(transport: &T, domain: &str) -> Result<Assessment, ProbeError>
where
    T: Transport + ?Sized,
{
    let ips = transport.resolve_ipv4(domain).await?;

    let domain_url = format!("http://{domain}");
    let resolved_domain_url = transport.resolve_redirects(&domain_url).await;
    let domain_page = transport
        .fetch(&resolved_domain_url)
        .await
        .map_err(|source| ProbeError::DomainFetch {
            url: resolved_domain_url.clone(),
            source,
        })?;

    let mut best: Option<(Ipv4Addr, f64)> = None;
    for &ip in &ips {
        let ip_url = format!("http://{ip}");
        let resolved_ip_url = transport.resolve_redirects(&ip_url).await;

        if resolved_ip_url.contains(domain) {
            info!("{ip_url} redirects to {resolved_ip_url}, which names {domain}");
            return Ok(Assessment {
                score: 1.0,
                best_ip: None,
                short_circuit_ip: Some(ip),
            });
        }

        let ip_page = match transport.fetch(&resolved_ip_url).await {
            Ok(page) => page,
            Err(e) => {
                debug!("Skipping {ip} for {domain}: {e}");
                continue;
            }
        };

        let score = similarity(&domain_page.body, &ip_page.body);
        debug!("Similarity between {domain} and {ip}: {score:.4}");
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((ip, score));
        }
    }

    match best {
        Some((ip, score)) => Ok(Assessment {
            score,
            best_ip: Some(ip),
            short_circuit_ip: None,
        }),
        None => Err(ProbeError::NoIpContent {
            domain: domain.to_string(),
            attempted: ips.len(),
        }),
    }
}
