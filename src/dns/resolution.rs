//! IPv4 address resolution.

use std::net::{IpAddr, Ipv4Addr};

use hickory_resolver::TokioAsyncResolver;
use log::{debug, error};

use crate::error_handling::ProbeError;

/// Resolves a domain to all of its IPv4 addresses.
///
/// # Arguments
///
/// * `domain` - The bare hostname to resolve
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// The IPv4 addresses in resolution order, without duplicates.
///
/// # Errors
///
/// Returns `ProbeError::Resolution` if the lookup fails (NXDOMAIN, timeout,
/// network failure) or yields no IPv4 address. The failure is also logged,
/// naming the domain and the cause.
pub async fn resolve_ipv4(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<Ipv4Addr>, ProbeError> {
    let response = match resolver.lookup_ip(domain).await {
        Ok(response) => response,
        Err(e) => {
            error!("Failed to resolve {domain}: {e}");
            return Err(ProbeError::Resolution {
                domain: domain.to_string(),
                reason: e.to_string(),
            });
        }
    };

    let ips = dedup_in_order(response.iter().filter_map(|ip| match ip {
        IpAddr::V4(v4) => Some(v4),
        IpAddr::V6(_) => None,
    }));

    if ips.is_empty() {
        error!("Failed to resolve {domain}: no IPv4 addresses found");
        return Err(ProbeError::Resolution {
            domain: domain.to_string(),
            reason: "no IPv4 addresses found".to_string(),
        });
    }

    debug!("{domain} resolved to {ips:?}");
    Ok(ips)
}

/// Collects addresses, dropping repeats but keeping first-seen order.
pub fn dedup_in_order(ips: impl IntoIterator<Item = Ipv4Addr>) -> Vec<Ipv4Addr> {
    let mut unique: Vec<Ipv4Addr> = Vec::new();
    for ip in ips {
        if !unique.contains(&ip) {
            unique.push(ip);
        }
    }
    unique
}
