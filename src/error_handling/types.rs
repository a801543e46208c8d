//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::{Display, EnumIter};
use thiserror::Error;

use crate::config::UNCLASSIFIABLE_SCORE;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Coarse category of a failed HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum RequestErrorKind {
    Builder,
    Redirect,
    Status,
    Timeout,
    Request,
    Connect,
    Body,
    Decode,
    Other,
}

/// A GET request that produced no usable response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request itself failed (DNS, connect, TLS, timeout, ...).
    #[error("Request to {url} failed ({kind}): {message}")]
    Request {
        url: String,
        kind: RequestErrorKind,
        message: String,
    },

    /// Headers arrived but the body could not be read as text.
    #[error("Failed to read body from {url}: {message}")]
    Body { url: String, message: String },
}

impl FetchError {
    /// The URL the failed request was sent to.
    pub fn url(&self) -> &str {
        match self {
            FetchError::Request { url, .. } | FetchError::Body { url, .. } => url,
        }
    }
}

/// Why a domain could not be classified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The lookup failed or returned no IPv4 address.
    #[error("Failed to resolve {domain}: {reason}")]
    Resolution { domain: String, reason: String },

    /// The page served under the domain name could not be fetched.
    #[error("Failed to fetch domain content from {url}: {source}")]
    DomainFetch {
        url: String,
        #[source]
        source: FetchError,
    },

    /// None of the resolved IPs returned content and none redirected back
    /// to the domain.
    #[error("None of the {attempted} resolved IP(s) of {domain} returned content")]
    NoIpContent { domain: String, attempted: usize },
}

impl ProbeError {
    /// The numeric score reported for an unclassifiable domain (`-1.0`).
    pub fn sentinel_score(&self) -> f64 {
        UNCLASSIFIABLE_SCORE
    }
}
