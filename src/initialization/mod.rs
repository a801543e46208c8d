//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources a
//! check run needs:
//! - HTTP clients (content client and redirect-tracking client)
//! - DNS resolver
//! - Logger
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;
mod resolver;

// Re-export public API
pub use client::{init_client, init_redirect_client};
pub use logger::init_logger_with;
pub use resolver::init_resolver;
