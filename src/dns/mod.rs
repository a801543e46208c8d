//! DNS resolution.
//!
//! This module provides async forward resolution using `hickory-resolver`:
//! a domain is mapped to the IPv4 addresses it currently points at, in the
//! order the resolver returned them.

mod resolution;

// Re-export public API
pub use resolution::{dedup_in_order, resolve_ipv4};
