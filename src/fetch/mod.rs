//! HTTP access for the checker.
//!
//! This module provides the two kinds of request a check makes:
//! - HEAD requests, without automatic redirects, to walk a redirect chain
//!   to its final URL (`resolve_redirects`)
//! - GET requests that capture status, headers and body text (`fetch`)
//!
//! Neither aborts a check. A failed redirect lookup just means
//! "no redirect", and a failed fetch is reported as a `FetchError` that the
//! classifier decides how to handle.

mod page;
mod redirects;
mod request;

// Re-export public API
pub use page::Page;
pub use redirects::{is_redirect_status, resolve_location, resolve_redirects};
pub use request::fetch;
