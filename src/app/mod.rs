//! Console-facing application helpers.
//!
//! This module provides input normalization (URL and domain utilities) and
//! rendering of per-domain verdicts and the final summary.

pub mod output;
pub mod url;

// Re-export public API
pub use output::{
    format_percentage, write_banner, write_domain_header, write_domain_result, write_prompt,
    write_summary,
};
pub use url::{base_url, is_url, normalize_domain};
