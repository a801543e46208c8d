//! Error handling.
//!
//! This module provides:
//! - Error type definitions (initialization, fetch, and probe failures)
//! - Categorization of `reqwest` errors into a small set of request error kinds
//!
//! Probe failures are never fatal to a run: the classifier turns them into a
//! `ProbeError` for the domain at hand and the runner moves on to the next one.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{FetchError, InitializationError, ProbeError, RequestErrorKind};
