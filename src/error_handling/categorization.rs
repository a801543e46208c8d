//! Error categorization.
//!
//! This module maps `reqwest` errors onto `RequestErrorKind` so diagnostics
//! can say what kind of failure happened without dumping the whole error chain.

use super::types::RequestErrorKind;

/// Categorizes a `reqwest::Error` into a `RequestErrorKind`.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `RequestErrorKind` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> RequestErrorKind {
    // Timeouts can also look like connect errors, so check them first
    if error.is_timeout() {
        RequestErrorKind::Timeout
    } else if error.is_builder() {
        RequestErrorKind::Builder
    } else if error.is_redirect() {
        RequestErrorKind::Redirect
    } else if error.is_status() {
        RequestErrorKind::Status
    } else if error.is_connect() {
        RequestErrorKind::Connect
    } else if error.is_request() {
        RequestErrorKind::Request
    } else if error.is_body() {
        RequestErrorKind::Body
    } else if error.is_decode() {
        RequestErrorKind::Decode
    } else {
        RequestErrorKind::Other
    }
}
