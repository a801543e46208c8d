//! GET requests.

use log::{debug, error};

use crate::error_handling::{categorize_reqwest_error, FetchError};
use crate::fetch::Page;

/// Fetches `url` with a GET request and returns status, headers and body.
///
/// Any HTTP status counts as a response; a 404 or 503 page is still content
/// that can be compared.
///
/// # Errors
///
/// Returns `FetchError::Request` if the request fails at the transport level
/// (connect, TLS, timeout, ...), or `FetchError::Body` if the body cannot be
/// read. Both are logged before returning.
pub async fn fetch(url: &str, client: &reqwest::Client) -> Result<Page, FetchError> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            let kind = categorize_reqwest_error(&e);
            error!("Request to {url} failed ({kind}): {e}");
            return Err(FetchError::Request {
                url: url.to_string(),
                kind,
                message: e.to_string(),
            });
        }
    };

    let status = response.status().as_u16();
    let final_url = response.url().to_string();
    let headers = response.headers().clone();

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            error!("Failed to read body from {url}: {e}");
            return Err(FetchError::Body {
                url: url.to_string(),
                message: e.to_string(),
            });
        }
    };

    debug!(
        "Fetched {url} (status {status}, {} bytes, served from {final_url})",
        body.len()
    );
    Ok(Page {
        url: final_url,
        status,
        headers,
        body,
    })
}
