//! URL classification and normalization utilities.

use log::warn;
use url::{Position, Url};

/// Returns `true` if `s` is a fully formed URL: it parses, and it has both a
/// scheme and a non-empty host.
///
/// Relative references (`/a/b`, `page.html`) and host-less URLs
/// (`mailto:someone@example.com`) are not URLs in this sense.
pub fn is_url(s: &str) -> bool {
    match Url::parse(s) {
        Ok(parsed) => {
            !parsed.scheme().is_empty() && parsed.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// Reduces a URL to `scheme://authority`, dropping path, query and fragment.
///
/// Userinfo and an explicit non-default port are kept, so
/// `https://example.com:8080/x/y?z=1` becomes `https://example.com:8080`.
///
/// # Returns
///
/// `None` if `url` does not parse or has no host.
pub fn base_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed.host_str()?;
    Some(parsed[..Position::BeforePath].to_string())
}

/// Normalizes one user-supplied domain token.
///
/// Users paste full URLs as often as bare names, so a token that is a URL is
/// reduced to its host. The result is lowercased and stripped of a trailing
/// root dot.
///
/// # Returns
///
/// `Some(domain)` if something usable remains, `None` otherwise (a warning is
/// logged).
pub fn normalize_domain(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    let host = if is_url(token) {
        match Url::parse(token).ok().and_then(|u| u.host_str().map(str::to_string)) {
            Some(host) => host,
            None => {
                warn!("Skipping input without a host: {token}");
                return None;
            }
        }
    } else {
        token.to_string()
    };

    let domain = host.trim_end_matches('.').to_lowercase();
    if domain.is_empty() || domain.contains('/') {
        warn!("Skipping invalid domain: {token}");
        return None;
    }
    Some(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_url_accepts_full_urls() {
        assert!(is_url("https://example.com/a"));
        assert!(is_url("http://example.com"));
        assert!(is_url("http://93.184.216.34/index.html"));
        assert!(is_url("https://[2001:db8::1]:8443/"));
    }

    #[test]
    fn test_is_url_rejects_relative_references() {
        assert!(!is_url("/a/b"));
        assert!(!is_url("a/b"));
        assert!(!is_url("index.html"));
        assert!(!is_url("?page=2"));
        assert!(!is_url(""));
    }

    #[test]
    fn test_is_url_rejects_hostless_urls() {
        assert!(!is_url("mailto:someone@example.com"));
        assert!(!is_url("localhost:8080"));
        assert!(!is_url("data:text/plain,hello"));
    }

    #[test]
    fn test_base_url_strips_path_query_fragment() {
        assert_eq!(
            base_url("https://example.com:8080/x/y?z=1"),
            Some("https://example.com:8080".to_string())
        );
        assert_eq!(
            base_url("http://example.com/page/page#frag"),
            Some("http://example.com".to_string())
        );
        assert_eq!(
            base_url("http://example.com"),
            Some("http://example.com".to_string())
        );
    }

    #[test]
    fn test_base_url_keeps_userinfo_and_ipv6() {
        assert_eq!(
            base_url("http://user:pw@example.com/secret"),
            Some("http://user:pw@example.com".to_string())
        );
        assert_eq!(
            base_url("http://[2001:db8::1]:8080/x"),
            Some("http://[2001:db8::1]:8080".to_string())
        );
    }

    #[test]
    fn test_base_url_rejects_non_urls() {
        assert_eq!(base_url("/just/a/path"), None);
        assert_eq!(base_url("mailto:someone@example.com"), None);
    }

    #[test]
    fn test_normalize_domain() {
        assert_eq!(normalize_domain("example.com"), Some("example.com".into()));
        assert_eq!(normalize_domain(" Example.COM. "), Some("example.com".into()));
        assert_eq!(
            normalize_domain("https://www.example.com/some/page?x=1"),
            Some("www.example.com".into())
        );
        assert_eq!(normalize_domain(""), None);
        assert_eq!(normalize_domain("example.com/path"), None);
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_is_url_for_http_hosts(
            scheme in "(http|https)",
            host in "[a-z]{1,20}\\.[a-z]{2,5}",
            path in "(/[a-z0-9]{0,10}){0,3}"
        ) {
            let url = format!("{}://{}{}", scheme, host, path);
            prop_assert!(is_url(&url));
            prop_assert_eq!(base_url(&url), Some(format!("{}://{}", scheme, host)));
        }

        #[test]
        fn test_is_url_false_for_absolute_paths(path in "(/[a-z0-9]{1,10}){1,4}") {
            prop_assert!(!is_url(&path));
            prop_assert_eq!(base_url(&path), None);
        }

        #[test]
        fn test_normalize_domain_idempotent(domain in "[a-zA-Z]{1,15}\\.[a-zA-Z]{2,5}") {
            let once = normalize_domain(&domain);
            prop_assert!(once.is_some());
            let once = once.unwrap();
            prop_assert_eq!(normalize_domain(&once), Some(once.clone()));
        }
    }
}
