//! Classifier scenarios against an in-memory transport.

mod helpers;

use std::net::Ipv4Addr;

use helpers::FakeTransport;
use reverse_proxy_check::{classify, ProbeError, Verdict};

#[tokio::test]
async fn test_ip_redirecting_to_domain_short_circuits() {
    let transport = FakeTransport::new()
        .with_dns("example.com", &[[1, 2, 3, 4]])
        .with_page("http://example.com", "X")
        .with_redirect("http://1.2.3.4", "https://www.example.com/")
        .with_page("https://www.example.com/", "completely different");

    let assessment = classify(&transport, "example.com").await.unwrap();

    assert_eq!(assessment.score, 1.0);
    assert_eq!(assessment.short_circuit_ip, Some(Ipv4Addr::new(1, 2, 3, 4)));
    assert_eq!(assessment.best_ip, None);
    assert_eq!(assessment.verdict(), Verdict::NotBehindProxy);
    // The IP's page was never fetched, so no similarity was computed
    assert_eq!(transport.fetched(), vec!["http://example.com"]);
}

#[tokio::test]
async fn test_short_circuit_on_later_ip_wins_over_earlier_scores() {
    let transport = FakeTransport::new()
        .with_dns("example.com", &[[10, 0, 0, 1], [10, 0, 0, 2]])
        .with_page("http://example.com", "origin page")
        .with_page("http://10.0.0.1", "edge error")
        .with_redirect("http://10.0.0.2", "http://example.com/");

    let assessment = classify(&transport, "example.com").await.unwrap();

    assert_eq!(assessment.score, 1.0);
    assert_eq!(assessment.short_circuit_ip, Some(Ipv4Addr::new(10, 0, 0, 2)));
}

#[tokio::test]
async fn test_resolution_failure() {
    let transport = FakeTransport::new();

    let error = classify(&transport, "nope.invalid").await.unwrap_err();

    assert!(matches!(error, ProbeError::Resolution { ref domain, .. } if domain == "nope.invalid"));
    assert_eq!(error.sentinel_score(), -1.0);
    assert!(transport.fetched().is_empty());
    assert!(transport.redirect_lookups().is_empty());
}

#[tokio::test]
async fn test_domain_fetch_failure_skips_ip_probing() {
    let transport = FakeTransport::new().with_dns("example.com", &[[1, 2, 3, 4]]);

    let error = classify(&transport, "example.com").await.unwrap_err();

    match error {
        ProbeError::DomainFetch { url, .. } => assert_eq!(url, "http://example.com"),
        other => panic!("expected a domain fetch failure, got {other:?}"),
    }
    assert_eq!(transport.redirect_lookups(), vec!["http://example.com"]);
}

#[tokio::test]
async fn test_every_ip_failing_is_distinguished_from_resolution_failure() {
    let transport = FakeTransport::new()
        .with_dns("example.com", &[[1, 2, 3, 4], [5, 6, 7, 8]])
        .with_page("http://example.com", "origin page");

    let error = classify(&transport, "example.com").await.unwrap_err();

    assert_eq!(
        error,
        ProbeError::NoIpContent {
            domain: "example.com".to_string(),
            attempted: 2,
        }
    );
    // Same numeric score as a resolution failure, different cause
    assert_eq!(error.sentinel_score(), -1.0);
    assert_eq!(
        transport.fetched(),
        vec!["http://example.com", "http://1.2.3.4", "http://5.6.7.8"]
    );
}

#[tokio::test]
async fn test_failing_ip_is_skipped() {
    let transport = FakeTransport::new()
        .with_dns("example.com", &[[1, 2, 3, 4], [5, 6, 7, 8]])
        .with_page("http://example.com", "origin page")
        .with_page("http://5.6.7.8", "origin page");

    let assessment = classify(&transport, "example.com").await.unwrap();

    assert_eq!(assessment.score, 1.0);
    assert_eq!(assessment.best_ip, Some(Ipv4Addr::new(5, 6, 7, 8)));
    assert_eq!(assessment.short_circuit_ip, None);
}

#[tokio::test]
async fn test_best_ip_is_the_most_similar() {
    // "abcd" vs "abxy" shares 2 of 8 characters: 0.5
    // "abcd" vs "abcy" shares 3 of 4: 0.75
    let transport = FakeTransport::new()
        .with_dns("example.com", &[[1, 1, 1, 1], [2, 2, 2, 2], [3, 3, 3, 3]])
        .with_page("http://example.com", "abcd")
        .with_page("http://1.1.1.1", "abxy")
        .with_page("http://2.2.2.2", "abcy")
        .with_page("http://3.3.3.3", "zzzz");

    let assessment = classify(&transport, "example.com").await.unwrap();

    assert_eq!(assessment.score, 0.75);
    assert_eq!(assessment.best_ip, Some(Ipv4Addr::new(2, 2, 2, 2)));
    assert_eq!(assessment.verdict(), Verdict::ProbablyNotBehindProxy);
}

#[tokio::test]
async fn test_ties_keep_the_first_ip() {
    let transport = FakeTransport::new()
        .with_dns("example.com", &[[1, 1, 1, 1], [2, 2, 2, 2]])
        .with_page("http://example.com", "abcd")
        .with_page("http://1.1.1.1", "abxy")
        .with_page("http://2.2.2.2", "abzz");

    let assessment = classify(&transport, "example.com").await.unwrap();

    assert_eq!(assessment.score, 0.5);
    assert_eq!(assessment.best_ip, Some(Ipv4Addr::new(1, 1, 1, 1)));
    assert_eq!(assessment.verdict(), Verdict::LikelyBehindProxy);
}

#[tokio::test]
async fn test_redirects_are_followed_before_fetching() {
    let transport = FakeTransport::new()
        .with_dns("example.com", &[[1, 2, 3, 4]])
        .with_redirect("http://example.com", "https://example.com/home")
        .with_page("https://example.com/home", "welcome home")
        .with_redirect("http://1.2.3.4", "https://1.2.3.4/default")
        .with_page("https://1.2.3.4/default", "welcome home");

    let assessment = classify(&transport, "example.com").await.unwrap();

    assert_eq!(assessment.score, 1.0);
    assert_eq!(assessment.best_ip, Some(Ipv4Addr::new(1, 2, 3, 4)));
    assert_eq!(
        transport.fetched(),
        vec!["https://example.com/home", "https://1.2.3.4/default"]
    );
}

#[tokio::test]
async fn test_whitespace_differences_do_not_lower_the_score() {
    let transport = FakeTransport::new()
        .with_dns("example.com", &[[1, 2, 3, 4]])
        .with_page("http://example.com", "\n  <html>same</html>\n")
        .with_page("http://1.2.3.4", "<html>same</html>");

    let assessment = classify(&transport, "example.com").await.unwrap();

    assert_eq!(assessment.score, 1.0);
}
