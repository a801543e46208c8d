//! Runs the classifier over a list of domains.
//!
//! Domains are processed one at a time in input order. Each domain's block
//! is written as soon as it is known; the bucketed result of the whole run
//! is returned so callers decide what to do with it.

use std::io::{self, Write};

use log::info;

use crate::app::output::{write_domain_header, write_domain_result};
use crate::app::url::normalize_domain;
use crate::classify::{classify, Assessment, Transport, Verdict};
use crate::error_handling::ProbeError;

/// Classification of a single domain.
#[derive(Debug, Clone)]
pub struct DomainResult {
    pub domain: String,
    pub outcome: Result<Assessment, ProbeError>,
}

impl DomainResult {
    /// The numeric score, `-1.0` for failures.
    pub fn score(&self) -> f64 {
        match &self.outcome {
            Ok(assessment) => assessment.score,
            Err(error) => error.sentinel_score(),
        }
    }

    pub fn verdict(&self) -> Verdict {
        match &self.outcome {
            Ok(assessment) => assessment.verdict(),
            Err(_) => Verdict::Unclassifiable,
        }
    }
}

/// Results of a run, in input order.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Every domain processed, failures included
    pub results: Vec<DomainResult>,
    /// Domains that are not (or probably not) behind a reverse proxy / CDN
    pub without_proxy: Vec<String>,
    /// Domains that most likely are
    pub with_proxy: Vec<String>,
}

impl RunSummary {
    /// Number of domains that could not be classified.
    pub fn failed(&self) -> usize {
        self.results
            .iter()
            .filter(|result| result.outcome.is_err())
            .count()
    }
}

/// Splits one line of input into normalized domains, skipping unusable tokens.
pub fn read_domains(line: &str) -> Vec<String> {
    line.split_whitespace().filter_map(normalize_domain).collect()
}

/// Classifies every domain and writes a block per domain to `out`.
///
/// Failures are reported in their block and recorded in
/// `RunSummary::results`, but land in neither bucket. One domain failing
/// never stops the others from being checked.
///
/// # Errors
///
/// Only errors writing to `out` are returned.
pub async fn check_domains<T, W>(
    transport: &T,
    domains: &[String],
    out: &mut W,
) -> io::Result<RunSummary>
where
    T: Transport + ?Sized,
    W: Write,
{
    let mut summary = RunSummary::default();

    for domain in domains {
        write_domain_header(out, domain)?;

        let result = DomainResult {
            domain: domain.clone(),
            outcome: classify(transport, domain).await,
        };
        write_domain_result(out, &result)?;

        info!(
            "{domain}: {:?} (score {:.4})",
            result.verdict(),
            result.score()
        );
        match result.verdict().uses_proxy() {
            Some(true) => summary.with_proxy.push(domain.clone()),
            Some(false) => summary.without_proxy.push(domain.clone()),
            None => {}
        }
        summary.results.push(result);
    }

    Ok(summary)
}
