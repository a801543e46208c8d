//! Rendering of verdicts and the run summary.
//!
//! Everything here writes to a caller-supplied `std::io::Write`, which is
//! stdout for the binary and a byte buffer in tests.

use std::io::{self, Write};

use crate::classify::{reverse_proxy_odds, Verdict};
use crate::error_handling::ProbeError;
use crate::runner::{DomainResult, RunSummary};

pub const BANNER: &str = "=== REVERSE PROXY CHECKER ===";
pub const PROMPT: &str = "Enter target domain(s), separated by spaces:";

/// Formats a percentage the way a float prints in most scripting
/// languages: whole numbers keep one decimal (`5.0`), others print in
/// their shortest form (`12.34`).
pub fn format_percentage(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{BANNER}")
}

pub fn write_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{PROMPT}")?;
    out.flush()
}

pub fn write_domain_header<W: Write>(out: &mut W, domain: &str) -> io::Result<()> {
    writeln!(out, "=== {domain} ===")?;
    out.flush()
}

fn failure_line(error: &ProbeError) -> &'static str {
    match error {
        ProbeError::Resolution { .. } => "FAILED TO RESOLVE DOMAIN",
        ProbeError::DomainFetch { .. } => "FAILED TO FETCH DOMAIN CONTENT",
        ProbeError::NoIpContent { .. } => "FAILED TO FETCH CONTENT FROM ANY RESOLVED IP",
    }
}

/// Writes the verdict block for one domain (everything after its header),
/// followed by a blank line.
pub fn write_domain_result<W: Write>(out: &mut W, result: &DomainResult) -> io::Result<()> {
    let assessment = match &result.outcome {
        Ok(assessment) => assessment,
        Err(error) => {
            writeln!(out, "{}", failure_line(error))?;
            return writeln!(out);
        }
    };

    if let Some(ip) = assessment.best_ip {
        writeln!(out, "IP with greatest similarity: {ip}")?;
    }

    let verdict = assessment.verdict();
    debug_assert_ne!(
        verdict,
        Verdict::Unclassifiable,
        "a successful assessment must carry a score in [0, 1]"
    );
    writeln!(out, "{}", verdict_line(verdict))?;
    if verdict != Verdict::NotBehindProxy {
        writeln!(
            out,
            "ODDS OF USING A REVERSE PROXY/CDN: {}%",
            format_percentage(reverse_proxy_odds(assessment.score))
        )?;
    }
    writeln!(out)
}

fn verdict_line(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::NotBehindProxy => "NOT BEHIND REVERSE PROXY OR CDN",
        Verdict::ProbablyNotBehindProxy => "PROBABLY NOT BEHIND REVERSE PROXY OR CDN",
        Verdict::LikelyBehindProxy => "MOST LIKELY BEHIND REVERSE PROXY OR CDN",
        Verdict::Unclassifiable => "UNABLE TO CLASSIFY DOMAIN",
    }
}

fn write_bucket<W: Write>(out: &mut W, domains: &[String]) -> io::Result<()> {
    if domains.is_empty() {
        return writeln!(out, "NONE");
    }
    for domain in domains {
        writeln!(out, " - {domain}")?;
    }
    Ok(())
}

/// Writes the two-section summary. An empty section prints `NONE`.
pub fn write_summary<W: Write>(out: &mut W, summary: &RunSummary) -> io::Result<()> {
    writeln!(out, "=== SUMMARY ===")?;
    writeln!(
        out,
        "The following domains are NOT using CDNs or reverse proxies:"
    )?;
    write_bucket(out, &summary.without_proxy)?;
    writeln!(out, "And the following domains are:")?;
    write_bucket(out, &summary.with_proxy)?;
    out.flush()
}
