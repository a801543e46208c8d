//! reverse_proxy_check library: heuristic reverse proxy / CDN detection
//!
//! A domain that is served straight from its origin returns (nearly) the same
//! page whether it is requested by name or by one of its IP addresses. A domain
//! behind a CDN or reverse proxy usually does not: direct-IP requests hit an
//! edge node that answers with an error page, a default site, or nothing.
//! This library resolves each domain, fetches both kinds of page, scores how
//! similar they are and turns the score into a verdict.
//!
//! # Example
//!
//! ```no_run
//! use reverse_proxy_check::{run_check, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     domains: vec!["example.com".to_string()],
//!     ..Default::default()
//! };
//!
//! let report = run_check(config).await?;
//! println!(
//!     "{} without proxy, {} with proxy, {} failed",
//!     report.summary.without_proxy.len(),
//!     report.summary.with_proxy.len(),
//!     report.summary.failed()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod app;
pub mod classify;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod runner;
pub mod similarity;

// Re-export public API
pub use classify::{classify, Assessment, NetworkTransport, Transport, Verdict};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{FetchError, ProbeError};
pub use run::{run_check, CheckReport};
pub use runner::{check_domains, read_domains, DomainResult, RunSummary};
pub use similarity::similarity;

// Internal run module (wires configuration, network resources and console I/O)
mod run {
    use anyhow::{Context, Result};
    use log::info;
    use tokio::io::{AsyncBufReadExt, BufReader};

    use crate::app::output::{write_banner, write_prompt, write_summary};
    use crate::classify::NetworkTransport;
    use crate::config::Config;
    use crate::initialization::{init_client, init_redirect_client, init_resolver};
    use crate::runner::{check_domains, read_domains, RunSummary};

    /// Results of a check run.
    #[derive(Debug, Clone)]
    pub struct CheckReport {
        /// Per-domain results and the two summary buckets
        pub summary: RunSummary,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Reads the single line of whitespace-separated domains from stdin.
    async fn read_domains_from_stdin() -> Result<Vec<String>> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let line = lines
            .next_line()
            .await
            .context("Failed to read domains from stdin")?
            .unwrap_or_default();
        Ok(read_domains(&line))
    }

    /// Runs a check with the provided configuration.
    ///
    /// Prints the banner, takes the domains from `config.domains` (or prompts
    /// for one line on stdin when there are none), prints a verdict block per
    /// domain and finally the summary, all on stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP clients or the DNS resolver cannot be
    /// initialized, or if stdin/stdout fail. Failures to classify a domain
    /// are not errors; they are part of the report.
    pub async fn run_check(config: Config) -> Result<CheckReport> {
        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let redirect_client =
            init_redirect_client(&config).context("Failed to initialize redirect client")?;
        let resolver = init_resolver().context("Failed to initialize DNS resolver")?;
        let transport =
            NetworkTransport::new(resolver, client, redirect_client, config.max_redirect_hops);

        let mut stdout = std::io::stdout();
        write_banner(&mut stdout)?;

        let domains = if config.domains.is_empty() {
            write_prompt(&mut stdout)?;
            read_domains_from_stdin().await?
        } else {
            config
                .domains
                .iter()
                .flat_map(|entry| read_domains(entry))
                .collect()
        };
        info!("Checking {} domain(s)", domains.len());

        let start_time = std::time::Instant::now();
        let summary = check_domains(&transport, &domains, &mut stdout)
            .await
            .context("Failed to write results")?;
        write_summary(&mut stdout, &summary)?;

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        info!(
            "Checked {} domain(s) in {:.1}s ({} failed)",
            summary.results.len(),
            elapsed_seconds,
            summary.failed()
        );

        Ok(CheckReport {
            summary,
            elapsed_seconds,
        })
    }
}
