//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `reverse_proxy_check` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Reporting fatal setup errors
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use reverse_proxy_check::initialization::init_logger_with;
use reverse_proxy_check::{run_check, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Unclassifiable domains are part of the normal output, only setup failures exit non-zero
    if let Err(e) = run_check(config).await {
        eprintln!("reverse_proxy_check error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
