//! seg-sieve-report CLI
//!
//! Prints benchmark rows as a markdown table and plots them.

use anyhow::Result;
use clap::Parser;
use seg_sieve_report::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the table, so logs go to stderr
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    cli.run()?;

    Ok(())
}
