//! Binary crate for the `skysearch` command-line weather widget.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration and the widget loop
//! - Human-friendly, themed output formatting

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod render;
mod widget;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so they never mix into the widget output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
