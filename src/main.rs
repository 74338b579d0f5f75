use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rx_basics::activity::{Activity, MainActivity};
use rx_basics::config::{Cli, DemoConfig};
use rx_basics::output::Stdout;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the demo output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DemoConfig::try_from(Cli::parse()).context("invalid command line")?;

    let mut activity = MainActivity::new(config, Arc::new(Stdout));
    activity.on_create();
    activity
        .wait_for_ticks()
        .await
        .context("interval demo did not finish")?;
    activity.on_destroy();

    info!("all demos finished");
    Ok(())
}
