//! Runs every pattern demo in course order.
//!
//! Usage: `cargo run --bin patterns [-- <config.toml>]`

use anyhow::{Context, Result};
use colored::Colorize;
use design_patterns_course::{demos, logging, CourseConfig};
use tracing::info;

fn main() -> Result<()> {
    let config = CourseConfig::from_args().context("failed to load course config")?;
    logging::init(&config.logging);
    info!(threads = config.singleton.threads, "running all demos");

    demos::run_all(&config)?;

    println!("\n{}", "All demos completed".green().bold());
    Ok(())
}
