//! Facade: deploy branches through the fail-fast deployment pipeline.
//!
//! Usage: `cargo run --bin facade_demo [-- <config.toml>]`

use anyhow::{Context, Result};
use design_patterns_course::{demos, logging, CourseConfig};

fn main() -> Result<()> {
    let config = CourseConfig::from_args().context("failed to load course config")?;
    logging::init(&config.logging);
    demos::facade_demo(&config)
}
