//! Prototype registry seeded from the configured enemy templates.
//!
//! Usage: `cargo run --bin prototype_demo [-- <config.toml>]`

use anyhow::{Context, Result};
use design_patterns_course::{demos, logging, CourseConfig};

fn main() -> Result<()> {
    let config = CourseConfig::from_args().context("failed to load course config")?;
    logging::init(&config.logging);
    demos::prototype_demo(&config)
}
