//! Factory Method: one shared `send` over four notification creators.
//!
//! Usage: `cargo run --bin factory_demo [-- <config.toml>]`

use anyhow::{Context, Result};
use design_patterns_course::{demos, logging, CourseConfig};

fn main() -> Result<()> {
    let config = CourseConfig::from_args().context("failed to load course config")?;
    logging::init(&config.logging);
    demos::factory_demo(&config)
}
