//! Singleton strategies, the first-access race and the attack matrix.
//!
//! Usage: `cargo run --bin singleton_demo [-- <config.toml>]`

use anyhow::{Context, Result};
use design_patterns_course::{demos, logging, CourseConfig};

fn main() -> Result<()> {
    let config = CourseConfig::from_args().context("failed to load course config")?;
    logging::init(&config.logging);
    demos::singleton_demo(&config)
}
