//! Builder walk-through: HTTP requests, pizzas and the telescoping anti-pattern.
//!
//! Usage: `cargo run --bin builder_demo [-- <config.toml>]`

use anyhow::{Context, Result};
use design_patterns_course::{demos, logging, CourseConfig};

fn main() -> Result<()> {
    let config = CourseConfig::from_args().context("failed to load course config")?;
    logging::init(&config.logging);
    demos::builder_demo()
}
