//! SOLID before/after: the bank services split and the OTP channels.
//!
//! Usage: `cargo run --bin solid_demo [-- <config.toml>]`

use anyhow::{Context, Result};
use design_patterns_course::{demos, logging, CourseConfig};

fn main() -> Result<()> {
    let config = CourseConfig::from_args().context("failed to load course config")?;
    logging::init(&config.logging);
    demos::solid_demo()
}
