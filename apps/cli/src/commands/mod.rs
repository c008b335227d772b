//! CLI command implementations.

pub mod mission;
pub mod run;

use anyhow::Context;
use meridian_models::NewMissionDirective;
use std::path::Path;

/// Loads and parses a TOML directive file.
pub fn load_directive(path: &str) -> anyhow::Result<NewMissionDirective> {
    let content = std::fs::read_to_string(Path::new(path))
        .with_context(|| format!("failed to read directive file: {path}"))?;
    toml::from_str(&content).with_context(|| format!("failed to parse directive file: {path}"))
}
