//! Configuration file loading and flag overrides.
//!
//! ```toml
//! max_turns = 10000
//!
//! [limits]
//! max_paths           = 100000
//! max_selection_steps = 10000000
//! ```
//!
//! Every key is optional; missing keys keep their compiled-in defaults.

use std::path::Path;

use anyhow::{Context, Result};

use af_core::RunConfig;

use crate::Args;

/// Defaults, overlaid with the `--config` file, overlaid with flags.
pub fn resolve(args: &Args) -> Result<RunConfig> {
    let mut config = match &args.config {
        Some(path) => load(path)?,
        None => RunConfig::default(),
    };

    if let Some(n) = args.max_paths {
        config.limits.max_paths = n;
    }
    if let Some(n) = args.max_selection_steps {
        config.limits.max_selection_steps = n;
    }
    if args.max_turns.is_some() {
        config.max_turns = args.max_turns;
    }

    config.validate()?;
    Ok(config)
}

fn load(path: &Path) -> Result<RunConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn parse(text: &str) -> Result<RunConfig> {
    Ok(toml::from_str(text)?)
}
