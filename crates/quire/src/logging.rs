//! File logging via tracing-subscriber
//!
//! The terminal belongs to the TUI, so events only go to a file, and only
//! when one is configured.

use anyhow::{anyhow, Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding `EnvFilter` directives
pub const LOG_ENV: &str = "QUIRE_LOG";

const DEFAULT_FILTER: &str = "quire=info,quire_core=info";

/// Install the global subscriber writing to `path`
pub fn init(path: Option<&Path>, filter: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(filter.unwrap_or(DEFAULT_FILTER))
            .context("Invalid log filter")?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    Ok(())
}
