//! Optional `pipdesk.toml` configuration.
//!
//! A missing file means defaults; a malformed file is a startup error so
//! typos never silently fall back.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use pipdesk_core::query::SortKey;

pub const CONFIG_FILE: &str = "pipdesk.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Simulated feed latency for a manual refresh, in milliseconds.
    pub refresh_latency_ms: u64,
    /// Confidence bound the dashboard starts with, [0, 10].
    pub min_confidence: f64,
    /// Sort key the dashboard starts with.
    pub sort_by: SortKey,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_latency_ms: 1500,
            min_confidence: 0.0,
            sort_by: SortKey::Newest,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config =
            toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))?;
        if !(0.0..=10.0).contains(&config.min_confidence) {
            bail!(
                "min_confidence {} outside [0, 10] in {}",
                config.min_confidence,
                path.display()
            );
        }
        Ok(config)
    }
}
