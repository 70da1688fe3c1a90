// src/config/mod.rs
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use log::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/fib_pivots.toml";
pub const CONFIG_PATH_ENV: &str = "FIB_PIVOTS_CONFIG";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Fixed decimal places for text and table output
    pub precision: Option<usize>,
}

impl Config {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse config file")
    }

    /// Load from a TOML file, falling back to defaults when it does not exist.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Config file not found at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&contents)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Pick the config path: explicit flag, then `FIB_PIVOTS_CONFIG`, then the
/// default location.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
