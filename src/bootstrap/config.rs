//! Configuration loading.
//!
//! `load_config*` only read and parse. `RuntimeConfig::resolve` is the one
//! place that turns absent keys into concrete values.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use sab_app::app_paths::AppPaths;
use sab_app::DEFAULT_POLL_INTERVAL;
use sab_core::config::AppConfig;

/// Load configuration from a TOML file that must exist.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Like [`load_config`], but a missing file means an empty config.
pub fn load_config_or_default(config_path: &Path) -> anyhow::Result<AppConfig> {
    if !config_path.exists() {
        return Ok(AppConfig::default());
    }
    load_config(config_path)
}

/// Concrete values the binary runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub poll_interval: Duration,
    pub settings_path: PathBuf,
    pub logs_dir: Option<PathBuf>,
}

impl RuntimeConfig {
    pub fn resolve(config: &AppConfig, paths: &AppPaths) -> Self {
        let poll_interval = config
            .poll_interval_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_POLL_INTERVAL);
        let settings_path = config
            .settings_path
            .clone()
            .unwrap_or_else(|| paths.settings_path.clone());
        let logs_dir = config
            .file_logging
            .unwrap_or(true)
            .then(|| paths.logs_dir.clone());

        Self {
            poll_interval,
            settings_path,
            logs_dir,
        }
    }
}
