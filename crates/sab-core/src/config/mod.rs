//! # Pure Data Module - Data Transfer Objects Only
//!
//! Maps the optional `config.toml` onto [`AppConfig`]. No validation and no
//! default values here: an absent key stays `None` and the bootstrap layer
//! decides what that means.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// `[clipboard] poll_interval_ms`
    pub poll_interval_ms: Option<u64>,

    /// `[storage] settings_path`
    pub settings_path: Option<PathBuf>,

    /// `[logging] file_logging`
    pub file_logging: Option<bool>,
}

impl AppConfig {
    /// Create AppConfig from a parsed TOML value.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            poll_interval_ms: toml_value
                .get("clipboard")
                .and_then(|c| c.get("poll_interval_ms"))
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64),
            settings_path: toml_value
                .get("storage")
                .and_then(|s| s.get("settings_path"))
                .and_then(|v| v.as_str())
                .map(PathBuf::from),
            file_logging: toml_value
                .get("logging")
                .and_then(|l| l.get("file_logging"))
                .and_then(|v| v.as_bool()),
        })
    }

    /// Parse from TOML source text.
    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        let value: toml::Value = toml::from_str(source)?;
        Self::from_toml(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_known_keys() {
        let config = AppConfig::from_toml_str(
            r#"
            [clipboard]
            poll_interval_ms = 250

            [storage]
            settings_path = "/tmp/sab/settings.json"

            [logging]
            file_logging = false
            "#,
        )
        .unwrap();

        assert_eq!(config.poll_interval_ms, Some(250));
        assert_eq!(
            config.settings_path,
            Some(PathBuf::from("/tmp/sab/settings.json"))
        );
        assert_eq!(config.file_logging, Some(false));
    }

    #[test]
    fn missing_keys_stay_empty() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(AppConfig::from_toml_str("[clipboard").is_err());
    }
}
