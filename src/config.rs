//! Configuration file
//!
//! Holds the default view settings layered under whatever the host reports
//! for a view. Lives at `~/.config/vicontext/config.json`; a missing file
//! means defaults. Unrecognized keys are ignored.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::settings::{self, Settings};

const CONFIG_FILE_NAME: &str = "config.json";

/// Errors that can occur while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Settings every view starts with
    pub settings: Settings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings: Settings::new()
                .with(settings::USE_CTRL_KEYS, false)
                .with(settings::ENABLE_CMDLINE_MODE, true),
        }
    }
}

/// Get the config file path (~/.config/vicontext/config.json)
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vicontext")
        .join(CONFIG_FILE_NAME)
}

impl Config {
    /// Load from the default location
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_path())
    }

    /// Load from an explicit file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let json = fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&json)?;
        config.settings.layer_over(&Self::default().settings);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_is_namespaced() {
        let path = config_path();
        assert!(path.ends_with("vicontext/config.json"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"{ "settings": { "vintageous_use_ctrl_keys": true } }"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.settings.get_bool(settings::USE_CTRL_KEYS));
        assert!(config.settings.get_bool(settings::ENABLE_CMDLINE_MODE));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{ "log_capacity": 18446744073709551615 }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
