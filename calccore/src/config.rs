//! Settings for the calculator window
//!
//! Read from `config.json` in the platform config directory. Missing
//! files mean defaults; a broken file is reported and ignored.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "calcpad";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Longest entry, in characters, that digit presses may produce.
    pub max_entry_len: usize,
    pub entry_font_size: f32,
    /// The entry font shrinks to fit the display but never below this.
    pub min_entry_font_size: f32,
    pub window_width: f32,
    pub window_height: f32,
    /// Display font file. Standard locations are searched when unset.
    pub font_path: Option<PathBuf>,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            max_entry_len: 16,
            entry_font_size: 32.0,
            min_entry_font_size: 12.0,
            window_width: 300.0,
            window_height: 420.0,
            font_path: None,
        }
    }
}

impl CalcConfig {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load from [`config_path`], falling back to defaults.
    pub fn load_or_default() -> Self {
        Self::load_from_or_default(&config_path())
    }

    fn load_from_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Err(ConfigError::NotFound(_)) => Self::default(),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "ignoring unreadable config");
                Self::default()
            }
        }
    }
}

/// Config directory for the calculator
pub fn config_dir() -> PathBuf {
    directories::ProjectDirs::from("co", "slowcomputer", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("calccore-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("saved.json");
        let config = CalcConfig {
            max_entry_len: 10,
            font_path: Some(PathBuf::from("/tmp/Rubik-Regular.ttf")),
            ..CalcConfig::default()
        };
        config.save(&path).unwrap();
        assert_eq!(CalcConfig::load(&path).unwrap(), config);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let path = temp_path("partial.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{ "max_entry_len": 8 }"#).unwrap();

        let config = CalcConfig::load(&path).unwrap();
        assert_eq!(config.max_entry_len, 8);
        assert_eq!(config.entry_font_size, 32.0);
        assert_eq!(config.font_path, None);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_and_broken_files() {
        let missing = temp_path("missing.json");
        assert!(matches!(CalcConfig::load(&missing), Err(ConfigError::NotFound(_))));
        assert_eq!(CalcConfig::load_from_or_default(&missing), CalcConfig::default());

        let broken = temp_path("broken.json");
        std::fs::create_dir_all(broken.parent().unwrap()).unwrap();
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(CalcConfig::load(&broken), Err(ConfigError::Json(_))));
        assert_eq!(CalcConfig::load_from_or_default(&broken), CalcConfig::default());
        std::fs::remove_file(&broken).unwrap();
    }

    #[test]
    fn test_config_path_ends_with_file_name() {
        assert!(config_path().ends_with(CONFIG_FILE));
    }
}
