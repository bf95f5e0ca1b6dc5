//! # Configuration Persistence
//!
//! User configuration lives in `~/.config/naeilum/config.json` (resolved per
//! platform by the `directories` crate). Missing file or missing keys fall
//! back to defaults; command-line flags override whatever is stored.
//!
//! ```json
//! {
//!   "server_url": "http://127.0.0.1:3000",
//!   "theme": "Catppuccin Mocha"
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL of the Naeilum backend.
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Name of a built-in theme.
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_theme_name() -> String {
    "Catppuccin Mocha".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            theme: default_theme_name(),
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, server_url: Option<String>, theme: Option<String>) -> Self {
        if let Some(url) = server_url {
            self.server_url = url;
        }
        if let Some(theme) = theme {
            self.theme = theme;
        }
        self
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "naeilum")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server_url, "http://127.0.0.1:3000");
        assert_eq!(config.theme, "Catppuccin Mocha");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config: Config = serde_json::from_str(r#"{"theme": "Nord"}"#).expect("deserialize");
        assert_eq!(config.theme, "Nord");
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_save_to_load_from_roundtrip() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("nested").join("config.json");

        let config = Config {
            server_url: "http://naeilum.local:3001".to_string(),
            theme: "Dracula".to_string(),
        };
        config.save_to(&config_path).expect("save_to");
        let loaded = Config::load_from(&config_path).expect("load_from");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let loaded = Config::load_from(&temp_dir.path().join("absent.json")).expect("load_from");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_load_from_invalid_json_fails() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{not json").expect("write");
        let err = Config::load_from(&path).expect_err("should fail");
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_deny_unknown_fields() {
        let result: Result<Config, _> = serde_json::from_str(r#"{"theme": "Nord", "extra": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::default()
            .with_overrides(Some("http://localhost:3005".to_string()), None);
        assert_eq!(config.server_url, "http://localhost:3005");
        assert_eq!(config.theme, "Catppuccin Mocha");
    }
}
