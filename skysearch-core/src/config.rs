use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Environment variable that overrides the API key stored on disk.
pub const API_KEY_ENV_VAR: &str = "OPENWEATHERMAP_API_KEY";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// OpenWeatherMap API key. A missing key is not a load error; the
    /// widget surfaces it as a banner message instead.
    pub api_key: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    ///
    /// The `OPENWEATHERMAP_API_KEY` environment variable, when set and
    /// non-empty, takes precedence over the stored key.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        let mut cfg = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;

            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        } else {
            // First run: no config file, return empty.
            Self::default()
        };

        match std::env::var(API_KEY_ENV_VAR) {
            Ok(key) if !key.is_empty() => cfg.api_key = Some(key),
            _ => {}
        }

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skysearch", "skysearch-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Returns the API key, if one is configured.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_api_key() {
        let cfg = Config::default();
        assert!(cfg.api_key().is_none());
    }

    #[test]
    fn set_api_key_round_trips() {
        let mut cfg = Config::default();
        cfg.set_api_key("OPEN_KEY".into());

        assert_eq!(cfg.api_key(), Some("OPEN_KEY"));
    }

    #[test]
    fn config_serializes_to_toml_and_back() {
        let mut cfg = Config::default();
        cfg.set_api_key("abc123".into());

        let toml = toml::to_string_pretty(&cfg).expect("config must serialize");
        assert!(toml.contains("api_key"));

        let parsed: Config = toml::from_str(&toml).expect("config must parse");
        assert_eq!(parsed.api_key(), Some("abc123"));
    }
}
