//! `AppConfig` struct and TOML read/write.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides `tmdb.api_key`.
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

/// Config file name inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Subdirectory of the user config root.
const APP_DIR: &str = "tmdbkit";

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// TMDB client settings.
    #[serde(default)]
    pub tmdb: TmdbConfig,
}

/// TMDB client configuration.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TmdbConfig {
    /// API key (v3 auth).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Response language (ISO 639-1, optionally with region).
    pub language: String,
    /// Use the HTTPS endpoints.
    pub secure: bool,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            language: String::from(tmdbkit_api::client::DEFAULT_LANGUAGE),
            secure: true,
        }
    }
}

impl TmdbConfig {
    /// Picks the API key, preferring `env_value` over the file.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if neither source has a key.
    pub fn api_key(&self, env_value: Option<String>) -> Result<String> {
        env_value
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                self.api_key
                    .clone()
                    .filter(|key| !key.trim().is_empty())
            })
            .with_context(|| {
                format!("TMDB API key is not set (set {API_KEY_ENV} or tmdb.api_key in config.toml)")
            })
    }
}

impl AppConfig {
    /// Config file location.
    ///
    /// `{dir}/config.toml` when `--dir` is given, otherwise
    /// `$XDG_CONFIG_HOME/tmdbkit/config.toml`, falling back to
    /// `$HOME/.config/tmdbkit/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` is `None` and neither variable is set.
    pub fn path(dir: Option<&Path>) -> Result<PathBuf> {
        Self::path_from(
            dir,
            std::env::var("XDG_CONFIG_HOME").ok(),
            std::env::var("HOME").ok(),
        )
    }

    fn path_from(
        dir: Option<&Path>,
        xdg_config_home: Option<String>,
        home: Option<String>,
    ) -> Result<PathBuf> {
        if let Some(dir) = dir {
            return Ok(dir.join(CONFIG_FILE));
        }
        let root = xdg_config_home
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                home.filter(|value| !value.is_empty())
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .context("cannot locate config directory: set --dir, XDG_CONFIG_HOME or HOME")?;
        Ok(root.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Saves config to a TOML file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config to TOML")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }
}
