//! Configuration management for Dontcite CLI
//!
//! Stores the Dontpad page path and API base URL in
//! ~/.config/dontcite/config.toml

use anyhow::{Context, Result};
use dontcite::{CiteError, PagePath, PathProvider, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "dontcite";
const CONFIG_FILE: &str = "config.toml";

pub const PATH_ENV: &str = "DONTPAD_PATH";
pub const BASE_URL_ENV: &str = "DONTPAD_BASE_URL";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dontpad_path: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dontpad_path: None,
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from the default location, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {:?}", dir))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Store a page path in its normalised form
    pub fn set_path(&mut self, raw: &str) -> Result<PagePath, CiteError> {
        let path = PagePath::parse(raw)?;
        self.dontpad_path = Some(path.as_string());
        Ok(path)
    }

    /// Forget the stored page path
    pub fn clear_path(&mut self) -> bool {
        self.dontpad_path.take().is_some()
    }

    /// Base URL, with the environment taking precedence over the file
    pub fn effective_base_url(&self) -> String {
        std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| self.base_url.clone())
    }
}

/// Where the active page path came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    Flag,
    Environment,
    ConfigFile,
}

impl std::fmt::Display for PathSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSource::Flag => write!(f, "--path flag"),
            PathSource::Environment => write!(f, "{} environment variable", PATH_ENV),
            PathSource::ConfigFile => write!(f, "config file"),
        }
    }
}

/// Page path resolved in layers: flag, then environment, then config file
#[derive(Debug, Clone, Default)]
pub struct LayeredPath {
    flag: Option<String>,
    env: Option<String>,
    stored: Option<String>,
}

impl LayeredPath {
    pub fn new(flag: Option<String>, env: Option<String>, stored: Option<String>) -> Self {
        Self { flag, env, stored }
    }

    /// Layers taken from the process environment and the loaded config
    pub fn from_env(flag: Option<String>, config: &Config) -> Self {
        Self::new(
            flag,
            std::env::var(PATH_ENV).ok(),
            config.dontpad_path.clone(),
        )
    }

    /// The first non-blank layer with its source
    pub fn active(&self) -> Option<(&str, PathSource)> {
        [
            (self.flag.as_deref(), PathSource::Flag),
            (self.env.as_deref(), PathSource::Environment),
            (self.stored.as_deref(), PathSource::ConfigFile),
        ]
        .into_iter()
        .find_map(|(value, source)| {
            value
                .filter(|v| !v.trim().is_empty())
                .map(|v| (v, source))
        })
    }
}

impl PathProvider for LayeredPath {
    fn page_path(&self) -> Result<PagePath, CiteError> {
        let (raw, _) = self.active().ok_or(CiteError::MissingPath)?;
        PagePath::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set_path("/reading/list/").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.dontpad_path.as_deref(), Some("reading/list"));
        assert_eq!(loaded.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_base_url_defaults_when_absent_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "dontpad_path = \"notes\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.dontpad_path.as_deref(), Some("notes"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_set_path_rejects_blank() {
        let mut config = Config::default();
        assert_eq!(config.set_path("  "), Err(CiteError::MissingPath));
        assert!(config.dontpad_path.is_none());
    }

    #[test]
    fn test_clear_path() {
        let mut config = Config::default();
        config.set_path("notes").unwrap();
        assert!(config.clear_path());
        assert!(!config.clear_path());
    }

    #[test]
    fn test_layer_precedence() {
        let layers = LayeredPath::new(
            Some("from-flag".into()),
            Some("from-env".into()),
            Some("from-file".into()),
        );
        assert_eq!(layers.active(), Some(("from-flag", PathSource::Flag)));

        let layers = LayeredPath::new(None, Some("from-env".into()), Some("from-file".into()));
        assert_eq!(layers.active(), Some(("from-env", PathSource::Environment)));

        let layers = LayeredPath::new(Some(" ".into()), None, Some("from-file".into()));
        assert_eq!(layers.active(), Some(("from-file", PathSource::ConfigFile)));
    }

    #[test]
    fn test_no_layers_is_missing_path() {
        let layers = LayeredPath::default();
        assert_eq!(layers.page_path(), Err(CiteError::MissingPath));
    }
}
