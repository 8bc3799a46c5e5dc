use crate::error::{FinderError, Result};
use crate::model::SearchEngine;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub window: WindowConfig,
    pub font: FontConfig,
    pub search: SearchConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Initial window size (in pixels)
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

/// Font configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct FontConfig {
    /// Size of the form font (in points)
    pub font_size: f32,
}

/// Search configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct SearchConfig {
    /// Engine selected at startup: "google", "googol", "startpage", "searx"
    /// or "filepursuit"
    pub default_engine: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            mode: "dark".to_string(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 640.0,
            height: 560.0,
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig { font_size: 15.0 }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            default_engine: SearchEngine::default().key().to_string(),
        }
    }
}

impl SearchConfig {
    /// Engine named by `default_engine`. Unknown keys leave the default engine.
    pub fn engine(&self) -> SearchEngine {
        SearchEngine::from_key(&self.default_engine).unwrap_or_else(|| {
            warn!(
                "Unknown search engine '{}' in config, keeping {}",
                self.default_engine,
                SearchEngine::default().display_name()
            );
            SearchEngine::default()
        })
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "findmethis")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location, or return defaults
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Config::default(),
        }
    }

    /// Load configuration from `path`; a missing or broken file yields defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }
        match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}; using default configuration", e);
                Config::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str::<Config>(&contents)?)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<()> {
        let path = Self::config_path().ok_or(FinderError::NoConfigDir)?;
        if !path.exists() {
            Config::default().save_to(&path)?;
        }
        Ok(())
    }
}
