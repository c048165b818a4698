//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    BACKEND_URL_ENV, CONFIG_DIR_ENV, CONFIG_DIR_NAME, DEFAULT_PLACEHOLDER_IMAGE,
};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl ThemeMode {
    /// Parses a user-supplied mode name (case-insensitive).
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => anyhow::bail!("Invalid theme mode '{other}'. Must be 'auto', 'light', or 'dark'"),
        }
    }

    /// Lowercase name as accepted by [`ThemeMode::parse`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Remote asset configuration for model images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Base URL the catalog's relative image paths are resolved against
    /// (e.g., "https://api.example.com/storage"). Images fall back to the
    /// placeholder when unset.
    #[serde(default)]
    pub backend_url: Option<String>,
    /// Image shown when a model has no image or its image failed to load
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER_IMAGE.to_string()
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            placeholder: default_placeholder(),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/VanPicker/config.toml`
/// - macOS: `~/Library/Application Support/VanPicker/config.toml`
/// - Windows: `%APPDATA%\VanPicker\config.toml`
///
/// The directory can be overridden with the `VANPICK_CONFIG_DIR` environment
/// variable.
///
/// # Validation
///
/// - `backend_url` must use an `http://`, `https://` or `file://` scheme
/// - `placeholder` must not be empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Image asset settings
    #[serde(default)]
    pub assets: AssetConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/VanPicker/`
    /// - macOS: `~/Library/Application Support/VanPicker/`
    /// - Windows: `%APPDATA%\VanPicker\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::info!(path = %config_path.display(), "saved configuration");
        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.assets.backend_url {
            validate_backend_url(url)?;
        }

        if self.assets.placeholder.trim().is_empty() {
            anyhow::bail!("Placeholder image path cannot be empty");
        }

        Ok(())
    }

    /// Sets the asset base URL with validation.
    pub fn set_backend_url(&mut self, url: impl Into<String>) -> Result<()> {
        let url = url.into();
        validate_backend_url(&url)?;
        self.assets.backend_url = Some(url);
        Ok(())
    }

    /// Applies the `VANPICK_BACKEND_URL` environment override, if present.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        match std::env::var(BACKEND_URL_ENV) {
            Ok(url) if !url.is_empty() => self
                .set_backend_url(url)
                .context(format!("Invalid {BACKEND_URL_ENV}")),
            _ => Ok(()),
        }
    }
}

fn validate_backend_url(url: &str) -> Result<()> {
    let has_scheme = ["http://", "https://", "file://"]
        .iter()
        .any(|scheme| url.starts_with(scheme));

    if !has_scheme {
        anyhow::bail!("Backend URL '{url}' must start with http://, https:// or file://");
    }

    Ok(())
}
