//! Configuration management for Hazy
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_BASE_URL, DEFAULT_MAX_DEFINITIONS,
    DEFAULT_REQUEST_TIMEOUT_SECS, LOCAL_CONFIG_FILE_NAME, MAX_DEFINITIONS_LIMIT, MAX_REQUEST_TIMEOUT_SECS,
    SIDEBAR_DEFAULT_WIDTH, SIDEBAR_MAX_WIDTH, SIDEBAR_MIN_WIDTH,
};
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub audio: AudioConfig,
    pub logging: LoggingConfig,
    pub session: SessionConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base address of the vocabulary API, e.g. "http://localhost:8000/api"
    pub base_url: String,
    /// Per-request timeout in seconds (0 = no timeout)
    pub request_timeout_secs: u64,
}

/// Color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Options: "dark", "light"
    pub theme: ThemeName,
    /// Show Vietnamese translations when the dictionary entry has them
    pub show_translations: bool,
    /// Definitions shown per part of speech
    pub max_definitions: usize,
    /// Saved-words column width in columns
    pub sidebar_width: u16,
}

/// Pronunciation playback configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    /// Program used to play audio URLs
    pub player: String,
    /// Arguments passed before the URL
    pub args: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file (the in-app log view is always available)
    pub enabled: bool,
    /// One of: off, error, warn, info, debug, trace
    pub level: String,
    /// Log file path; defaults to the data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Session persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// Where the login token is stored; defaults to the data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_file: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::Dark,
            show_translations: true,
            max_definitions: DEFAULT_MAX_DEFINITIONS,
            sidebar_width: SIDEBAR_DEFAULT_WIDTH,
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            player: "mpv".to_string(),
            args: vec!["--no-video".to_string(), "--really-quiet".to_string()],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl ApiConfig {
    /// Request timeout, or `None` when disabled
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

impl LoggingConfig {
    /// Parsed log level; unknown values fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.level).unwrap_or(LevelFilter::Info)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME);
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate API settings
        let base_url = self.api.base_url.trim();
        match base_url.strip_prefix("https://").or_else(|| base_url.strip_prefix("http://")) {
            None => anyhow::bail!("api.base_url must start with http:// or https://, got '{}'", self.api.base_url),
            Some(rest) if rest.trim_matches('/').is_empty() => {
                anyhow::bail!("api.base_url '{}' is missing a host", self.api.base_url)
            }
            Some(_) => {}
        }

        if self.api.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            anyhow::bail!(
                "request_timeout_secs cannot exceed {} seconds, got {}",
                MAX_REQUEST_TIMEOUT_SECS,
                self.api.request_timeout_secs
            );
        }

        // Validate UI settings
        if self.ui.sidebar_width < SIDEBAR_MIN_WIDTH || self.ui.sidebar_width > SIDEBAR_MAX_WIDTH {
            anyhow::bail!(
                "sidebar_width must be between {} and {} columns, got {}",
                SIDEBAR_MIN_WIDTH,
                SIDEBAR_MAX_WIDTH,
                self.ui.sidebar_width
            );
        }

        if self.ui.max_definitions == 0 || self.ui.max_definitions > MAX_DEFINITIONS_LIMIT {
            anyhow::bail!(
                "max_definitions must be between 1 and {}, got {}",
                MAX_DEFINITIONS_LIMIT,
                self.ui.max_definitions
            );
        }

        // Validate audio player
        if self.audio.enabled && self.audio.player.trim().is_empty() {
            anyhow::bail!("audio.player cannot be empty when audio is enabled");
        }

        // Validate log level
        if LevelFilter::from_str(&self.logging.level).is_err() {
            anyhow::bail!(
                "Invalid logging.level '{}': expected off, error, warn, info, debug or trace",
                self.logging.level
            );
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Hazy Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_FILE_NAME))
    }
}
