//! Configuration module for emoj
//!
//! Manages the persisted skin tone and lookup settings.
//! Configuration is stored in the user's config directory.

use crate::connectivity::DEFAULT_PROBE_HOST;
use crate::search::{DEFAULT_ENDPOINT, DEFAULT_MAX_RESULTS};
use crate::skin_tone::{MAX_TONE, SkinTone};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EmojConfig {
    /// Skin tone applied to candidates, 0 (none) to 5 (dark)
    pub skin_tone: u8,

    /// Lookup service URL
    pub endpoint: String,

    /// Host resolved by the startup connectivity check
    pub probe_host: String,

    /// Quiet period before a query is looked up, in milliseconds
    pub debounce_ms: u64,

    /// Maximum number of candidates shown
    pub max_results: usize,

    /// Lookup request timeout, in seconds
    pub timeout_secs: u64,
}

impl Default for EmojConfig {
    fn default() -> Self {
        Self {
            skin_tone: 0,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            probe_host: DEFAULT_PROBE_HOST.to_string(),
            debounce_ms: 200,
            max_results: DEFAULT_MAX_RESULTS,
            timeout_secs: 10,
        }
    }
}

impl EmojConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("emoj").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it is missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize::<Self>().map(Self::clamped)
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Same as [`EmojConfig::save`].
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Pull out-of-range values back into range
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.skin_tone = self.skin_tone.min(MAX_TONE);
        self.max_results = self.max_results.max(1);
        self.timeout_secs = self.timeout_secs.max(1);
        self
    }

    /// Set the default skin tone, clamped to the valid range
    pub fn set_skin_tone(&mut self, tone: u8) {
        self.skin_tone = tone.min(MAX_TONE);
    }

    #[must_use]
    pub const fn tone(&self) -> SkinTone {
        SkinTone::from_index(self.skin_tone)
    }

    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
