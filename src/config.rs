//! Configuration management for the snap station
//!
//! Loads station settings from config.toml with environment-variable
//! overrides (SNAP_STATION_* keys). The upload endpoint lives here and
//! is handed to the uploader explicitly; nothing reads process-global
//! state at call time.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Station configuration
#[derive(Debug, Deserialize, Clone)]
pub struct StationConfig {
    /// Folder where the camera drops new captures
    #[serde(default = "default_capture_dir")]
    pub capture_dir: String,

    /// Folder where uploaded captures are archived
    #[serde(default = "default_archive_dir")]
    pub archive_dir: String,

    /// Multipart field name the endpoint expects
    #[serde(default = "default_upload_field")]
    pub upload_field: String,

    /// Remote endpoint receiving uploads; uploads are skipped when unset
    #[serde(default)]
    pub upload_url: Option<String>,
}

fn default_capture_dir() -> String {
    "captures".to_string()
}

fn default_archive_dir() -> String {
    "uploaded".to_string()
}

fn default_upload_field() -> String {
    "image".to_string()
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            capture_dir: default_capture_dir(),
            archive_dir: default_archive_dir(),
            upload_field: default_upload_field(),
            upload_url: None,
        }
    }
}

impl StationConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("SNAP_STATION"))
            .build()?;

        let config: StationConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.capture_dir.is_empty() {
            return Err(ConfigError::Message("capture_dir cannot be empty".into()));
        }

        if self.archive_dir.is_empty() {
            return Err(ConfigError::Message("archive_dir cannot be empty".into()));
        }

        if self.upload_field.is_empty() {
            return Err(ConfigError::Message("upload_field cannot be empty".into()));
        }

        if let Some(url) = &self.upload_url {
            reqwest::Url::parse(url)
                .map_err(|e| ConfigError::Message(format!("invalid upload_url: {}", e)))?;
        }

        Ok(())
    }

    /// Get the capture folder as PathBuf
    pub fn capture_path(&self) -> PathBuf {
        PathBuf::from(&self.capture_dir)
    }

    /// Get the archive folder as PathBuf
    pub fn archive_path(&self) -> PathBuf {
        PathBuf::from(&self.archive_dir)
    }
}
