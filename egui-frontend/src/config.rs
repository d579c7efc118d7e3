//! # Client Configuration
//!
//! Where the holiday backend lives and how long to wait for it. Loaded once at
//! startup and handed to the sync client; nothing in the app reads a global URL.
//!
//! Sources, later ones win:
//! 1. Built-in defaults (`http://localhost:8080`, 10 second timeout)
//! 2. `config.yaml` in the platform config directory
//! 3. The `HOLIDAY_API_URL` environment variable

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::info;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the backend base URL
pub const API_URL_VAR: &str = "HOLIDAY_API_URL";

const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the holiday backend, without the `/holidays` path
    pub base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            request_timeout_secs: 10,
        }
    }
}

impl ClientConfig {
    /// Load from the default config file (if present) and the environment
    pub fn load() -> Result<Self> {
        let config = match Self::config_file_path() {
            Some(path) if path.exists() => {
                info!("Loading configuration from {}", path.display());
                Self::from_file(&path)?
            }
            _ => Self::default(),
        };
        Ok(config.with_env_override(|key| std::env::var(key).ok()))
    }

    /// Location of `config.yaml`, e.g. `~/.config/holidaycalendar/config.yaml` on Linux
    pub fn config_file_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "Holiday Calendar").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml_content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml_str(&yaml_content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml_str(yaml_content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml_content)?)
    }

    /// Apply `HOLIDAY_API_URL` from `lookup` when it is set and non-empty
    pub fn with_env_override<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_VAR).filter(|url| !url.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// `GET`/`POST` endpoint for the holiday collection
    pub fn holidays_url(&self) -> String {
        format!("{}/holidays", self.base_url.trim_end_matches('/'))
    }

    /// `DELETE` endpoint for a single date key
    pub fn holiday_url(&self, date: &str) -> String {
        format!("{}/{}", self.holidays_url(), date)
    }
}
