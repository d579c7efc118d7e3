//! Backend configuration loaded from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable holding the address to bind the REST server to
pub const BIND_ADDR_VAR: &str = "HOLIDAY_BIND_ADDR";
/// Environment variable holding the directory for `holidays.csv`
pub const DATA_DIR_VAR: &str = "HOLIDAY_DATA_DIR";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub bind_addr: SocketAddr,
    pub data_directory: PathBuf,
}

impl BackendConfig {
    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr_raw = lookup(BIND_ADDR_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr_raw
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("{} is not a valid socket address: {}", BIND_ADDR_VAR, bind_addr_raw))?;

        let data_directory = lookup(DATA_DIR_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_data_directory);

        Ok(Self {
            bind_addr,
            data_directory,
        })
    }

    /// Platform data directory, e.g. `~/.local/share/holiday-calendar` on Linux
    pub fn default_data_directory() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("holiday-calendar")
    }
}
