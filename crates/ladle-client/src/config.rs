//! Configuration for the ladle client.
//!
//! Loads `${LADLE_HOME}/config.toml` with sensible defaults. The API base URL
//! can be overridden with the `LADLE_API_URL` environment variable, which
//! takes precedence over the file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Default base URL of the recipe service.
pub const DEFAULT_API_URL: &str = "http://localhost:5001/api";

/// Fixed request timeout. The only timeout in the system.
pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the recipe service, without a trailing slash.
    pub api_url: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_ms: REQUEST_TIMEOUT_MS,
        }
    }
}

impl Config {
    /// Loads configuration from `${LADLE_HOME}/config.toml`, then applies the
    /// `LADLE_API_URL` override. A missing file yields the defaults.
    pub fn load() -> Result<Self, Error> {
        let mut config = Self::load_file(&paths::config_path())?;
        if let Ok(url) = std::env::var("LADLE_API_URL")
            && !url.is_empty()
        {
            config.api_url = url;
        }
        config.api_url = config.api_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    fn load_file(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::storage(format!("failed to read {}: {e}", path.display())))?;
        toml::from_str(&contents)
            .map_err(|e| Error::parse(format!("invalid config {}: {e}", path.display())))
    }

    /// Returns the request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Path resolution for ladle configuration and data.
///
/// LADLE_HOME resolution order:
/// 1. `LADLE_HOME` environment variable (if set)
/// 2. `~/.config/ladle` (default)
pub mod paths {
    use std::path::PathBuf;

    /// Returns the ladle home directory.
    pub fn ladle_home() -> PathBuf {
        if let Ok(home) = std::env::var("LADLE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("ladle"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        ladle_home().join("config.toml")
    }

    /// Returns the path to the persisted credentials file.
    pub fn credentials_path() -> PathBuf {
        ladle_home().join("credentials.json")
    }
}
