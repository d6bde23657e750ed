//! Configuration file management.
//!
//! Reads the optional `.envsafe.toml` from the working directory. Every
//! field can also be given on the command line or through the environment,
//! which take precedence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Settings from `.envsafe.toml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Container file path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<PathBuf>,
    /// Default prefix for `load-env`, `export-env`, and `run`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Merge into the existing store on `load-env` instead of replacing it.
    #[serde(default)]
    pub merge_env: bool,
}

impl Config {
    /// Path to the configuration file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load `.envsafe.toml` from the current directory.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` or `ConfigError::Parse`.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load a configuration file from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` or `ConfigError::Parse`.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Read(e).into()),
        };

        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        debug!(?config, "config loaded");
        Ok(config)
    }

    /// Resolve the store path: explicit value, then config, then default.
    pub fn store_path(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.store.clone())
            .unwrap_or_else(|| PathBuf::from(constants::STORE_FILE))
    }

    /// Resolve the env prefix: explicit value, then config.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingPrefix` when neither is set.
    pub fn prefix(&self, explicit: Option<&str>) -> Result<String> {
        explicit
            .map(str::to_string)
            .or_else(|| self.prefix.clone())
            .ok_or_else(|| ConfigError::MissingPrefix.into())
    }
}
