//! Configuration management
//!
//! Settings live in a TOML file:
//!
//! ```toml
//! [scenarios]
//! dir = "data/scenarios"
//!
//! [propagation]
//! sibling_scope = "existing"
//! batch_mode = "atomic"
//! ```
//!
//! Lookup order: an explicit path, then `./taxostage.toml`, then the user
//! config (`~/.config/taxostage/config.toml`), then built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::TaxonomyOptions;
use crate::paths;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist
    #[error("config file not found: {}", path.display())]
    NotFound {
        /// Requested path
        path: PathBuf,
    },

    /// The config file could not be read
    #[error("failed to read config {}", path.display())]
    Io {
        /// Config path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML of the expected shape
    #[error("invalid config {}", path.display())]
    Parse {
        /// Config path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },
}

/// taxostage configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where scenarios are read from
    #[serde(default)]
    pub scenarios: ScenariosConfig,
    /// Propagation policy
    #[serde(default)]
    pub propagation: TaxonomyOptions,
}

/// Scenario settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenariosConfig {
    /// Directory holding numbered scenario folders
    #[serde(default = "default_scenarios_dir")]
    pub dir: PathBuf,
}

fn default_scenarios_dir() -> PathBuf {
    PathBuf::from(paths::DEFAULT_SCENARIOS_DIR)
}

impl Default for ScenariosConfig {
    fn default() -> Self {
        Self {
            dir: default_scenarios_dir(),
        }
    }
}

impl Config {
    /// Parse config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load config from a file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the config to use.
    ///
    /// An explicit path must exist. Otherwise the first existing file among
    /// the project and user config wins, and defaults are used when there is
    /// none. Returns the config and the file it came from.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        if let Some(path) = explicit {
            return Ok((Self::load_from(path)?, Some(path.to_path_buf())));
        }

        let candidates = std::iter::once(paths::local_config()).chain(paths::global_config());
        for candidate in candidates {
            if candidate.is_file() {
                debug!("using config {}", candidate.display());
                let config = Self::load_from(&candidate)?;
                return Ok((config, Some(candidate)));
            }
        }

        debug!("no config file found, using defaults");
        Ok((Self::default(), None))
    }

    /// Save config to a file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
