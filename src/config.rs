//! Runtime configuration.
//!
//! Resolution order:
//!
//! 1. `.env` in the working directory (loaded with `dotenvy`, never overrides
//!    variables already set)
//! 2. YAML file at `$REPUTE_CONFIG`, else `.repute/config.yaml` if present,
//!    else built-in defaults
//! 3. `$REPUTE_DB` overrides the database path

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::{CatalogError, TagCatalog, TagDefinition};

/// Environment variable naming a YAML config file.
pub const CONFIG_ENV: &str = "REPUTE_CONFIG";
/// Environment variable overriding the database path.
pub const DATABASE_ENV: &str = "REPUTE_DB";

const DEFAULT_ROOT: &str = ".repute";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid YAML for [`Config`].
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },

    /// The configured tag list is unusable.
    #[error("invalid tag catalog: {0}")]
    InvalidCatalog(#[from] CatalogError),
}

/// Settings for the CLI and the live service context.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// `SQLite` database file.
    pub database: PathBuf,
    /// How many comments `comments` shows when no limit is given.
    pub comment_limit: usize,
    /// Tag categories reporters may apply.
    pub tags: Vec<TagDefinition>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Path::new(DEFAULT_ROOT).join("repute.db"),
            comment_limit: 10,
            tags: TagCatalog::default().entries().to_vec(),
        }
    }
}

impl Config {
    /// Loads configuration from `.env`, the process environment, and disk.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env is the normal case.
        let _ = dotenvy::dotenv();
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`] with an injectable environment lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    pub fn load_with(env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match env(CONFIG_ENV) {
            Some(path) => Self::from_path(Path::new(&path))?,
            None => {
                let default_path = Path::new(DEFAULT_ROOT).join("config.yaml");
                if default_path.exists() {
                    Self::from_path(&default_path)?
                } else {
                    Self::default()
                }
            }
        };
        if let Some(database) = env(DATABASE_ENV).filter(|value| !value.trim().is_empty()) {
            config.database = PathBuf::from(database);
        }
        Ok(config)
    }

    /// Reads a YAML config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Parse`].
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        serde_yaml::from_str(&contents)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Builds the tag catalog from the configured categories.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCatalog`] for empty or duplicate lists.
    pub fn catalog(&self) -> Result<TagCatalog, ConfigError> {
        Ok(TagCatalog::new(self.tags.clone())?)
    }
}
