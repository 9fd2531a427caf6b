//! Runtime configuration.
//!
//! Precedence, lowest first: built-in defaults, a YAML file, then the
//! `TODO_STORE_*` environment variables.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "todo-store.yaml";

/// Environment variable overriding [`Config::id_strategy`].
pub const ID_STRATEGY_ENV: &str = "TODO_STORE_ID_STRATEGY";

/// Environment variable overriding [`Config::log_filter`].
pub const LOG_FILTER_ENV: &str = "TODO_STORE_LOG";

/// Errors raised while assembling a [`Config`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for [`Config`].
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        /// File that was being parsed.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },

    /// An environment variable holds an unusable value.
    #[error("Invalid value {value:?} for {var}: expected one of sequential, uuid")]
    InvalidEnv {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
    },
}

/// How the store assigns ids to new todos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Decimal counter per store: `"1"`, `"2"`, ...
    #[default]
    Sequential,
    /// Random UUID v4 strings.
    Uuid,
}

impl FromStr for IdStrategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "uuid" => Ok(Self::Uuid),
            _ => Err(()),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => f.write_str("sequential"),
            Self::Uuid => f.write_str("uuid"),
        }
    }
}

/// Effective runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Id assignment strategy for new stores.
    pub id_strategy: IdStrategy,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { id_strategy: IdStrategy::default(), log_filter: "warn".into() }
    }
}

impl Config {
    /// Builds the configuration from an optional explicit file and the
    /// process environment.
    ///
    /// Without `path`, `todo-store.yaml` in the working directory is used if
    /// it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or an
    /// environment override is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        let file = match path {
            Some(path) => Some(path),
            None => default_path.exists().then_some(default_path),
        };

        let config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env(|var| std::env::var(var).ok())
    }

    /// Parses a YAML configuration file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Applies `TODO_STORE_*` overrides looked up through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if `TODO_STORE_ID_STRATEGY` is not a known strategy.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ID_STRATEGY_ENV) {
            self.id_strategy = value
                .parse()
                .map_err(|()| ConfigError::InvalidEnv { var: ID_STRATEGY_ENV, value })?;
        }
        if let Some(filter) = lookup(LOG_FILTER_ENV) {
            self.log_filter = filter;
        }
        Ok(self)
    }
}
