//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Two values are configurable: the default surname tradition and the
//! default locale for kinship names. Both can always be overridden per
//! invocation with command-line flags.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Built-in defaults (`default` tradition, `en` locale)
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. The `--config` path, when given (missing file means defaults)
//! 2. `$AHNENTAFEL_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/ahnentafel/config.toml`
//! 4. `~/.ahnentafel/config.toml` (canonical write location)
//!
//! # Example
//!
//! ```no_run
//! use ahnentafel::core::config::Config;
//!
//! let config = Config::load(None).unwrap();
//! println!("Tradition: {}", config.tradition());
//! println!("Locale: {}", config.locale());
//! ```

pub mod schema;

pub use schema::GlobalConfig;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("unknown configuration key: {0}")]
    UnknownKey(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Loaded configuration with its source location.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The loaded values
    pub global: GlobalConfig,
    /// The file they came from, if one was found
    source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// `override_path` is the `--config` flag: when given, only that file
    /// is considered, and a missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read,
    /// parsed, or validated. Missing config files are not an error.
    pub fn load(override_path: Option<&Path>) -> Result<Config, ConfigError> {
        let located = match override_path {
            Some(path) => {
                if path.exists() {
                    Some(path.to_path_buf())
                } else {
                    None
                }
            }
            None => Self::find_config_file(),
        };

        let config = match located {
            Some(path) => {
                let global = Self::read_config(&path)?;
                global.validate()?;
                Config {
                    global,
                    source_path: Some(path),
                }
            }
            None => Config::default(),
        };

        Ok(config)
    }

    /// Search the standard locations for an existing config file.
    fn find_config_file() -> Option<PathBuf> {
        // 1. $AHNENTAFEL_CONFIG
        if let Ok(path) = std::env::var("AHNENTAFEL_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. $XDG_CONFIG_HOME/ahnentafel/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("ahnentafel/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. ~/.ahnentafel/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".ahnentafel/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        None
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<GlobalConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical path for writing config.
    ///
    /// Returns `~/.ahnentafel/config.toml`.
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".ahnentafel/config.toml"))
    }

    /// Write config atomically to the given path.
    ///
    /// Creates parent directories if needed. Uses atomic write
    /// (write to temp file, then rename) to prevent corruption.
    pub fn write_to(path: &Path, config: &GlobalConfig) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    /// The file this configuration was loaded from, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// The effective surname tradition tag.
    ///
    /// Defaults to `"default"` if not configured.
    pub fn tradition(&self) -> &str {
        self.global.tradition.as_deref().unwrap_or("default")
    }

    /// The effective locale for kinship names.
    ///
    /// Defaults to `"en"` if not configured.
    pub fn locale(&self) -> &str {
        self.global.locale.as_deref().unwrap_or("en")
    }
}
