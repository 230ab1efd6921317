//! Configuration management for jnav
//!
//! This module handles loading, parsing, and managing configuration from various sources:
//! - Configuration files (TOML format)
//! - Environment variables
//! - Command-line arguments
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::query::{DEFAULT_SEPARATOR, ESCAPE, OPEN_BRACKET};

/// Environment variable overriding `query.separator`
pub const SEPARATOR_ENV: &str = "JNAV_SEPARATOR";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Query language configuration
    #[serde(default)]
    pub query: QueryConfig,

    /// Display configuration
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Query language configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryConfig {
    /// Key separator, exactly one character
    #[serde(default = "default_separator")]
    pub separator: String,
}

/// Display and output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Enable colored output when writing to a terminal
    #[serde(default = "default_color_output")]
    pub color_output: bool,

    /// Start the interactive view listing keys only
    #[serde(default)]
    pub only_keys: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Path to log file (None for stderr)
    #[serde(default)]
    pub file_path: Option<PathBuf>,

    /// Enable timestamps in logs
    #[serde(default = "default_log_timestamps")]
    pub timestamps: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

// Default value functions
fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_color_output() -> bool {
    true
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_log_timestamps() -> bool {
    true
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_output: default_color_output(),
            only_keys: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_path: None,
            timestamps: default_log_timestamps(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a file
    ///
    /// With an explicit path the file must exist. Without one, the default path is tried
    /// and a missing file simply yields the defaults.
    ///
    /// # Arguments
    /// * `path` - Explicit configuration file (TOML format)
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    pub fn load_from_file(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path(), false),
        };

        if !path.exists() {
            if required {
                return Err(ConfigError::FileNotFound(path.display().to_string()).into());
            }
            tracing::debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        tracing::debug!("loading config from {}", path.display());
        let text = fs::read_to_string(&path)?;
        Self::from_toml_str(&text)
    }

    /// Apply overrides from environment variables
    ///
    /// Only [`SEPARATOR_ENV`] is recognized.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|name| std::env::var(name).ok());
    }

    fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(sep) = lookup(SEPARATOR_ENV) {
            self.query.separator = sep;
        }
    }

    /// Get the default configuration file path
    ///
    /// # Returns
    /// * `PathBuf` - `~/.jnav/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".jnav")
            .join("config.toml")
    }

    /// Validate the configuration
    ///
    /// # Returns
    /// * `Result<()>` - Ok if valid, error otherwise
    pub fn validate(&self) -> Result<()> {
        self.query.separator_char()?;
        Ok(())
    }
}

impl QueryConfig {
    /// The separator as a single character
    ///
    /// Rejects empty or multi-character strings and characters the query language
    /// already reserves (the escape marker and `[`).
    pub fn separator_char(&self) -> Result<char> {
        let mut chars = self.separator.chars();
        match (chars.next(), chars.next()) {
            (Some(sep), None) if sep != ESCAPE && sep != OPEN_BRACKET => Ok(sep),
            _ => Err(ConfigError::InvalidValue {
                field: "query.separator".into(),
                value: self.separator.clone(),
            }
            .into()),
        }
    }
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JnavError;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.query.separator, ".");
        assert!(config.display.color_output);
        assert!(!config.display.only_keys);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [query]
            separator = "/"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.query.separator_char().unwrap(), '/');
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert!(config.logging.timestamps);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml_str("[query\nseparator=").unwrap_err();
        assert!(matches!(
            err,
            JnavError::Config(ConfigError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_separator_validation() {
        for bad in ["", "ab", "\\", "["] {
            let query = QueryConfig {
                separator: bad.to_string(),
            };
            assert!(query.separator_char().is_err(), "{bad:?}");
        }
        let query = QueryConfig {
            separator: "→".to_string(),
        };
        assert_eq!(query.separator_char().unwrap(), '→');
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::load_from_file(Some(Path::new("/nonexistent/jnav.toml"))).unwrap_err();
        assert!(matches!(err, JnavError::Config(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_env_override() {
        let mut config = Config::default();
        config.apply_env_from(|name| (name == SEPARATOR_ENV).then(|| ":".to_string()));
        assert_eq!(config.query.separator, ":");

        let mut config = Config::default();
        config.apply_env_from(|_| None);
        assert_eq!(config.query.separator, ".");
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LogLevel::Trace.to_tracing_level(), tracing::Level::TRACE);
        assert_eq!(LogLevel::Error.to_tracing_level(), tracing::Level::ERROR);
    }
}
