//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing: the git binary must be
//! named, the log level must be one `tracing` understands, and the spaces
//! root (when given) must be non-empty.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Top-level configuration file.
///
/// # Example
///
/// ```toml
/// spaces_root = "/var/lib/spacegit/spaces"
///
/// [git]
/// binary = "git"
/// user_name = "Space Bot"
/// user_email = "bot@example.com"
///
/// [log]
/// level = "info"
/// json = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Directory whose subdirectories are the spaces
    pub spaces_root: Option<PathBuf>,

    /// Git executor settings
    pub git: Option<GitConfig>,

    /// Logging settings
    pub log: Option<LogConfig>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(root) = &self.spaces_root {
            if root.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "spaces_root cannot be empty".to_string(),
                ));
            }
        }

        if let Some(git) = &self.git {
            git.validate()?;
        }

        if let Some(log) = &self.log {
            log.validate()?;
        }

        Ok(())
    }
}

/// Settings for the git command executor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// Git binary to run (default: "git")
    pub binary: Option<String>,

    /// Committer/author name passed as `-c user.name`
    pub user_name: Option<String>,

    /// Committer/author email passed as `-c user.email`
    pub user_email: Option<String>,
}

impl GitConfig {
    /// Validate the git settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(binary) = &self.binary {
            if binary.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "git.binary cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Minimum level ("trace", "debug", "info", "warn", "error")
    pub level: Option<String>,

    /// Emit JSON lines instead of human-readable output
    pub json: Option<bool>,
}

impl LogConfig {
    /// Valid log levels.
    pub const VALID_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];

    /// Validate the logging settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(level) = &self.level {
            if !Self::VALID_LEVELS.contains(&level.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid log level '{}', must be one of: {}",
                    level,
                    Self::VALID_LEVELS.join(", ")
                )));
            }
        }
        Ok(())
    }
}
