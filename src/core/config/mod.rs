//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (`--root`, `--debug`; applied by the CLI layer)
//!
//! # Config Locations
//!
//! Searched in order, first existing file wins:
//! 1. Explicit path (`--config`); must exist
//! 2. `$SPACEGIT_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/spacegit/config.toml`
//! 4. `~/.spacegit/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use spacegit::core::config::Config;
//!
//! let config = Config::load(None).unwrap();
//! println!("spaces live under {}", config.spaces_root().display());
//! println!("git binary: {}", config.git_binary());
//! ```

pub mod schema;

pub use schema::{FileConfig, GitConfig, LogConfig};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "SPACEGIT_CONFIG";

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

    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Effective configuration.
///
/// Accessors apply defaults for anything the file leaves out.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents (defaults if no file was found)
    pub file: FileConfig,
    /// Override for the spaces root (from the CLI)
    root_override: Option<PathBuf>,
    /// Path the file was loaded from
    loaded_from: Option<PathBuf>,
}

impl Config {
    /// Load configuration.
    ///
    /// When `explicit` is given, that file must exist. Otherwise the
    /// standard locations are searched and defaults are used if none exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed
    /// or validated, or if an explicit file is missing.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Some(path.to_path_buf())
            }
            None => candidate_paths(
                std::env::var(CONFIG_ENV).ok(),
                std::env::var("XDG_CONFIG_HOME").ok(),
                dirs::home_dir(),
            )
            .into_iter()
            .find(|p| p.exists()),
        };

        match path {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load and validate a specific config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: FileConfig = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.validate()?;

        Ok(Self {
            file,
            root_override: None,
            loaded_from: Some(path.to_path_buf()),
        })
    }

    /// Override the spaces root (CLI `--root`).
    #[must_use]
    pub fn with_spaces_root(mut self, root: PathBuf) -> Self {
        self.root_override = Some(root);
        self
    }

    /// The default spaces root: `~/.spacegit/spaces`.
    pub fn default_spaces_root() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".spacegit/spaces"))
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Directory whose subdirectories are the spaces.
    ///
    /// Falls back to `~/.spacegit/spaces`, or `.spacegit/spaces` relative
    /// to the working directory if no home directory is known.
    pub fn spaces_root(&self) -> PathBuf {
        if let Some(root) = &self.root_override {
            return root.clone();
        }
        if let Some(root) = &self.file.spaces_root {
            return root.clone();
        }
        Self::default_spaces_root().unwrap_or_else(|_| PathBuf::from(".spacegit/spaces"))
    }

    /// Git binary to run. Defaults to `git`.
    pub fn git_binary(&self) -> &str {
        self.file
            .git
            .as_ref()
            .and_then(|g| g.binary.as_deref())
            .unwrap_or("git")
    }

    /// Configured commit identity, if any.
    pub fn git_identity(&self) -> (Option<&str>, Option<&str>) {
        match &self.file.git {
            Some(git) => (git.user_name.as_deref(), git.user_email.as_deref()),
            None => (None, None),
        }
    }

    /// Minimum log level. Defaults to `info`.
    pub fn log_level(&self) -> &str {
        self.file
            .log
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or("info")
    }

    /// Whether logs are emitted as JSON. Defaults to `false`.
    pub fn log_json(&self) -> bool {
        self.file
            .log
            .as_ref()
            .and_then(|l| l.json)
            .unwrap_or(false)
    }

    /// Path the config was loaded from, if a file was found.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.loaded_from.as_deref()
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        let (user_name, user_email) = self.git_identity();
        let effective = FileConfig {
            spaces_root: Some(self.spaces_root()),
            git: Some(GitConfig {
                binary: Some(self.git_binary().to_string()),
                user_name: user_name.map(str::to_string),
                user_email: user_email.map(str::to_string),
            }),
            log: Some(LogConfig {
                level: Some(self.log_level().to_string()),
                json: Some(self.log_json()),
            }),
        };
        toml::to_string_pretty(&effective).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }
}

/// Standard config locations in search order.
fn candidate_paths(
    config_env: Option<String>,
    xdg_config_home: Option<String>,
    home: Option<PathBuf>,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(path) = config_env {
        paths.push(PathBuf::from(path));
    }
    if let Some(xdg) = xdg_config_home {
        paths.push(PathBuf::from(xdg).join("spacegit/config.toml"));
    }
    if let Some(home) = home {
        paths.push(home.join(".spacegit/config.toml"));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn candidate_order() {
        let paths = candidate_paths(
            Some("/etc/sg.toml".to_string()),
            Some("/xdg".to_string()),
            Some(PathBuf::from("/home/u")),
        );
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/etc/sg.toml"),
                PathBuf::from("/xdg/spacegit/config.toml"),
                PathBuf::from("/home/u/.spacegit/config.toml"),
            ]
        );
        assert!(candidate_paths(None, None, None).is_empty());
    }

    #[test]
    fn defaults_without_file() {
        let config = Config::default();
        assert_eq!(config.git_binary(), "git");
        assert_eq!(config.git_identity(), (None, None));
        assert_eq!(config.log_level(), "info");
        assert!(!config.log_json());
        assert!(config.loaded_from().is_none());
    }

    #[test]
    fn load_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
            spaces_root = "/srv/spaces"

            [git]
            binary = "/opt/git/bin/git"
            user_email = "bot@example.com"

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.spaces_root(), PathBuf::from("/srv/spaces"));
        assert_eq!(config.git_binary(), "/opt/git/bin/git");
        assert_eq!(config.git_identity(), (None, Some("bot@example.com")));
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.loaded_from(), Some(path.as_path()));
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let temp = TempDir::new().unwrap();
        let result = Config::load(Some(&temp.path().join("nope.toml")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn invalid_values_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[log]\nlevel = \"loud\"\n").unwrap();

        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn unparseable_file_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "spaces_root = [").unwrap();

        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn root_override_wins() {
        let config = Config {
            file: FileConfig {
                spaces_root: Some(PathBuf::from("/from/file")),
                ..Default::default()
            },
            ..Default::default()
        }
        .with_spaces_root(PathBuf::from("/from/cli"));

        assert_eq!(config.spaces_root(), PathBuf::from("/from/cli"));
    }

    #[test]
    fn effective_toml_reparses() {
        let config = Config::default().with_spaces_root(PathBuf::from("/srv"));
        let rendered = config.to_toml().unwrap();
        let parsed: FileConfig = toml::from_str(&rendered).unwrap();

        assert_eq!(parsed.spaces_root, Some(PathBuf::from("/srv")));
        assert_eq!(parsed.git.unwrap().binary.as_deref(), Some("git"));
    }
}
