//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the terminal front end.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Default name for the X player. Empty falls back to "X".
    #[serde(default)]
    player_x: String,

    /// Default name for the O player. Empty falls back to "O".
    #[serde(default)]
    player_o: String,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_x: String::new(),
            player_o: String::new(),
            log_level: default_log_level(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(player_x = %config.player_x, player_o = %config.player_o, "Config loaded");
        Ok(config)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides for the player names.
    pub fn with_names(mut self, player_x: Option<String>, player_o: Option<String>) -> Self {
        if let Some(name) = player_x {
            self.player_x = name;
        }
        if let Some(name) = player_o {
            self.player_o = name;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let config = GameConfig::load(None).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.log_level(), "warn");
        assert!(config.player_x().is_empty());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "player_x = \"alice\"\nlog_level = \"debug\"").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.player_x(), "alice");
        assert_eq!(config.player_o(), "");
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_cli_overrides_file() {
        let config = GameConfig::default().with_names(Some("carol".to_string()), None);
        assert_eq!(config.player_x(), "carol");
        assert_eq!(config.player_o(), "");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.message.contains("Failed to read"));
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "player_x = ").unwrap();
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Config error: Failed to parse config"));
    }
}
