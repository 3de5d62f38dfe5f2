//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_tictactoe::{Mark, Player};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Top-level configuration.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default player names.
    players: PlayersConfig,
    /// Log output settings.
    logging: LoggingConfig,
}

/// Names applied when the user skips name entry.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    /// Default name for X.
    x_name: String,
    /// Default name for O.
    o_name: String,
}

impl PlayersConfig {
    /// Default names as an ordered pair, X first.
    pub fn names(&self) -> [String; 2] {
        [self.x_name.clone(), self.o_name.clone()]
    }
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            x_name: Player::default_name(Mark::X),
            o_name: Player::default_name(Mark::O),
        }
    }
}

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file path. Logs never go to the terminal the game is drawn on.
    file: PathBuf,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("noughts.log"),
            filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
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
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.players().x_name(), "Player X");
        assert_eq!(config.players().o_name(), "Player O");
        assert_eq!(config.logging().file(), &PathBuf::from("noughts.log"));
        assert_eq!(config.logging().filter(), "info");
    }

    #[test]
    fn test_partial_toml_fills_missing_fields() {
        let config = AppConfig::from_toml(
            r#"
            [players]
            o_name = "Grace"
            "#,
        )
        .unwrap();
        assert_eq!(config.players().x_name(), "Player X");
        assert_eq!(config.players().o_name(), "Grace");
        assert_eq!(config.logging(), &LoggingConfig::default());
    }

    #[test]
    fn test_invalid_toml_reports_error() {
        let err = AppConfig::from_toml("[players\nx_name = 1").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.to_string().starts_with("Config error: "));
    }
}
