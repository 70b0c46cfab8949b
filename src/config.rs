//! Display and logging configuration for the terminal front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictac_engine::Player;
use tracing::{debug, info, instrument};

/// Configuration loaded from `tictac.toml`.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Show the 1-9 key of each empty cell.
    #[serde(default = "default_show_hints")]
    show_hints: bool,

    /// Default tracing filter, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Symbol drawn for X marks.
    #[serde(default = "default_x_symbol")]
    x_symbol: char,

    /// Symbol drawn for O marks.
    #[serde(default = "default_o_symbol")]
    o_symbol: char,
}

fn default_show_hints() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_x_symbol() -> char {
    'X'
}

fn default_o_symbol() -> char {
    'O'
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            show_hints: default_show_hints(),
            log_filter: default_log_filter(),
            x_symbol: default_x_symbol(),
            o_symbol: default_o_symbol(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(show_hints = config.show_hints, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.x_symbol == config.o_symbol {
            return Err(ConfigError::new(format!(
                "X and O must use different symbols, both are '{}'",
                config.x_symbol
            )));
        }
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Symbol used for `player`.
    pub fn symbol(&self, player: Player) -> char {
        match player {
            Player::X => self.x_symbol,
            Player::O => self.o_symbol,
        }
    }

    /// Returns a copy with hints switched on or off.
    pub fn with_hints(mut self, show_hints: bool) -> Self {
        self.show_hints = show_hints;
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
    /// Creates a new configuration error.
    #[track_caller]
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
        let config = PlayConfig::from_toml("").unwrap();
        assert_eq!(config, PlayConfig::default());
        assert!(*config.show_hints());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_partial_toml() {
        let config = PlayConfig::from_toml("show_hints = false\no_symbol = \"@\"\n").unwrap();
        assert!(!*config.show_hints());
        assert_eq!(config.symbol(Player::O), '@');
        assert_eq!(config.symbol(Player::X), 'X');
    }

    #[test]
    fn test_same_symbols_rejected() {
        let err = PlayConfig::from_toml("x_symbol = \"O\"").unwrap_err();
        assert!(err.message.contains("different symbols"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = PlayConfig::from_toml("show_hints = maybe").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
