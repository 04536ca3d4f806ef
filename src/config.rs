//! Runtime configuration for the terminal front end.

use crate::session::GameMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "tic_tac_toe.toml";

/// Front-end settings, loaded from TOML and overridable from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[setters(prefix = "with_", strip_option)]
pub struct GameConfig {
    /// Milliseconds between UI ticks.
    tick_rate_ms: u64,

    /// Seed for the opponent's random fallback; random when unset.
    seed: Option<u64>,

    /// Mode to start in; shows the menu when unset.
    mode: Option<GameMode>,

    /// File receiving log output while the terminal is in raw mode.
    log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 16,
            seed: None,
            mode: None,
            log_file: PathBuf::from("tic_tac_toe.log"),
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
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given; otherwise [`DEFAULT_CONFIG_PATH`] if it exists,
    /// falling back to defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                info!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=1000).contains(&self.tick_rate_ms) {
            return Err(ConfigError::new(format!(
                "tick_rate_ms must be between 1 and 1000, got {}",
                self.tick_rate_ms
            )));
        }
        if self.log_file.as_os_str().is_empty() {
            return Err(ConfigError::new("log_file must not be empty".to_string()));
        }
        Ok(())
    }

    /// Tick interval as a [`Duration`].
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
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
