//! Player names and log location, layered from defaults, TOML and flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe::{DEFAULT_PLAYER_A, DEFAULT_PLAYER_B};
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Name of the player holding X.
    player_a: String,

    /// Name of the player holding O.
    player_b: String,

    /// File that receives log output while the terminal UI runs.
    log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_a: DEFAULT_PLAYER_A.to_string(),
            player_b: DEFAULT_PLAYER_B.to_string(),
            log_file: PathBuf::from("tictactoe.log"),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(player_a = %config.player_a, player_b = %config.player_b, "Config loaded");
        Ok(config)
    }

    /// Resolves the config file to use.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read if present and built-in defaults are used otherwise.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        player_a: Option<String>,
        player_b: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(name) = player_a {
            self.player_a = name;
        }
        if let Some(name) = player_b {
            self.player_b = name;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.player_a.trim().is_empty() || self.player_b.trim().is_empty() {
            return Err(ConfigError::new("Player names must not be empty".to_string()));
        }
        if self.player_a == self.player_b {
            return Err(ConfigError::new(format!(
                "Both players are named {:?}",
                self.player_a
            )));
        }
        Ok(())
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
