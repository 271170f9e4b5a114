//! Configuration file loading for the console front-end.
//!
//! Settings are read from a TOML file (`chess.toml` in the current
//! directory unless overridden). A missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// How the console draws the game.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Draw the board from Black's side when Black is to move.
    /// Defaults to true.
    #[serde(default = "default_true")]
    pub flip_for_black: bool,
    /// Character printed for an empty square. Defaults to 'x'.
    #[serde(default = "default_empty_square")]
    pub empty_square: char,
    /// Print the move list when the session ends. Defaults to true.
    #[serde(default = "default_true")]
    pub print_history: bool,
}

fn default_true() -> bool {
    true
}

fn default_empty_square() -> char {
    'x'
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            flip_for_black: default_true(),
            empty_square: default_empty_square(),
            print_history: default_true(),
        }
    }
}

impl ConsoleConfig {
    /// Loads the configuration from `path`, falling back to defaults when
    /// the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }
}
