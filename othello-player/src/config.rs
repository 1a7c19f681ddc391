use crate::registry::Roster;
use derive_more::{Display, Error};
use othello_rules::Side;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors that can occur when loading configuration.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display(fmt = "failed to read config file {:?}: {}", path, source)]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[display(fmt = "failed to parse TOML: {}", _0)]
    TomlParse(toml::de::Error),
    #[display(fmt = "config validation error: {}", reason)]
    Validation { reason: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::TomlParse(err)
    }
}

/// Settings for one match, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Display name of the black player.
    pub black: String,
    /// Display name of the white player.
    pub white: String,
    /// Move script to replay, if any.
    pub script: Option<PathBuf>,
    /// Print the board after every accepted move.
    pub render: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            black: "Black".to_string(),
            white: "White".to_string(),
            script: None,
            render: true,
        }
    }
}

impl MatchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: MatchConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.black.trim().is_empty() || self.white.trim().is_empty() {
            return Err(ConfigError::Validation {
                reason: "player names must not be empty".into(),
            });
        }
        if self.black == self.white {
            return Err(ConfigError::Validation {
                reason: format!("both sides are named {:?}", self.black),
            });
        }
        Ok(())
    }

    /// Register both players.
    pub fn roster(&self) -> Roster {
        let mut roster = Roster::new();
        roster.create_player(self.black.clone(), Side::Black);
        roster.create_player(self.white.clone(), Side::White);
        roster
    }
}
