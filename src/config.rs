//! Table configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tabletop_engine::{Player, StartingPlayer};
use tracing::{debug, info, instrument};

/// Settings for a table session.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Who opens each game.
    #[serde(default)]
    #[getter(copy)]
    starting_player: StartingPlayer,

    /// Seed for random starting players.
    #[serde(default)]
    #[getter(copy)]
    seed: Option<u64>,

    /// Display name for player X.
    #[serde(default = "default_x_name")]
    x_name: String,

    /// Display name for player O.
    #[serde(default = "default_o_name")]
    o_name: String,
}

fn default_x_name() -> String {
    "Player X".to_string()
}

fn default_o_name() -> String {
    "Player O".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_player: StartingPlayer::default(),
            seed: None,
            x_name: default_x_name(),
            o_name: default_o_name(),
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
        let config = Self::from_toml(&content)?;
        info!(starting_player = %config.starting_player, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(
        mut self,
        starting_player: Option<StartingPlayer>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(starting_player) = starting_player {
            self.starting_player = starting_player;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Display name for a player.
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::X => &self.x_name,
            Player::O => &self.o_name,
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
    fn test_empty_config_uses_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.starting_player(), StartingPlayer::X);
        assert_eq!(config.name_of(Player::O), "Player O");
    }

    #[test]
    fn test_full_config() {
        let config = GameConfig::from_toml(
            r#"
            starting_player = "random"
            seed = 42
            x_name = "Ada"
            o_name = "Grace"
            "#,
        )
        .unwrap();
        assert_eq!(config.starting_player(), StartingPlayer::Random);
        assert_eq!(config.seed(), Some(42));
        assert_eq!(config.name_of(Player::X), "Ada");
        assert_eq!(config.o_name(), "Grace");
    }

    #[test]
    fn test_bad_starting_player_rejected() {
        let err = GameConfig::from_toml(r#"starting_player = "z""#).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_overrides() {
        let config = GameConfig::default().with_overrides(Some(StartingPlayer::O), None);
        assert_eq!(config.starting_player(), StartingPlayer::O);
        assert_eq!(config.seed(), None);

        let config = config.with_overrides(None, Some(9));
        assert_eq!(config.starting_player(), StartingPlayer::O);
        assert_eq!(config.seed(), Some(9));
    }
}
