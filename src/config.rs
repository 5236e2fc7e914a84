//! Game configuration.
//!
//! A fresh game uses 4 titans per player, a 600 second game clock and a 60
//! second turn clock. Those values can be overridden from a JSON file or
//! through `setoption`; overrides apply from the next reset.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::NODE_COUNT;

/// Default length of a whole game, in seconds.
pub const DEFAULT_GAME_DURATION_SECS: u32 = 600;

/// Default length of a single turn, in seconds.
pub const DEFAULT_TURN_DURATION_SECS: u32 = 60;

/// Default number of titans each player starts with.
pub const DEFAULT_TITANS_PER_PLAYER: u8 = 4;

/// Errors raised while loading or changing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{name} must be at least 1")]
    Zero { name: &'static str },

    #[error("titans_per_player must be at most {max}, got {got}")]
    TooManyTitans { max: u8, got: u8 },

    #[error("unknown option: '{0}'")]
    UnknownOption(String),

    #[error("invalid value for {name}: '{value}'")]
    InvalidValue { name: String, value: String },
}

/// Tunable starting values for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub game_duration_secs: u32,
    pub turn_duration_secs: u32,
    pub titans_per_player: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            game_duration_secs: DEFAULT_GAME_DURATION_SECS,
            turn_duration_secs: DEFAULT_TURN_DURATION_SECS,
            titans_per_player: DEFAULT_TITANS_PER_PLAYER,
        }
    }
}

impl GameConfig {
    /// Checks that the values describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game_duration_secs == 0 {
            return Err(ConfigError::Zero { name: "game_duration_secs" });
        }
        if self.turn_duration_secs == 0 {
            return Err(ConfigError::Zero { name: "turn_duration_secs" });
        }
        if self.titans_per_player == 0 {
            return Err(ConfigError::Zero { name: "titans_per_player" });
        }
        let max = (NODE_COUNT / 2) as u8;
        if self.titans_per_player > max {
            return Err(ConfigError::TooManyTitans {
                max,
                got: self.titans_per_player,
            });
        }
        Ok(())
    }

    /// Applies a named option. The previous value is kept if the new one is invalid.
    ///
    /// Recognised names: `GameDuration`, `TurnDuration`, `Titans`.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        };
        let mut next = *self;
        match name {
            "GameDuration" => next.game_duration_secs = value.parse().map_err(|_| invalid())?,
            "TurnDuration" => next.turn_duration_secs = value.parse().map_err(|_| invalid())?,
            "Titans" => next.titans_per_player = value.parse().map_err(|_| invalid())?,
            other => return Err(ConfigError::UnknownOption(other.to_string())),
        }
        next.validate()?;
        *self = next;
        Ok(())
    }
}

/// Loads and validates a config from a JSON file.
pub fn load_config(path: &Path) -> Result<GameConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_config_from_str(&data)
}

/// Loads and validates a config from a JSON string. Missing fields take defaults.
pub fn load_config_from_str(json: &str) -> Result<GameConfig, ConfigError> {
    let config: GameConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fresh_game() {
        let config = GameConfig::default();
        assert_eq!(config.game_duration_secs, 600);
        assert_eq!(config.turn_duration_secs, 60);
        assert_eq!(config.titans_per_player, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = load_config_from_str(r#"{"turn_duration_secs": 30}"#).unwrap();
        assert_eq!(config.turn_duration_secs, 30);
        assert_eq!(config.game_duration_secs, 600);
        assert_eq!(config.titans_per_player, 4);
    }

    #[test]
    fn rejects_bad_json() {
        assert!(matches!(load_config_from_str("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn rejects_zero_durations() {
        let err = load_config_from_str(r#"{"game_duration_secs": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Zero { name: "game_duration_secs" }));
    }

    #[test]
    fn rejects_more_titans_than_board_allows() {
        let err = load_config_from_str(r#"{"titans_per_player": 10}"#).unwrap_err();
        assert!(matches!(err, ConfigError::TooManyTitans { max: 9, got: 10 }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/titans.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn set_option_updates_known_names() {
        let mut config = GameConfig::default();
        config.set_option("TurnDuration", "15").unwrap();
        config.set_option("GameDuration", "120").unwrap();
        config.set_option("Titans", "9").unwrap();
        assert_eq!(config.turn_duration_secs, 15);
        assert_eq!(config.game_duration_secs, 120);
        assert_eq!(config.titans_per_player, 9);
    }

    #[test]
    fn set_option_keeps_old_value_on_error() {
        let mut config = GameConfig::default();
        assert!(matches!(
            config.set_option("Titans", "lots"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(config.set_option("Titans", "0"), Err(ConfigError::Zero { .. })));
        assert!(matches!(
            config.set_option("Speed", "3"),
            Err(ConfigError::UnknownOption(_))
        ));
        assert_eq!(config, GameConfig::default());
    }
}
