//! Configuration loading for the conduct engine.
//!
//! Engine and starting player settings are loaded from a TOML file. Every
//! section is optional and falls back to its defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use conduct_types::DeityId;

use crate::components::{Branch, PlayerState, PropValue};
use crate::engine::GameMode;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "conduct.toml";

/// Complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConductConfig {
    /// Engine settings
    #[serde(default)]
    pub engine: EngineConfig,
    /// Starting player state
    #[serde(default)]
    pub player: PlayerConfig,
}

impl ConductConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// General engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for every random roll
    pub seed: u64,
    /// Monster slots tracked for attack conducts
    pub max_monsters: usize,
    pub game_mode: GameMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_monsters: 700,
            game_mode: GameMode::Normal,
        }
    }
}

/// Starting player settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub religion: DeityId,
    pub piety: i32,
    pub experience_level: i32,
    pub bondage_level: i32,
    pub movement_speed: i32,
    pub branch: Branch,
    /// Start with Elyvilon's lifesaving prayer in effect
    pub lifesaving: bool,
    /// Named properties, integers or lists of names
    pub props: BTreeMap<String, PropValue>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            religion: DeityId::NoGod,
            piety: 0,
            experience_level: 1,
            bondage_level: 0,
            movement_speed: 10,
            branch: Branch::Dungeon,
            lifesaving: false,
            props: BTreeMap::new(),
        }
    }
}

impl PlayerConfig {
    pub fn to_player_state(&self) -> PlayerState {
        PlayerState {
            religion: self.religion,
            piety: self.piety,
            experience_level: self.experience_level,
            bondage_level: self.bondage_level,
            movement_speed: self.movement_speed,
            branch: self.branch,
            lifesaving: self.lifesaving,
            props: self.props.clone(),
            ..PlayerState::default()
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Conduct Engine Configuration

[engine]
seed = 42
max_monsters = 700
game_mode = "normal"

[player]
religion = "shining_one"
piety = 50
experience_level = 10
bondage_level = 0
movement_speed = 10
branch = "dungeon"
lifesaving = false
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConductConfig::default();

        assert_eq!(config.engine.seed, 42);
        assert_eq!(config.engine.max_monsters, 700);
        assert_eq!(config.engine.game_mode, GameMode::Normal);
        assert_eq!(config.player.religion, DeityId::NoGod);
        assert_eq!(config.player.movement_speed, 10);
    }

    #[test]
    fn test_parse_config_from_toml() {
        let toml = r#"
            [engine]
            seed = 7
            game_mode = "arena"

            [player]
            religion = "ru"
            piety = 30

            [player.props]
            ru_progress_to_next_sacrifice = 3
            available_sacrifices = ["sacrifice_love"]
        "#;

        let config = ConductConfig::from_str(toml).unwrap();

        assert_eq!(config.engine.seed, 7);
        assert_eq!(config.engine.game_mode, GameMode::Arena);
        assert_eq!(config.player.religion, DeityId::Ru);
        assert_eq!(
            config.player.props.get("ru_progress_to_next_sacrifice"),
            Some(&PropValue::Int(3))
        );
        assert_eq!(
            config.player.props.get("available_sacrifices"),
            Some(&PropValue::List(vec!["sacrifice_love".to_string()]))
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
            [player]
            religion = "trog"
        "#;

        let config = ConductConfig::from_str(toml).unwrap();

        assert_eq!(config.player.religion, DeityId::Trog);
        assert_eq!(config.player.experience_level, 1);
        assert_eq!(config.engine.max_monsters, 700);
    }

    #[test]
    fn test_unknown_god_rejected() {
        let toml = r#"
            [player]
            religion = "mammon"
        "#;
        assert!(matches!(
            ConductConfig::from_str(toml),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_config_to_toml() {
        let config = ConductConfig::default();
        let toml = config.to_toml().unwrap();

        assert!(toml.contains("[engine]"));
        assert!(toml.contains("[player]"));
        assert_eq!(ConductConfig::from_str(&toml).unwrap(), config);
    }

    #[test]
    fn test_default_config_toml_parses() {
        let config = ConductConfig::from_str(&default_config_toml()).unwrap();

        assert_eq!(config.player.religion, DeityId::ShiningOne);
        assert_eq!(config.player.piety, 50);
    }

    #[test]
    fn test_to_player_state() {
        let mut config = PlayerConfig {
            religion: DeityId::Ashenzari,
            bondage_level: 3,
            ..PlayerConfig::default()
        };
        config
            .props
            .insert("ru_progress_to_next_sacrifice".to_string(), PropValue::Int(1));

        let player = config.to_player_state();
        assert_eq!(player.religion, DeityId::Ashenzari);
        assert_eq!(player.bondage_level, 3);
        assert_eq!(player.num_turns, 0);
        assert_eq!(player.props.len(), 1);
        assert!(!player.lifesaving);
    }

    #[test]
    fn test_lifesaving_from_toml() {
        let config = ConductConfig::from_str(
            r#"
            [player]
            religion = "elyvilon"
            piety = 30
            lifesaving = true
            "#,
        )
        .unwrap();

        assert!(config.player.lifesaving);
        let player = config.player.to_player_state();
        assert!(player.lifesaving);
        assert_eq!(player.piety, 30);
    }
}
