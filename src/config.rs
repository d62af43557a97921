// src/config.rs
//! Game configuration, read from a JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use combat::CombatRules;
use error::GameError;
use hero::Class;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const DEFAULT_PROFILE: &str = "profile.sav";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player_name: String,
    pub class: Class,
    /// Fixed RNG seed; entropy when absent
    pub seed: Option<u64>,
    pub profile: PathBuf,
    pub combat: CombatRules,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: "Adventurer".to_string(),
            class: Class::default(),
            seed: None,
            profile: PathBuf::from(DEFAULT_PROFILE),
            combat: CombatRules::default(),
        }
    }
}

impl GameConfig {
    /// Load from `path`. A missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)
            .map_err(|e| GameError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, GameError> {
        let mut config: GameConfig =
            serde_json::from_str(text).map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        config.combat = config.combat.normalized();
        Ok(config)
    }

    fn validate(&self) -> Result<(), GameError> {
        if self.player_name.trim().is_empty() {
            return Err(GameError::InvalidConfig("player name is empty".into()));
        }
        if self.profile.as_os_str().is_empty() {
            return Err(GameError::InvalidConfig("profile path is empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_is_all_defaults() {
        assert_eq!(GameConfig::from_json("{}").unwrap(), GameConfig::default());
    }

    #[test]
    fn partial_combat_section_keeps_other_defaults() {
        let config = GameConfig::from_json(
            r#"{ "class": "Mage", "seed": 7, "combat": { "escape_chance": 250 } }"#,
        )
        .unwrap();
        assert_eq!(config.class, Class::Mage);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.combat.escape_chance, 100);
        assert_eq!(config.combat.drop_chance, 20);
        assert_eq!(config.combat.attack_variance, 4);
    }

    #[test]
    fn malformed_json_is_invalid_config() {
        let err = GameConfig::from_json("{ class: ").unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
        let err = GameConfig::from_json(r#"{ "player_name": "  " }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
