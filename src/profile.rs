// src/profile.rs
//! 存档：the player and their quests, kept between runs.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use bincode::config;
use error::GameError;
use hero::Player;
use quests::QuestLog;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Current profile format version
pub const PROFILE_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub version: u32,
    pub player: Player,
    pub quests: QuestLog,
}

impl Profile {
    pub fn new(player: Player, quests: QuestLog) -> Self {
        Self {
            version: PROFILE_VERSION,
            player,
            quests,
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serde::encode_to_vec(self, config::standard())?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        let (profile, _): (Profile, usize) =
            bincode::serde::decode_from_slice(bytes, config::standard())?;
        profile.validate()?;
        Ok(profile)
    }

    /// Write through a temporary file, then rename over `path`
    pub fn save(&self, path: &Path) -> Result<(), GameError> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).context("Failed to create profile directory")?;
        }

        let bytes = self.to_bytes()?;
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path).context("Failed to create temporary profile")?;
        file.write_all(&bytes).context("Failed to write profile")?;
        file.flush().context("Failed to flush profile")?;
        fs::rename(&temp_path, path).context("Failed to commit profile")?;

        info!(path = %path.display(), level = self.player.level(), "profile saved");
        Ok(())
    }

    /// `Ok(None)` when there is no profile at `path` yet
    pub fn load(path: &Path) -> Result<Option<Self>, GameError> {
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(path).context(format!("Failed to read profile: {:?}", path))?;
        let profile = Self::from_bytes(&bytes)?;
        info!(path = %path.display(), level = profile.player.level(), "profile loaded");
        Ok(Some(profile))
    }

    fn validate(&self) -> Result<(), GameError> {
        if self.version > PROFILE_VERSION {
            return Err(GameError::DeserializationError(format!(
                "profile version {} is newer than {}",
                self.version, PROFILE_VERSION
            )));
        }
        if self.player.max_hp() == 0 || self.player.level() == 0 {
            return Err(GameError::CorruptedProfile);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hero::{Class, SkillCatalog};

    #[test]
    fn truncated_bytes_are_corrupted() {
        let player = Player::new("Ayla", Class::Rogue, &SkillCatalog::standard());
        let bytes = Profile::new(player, QuestLog::new()).to_bytes().unwrap();
        let err = Profile::from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, GameError::CorruptedProfile));
    }

    #[test]
    fn newer_versions_are_refused() {
        let player = Player::new("Ayla", Class::Rogue, &SkillCatalog::standard());
        let mut profile = Profile::new(player, QuestLog::new());
        profile.version = PROFILE_VERSION + 1;
        let bytes = profile.to_bytes().unwrap();
        assert!(matches!(
            Profile::from_bytes(&bytes),
            Err(GameError::DeserializationError(_))
        ));
    }
}
