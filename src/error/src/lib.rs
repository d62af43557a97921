//! 游戏错误处理模块
//!
//! Error types shared by the combat engine, the player model and the
//! console front-end.

use bincode::error::{DecodeError, EncodeError};
use thiserror::Error;

/// Errors raised outside of a single battle (profile, config, console)
#[derive(Debug, Error)]
pub enum GameError {
    /// 存档系统错误
    #[error("Profile error: {0}")]
    ProfileError(#[from] anyhow::Error),

    /// IO操作错误
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// 序列化错误
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// 反序列化错误
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// 存档数据损坏
    #[error("Corrupted profile data")]
    CorruptedProfile,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unknown monster: {0}")]
    UnknownMonster(String),

    #[error(transparent)]
    Combat(#[from] CombatError),
}

impl From<DecodeError> for GameError {
    fn from(err: DecodeError) -> Self {
        // A truncated or foreign file shows up as an utf-8 or length failure
        match err {
            DecodeError::UnexpectedEnd { .. } => GameError::CorruptedProfile,
            DecodeError::Utf8 { .. } => GameError::CorruptedProfile,
            other => GameError::DeserializationError(other.to_string()),
        }
    }
}

impl From<EncodeError> for GameError {
    fn from(err: EncodeError) -> Self {
        GameError::SerializationError(err.to_string())
    }
}

/// Rejection raised at the combatant mutation boundary
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatError {
    #[error("negative {what} amount: {amount}")]
    NegativeAmount { what: &'static str, amount: i64 },
}

impl StatError {
    pub fn negative(what: &'static str, amount: i64) -> Self {
        StatError::NegativeAmount { what, amount }
    }
}

/// 背包系统错误类型
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("inventory is full")]
    Full,
    #[error("no item named {0}")]
    ItemNotFound(String),
    #[error("{0} cannot be used")]
    NotConsumable(String),
    #[error("{0} cannot be equipped")]
    NotEquipment(String),
}

/// Failures inside a battle.
///
/// `Rejected` aborts only the current action. Every other variant ends the
/// encounter with an error result.
#[derive(Debug, Error)]
pub enum CombatError {
    #[error("action rejected: {0}")]
    Rejected(#[from] StatError),

    #[error("console input failed: {0}")]
    Input(#[from] std::io::Error),

    #[error("inventory failure: {0}")]
    Inventory(#[from] InventoryError),

    #[error("invalid combat state: {0}")]
    InvalidState(String),
}

impl CombatError {
    /// Whether the error only cancels the current action
    pub fn is_action_fatal_only(&self) -> bool {
        matches!(self, CombatError::Rejected(_))
    }
}

/// 处理游戏错误并转换为用户友好的消息
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::CorruptedProfile => "The saved profile is corrupted and cannot be loaded".to_string(),
        GameError::InvalidConfig(reason) => format!("The config file is invalid: {}", reason),
        GameError::UnknownMonster(name) => format!("No monster called '{}' exists", name),
        GameError::IoError(e) => match e.kind() {
            std::io::ErrorKind::NotFound => "Profile file not found".to_string(),
            std::io::ErrorKind::PermissionDenied => "No permission to access the profile file".to_string(),
            _ => format!("IO error: {}", e),
        },
        GameError::Combat(_) => "Something went wrong during the battle".to_string(),
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_is_action_scoped() {
        let err = CombatError::from(StatError::negative("heal", -3));
        assert!(err.is_action_fatal_only());

        let err = CombatError::InvalidState("monster already dead".into());
        assert!(!err.is_action_fatal_only());
    }

    #[test]
    fn friendly_messages() {
        let err = GameError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(handle_error(&err), "Profile file not found");

        let err = GameError::UnknownMonster("dragon".into());
        assert!(handle_error(&err).contains("dragon"));
    }

    #[test]
    fn stat_error_display() {
        let err = StatError::negative("damage", -5);
        assert_eq!(err.to_string(), "negative damage amount: -5");
    }
}
