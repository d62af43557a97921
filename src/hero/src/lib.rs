// src/hero/src/lib.rs

// 核心模块
mod player;
mod equipment;

// 子模块
pub mod class;
pub mod skills;

// 重新导出主要类型
pub use self::{
    class::{Class, PlayerStats},
    player::{Player, level_threshold, mitigate},
    equipment::{EquipError, Equipment},
    skills::{Skill, SkillBook, SkillCatalog, SkillType},
};

/// Smallest amount of damage any hit can deal
pub const MIN_DAMAGE: u32 = 1;

/// Experience needed per level: reaching level `n + 1` costs `n * EXP_PER_LEVEL`
pub const EXP_PER_LEVEL: u32 = 50;

/// Fixed stat gains applied on every level-up
pub mod growth {
    pub const MAX_HP: u32 = 10;
    pub const MAX_MANA: u32 = 5;
    pub const ATTACK: u32 = 2;
    pub const DEFENSE: u32 = 1;
    pub const RESTORE_RATE: u32 = 1;
}
