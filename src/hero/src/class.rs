// src/hero/src/class.rs

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// 英雄职业枚举
#[derive(
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Class {
    #[default]
    Warrior, // 高生命值，中等攻击
    Mage,  // 低生命值，高法力
    Rogue, // 均衡
}

/// Starting stat block for a new character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub max_hp: u32,
    pub max_mana: u32,
    pub attack: u32,
    pub defense: u32,
    /// Percentage of the maximum pools restored after a battle
    pub restore_rate: u32,
}

impl Class {
    /// 获取职业的基础属性
    pub fn base_stats(&self) -> PlayerStats {
        match self {
            Class::Warrior => PlayerStats {
                max_hp: 120,
                max_mana: 30,
                attack: 12,
                defense: 6,
                restore_rate: 10,
            },
            Class::Mage => PlayerStats {
                max_hp: 80,
                max_mana: 80,
                attack: 8,
                defense: 3,
                restore_rate: 15,
            },
            Class::Rogue => PlayerStats {
                max_hp: 100,
                max_mana: 50,
                attack: 10,
                defense: 4,
                restore_rate: 12,
            },
        }
    }
}
