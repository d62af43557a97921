// src/combat/src/lib.rs
//! Turn-based combat between one player and one monster.
//!
//! [`CombatSession`] drives the round loop; [`ActionResolver`],
//! [`SkillInvoker`] and [`RewardCalculator`] resolve the individual steps.
//! Everything the engine needs from the outside world (input, inventory,
//! skills, quests, randomness) is injected through the traits in [`ports`]
//! and [`rng`].

pub mod action;
pub mod combatant;
pub mod monster;
pub mod ports;
pub mod resolver;
pub mod reward;
pub mod rng;
pub mod session;
pub mod skill_invoker;


use serde::{Deserialize, Serialize};

pub use crate::action::{BattleAction, BattleResult, TurnOutcome};
pub use crate::combatant::Combatant;
pub use crate::monster::{Monster, MonsterKind, MonsterTemplate};
pub use crate::ports::{
    BattleConsole, BattleContext, InventoryPort, LearnedSkills, PlayerInventory, QuestTracker,
    SkillPort,
};
pub use crate::resolver::ActionResolver;
pub use crate::reward::{DropOutcome, RewardCalculator, RewardReport};
pub use crate::rng::{BattleRng, SeededRng};
pub use crate::session::CombatSession;
pub use crate::skill_invoker::{SkillInvoker, SkillOutcome};
pub use hero::mitigate;

/// Combat configuration constants
pub mod constants {
    pub const ATTACK_VARIANCE: u32 = 4; // player attack adds 0..=4
    pub const MONSTER_ATTACK_VARIANCE: u32 = 2; // monster attack adds 0..=2
    pub const ESCAPE_CHANCE: u32 = 50; // percent
    pub const DROP_CHANCE: u32 = 20; // percent
}

/// Tunable numbers used while resolving a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatRules {
    pub attack_variance: u32,
    pub monster_attack_variance: u32,
    pub escape_chance: u32,
    pub drop_chance: u32,
}

impl Default for CombatRules {
    fn default() -> Self {
        Self {
            attack_variance: constants::ATTACK_VARIANCE,
            monster_attack_variance: constants::MONSTER_ATTACK_VARIANCE,
            escape_chance: constants::ESCAPE_CHANCE,
            drop_chance: constants::DROP_CHANCE,
        }
    }
}

impl CombatRules {
    /// Clamp percentages into 0..=100
    pub fn normalized(mut self) -> Self {
        self.escape_chance = self.escape_chance.min(100);
        self.drop_chance = self.drop_chance.min(100);
        self
    }
}
