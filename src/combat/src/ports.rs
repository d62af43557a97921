// src/combat/src/ports.rs
//! Collaborators the engine talks to but does not own.

use error::{CombatError, InventoryError};
use hero::{Player, Skill, SkillCatalog};
use items::{Item, ItemStack};

use crate::action::BattleAction;
use crate::monster::Monster;
use crate::rng::BattleRng;

/// Player-facing input and output of a battle
pub trait BattleConsole {
    /// Show both combatants before the player picks an action
    fn show_status(&mut self, _player: &Player, _monster: &Monster) {}

    /// Blocking; invalid input is expected to come back as `Attack`
    fn choose_action(&mut self) -> Result<BattleAction, CombatError>;

    /// Index into `skills`, or `None` to back out
    fn choose_skill(&mut self, skills: &[Skill]) -> Result<Option<usize>, CombatError>;

    /// Index into `items`, or `None` to back out
    fn choose_item(&mut self, items: &[ItemStack]) -> Result<Option<usize>, CombatError>;

    /// One line of battle narration
    fn narrate(&mut self, line: &str);
}

/// Receives kill notifications for quest progress
pub trait QuestTracker {
    fn notify_kill(&mut self, monster_name: &str);
}

pub trait InventoryPort {
    fn list_usable_consumables(&self, player: &Player) -> Vec<ItemStack>;

    /// Use one item from the named stack on `player`.
    /// `Ok(false)` means nothing was used.
    fn use_item(&mut self, name: &str, player: &mut Player) -> Result<bool, CombatError>;

    /// Put a battle drop into the player's inventory
    fn store_drop(&mut self, player: &mut Player, item: Item) -> Result<(), InventoryError>;
}

pub trait SkillPort {
    /// Skills that may be offered this turn
    fn list_available_skills(&self, player: &Player) -> Vec<Skill>;

    fn start_cooldown(&mut self, player: &mut Player, skill: &Skill);

    /// Called exactly once at the end of every round
    fn advance_cooldowns(&mut self, player: &mut Player);

    /// Learn whatever the player's level now allows; returns new skill names
    fn unlock_skills(&mut self, player: &mut Player) -> Vec<String>;
}

/// The collaborators one resolution step needs, borrowed from the session
pub struct BattleContext<'s, 'a> {
    pub rng: &'s mut (dyn BattleRng + 'a),
    pub console: &'s mut (dyn BattleConsole + 'a),
    pub inventory: &'s mut (dyn InventoryPort + 'a),
    pub skills: &'s mut (dyn SkillPort + 'a),
}

/// Uses the player's own inventory
#[derive(Debug, Default, Clone, Copy)]
pub struct PlayerInventory;

impl InventoryPort for PlayerInventory {
    fn list_usable_consumables(&self, player: &Player) -> Vec<ItemStack> {
        player.inventory.consumables()
    }

    fn use_item(&mut self, name: &str, player: &mut Player) -> Result<bool, CombatError> {
        let Some(stack) = player.inventory.get(name) else {
            return Ok(false);
        };
        let item = stack.item.clone();
        match player.consume(&item) {
            Ok(_) => {
                player.inventory.take_one(name)?;
                Ok(true)
            }
            Err(InventoryError::NotConsumable(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn store_drop(&mut self, player: &mut Player, item: Item) -> Result<(), InventoryError> {
        player.inventory.add(item)
    }
}

/// Uses the player's skill book, learning new skills from a catalog
#[derive(Debug, Clone, Default)]
pub struct LearnedSkills {
    catalog: SkillCatalog,
}

impl LearnedSkills {
    pub fn new(catalog: SkillCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }
}

impl SkillPort for LearnedSkills {
    fn list_available_skills(&self, player: &Player) -> Vec<Skill> {
        player.skills.available(player.level())
    }

    fn start_cooldown(&mut self, player: &mut Player, skill: &Skill) {
        player.skills.start_cooldown(&skill.name, skill.cooldown);
    }

    fn advance_cooldowns(&mut self, player: &mut Player) {
        player.skills.tick_cooldowns();
    }

    fn unlock_skills(&mut self, player: &mut Player) -> Vec<String> {
        player.learn_unlocked_skills(&self.catalog)
    }
}
