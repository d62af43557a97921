// src/combat/src/reward.rs
use error::{CombatError, InventoryError};
use hero::Player;
use items::Item;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::CombatRules;
use crate::monster::Monster;
use crate::ports::BattleContext;

/// What happened to a rolled item drop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropOutcome {
    pub item: String,
    /// False when the inventory was full and the item was left behind
    pub kept: bool,
}

/// Everything a victory granted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardReport {
    pub exp: u32,
    pub gold: u32,
    pub levels_gained: u32,
    pub unlocked_skills: Vec<String>,
    pub drop: Option<DropOutcome>,
}

/// Hands out experience, gold and item drops after a victory
#[derive(Debug, Clone)]
pub struct RewardCalculator {
    drop_chance: u32,
    drop_pool: Vec<Item>,
}

impl Default for RewardCalculator {
    fn default() -> Self {
        Self::new(CombatRules::default())
    }
}

impl RewardCalculator {
    pub fn new(rules: CombatRules) -> Self {
        Self::with_drop_pool(rules, items::catalog::drop_pool())
    }

    pub fn with_drop_pool(rules: CombatRules, drop_pool: Vec<Item>) -> Self {
        Self {
            drop_chance: rules.drop_chance,
            drop_pool,
        }
    }

    /// Take the drop chance from `rules`, keeping the current pool
    pub fn set_rules(&mut self, rules: CombatRules) {
        self.drop_chance = rules.drop_chance;
    }

    pub fn grant(
        &self,
        player: &mut Player,
        monster: &Monster,
        ctx: &mut BattleContext<'_, '_>,
    ) -> Result<RewardReport, CombatError> {
        let mut report = RewardReport {
            exp: monster.exp_reward,
            gold: monster.gold_reward,
            ..Default::default()
        };

        report.levels_gained = player.gain_exp(monster.exp_reward as i64)?;
        ctx.console
            .narrate(&format!("You gain {} experience.", monster.exp_reward));
        if report.levels_gained > 0 {
            info!(level = player.level(), "player leveled up");
            ctx.console
                .narrate(&format!("Level up! You are now level {}.", player.level()));
            report.unlocked_skills = ctx.skills.unlock_skills(player);
            for name in &report.unlocked_skills {
                ctx.console.narrate(&format!("You learned {}!", name));
            }
        }

        let gold = player.gold() as i64 + monster.gold_reward as i64;
        player.set_gold(gold)?;
        ctx.console
            .narrate(&format!("You pick up {} gold.", monster.gold_reward));

        report.drop = self.roll_drop(player, ctx)?;
        debug!(?report, "rewards granted");
        Ok(report)
    }

    fn roll_drop(
        &self,
        player: &mut Player,
        ctx: &mut BattleContext<'_, '_>,
    ) -> Result<Option<DropOutcome>, CombatError> {
        if self.drop_pool.is_empty() || !ctx.rng.chance(self.drop_chance) {
            return Ok(None);
        }

        let index = ctx.rng.pick(self.drop_pool.len());
        let item = self.drop_pool.get(index).cloned().ok_or_else(|| {
            CombatError::InvalidState(format!("drop index {} out of range", index))
        })?;
        let name = item.name.clone();
        ctx.console
            .narrate(&format!("The monster dropped a {}!", name));

        let kept = match ctx.inventory.store_drop(player, item) {
            Ok(()) => true,
            Err(InventoryError::Full) => {
                ctx.console
                    .narrate(&format!("Your inventory is full; the {} is left behind.", name));
                false
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Some(DropOutcome { item: name, kept }))
    }
}
