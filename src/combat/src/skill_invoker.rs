// src/combat/src/skill_invoker.rs
use error::CombatError;
use hero::{Player, Skill, SkillType};
use tracing::debug;

use crate::monster::Monster;
use crate::ports::BattleContext;

/// Result of trying to cast one skill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillOutcome {
    /// Not cast; nothing was spent
    InsufficientMana { needed: u32, available: u32 },
    Damaged(u32),
    Healed(u32),
    /// Buff or debuff: narrated only, no stat changes
    Applied,
}

impl SkillOutcome {
    /// Whether the cast used up the player's turn
    pub fn consumed_turn(&self) -> bool {
        !matches!(self, SkillOutcome::InsufficientMana { .. })
    }
}

/// Casts skills: mana check, effect dispatch, cooldown bookkeeping
#[derive(Debug, Default, Clone, Copy)]
pub struct SkillInvoker;

impl SkillInvoker {
    pub fn new() -> Self {
        Self
    }

    pub fn invoke(
        &self,
        skill: &Skill,
        player: &mut Player,
        monster: &mut Monster,
        ctx: &mut BattleContext<'_, '_>,
    ) -> Result<SkillOutcome, CombatError> {
        let available = player.mana();
        if !player.use_mana(skill.mana_cost as i64)? {
            ctx.console.narrate(&format!(
                "Not enough mana for {} ({} needed, {} left).",
                skill.name, skill.mana_cost, available
            ));
            return Ok(SkillOutcome::InsufficientMana {
                needed: skill.mana_cost,
                available,
            });
        }

        // mana stays spent even when the effect does nothing
        let outcome = match skill.kind {
            SkillType::Attack => {
                let raw = (player.effective_attack() as f32 * skill.damage_multiplier) as u32;
                let dealt = monster.take_damage(raw as i64)?;
                ctx.console.narrate(&format!(
                    "You cast {}! The {} takes {} damage.",
                    skill.name, monster.name, dealt
                ));
                SkillOutcome::Damaged(dealt)
            }
            SkillType::Heal => {
                let healed = player.heal(skill.heal_amount as i64)?;
                ctx.console
                    .narrate(&format!("You cast {} and recover {} HP.", skill.name, healed));
                SkillOutcome::Healed(healed)
            }
            SkillType::Buff => {
                ctx.console.narrate(&format!(
                    "You cast {}. You feel empowered for {} turns.",
                    skill.name, skill.buff_duration
                ));
                SkillOutcome::Applied
            }
            SkillType::Debuff => {
                ctx.console.narrate(&format!(
                    "You cast {}. The {} is weakened for {} turns.",
                    skill.name, monster.name, skill.buff_duration
                ));
                SkillOutcome::Applied
            }
        };

        ctx.skills.start_cooldown(player, skill);
        debug!(skill = %skill.name, ?outcome, mana_left = player.mana(), "skill cast");
        Ok(outcome)
    }
}
