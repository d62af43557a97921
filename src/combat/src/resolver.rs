// src/combat/src/resolver.rs
use error::CombatError;
use hero::Player;
use tracing::{debug, warn};

use crate::CombatRules;
use crate::action::{BattleAction, TurnOutcome};
use crate::combatant::strike;
use crate::monster::Monster;
use crate::ports::BattleContext;
use crate::skill_invoker::SkillInvoker;

/// Resolves one player action, and the monster's answer to it
#[derive(Debug, Default, Clone, Copy)]
pub struct ActionResolver {
    rules: CombatRules,
    invoker: SkillInvoker,
}

impl ActionResolver {
    pub fn new(rules: CombatRules) -> Self {
        Self {
            rules,
            invoker: SkillInvoker::new(),
        }
    }

    pub fn rules(&self) -> &CombatRules {
        &self.rules
    }

    /// A rejected mutation aborts only this action: it is reported and the
    /// turn is not consumed. Any other error is returned to the caller.
    pub fn resolve(
        &self,
        action: BattleAction,
        player: &mut Player,
        monster: &mut Monster,
        ctx: &mut BattleContext<'_, '_>,
    ) -> Result<TurnOutcome, CombatError> {
        debug!(%action, "resolving player action");
        let result = match action {
            BattleAction::Attack => self.attack(player, monster, ctx),
            BattleAction::Skill => self.skill(player, monster, ctx),
            BattleAction::Item => self.item(player, ctx),
            BattleAction::Escape => self.escape(ctx),
        };

        match result {
            Err(e) if e.is_action_fatal_only() => {
                warn!(%action, error = %e, "action rejected");
                ctx.console.narrate(&format!("That did not work ({}).", e));
                Ok(TurnOutcome::free())
            }
            other => other,
        }
    }

    fn attack(
        &self,
        player: &mut Player,
        monster: &mut Monster,
        ctx: &mut BattleContext<'_, '_>,
    ) -> Result<TurnOutcome, CombatError> {
        let dealt = strike(&*player, monster, self.rules.attack_variance, &mut *ctx.rng)?;
        ctx.console
            .narrate(&format!("You hit the {} for {} damage!", monster.name, dealt));
        Ok(TurnOutcome::consumed())
    }

    fn skill(
        &self,
        player: &mut Player,
        monster: &mut Monster,
        ctx: &mut BattleContext<'_, '_>,
    ) -> Result<TurnOutcome, CombatError> {
        let skills = ctx.skills.list_available_skills(player);
        if skills.is_empty() {
            ctx.console.narrate("You have no skills ready.");
            return Ok(TurnOutcome::free());
        }

        let Some(skill) = ctx.console.choose_skill(&skills)?.and_then(|i| skills.get(i)) else {
            ctx.console.narrate("You decide against casting.");
            return Ok(TurnOutcome::free());
        };

        let outcome = self.invoker.invoke(skill, player, monster, ctx)?;
        Ok(if outcome.consumed_turn() {
            TurnOutcome::consumed()
        } else {
            TurnOutcome::free()
        })
    }

    fn item(
        &self,
        player: &mut Player,
        ctx: &mut BattleContext<'_, '_>,
    ) -> Result<TurnOutcome, CombatError> {
        let stacks = ctx.inventory.list_usable_consumables(player);
        if stacks.is_empty() {
            ctx.console.narrate("You have no usable items.");
            return Ok(TurnOutcome::free());
        }

        let Some(stack) = ctx.console.choose_item(&stacks)?.and_then(|i| stacks.get(i)) else {
            ctx.console.narrate("You put your bag away.");
            return Ok(TurnOutcome::free());
        };

        let (hp_before, mana_before) = (player.hp(), player.mana());
        if !ctx.inventory.use_item(stack.name(), player)? {
            ctx.console
                .narrate(&format!("The {} cannot be used right now.", stack.name()));
            return Ok(TurnOutcome::free());
        }

        ctx.console.narrate(&format!(
            "You use the {}. (+{} HP, +{} mana)",
            stack.name(),
            player.hp().saturating_sub(hp_before),
            player.mana().saturating_sub(mana_before)
        ));
        Ok(TurnOutcome::consumed())
    }

    fn escape(&self, ctx: &mut BattleContext<'_, '_>) -> Result<TurnOutcome, CombatError> {
        if ctx.rng.chance(self.rules.escape_chance) {
            ctx.console.narrate("You escaped safely!");
            Ok(TurnOutcome::escaped())
        } else {
            ctx.console.narrate("You failed to escape!");
            Ok(TurnOutcome::consumed())
        }
    }

    /// The monster's plain attack; returns the damage the player took
    pub fn counter_attack(
        &self,
        monster: &Monster,
        player: &mut Player,
        ctx: &mut BattleContext<'_, '_>,
    ) -> Result<u32, CombatError> {
        let dealt = strike(monster, player, self.rules.monster_attack_variance, &mut *ctx.rng)?;
        ctx.console
            .narrate(&format!("The {} hits you for {} damage!", monster.name, dealt));
        Ok(dealt)
    }
}
