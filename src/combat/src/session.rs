// src/combat/src/session.rs
//! The battle loop.

use error::CombatError;
use hero::Player;
use items::Item;
use tracing::{error, info, warn};

use crate::CombatRules;
use crate::action::BattleResult;
use crate::monster::Monster;
use crate::ports::{BattleConsole, BattleContext, InventoryPort, QuestTracker, SkillPort};
use crate::resolver::ActionResolver;
use crate::reward::{RewardCalculator, RewardReport};
use crate::rng::BattleRng;

/// One encounter between a player and a monster.
///
/// A session runs once. It borrows its collaborators for its whole lifetime
/// and is the only writer of both combatants while [`CombatSession::run`]
/// is in progress.
pub struct CombatSession<'a> {
    rng: &'a mut dyn BattleRng,
    console: &'a mut dyn BattleConsole,
    quests: &'a mut dyn QuestTracker,
    inventory: &'a mut dyn InventoryPort,
    skills: &'a mut dyn SkillPort,
    resolver: ActionResolver,
    rewards: RewardCalculator,
    rounds: u32,
    finished: bool,
    reward: Option<RewardReport>,
}

impl<'a> CombatSession<'a> {
    pub fn new(
        rng: &'a mut dyn BattleRng,
        console: &'a mut dyn BattleConsole,
        quests: &'a mut dyn QuestTracker,
        inventory: &'a mut dyn InventoryPort,
        skills: &'a mut dyn SkillPort,
    ) -> Self {
        let rules = CombatRules::default();
        Self {
            rng,
            console,
            quests,
            inventory,
            skills,
            resolver: ActionResolver::new(rules),
            rewards: RewardCalculator::new(rules),
            rounds: 0,
            finished: false,
            reward: None,
        }
    }

    pub fn with_rules(mut self, rules: CombatRules) -> Self {
        let rules = rules.normalized();
        self.resolver = ActionResolver::new(rules);
        self.rewards.set_rules(rules);
        self
    }

    /// Items a victory may drop; rules set before or after still apply
    pub fn with_drop_pool(mut self, pool: Vec<Item>) -> Self {
        self.rewards = RewardCalculator::with_drop_pool(*self.resolver.rules(), pool);
        self
    }

    /// Rounds started so far
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Rewards granted by a victory
    pub fn reward(&self) -> Option<&RewardReport> {
        self.reward.as_ref()
    }

    /// Fight until one side falls or the player escapes.
    ///
    /// Errors never escape: they are logged, reported to the player and turned
    /// into [`BattleResult::Error`], and no rewards are handed out.
    pub fn run(&mut self, player: &mut Player, monster: &mut Monster) -> BattleResult {
        if self.finished {
            error!("combat session reused after it finished");
            return BattleResult::Error;
        }
        self.finished = true;

        info!(player = %player.name, monster = %monster.name, "battle started");
        let result = match self.fight(player, monster) {
            Ok(result) => result,
            Err(e) => {
                error!(error = %e, round = self.rounds, "battle aborted");
                self.console
                    .narrate("Sorry, something went wrong. The battle has been abandoned.");
                BattleResult::Error
            }
        };
        info!(%result, rounds = self.rounds, "battle finished");
        result
    }

    fn split(&mut self) -> (&ActionResolver, &RewardCalculator, BattleContext<'_, 'a>) {
        (
            &self.resolver,
            &self.rewards,
            BattleContext {
                rng: &mut *self.rng,
                console: &mut *self.console,
                inventory: &mut *self.inventory,
                skills: &mut *self.skills,
            },
        )
    }

    fn fight(&mut self, player: &mut Player, monster: &mut Monster) -> Result<BattleResult, CombatError> {
        if !monster.is_alive() {
            return Err(CombatError::InvalidState(format!(
                "{} is already dead",
                monster.name
            )));
        }
        if !player.is_alive() {
            warn!("battle started with a fallen player");
            return Ok(BattleResult::Defeat);
        }

        self.console
            .narrate(&format!("A wild {} appears!", monster.name));

        loop {
            self.rounds += 1;
            self.console.show_status(player, monster);
            let action = self.console.choose_action()?;

            let (resolver, _, mut ctx) = self.split();
            let outcome = resolver.resolve(action, player, monster, &mut ctx)?;

            if !outcome.escaped && monster.is_alive() && outcome.consumed {
                resolver.counter_attack(monster, player, &mut ctx)?;
            }

            // every round ticks, whatever the action or result
            self.skills.advance_cooldowns(player);

            if outcome.escaped {
                self.regenerate(player);
                return Ok(BattleResult::Escaped);
            }

            if !monster.is_alive() {
                self.victory(player, monster)?;
                return Ok(BattleResult::Victory);
            }
            if !player.is_alive() {
                self.console.narrate("You have been defeated...");
                return Ok(BattleResult::Defeat);
            }
        }
    }

    fn victory(&mut self, player: &mut Player, monster: &Monster) -> Result<(), CombatError> {
        self.console
            .narrate(&format!("You defeated the {}!", monster.name));

        let (_, rewards, mut ctx) = self.split();
        let report = rewards.grant(player, monster, &mut ctx)?;
        self.reward = Some(report);

        self.quests.notify_kill(&monster.name);
        self.regenerate(player);
        Ok(())
    }

    fn regenerate(&mut self, player: &mut Player) {
        let (hp, mana) = player.regenerate();
        if hp > 0 || mana > 0 {
            self.console
                .narrate(&format!("You catch your breath (+{} HP, +{} mana).", hp, mana));
        }
    }
}
