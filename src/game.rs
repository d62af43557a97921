// src/game.rs
//! Encounter loop tying the engine to a player's profile.

use combat::{
    BattleConsole, BattleResult, BattleRng, CombatRules, CombatSession, LearnedSkills, Monster,
    MonsterKind, PlayerInventory, SeededRng,
};
use hero::{Player, SkillCatalog};
use items::{Item, catalog};
use quests::QuestLog;
use tracing::info;

use crate::profile::Profile;

/// Catalog items named by the monster's drop table; unknown names are skipped
pub fn drop_pool(monster: &Monster) -> Vec<Item> {
    monster
        .drop_table
        .iter()
        .filter_map(|name| catalog::find(name))
        .collect()
}

/// Player state plus everything needed to start the next battle
pub struct Game {
    pub player: Player,
    pub quests: QuestLog,
    rng: SeededRng,
    rules: CombatRules,
    skills: LearnedSkills,
    inventory: PlayerInventory,
}

impl Game {
    pub fn new(profile: Profile, rng: SeededRng, rules: CombatRules) -> Self {
        Self {
            player: profile.player,
            quests: profile.quests,
            rng,
            rules,
            skills: LearnedSkills::new(SkillCatalog::standard()),
            inventory: PlayerInventory,
        }
    }

    pub fn into_profile(self) -> Profile {
        Profile::new(self.player, self.quests)
    }

    /// A random monster the player's level allows
    pub fn random_monster(&mut self) -> Monster {
        let table = MonsterKind::encounter_table(self.player.level());
        let index = self.rng.pick(table.len());
        Monster::new(table.get(index).copied().unwrap_or(MonsterKind::Slime))
    }

    /// Fight one battle, then settle quests
    pub fn encounter(&mut self, console: &mut dyn BattleConsole, mut monster: Monster) -> BattleResult {
        let pool = drop_pool(&monster);
        let result = {
            let mut session = CombatSession::new(
                &mut self.rng,
                &mut *console,
                &mut self.quests,
                &mut self.inventory,
                &mut self.skills,
            )
            .with_rules(self.rules);
            if !pool.is_empty() {
                session = session.with_drop_pool(pool);
            }
            session.run(&mut self.player, &mut monster)
        };

        let completed = self.quests.drain_completed();
        if !completed.is_empty() {
            let gold = self.quests.reward_for(&completed);
            self.player.add_gold(gold);
            for title in &completed {
                console.narrate(&format!("Quest complete: {}!", title));
            }
            console.narrate(&format!("You receive {} gold in quest rewards.", gold));
            info!(quests = ?completed, gold, "quest rewards paid");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn drop_pool_follows_the_drop_table() {
        let names: Vec<String> = drop_pool(&Monster::new(MonsterKind::Goblin))
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["Healing Potion", "Iron Sword"]);
    }

    #[test]
    fn custom_monsters_have_no_pool() {
        assert!(drop_pool(&Monster::custom("Dummy", 1, 1, 0, 0, 0)).is_empty());
    }
}
