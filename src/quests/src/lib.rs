//! Kill-quest tracking
//!
//! [`QuestLog`] listens for kills reported by a combat session and completes
//! quests as their counts are reached.

pub mod quest;

#[cfg(test)]
mod tests;

pub use quest::{KillQuest, starter_quests};

use combat::QuestTracker;
use serde::{Deserialize, Serialize};
use tracing::info;

/// The player's quests and lifetime kill count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestLog {
    quests: Vec<KillQuest>,
    kills: u32,
    /// Completed since the last drain, for announcements
    #[serde(skip)]
    newly_completed: Vec<String>,
}

impl QuestLog {
    pub fn new() -> Self {
        Self::with_quests(starter_quests())
    }

    pub fn with_quests(quests: Vec<KillQuest>) -> Self {
        Self {
            quests,
            kills: 0,
            newly_completed: Vec::new(),
        }
    }

    pub fn quests(&self) -> &[KillQuest] {
        &self.quests
    }

    pub fn get(&self, title: &str) -> Option<&KillQuest> {
        self.quests.iter().find(|q| q.title == title)
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    pub fn active(&self) -> impl Iterator<Item = &KillQuest> {
        self.quests.iter().filter(|q| !q.completed)
    }

    pub fn completed(&self) -> impl Iterator<Item = &KillQuest> {
        self.quests.iter().filter(|q| q.completed)
    }

    /// Count a kill against every matching quest.
    /// Returns the quests this kill completed.
    pub fn record_kill(&mut self, monster_name: &str) -> Vec<KillQuest> {
        self.kills = self.kills.saturating_add(1);

        let mut done = Vec::new();
        for quest in self.quests.iter_mut() {
            if quest.record_kill(monster_name) {
                info!(quest = %quest.title, "quest completed");
                self.newly_completed.push(quest.title.clone());
                done.push(quest.clone());
            }
        }
        done
    }

    /// Titles completed since the last call, clearing the list
    pub fn drain_completed(&mut self) -> Vec<String> {
        std::mem::take(&mut self.newly_completed)
    }

    /// Gold owed for the given completed quest titles
    pub fn reward_for(&self, titles: &[String]) -> u32 {
        self.quests
            .iter()
            .filter(|q| q.completed && titles.contains(&q.title))
            .map(|q| q.reward_gold)
            .sum()
    }

    pub fn completion(&self) -> f32 {
        if self.quests.is_empty() {
            return 0.0;
        }
        self.completed().count() as f32 / self.quests.len() as f32
    }
}

impl Default for QuestLog {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestTracker for QuestLog {
    fn notify_kill(&mut self, monster_name: &str) {
        self.record_kill(monster_name);
    }
}
