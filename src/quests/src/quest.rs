//! Kill quest definitions

use serde::{Deserialize, Serialize};

/// Slay a number of monsters, optionally of one kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillQuest {
    pub title: String,
    /// Monster name to hunt; `None` counts every kill
    pub target: Option<String>,
    pub required: u32,
    pub progress: u32,
    pub reward_gold: u32,
    pub completed: bool,
}

impl KillQuest {
    pub fn new(title: impl Into<String>, target: &str, required: u32, reward_gold: u32) -> Self {
        Self {
            title: title.into(),
            target: Some(target.to_string()),
            required: required.max(1),
            progress: 0,
            reward_gold,
            completed: false,
        }
    }

    /// A quest that any kill advances
    pub fn any(title: impl Into<String>, required: u32, reward_gold: u32) -> Self {
        Self {
            target: None,
            ..Self::new(title, "", required, reward_gold)
        }
    }

    pub fn matches(&self, monster_name: &str) -> bool {
        self.target
            .as_deref()
            .is_none_or(|target| target.eq_ignore_ascii_case(monster_name))
    }

    /// Count one kill. Returns true when this kill completed the quest.
    pub fn record_kill(&mut self, monster_name: &str) -> bool {
        if self.completed || !self.matches(monster_name) {
            return false;
        }
        self.progress = (self.progress + 1).min(self.required);
        self.completed = self.progress >= self.required;
        self.completed
    }

    pub fn remaining(&self) -> u32 {
        self.required - self.progress
    }
}

/// Quests offered to a fresh profile
pub fn starter_quests() -> Vec<KillQuest> {
    vec![
        KillQuest::any("First Blood", 1, 10),
        KillQuest::new("Slime Cleanup", "Slime", 3, 15),
        KillQuest::new("Goblin Menace", "Goblin", 5, 40),
        KillQuest::new("Wolf Pack", "Wolf", 3, 30),
        KillQuest::any("Monster Hunter", 25, 150),
    ]
}
