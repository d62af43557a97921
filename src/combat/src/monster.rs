// src/combat/src/monster.rs

use error::StatError;
use hero::mitigate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// 怪物种类，决定基础属性
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
pub enum MonsterKind {
    Slime,
    Goblin,
    Wolf,
    Skeleton,
    Orc,
    Troll,
    Dragon,
}

impl MonsterKind {
    /// Lowest player level at which this monster shows up in random encounters
    pub fn min_level(&self) -> u32 {
        match self {
            MonsterKind::Slime | MonsterKind::Goblin => 1,
            MonsterKind::Wolf => 2,
            MonsterKind::Skeleton => 3,
            MonsterKind::Orc => 4,
            MonsterKind::Troll => 6,
            MonsterKind::Dragon => 10,
        }
    }

    /// Monsters a player of `level` can run into
    pub fn encounter_table(level: u32) -> Vec<MonsterKind> {
        use strum::IntoEnumIterator;
        MonsterKind::iter().filter(|k| k.min_level() <= level).collect()
    }

    pub fn template(&self) -> MonsterTemplate {
        // (hp, attack, defense, speed, crit, exp, gold)
        let (hp, attack, defense, speed, critical_rate, exp_reward, gold_reward) = match self {
            MonsterKind::Slime => (20, 5, 1, 3, 0.0, 10, 5),
            MonsterKind::Goblin => (30, 8, 2, 6, 0.05, 18, 12),
            MonsterKind::Wolf => (35, 10, 3, 9, 0.1, 22, 8),
            MonsterKind::Skeleton => (45, 12, 5, 5, 0.05, 30, 15),
            MonsterKind::Orc => (60, 15, 6, 5, 0.08, 45, 25),
            MonsterKind::Troll => (90, 18, 8, 3, 0.05, 70, 40),
            MonsterKind::Dragon => (200, 28, 14, 7, 0.15, 200, 150),
        };
        let (abilities, drop_table) = match self {
            MonsterKind::Slime => (vec!["Ooze"], vec!["Healing Potion"]),
            MonsterKind::Goblin => (vec!["Dirty Trick"], vec!["Healing Potion", "Iron Sword"]),
            MonsterKind::Wolf => (vec!["Howl"], vec!["Healing Potion"]),
            MonsterKind::Skeleton => (vec!["Bone Shield"], vec!["Mana Potion"]),
            MonsterKind::Orc => (vec!["Rage"], vec!["Healing Potion", "Leather Armor"]),
            MonsterKind::Troll => (vec!["Regenerate"], vec!["Elixir"]),
            MonsterKind::Dragon => (vec!["Fire Breath", "Tail Sweep"], vec!["Elixir", "Lucky Charm"]),
        };

        MonsterTemplate {
            name: self.to_string(),
            kind: *self,
            hp,
            attack,
            defense,
            speed,
            critical_rate,
            exp_reward,
            gold_reward,
            abilities: abilities.iter().map(|s| s.to_string()).collect(),
            drop_table: drop_table.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Static monster data, as stored in a catalog file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterTemplate {
    pub name: String,
    pub kind: MonsterKind,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    #[serde(default)]
    pub speed: u32,
    #[serde(default)]
    pub critical_rate: f32,
    pub exp_reward: u32,
    pub gold_reward: u32,
    #[serde(default)]
    pub abilities: Vec<String>,
    #[serde(default)]
    pub drop_table: Vec<String>,
}

/// 怪物实体：每次遭遇新建，战斗结束后丢弃
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    pub kind: MonsterKind,
    hp: u32,
    max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub critical_rate: f32,
    pub exp_reward: u32,
    pub gold_reward: u32,
    pub abilities: Vec<String>,
    pub drop_table: Vec<String>,
}

impl Monster {
    pub fn new(kind: MonsterKind) -> Self {
        Self::from_template(&kind.template())
    }

    pub fn from_template(template: &MonsterTemplate) -> Self {
        Self {
            name: template.name.clone(),
            kind: template.kind,
            hp: template.hp,
            max_hp: template.hp,
            attack: template.attack,
            defense: template.defense,
            speed: template.speed,
            critical_rate: template.critical_rate,
            exp_reward: template.exp_reward,
            gold_reward: template.gold_reward,
            abilities: template.abilities.clone(),
            drop_table: template.drop_table.clone(),
        }
    }

    /// Ad-hoc monster with the given combat stats
    pub fn custom(name: &str, hp: u32, attack: u32, defense: u32, exp: u32, gold: u32) -> Self {
        Self::from_template(&MonsterTemplate {
            name: name.to_string(),
            kind: MonsterKind::Slime,
            hp,
            attack,
            defense,
            speed: 0,
            critical_rate: 0.0,
            exp_reward: exp,
            gold_reward: gold,
            abilities: Vec::new(),
            drop_table: Vec::new(),
        })
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Take `raw` damage reduced by defense; returns the damage dealt
    pub fn take_damage(&mut self, raw: i64) -> Result<u32, StatError> {
        if raw < 0 {
            return Err(StatError::negative("damage", raw));
        }
        let raw = raw.min(u32::MAX as i64) as u32;
        let actual = mitigate(raw, self.defense);
        self.hp = self.hp.saturating_sub(actual);
        Ok(actual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn fresh_monster_has_full_hp() {
        let goblin = Monster::new(MonsterKind::Goblin);
        assert_eq!(goblin.name, "Goblin");
        assert_eq!(goblin.hp(), goblin.max_hp());
        assert!(goblin.is_alive());
    }

    #[test]
    fn take_damage_uses_defense_and_floor() {
        let mut m = Monster::custom("Dummy", 20, 5, 2, 0, 0);
        assert_eq!(m.take_damage(10), Ok(8));
        assert_eq!(m.take_damage(0), Ok(1));
        assert_eq!(m.hp(), 11);
        assert!(m.take_damage(-4).is_err());
        assert_eq!(m.hp(), 11);

        m.take_damage(1000).unwrap();
        assert_eq!(m.hp(), 0);
        assert!(!m.is_alive());
    }

    #[test]
    fn encounter_table_grows_with_level() {
        assert_eq!(
            MonsterKind::encounter_table(1),
            vec![MonsterKind::Slime, MonsterKind::Goblin]
        );
        assert!(MonsterKind::encounter_table(10).contains(&MonsterKind::Dragon));
    }

    #[test]
    fn template_loads_from_json() {
        let json = r#"{
            "name": "Cave Bat",
            "kind": "Wolf",
            "hp": 12,
            "attack": 4,
            "defense": 0,
            "exp_reward": 6,
            "gold_reward": 2
        }"#;
        let template: MonsterTemplate = serde_json::from_str(json).unwrap();
        let bat = Monster::from_template(&template);
        assert_eq!(bat.name, "Cave Bat");
        assert_eq!(bat.hp(), 12);
        assert!(bat.abilities.is_empty());
    }

    #[test]
    fn kind_parses_from_name() {
        assert_eq!(MonsterKind::from_str("orc").unwrap(), MonsterKind::Orc);
    }
}
