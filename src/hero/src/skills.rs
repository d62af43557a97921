// src/hero/src/skills.rs
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::class::Class;

/// What a skill does when cast
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum SkillType {
    Attack,
    Heal,
    Buff,
    Debuff,
}

/// Immutable skill template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub description: String,
    pub kind: SkillType,
    pub required_level: u32,
    pub mana_cost: u32,
    /// Turns before the skill may be cast again
    pub cooldown: u32,
    pub damage_multiplier: f32,
    pub heal_amount: u32,
    pub buff_duration: u32,
}

impl Skill {
    pub fn attack(name: &str, level: u32, mana: u32, cooldown: u32, multiplier: f32) -> Self {
        Self::template(name, SkillType::Attack, level, mana, cooldown)
            .with(|s| s.damage_multiplier = multiplier)
    }

    pub fn heal(name: &str, level: u32, mana: u32, cooldown: u32, amount: u32) -> Self {
        Self::template(name, SkillType::Heal, level, mana, cooldown).with(|s| s.heal_amount = amount)
    }

    pub fn buff(name: &str, level: u32, mana: u32, cooldown: u32, duration: u32) -> Self {
        Self::template(name, SkillType::Buff, level, mana, cooldown)
            .with(|s| s.buff_duration = duration)
    }

    pub fn debuff(name: &str, level: u32, mana: u32, cooldown: u32, duration: u32) -> Self {
        Self::template(name, SkillType::Debuff, level, mana, cooldown)
            .with(|s| s.buff_duration = duration)
    }

    pub fn described(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    fn template(name: &str, kind: SkillType, level: u32, mana: u32, cooldown: u32) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            kind,
            required_level: level,
            mana_cost: mana,
            cooldown,
            damage_multiplier: 1.0,
            heal_amount: 0,
            buff_duration: 0,
        }
    }

    fn with(mut self, f: impl FnOnce(&mut Self)) -> Self {
        f(&mut self);
        self
    }
}

/// 技能状态：已学会的技能和剩余冷却回合
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillBook {
    learned: Vec<Skill>,
    cooldowns: HashMap<String, u32>,
}

impl SkillBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Learn a skill; returns false when it was already known
    pub fn learn(&mut self, skill: Skill) -> bool {
        if self.knows(&skill.name) {
            return false;
        }
        self.learned.push(skill);
        true
    }

    pub fn knows(&self, name: &str) -> bool {
        self.learned.iter().any(|s| s.name == name)
    }

    pub fn learned(&self) -> &[Skill] {
        &self.learned
    }

    pub fn get(&self, name: &str) -> Option<&Skill> {
        self.learned.iter().find(|s| s.name == name)
    }

    pub fn cooldown(&self, name: &str) -> u32 {
        self.cooldowns.get(name).copied().unwrap_or(0)
    }

    pub fn is_ready(&self, name: &str) -> bool {
        self.cooldown(name) == 0
    }

    pub fn start_cooldown(&mut self, name: &str, turns: u32) {
        if turns > 0 {
            self.cooldowns.insert(name.to_string(), turns);
        }
    }

    /// Decrement every running cooldown by one, never below zero
    pub fn tick_cooldowns(&mut self) {
        for remaining in self.cooldowns.values_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        self.cooldowns.retain(|_, remaining| *remaining > 0);
    }

    /// Skills that may be offered for selection at `level`: learned, level
    /// requirement met and off cooldown. Mana is checked when the skill is cast.
    pub fn available(&self, level: u32) -> Vec<Skill> {
        self.learned
            .iter()
            .filter(|s| s.required_level <= level && self.is_ready(&s.name))
            .cloned()
            .collect()
    }
}

/// Per-class skill trees
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    trees: HashMap<Class, Vec<Skill>>,
}

impl SkillCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in skill trees
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.register(
            Class::Warrior,
            vec![
                Skill::attack("Power Strike", 1, 10, 2, 1.5).described("A heavy two-handed blow."),
                Skill::heal("Second Wind", 2, 15, 4, 30).described("Catch your breath and recover."),
                Skill::buff("Battle Cry", 3, 10, 5, 3).described("A roar that steels the nerves."),
                Skill::attack("Cleave", 5, 20, 3, 2.0).described("A sweeping cut."),
            ],
        );
        catalog.register(
            Class::Mage,
            vec![
                Skill::attack("Fireball", 1, 15, 1, 2.0).described("Hurl a ball of flame."),
                Skill::heal("Mend", 1, 12, 3, 25).described("Knit wounds with light."),
                Skill::debuff("Frost Bind", 3, 10, 4, 2).described("Ice creeps over the foe."),
                Skill::attack("Arcane Surge", 5, 30, 4, 3.0).described("Raw arcane force."),
            ],
        );
        catalog.register(
            Class::Rogue,
            vec![
                Skill::attack("Backstab", 1, 10, 2, 1.8).described("Strike where it hurts."),
                Skill::buff("Smoke Veil", 2, 8, 4, 2).described("Vanish in a puff of smoke."),
                Skill::debuff("Crippling Poison", 3, 12, 4, 3).described("Slow, burning venom."),
                Skill::heal("Bandage", 4, 10, 5, 20).described("Patch yourself up."),
            ],
        );
        catalog
    }

    pub fn register(&mut self, class: Class, skills: Vec<Skill>) {
        self.trees.entry(class).or_default().extend(skills);
    }

    pub fn for_class(&self, class: Class) -> &[Skill] {
        self.trees.get(&class).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Skills of `class` whose level requirement is met at `level`
    pub fn unlocked_at(&self, class: Class, level: u32) -> impl Iterator<Item = &Skill> {
        self.for_class(class)
            .iter()
            .filter(move |s| s.required_level <= level)
    }

    pub fn find(&self, name: &str) -> Option<&Skill> {
        self.trees.values().flatten().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cooldown_tracking() {
        let mut book = SkillBook::new();
        book.learn(Skill::attack("Power Strike", 1, 10, 2, 1.5));

        book.start_cooldown("Power Strike", 3);
        assert_eq!(book.cooldown("Power Strike"), 3);
        assert!(!book.is_ready("Power Strike"));
        assert!(book.available(1).is_empty());

        for _ in 0..3 {
            book.tick_cooldowns();
        }
        assert_eq!(book.cooldown("Power Strike"), 0);
        assert_eq!(book.available(1).len(), 1);

        // ticking an idle book never underflows
        book.tick_cooldowns();
        assert_eq!(book.cooldown("Power Strike"), 0);
    }

    #[test]
    fn zero_cooldown_skill_is_always_ready() {
        let mut book = SkillBook::new();
        book.start_cooldown("Fireball", 0);
        assert!(book.is_ready("Fireball"));
    }

    #[test]
    fn learning_twice_is_ignored() {
        let mut book = SkillBook::new();
        assert!(book.learn(Skill::heal("Mend", 1, 12, 3, 25)));
        assert!(!book.learn(Skill::heal("Mend", 1, 12, 3, 25)));
        assert_eq!(book.learned().len(), 1);
    }

    #[test]
    fn available_respects_level() {
        let mut book = SkillBook::new();
        book.learn(Skill::attack("Cleave", 5, 20, 3, 2.0));
        assert!(book.available(4).is_empty());
        assert_eq!(book.available(5)[0].name, "Cleave");
    }

    #[test]
    fn catalog_unlocks_by_level() {
        let catalog = SkillCatalog::standard();
        let names: Vec<_> = catalog
            .unlocked_at(Class::Mage, 1)
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Fireball", "Mend"]);
        assert_eq!(catalog.unlocked_at(Class::Mage, 5).count(), 4);
        assert_eq!(catalog.find("Backstab").map(|s| s.kind), Some(SkillType::Attack));
    }
}
