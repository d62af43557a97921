// src/hero/src/player.rs
use error::{InventoryError, StatError};
use items::{Inventory, Item, ItemEffect};
use serde::{Deserialize, Serialize};

use crate::{
    EXP_PER_LEVEL, MIN_DAMAGE,
    class::{Class, PlayerStats},
    equipment::{EquipError, Equipment},
    growth,
    skills::{SkillBook, SkillCatalog},
};

/// Damage left after defense, never below [`MIN_DAMAGE`]
pub fn mitigate(raw: u32, defense: u32) -> u32 {
    raw.saturating_sub(defense).max(MIN_DAMAGE)
}

/// Experience needed to advance past `level`
pub fn level_threshold(level: u32) -> u32 {
    level.max(1) * EXP_PER_LEVEL
}

fn non_negative(what: &'static str, amount: i64) -> Result<u32, StatError> {
    if amount < 0 {
        return Err(StatError::negative(what, amount));
    }
    Ok(amount.min(u32::MAX as i64) as u32)
}

/// 英雄核心数据结构
///
/// Stats are private: every change goes through a mutator so that
/// `0 <= hp <= effective_max_hp` and `0 <= mana <= max_mana` always hold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub class: Class,
    hp: u32,
    max_hp: u32,
    mana: u32,
    max_mana: u32,
    base_attack: u32,
    base_defense: u32,
    level: u32,
    exp: u32,
    gold: u32,
    restore_rate: u32,

    pub equipment: Equipment,
    pub inventory: Inventory,
    pub skills: SkillBook,
}

impl Player {
    /// 创建新英雄，并学会当前等级可用的职业技能
    pub fn new(name: &str, class: Class, catalog: &SkillCatalog) -> Self {
        let mut player = Self::from_stats(name, class, class.base_stats());
        for skill in catalog.unlocked_at(class, player.level) {
            player.skills.learn(skill.clone());
        }
        player
    }

    /// A level-1 character with explicit stats and no skills
    pub fn from_stats(name: &str, class: Class, stats: PlayerStats) -> Self {
        Self {
            name: name.to_string(),
            class,
            hp: stats.max_hp,
            max_hp: stats.max_hp,
            mana: stats.max_mana,
            max_mana: stats.max_mana,
            base_attack: stats.attack,
            base_defense: stats.defense,
            level: 1,
            exp: 0,
            gold: 0,
            restore_rate: stats.restore_rate.max(1),
            equipment: Equipment::new(),
            inventory: Inventory::default(),
            skills: SkillBook::new(),
        }
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn mana(&self) -> u32 {
        self.mana
    }

    pub fn max_mana(&self) -> u32 {
        self.max_mana
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn exp(&self) -> u32 {
        self.exp
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn restore_rate(&self) -> u32 {
        self.restore_rate
    }

    /// 攻击力（基础 + 装备加成）
    pub fn effective_attack(&self) -> u32 {
        self.base_attack + self.equipment.bonus().attack
    }

    /// 防御力（基础 + 装备加成）
    pub fn effective_defense(&self) -> u32 {
        self.base_defense + self.equipment.bonus().defense
    }

    pub fn effective_max_hp(&self) -> u32 {
        self.max_hp + self.equipment.bonus().hp
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Take a hit of `raw` damage, reduced by effective defense.
    /// Returns the damage actually dealt.
    pub fn take_damage(&mut self, raw: i64) -> Result<u32, StatError> {
        let raw = non_negative("damage", raw)?;
        let actual = mitigate(raw, self.effective_defense());
        self.hp = self.hp.saturating_sub(actual);
        Ok(actual)
    }

    /// 治疗（不超过最大HP），返回实际恢复量
    pub fn heal(&mut self, amount: i64) -> Result<u32, StatError> {
        let amount = non_negative("heal", amount)?;
        let healed = amount.min(self.effective_max_hp().saturating_sub(self.hp));
        self.hp += healed;
        Ok(healed)
    }

    /// Spend mana. `Ok(false)` leaves the pool untouched when it is too small.
    pub fn use_mana(&mut self, amount: i64) -> Result<bool, StatError> {
        let amount = non_negative("mana", amount)?;
        if amount > self.mana {
            return Ok(false);
        }
        self.mana -= amount;
        Ok(true)
    }

    pub fn restore_mana(&mut self, amount: i64) -> Result<u32, StatError> {
        let amount = non_negative("mana", amount)?;
        let restored = amount.min(self.max_mana.saturating_sub(self.mana));
        self.mana += restored;
        Ok(restored)
    }

    /// Add experience and level up as many times as it covers.
    /// Returns the number of levels gained.
    pub fn gain_exp(&mut self, amount: i64) -> Result<u32, StatError> {
        let amount = non_negative("experience", amount)?;
        self.exp = self.exp.saturating_add(amount);

        let mut levels = 0;
        while self.exp >= level_threshold(self.level) {
            self.exp -= level_threshold(self.level);
            self.level_up();
            levels += 1;
        }
        Ok(levels)
    }

    pub fn set_gold(&mut self, amount: i64) -> Result<(), StatError> {
        self.gold = non_negative("gold", amount)?;
        Ok(())
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// 升级系统
    fn level_up(&mut self) {
        self.level += 1;
        self.max_hp += growth::MAX_HP;
        self.max_mana += growth::MAX_MANA;
        self.base_attack += growth::ATTACK;
        self.base_defense += growth::DEFENSE;
        self.restore_rate += growth::RESTORE_RATE;

        self.hp = self.effective_max_hp();
        self.mana = self.max_mana;
    }

    /// Learn every catalog skill the current level allows.
    /// Returns the names of newly learned skills.
    pub fn learn_unlocked_skills(&mut self, catalog: &SkillCatalog) -> Vec<String> {
        catalog
            .unlocked_at(self.class, self.level)
            .filter(|skill| self.skills.learn((*skill).clone()))
            .map(|skill| skill.name.clone())
            .collect()
    }

    /// Post-battle recovery: `effective_max * restore_rate / 100` of HP and
    /// mana, at least 1 point each. Returns `(hp, mana)` actually restored.
    pub fn regenerate(&mut self) -> (u32, u32) {
        let hp_gain = (self.effective_max_hp() * self.restore_rate / 100).max(1);
        let mana_gain = (self.max_mana * self.restore_rate / 100).max(1);

        let healed = hp_gain.min(self.effective_max_hp().saturating_sub(self.hp));
        self.hp += healed;
        let restored = mana_gain.min(self.max_mana.saturating_sub(self.mana));
        self.mana += restored;
        (healed, restored)
    }

    /// Apply a consumable's effects to this player.
    /// Returns `(hp healed, mana restored)`.
    pub fn consume(&mut self, item: &Item) -> Result<(u32, u32), InventoryError> {
        if !item.is_consumable() {
            return Err(InventoryError::NotConsumable(item.name.clone()));
        }

        let (mut healed, mut restored) = (0, 0);
        for effect in item.effects() {
            match *effect {
                ItemEffect::Heal(amount) => {
                    let gain = amount.min(self.effective_max_hp().saturating_sub(self.hp));
                    self.hp += gain;
                    healed += gain;
                }
                ItemEffect::RestoreMana(amount) => {
                    let gain = amount.min(self.max_mana.saturating_sub(self.mana));
                    self.mana += gain;
                    restored += gain;
                }
            }
        }
        Ok((healed, restored))
    }

    /// Wear an item, returning the one it replaced
    pub fn equip(&mut self, item: Item) -> Result<Option<Item>, EquipError> {
        let old = self.equipment.equip(item)?;
        self.clamp_hp();
        Ok(old)
    }

    pub fn unequip(&mut self, slot: items::EquipSlot) -> Result<Item, EquipError> {
        let item = self.equipment.unequip(slot)?;
        self.clamp_hp();
        Ok(item)
    }

    fn clamp_hp(&mut self) {
        self.hp = self.hp.min(self.effective_max_hp());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use items::catalog;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn fighter() -> Player {
        Player::from_stats(
            "Tester",
            Class::Warrior,
            PlayerStats {
                max_hp: 100,
                max_mana: 50,
                attack: 10,
                defense: 5,
                restore_rate: 10,
            },
        )
    }

    #[test]
    fn damage_is_mitigated_with_floor() {
        let mut p = fighter();
        assert_eq!(p.take_damage(12), Ok(7));
        assert_eq!(p.take_damage(3), Ok(1));
        assert_eq!(p.hp(), 92);
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let mut p = fighter();
        assert_eq!(
            p.take_damage(-1),
            Err(StatError::negative("damage", -1))
        );
        assert!(p.heal(-5).is_err());
        assert!(p.use_mana(-5).is_err());
        assert!(p.restore_mana(-5).is_err());
        assert!(p.gain_exp(-5).is_err());
        assert!(p.set_gold(-5).is_err());
        assert_eq!(p.hp(), 100);
        assert_eq!(p.mana(), 50);
    }

    #[test]
    fn heal_is_capped() {
        let mut p = fighter();
        p.take_damage(25).unwrap();
        assert_eq!(p.heal(100), Ok(20));
        assert_eq!(p.hp(), 100);
    }

    #[test]
    fn use_mana_fails_without_mutation() {
        let mut p = fighter();
        p.use_mana(45).unwrap();
        assert_eq!(p.use_mana(10), Ok(false));
        assert_eq!(p.mana(), 5);
        assert_eq!(p.restore_mana(100), Ok(45));
    }

    #[test]
    fn exact_threshold_levels_once() {
        let mut p = fighter();
        assert_eq!(p.gain_exp(50), Ok(1));
        assert_eq!(p.level(), 2);
        assert_eq!(p.exp(), 0);
    }

    #[test]
    fn overflow_exp_rolls_over() {
        let mut p = fighter();
        p.gain_exp(40).unwrap();
        p.take_damage(50).unwrap();
        p.use_mana(30).unwrap();

        assert_eq!(p.gain_exp(50), Ok(1));
        assert_eq!(p.level(), 2);
        assert_eq!(p.exp(), 40);
        assert_eq!(p.hp(), 110);
        assert_eq!(p.max_hp(), 110);
        assert_eq!(p.mana(), 55);
        assert_eq!(p.effective_attack(), 12);
        assert_eq!(p.effective_defense(), 6);
        assert_eq!(p.restore_rate(), 11);
    }

    #[test]
    fn large_exp_cascades() {
        let mut p = fighter();
        // 50 + 100 + 150 = 300 reaches level 4 with 10 to spare
        assert_eq!(p.gain_exp(310), Ok(3));
        assert_eq!(p.level(), 4);
        assert_eq!(p.exp(), 10);
    }

    #[test]
    fn regenerate_uses_restore_rate_with_floor() {
        let mut p = fighter();
        p.take_damage(55).unwrap();
        p.use_mana(50).unwrap();
        assert_eq!(p.regenerate(), (10, 5));

        let mut weak = Player::from_stats(
            "Weak",
            Class::Mage,
            PlayerStats {
                max_hp: 5,
                max_mana: 5,
                attack: 1,
                defense: 0,
                restore_rate: 1,
            },
        );
        weak.take_damage(3).unwrap();
        weak.use_mana(3).unwrap();
        assert_eq!(weak.regenerate(), (1, 1));
    }

    #[test]
    fn equipment_raises_effective_stats() {
        let mut p = fighter();
        p.equip(catalog::iron_sword()).unwrap();
        p.equip(catalog::leather_armor()).unwrap();
        assert_eq!(p.effective_attack(), 15);
        assert_eq!(p.effective_defense(), 8);
        assert_eq!(p.effective_max_hp(), 110);

        p.heal(10).unwrap();
        assert_eq!(p.hp(), 110);
        p.unequip(items::EquipSlot::Armor).unwrap();
        assert_eq!(p.hp(), 100);
    }

    #[test]
    fn consuming_equipment_fails() {
        let mut p = fighter();
        assert_eq!(
            p.consume(&catalog::iron_sword()),
            Err(InventoryError::NotConsumable("Iron Sword".into()))
        );
        p.take_damage(45).unwrap();
        p.use_mana(40).unwrap();
        assert_eq!(p.consume(&catalog::elixir()), Ok((40, 30)));
    }

    #[test]
    fn new_player_learns_starting_skills() {
        let catalog = SkillCatalog::standard();
        let mut p = Player::new("Merlin", Class::Mage, &catalog);
        assert!(p.skills.knows("Fireball"));
        assert!(!p.skills.knows("Frost Bind"));

        p.gain_exp(150).unwrap();
        assert_eq!(p.level(), 3);
        assert_eq!(p.learn_unlocked_skills(&catalog), vec!["Frost Bind".to_string()]);
    }

    proptest! {
        #[test]
        fn hp_stays_in_bounds(ops in prop::collection::vec((any::<bool>(), 0i64..200), 0..50)) {
            let mut p = fighter();
            for (is_damage, amount) in ops {
                if is_damage {
                    p.take_damage(amount).unwrap();
                } else {
                    p.heal(amount).unwrap();
                }
                prop_assert!(p.hp() <= p.effective_max_hp());
            }
        }

        #[test]
        fn mana_stays_in_bounds(ops in prop::collection::vec((any::<bool>(), 0i64..100), 0..50)) {
            let mut p = fighter();
            for (spend, amount) in ops {
                let before = p.mana();
                if spend {
                    let ok = p.use_mana(amount).unwrap();
                    if amount as u32 > before {
                        prop_assert!(!ok);
                        prop_assert_eq!(p.mana(), before);
                    }
                } else {
                    p.restore_mana(amount).unwrap();
                }
                prop_assert!(p.mana() <= p.max_mana());
            }
        }

        #[test]
        fn damage_floor_holds(raw in 0u32..10_000, defense in 0u32..10_000) {
            let dealt = mitigate(raw, defense);
            prop_assert_eq!(dealt, raw.saturating_sub(defense).max(1));
            prop_assert!(dealt >= 1);
        }
    }
}
