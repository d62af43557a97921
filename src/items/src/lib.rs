//src/items/src/lib.rs
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

pub mod catalog;
pub mod inventory;

pub use crate::inventory::{Inventory, ItemStack};

/// 物品：消耗品或装备
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub kind: ItemKind,
    pub value: u32,
}

/// The engine only ever uses a consumable or reads equipment bonuses
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub enum ItemKind {
    Consumable(Vec<ItemEffect>),
    Equipment(EquipSlot, EquipmentBonus),
}

/// Effect applied to the user when a consumable is used
#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum ItemEffect {
    Heal(u32),
    RestoreMana(u32),
}

#[derive(Debug, Display, Clone, Copy, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    Weapon,
    Armor,
    Accessory,
}

/// Flat stat bonuses granted by worn equipment
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EquipmentBonus {
    pub attack: u32,
    pub defense: u32,
    pub hp: u32,
}

impl EquipmentBonus {
    pub fn new(attack: u32, defense: u32, hp: u32) -> Self {
        Self { attack, defense, hp }
    }
}

impl std::ops::Add for EquipmentBonus {
    type Output = EquipmentBonus;

    fn add(self, rhs: Self) -> Self::Output {
        EquipmentBonus {
            attack: self.attack + rhs.attack,
            defense: self.defense + rhs.defense,
            hp: self.hp + rhs.hp,
        }
    }
}

impl Item {
    pub fn consumable(name: &str, description: &str, effects: Vec<ItemEffect>, value: u32) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind: ItemKind::Consumable(effects),
            value,
        }
    }

    pub fn equipment(
        name: &str,
        description: &str,
        slot: EquipSlot,
        bonus: EquipmentBonus,
        value: u32,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind: ItemKind::Equipment(slot, bonus),
            value,
        }
    }

    /// 是否为消耗品
    pub fn is_consumable(&self) -> bool {
        matches!(self.kind, ItemKind::Consumable(_))
    }

    /// Consumables stack in one slot, equipment never does
    pub fn is_stackable(&self) -> bool {
        self.is_consumable()
    }

    pub fn effects(&self) -> &[ItemEffect] {
        match &self.kind {
            ItemKind::Consumable(effects) => effects,
            ItemKind::Equipment(..) => &[],
        }
    }

    pub fn bonus(&self) -> Option<(EquipSlot, EquipmentBonus)> {
        match self.kind {
            ItemKind::Equipment(slot, bonus) => Some((slot, bonus)),
            ItemKind::Consumable(_) => None,
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumable_has_effects_and_no_bonus() {
        let potion = catalog::healing_potion();
        assert!(potion.is_consumable());
        assert_eq!(potion.effects(), &[ItemEffect::Heal(30)]);
        assert!(potion.bonus().is_none());
    }

    #[test]
    fn equipment_exposes_bonus() {
        let sword = catalog::iron_sword();
        assert!(!sword.is_stackable());
        assert!(sword.effects().is_empty());
        assert_eq!(
            sword.bonus(),
            Some((EquipSlot::Weapon, EquipmentBonus::new(5, 0, 0)))
        );
    }

    #[test]
    fn bonuses_add_up() {
        let total = EquipmentBonus::new(5, 0, 0) + EquipmentBonus::new(0, 3, 10);
        assert_eq!(total, EquipmentBonus::new(5, 3, 10));
    }
}
