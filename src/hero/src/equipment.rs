// src/hero/src/equipment.rs
use items::{EquipSlot, EquipmentBonus, Item};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EquipError {
    #[error("{0} is not equipment")]
    NotEquipment(String),
    #[error("nothing equipped in the {0} slot")]
    EmptySlot(EquipSlot),
}

/// 装备系统：每个槽位最多一件
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
    pub accessory: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<Item> {
        match slot {
            EquipSlot::Weapon => &mut self.weapon,
            EquipSlot::Armor => &mut self.armor,
            EquipSlot::Accessory => &mut self.accessory,
        }
    }

    /// Wear an item, handing back whatever was in its slot
    pub fn equip(&mut self, item: Item) -> Result<Option<Item>, EquipError> {
        let (slot, _) = item
            .bonus()
            .ok_or_else(|| EquipError::NotEquipment(item.name.clone()))?;
        Ok(self.slot_mut(slot).replace(item))
    }

    pub fn unequip(&mut self, slot: EquipSlot) -> Result<Item, EquipError> {
        self.slot_mut(slot).take().ok_or(EquipError::EmptySlot(slot))
    }

    /// Sum of the bonuses of everything worn
    pub fn bonus(&self) -> EquipmentBonus {
        [&self.weapon, &self.armor, &self.accessory]
            .into_iter()
            .flatten()
            .filter_map(|item| item.bonus())
            .fold(EquipmentBonus::default(), |acc, (_, bonus)| acc + bonus)
    }
}
