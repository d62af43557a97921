//src/items/src/catalog.rs
//! Built-in item definitions and the fixed battle drop pool.

use crate::{EquipSlot, EquipmentBonus, Item, ItemEffect};

pub fn healing_potion() -> Item {
    Item::consumable(
        "Healing Potion",
        "Restores 30 HP.",
        vec![ItemEffect::Heal(30)],
        25,
    )
}

pub fn mana_potion() -> Item {
    Item::consumable(
        "Mana Potion",
        "Restores 20 mana.",
        vec![ItemEffect::RestoreMana(20)],
        25,
    )
}

pub fn elixir() -> Item {
    Item::consumable(
        "Elixir",
        "Restores 50 HP and 30 mana.",
        vec![ItemEffect::Heal(50), ItemEffect::RestoreMana(30)],
        80,
    )
}

pub fn iron_sword() -> Item {
    Item::equipment(
        "Iron Sword",
        "A plain but reliable blade.",
        EquipSlot::Weapon,
        EquipmentBonus::new(5, 0, 0),
        60,
    )
}

pub fn leather_armor() -> Item {
    Item::equipment(
        "Leather Armor",
        "Light armor made of boiled leather.",
        EquipSlot::Armor,
        EquipmentBonus::new(0, 3, 10),
        50,
    )
}

pub fn lucky_charm() -> Item {
    Item::equipment(
        "Lucky Charm",
        "A trinket said to ward off harm.",
        EquipSlot::Accessory,
        EquipmentBonus::new(1, 1, 5),
        40,
    )
}

/// Items a defeated monster may leave behind
pub fn drop_pool() -> Vec<Item> {
    vec![healing_potion(), mana_potion(), elixir(), iron_sword()]
}

/// 按名称查找物品
pub fn find(name: &str) -> Option<Item> {
    [
        healing_potion(),
        mana_potion(),
        elixir(),
        iron_sword(),
        leather_armor(),
        lucky_charm(),
    ]
    .into_iter()
    .find(|item| item.name.eq_ignore_ascii_case(name))
}
