// src/items/src/inventory.rs
use error::InventoryError;
use serde::{Deserialize, Serialize};

use crate::Item;

/// Maximum number of identical consumables held in one slot
pub const MAX_STACK: u32 = 99;

/// One inventory slot: an item and how many of it are held
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item: Item,
    pub quantity: u32,
}

impl ItemStack {
    pub fn new(item: Item, quantity: u32) -> Self {
        Self { item, quantity }
    }

    pub fn name(&self) -> &str {
        &self.item.name
    }
}

/// 库存系统（按槽位计数，消耗品可堆叠）
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    slots: Vec<ItemStack>,
    capacity: usize,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(20)
    }
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// 添加物品（自动处理堆叠逻辑）
    ///
    /// A full inventory refuses every item, including ones that would stack.
    pub fn add(&mut self, item: Item) -> Result<(), InventoryError> {
        if self.is_full() {
            return Err(InventoryError::Full);
        }

        if item.is_stackable() {
            if let Some(stack) = self
                .slots
                .iter_mut()
                .find(|s| s.item == item && s.quantity < MAX_STACK)
            {
                stack.quantity += 1;
                return Ok(());
            }
        }

        self.slots.push(ItemStack::new(item, 1));
        Ok(())
    }

    /// Add `quantity` copies, stopping at the first refusal
    pub fn add_many(&mut self, item: Item, quantity: u32) -> Result<(), InventoryError> {
        for _ in 0..quantity {
            self.add(item.clone())?;
        }
        Ok(())
    }

    pub fn stacks(&self) -> &[ItemStack] {
        &self.slots
    }

    pub fn get(&self, name: &str) -> Option<&ItemStack> {
        self.slots.iter().find(|s| s.item.name == name)
    }

    pub fn count(&self, name: &str) -> u32 {
        self.slots
            .iter()
            .filter(|s| s.item.name == name)
            .map(|s| s.quantity)
            .sum()
    }

    /// Consumable stacks that can be used right now
    pub fn consumables(&self) -> Vec<ItemStack> {
        self.slots
            .iter()
            .filter(|s| s.item.is_consumable() && s.quantity > 0)
            .cloned()
            .collect()
    }

    /// Take one item out of the named stack, dropping the stack once it is empty
    pub fn take_one(&mut self, name: &str) -> Result<Item, InventoryError> {
        let index = self
            .slots
            .iter()
            .position(|s| s.item.name == name)
            .ok_or_else(|| InventoryError::ItemNotFound(name.to_string()))?;

        let stack = &mut self.slots[index];
        stack.quantity = stack.quantity.saturating_sub(1);
        let item = stack.item.clone();
        if stack.quantity == 0 {
            self.slots.remove(index);
        }
        Ok(item)
    }
}
