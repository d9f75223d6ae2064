//! Owned items and equip bookkeeping.
//!
//! The inventory enforces that at most one item per [`ItemKind`] is equipped.
//! Stat aggregation reads [`Inventory::equipped`] and trusts this invariant.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::item::{Item, ItemKind};

/// What happened when an inventory slot was toggled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquipChange {
    /// The item was equipped, possibly replacing another of the same kind.
    Equipped {
        /// Name of the newly equipped item.
        name: String,
        /// Name of the item that was unequipped to make room.
        replaced: Option<String>,
    },
    /// The item was already equipped and has been taken off.
    Unequipped {
        /// Name of the unequipped item.
        name: String,
    },
}

/// An ordered collection of owned items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Item>", into = "Vec<Item>")]
pub struct Inventory {
    items: Vec<Item>,
}

impl TryFrom<Vec<Item>> for Inventory {
    type Error = CoreError;

    fn try_from(items: Vec<Item>) -> CoreResult<Self> {
        Self::from_items(items)
    }
}

impl From<Inventory> for Vec<Item> {
    fn from(inventory: Inventory) -> Self {
        inventory.items
    }
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inventory from a list of items, rejecting negative item values
    /// and any list with two equipped items of the same kind.
    pub fn from_items(items: Vec<Item>) -> CoreResult<Self> {
        let inventory = Self { items };
        inventory.validate()?;
        Ok(inventory)
    }

    /// Check item values and the one-equipped-per-kind rule.
    pub fn validate(&self) -> CoreResult<()> {
        for item in &self.items {
            for (label, value) in [
                ("attack", item.attack),
                ("defense", item.defense),
                ("price", item.price),
            ] {
                if value < 0.0 {
                    return Err(CoreError::Validation(format!(
                        "{} has negative {label} {value}",
                        item.name
                    )));
                }
            }
        }
        for kind in [ItemKind::Weapon, ItemKind::Armor] {
            let equipped: Vec<&str> = self
                .items
                .iter()
                .filter(|i| i.kind == kind && i.equipped)
                .map(|i| i.name.as_str())
                .collect();
            if equipped.len() > 1 {
                return Err(CoreError::Validation(format!(
                    "more than one {kind} equipped: {}",
                    equipped.join(", ")
                )));
            }
        }
        Ok(())
    }

    /// Append an item.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove and return the item at `index`.
    pub fn remove(&mut self, index: usize) -> CoreResult<Item> {
        if index >= self.items.len() {
            return Err(CoreError::NoSuchItem(index));
        }
        Ok(self.items.remove(index))
    }

    /// Get the item at `index`.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// All items in acquisition order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Items that currently contribute to effective stats.
    pub fn equipped(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|i| i.equipped)
    }

    /// Whether an item with this name is owned.
    pub fn contains_name(&self, name: &str) -> bool {
        self.items.iter().any(|i| i.name == name)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the inventory is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Toggle the equipped state of the item at `index`.
    ///
    /// Equipping unequips any other item of the same kind first.
    pub fn toggle_equip(&mut self, index: usize) -> CoreResult<EquipChange> {
        let item = self
            .items
            .get_mut(index)
            .ok_or(CoreError::NoSuchItem(index))?;
        if item.equipped {
            item.equipped = false;
            return Ok(EquipChange::Unequipped {
                name: item.name.clone(),
            });
        }
        let kind = item.kind;

        let replaced = self
            .items
            .iter_mut()
            .find(|i| i.kind == kind && i.equipped)
            .map(|conflict| {
                conflict.equipped = false;
                conflict.name.clone()
            });

        let item = &mut self.items[index];
        item.equipped = true;
        Ok(EquipChange::Equipped {
            name: item.name.clone(),
            replaced,
        })
    }
}
