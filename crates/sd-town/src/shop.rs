//! The equipment shop.
//!
//! The shop keeps one entry per item template and flags entries the player
//! owns. Buying copies the entry into the inventory; selling removes the
//! copy and clears the flag so the item can be bought again.

use tracing::info;

use sd_core::{Character, Inventory, Item, ItemKind};

use crate::error::{TownError, TownResult};

/// Receipt for a sold item.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    /// Name of the item sold.
    pub name: String,
    /// Gold paid to the character.
    pub refund: f64,
}

/// The shop's stock.
#[derive(Debug, Clone)]
pub struct Shop {
    stock: Vec<Item>,
}

impl Default for Shop {
    fn default() -> Self {
        Self::new(vec![
            Item::new(
                "Novice Armor",
                ItemKind::Armor,
                0.0,
                5.0,
                1000.0,
                "Armor for those still in training.",
            ),
            Item::new(
                "Iron Armor",
                ItemKind::Armor,
                0.0,
                9.0,
                1500.0,
                "Sturdy armor forged from iron.",
            ),
            Item::new(
                "Spartan Armor",
                ItemKind::Armor,
                0.0,
                15.0,
                3500.0,
                "The legendary armor of Sparta.",
            ),
            Item::new(
                "Worn Sword",
                ItemKind::Weapon,
                2.0,
                0.0,
                600.0,
                "A sword that has seen better days.",
            ),
            Item::new(
                "Bronze Axe",
                ItemKind::Weapon,
                5.0,
                0.0,
                1500.0,
                "A heavy bronze axe.",
            ),
            Item::new(
                "Spartan Spear",
                ItemKind::Weapon,
                7.0,
                0.0,
                2500.0,
                "The legendary spear of Sparta.",
            ),
            Item::new(
                "Spartan Sword",
                ItemKind::Weapon,
                10.0,
                0.0,
                4500.0,
                "The legendary sword of Sparta.",
            ),
        ])
    }
}

impl Shop {
    /// Create a shop selling the given items.
    pub fn new(stock: Vec<Item>) -> Self {
        Self { stock }
    }

    /// All stock entries in display order.
    pub fn stock(&self) -> &[Item] {
        &self.stock
    }

    /// Mark every entry the inventory already holds as purchased.
    pub fn sync_with(&mut self, inventory: &Inventory) {
        for item in &mut self.stock {
            item.purchased = inventory.contains_name(&item.name);
        }
    }

    /// Buy the stock entry at `index`.
    pub fn buy(&mut self, character: &mut Character, index: usize) -> TownResult<&Item> {
        let entry = self
            .stock
            .get_mut(index)
            .ok_or(TownError::NoSuchItem(index))?;
        if entry.purchased {
            return Err(TownError::AlreadyPurchased(entry.name.clone()));
        }
        if character.gold < entry.price {
            return Err(TownError::NotEnoughGold {
                needed: entry.price,
                available: character.gold,
            });
        }

        character.gold -= entry.price;
        entry.purchased = true;
        let mut owned = entry.clone();
        owned.equipped = false;
        character.inventory.add(owned);
        info!(item = %entry.name, price = entry.price, gold = character.gold, "item bought");
        Ok(&*entry)
    }

    /// Sell the inventory item at `inventory_index` for `rate` of its price.
    pub fn sell(
        &mut self,
        character: &mut Character,
        inventory_index: usize,
        rate: f64,
    ) -> TownResult<Sale> {
        let item = character
            .inventory
            .remove(inventory_index)
            .map_err(|_| TownError::NoSuchItem(inventory_index))?;
        let refund = item.price * rate;
        character.gold += refund;
        if let Some(entry) = self.stock.iter_mut().find(|s| s.name == item.name) {
            entry.purchased = false;
        }
        info!(item = %item.name, refund, gold = character.gold, "item sold");
        Ok(Sale {
            name: item.name,
            refund,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sd_core::Job;

    fn fresh() -> Character {
        Character::new("Chad", Job::Warrior)
    }

    #[test]
    fn default_stock() {
        let shop = Shop::default();
        assert_eq!(shop.stock().len(), 7);
        assert!(shop.stock().iter().all(|i| !i.purchased));
        assert_eq!(shop.stock()[6].name, "Spartan Sword");
        assert_eq!(shop.stock()[6].attack, 10.0);
    }

    #[test]
    fn buy_deducts_gold_and_adds_item() {
        let mut shop = Shop::default();
        let mut c = fresh();
        let bought = shop.buy(&mut c, 1).unwrap();
        assert_eq!(bought.name, "Iron Armor");
        assert_eq!(c.gold, 13500.0);
        assert_eq!(c.inventory.len(), 1);
        assert!(c.inventory.get(0).unwrap().purchased);
        assert!(!c.inventory.get(0).unwrap().equipped);
        assert!(shop.stock()[1].purchased);
    }

    #[test]
    fn buy_twice_fails() {
        let mut shop = Shop::default();
        let mut c = fresh();
        shop.buy(&mut c, 0).unwrap();
        let err = shop.buy(&mut c, 0).unwrap_err();
        assert!(matches!(err, TownError::AlreadyPurchased(ref n) if n == "Novice Armor"));
        assert_eq!(c.inventory.len(), 1);
    }

    #[test]
    fn buy_without_gold_fails() {
        let mut shop = Shop::default();
        let mut c = fresh();
        c.gold = 100.0;
        let err = shop.buy(&mut c, 6).unwrap_err();
        assert!(matches!(err, TownError::NotEnoughGold { needed, available }
            if needed == 4500.0 && available == 100.0));
        assert_eq!(c.gold, 100.0);
        assert!(c.inventory.is_empty());
        assert!(!shop.stock()[6].purchased);
    }

    #[test]
    fn buy_bad_index() {
        let mut shop = Shop::default();
        let mut c = fresh();
        assert!(matches!(shop.buy(&mut c, 42), Err(TownError::NoSuchItem(42))));
    }

    #[test]
    fn sell_refunds_and_allows_rebuy() {
        let mut shop = Shop::default();
        let mut c = fresh();
        shop.buy(&mut c, 3).unwrap();
        c.inventory.toggle_equip(0).unwrap();

        let sale = shop.sell(&mut c, 0, 0.85).unwrap();
        assert_eq!(sale.name, "Worn Sword");
        assert_eq!(sale.refund, 510.0);
        assert_eq!(c.gold, 15000.0 - 600.0 + 510.0);
        assert!(c.inventory.is_empty());
        assert!(!shop.stock()[3].purchased);

        assert!(shop.buy(&mut c, 3).is_ok());
    }

    #[test]
    fn sell_bad_index() {
        let mut shop = Shop::default();
        let mut c = fresh();
        assert!(matches!(shop.sell(&mut c, 0, 0.85), Err(TownError::NoSuchItem(0))));
    }

    #[test]
    fn sync_marks_owned_items() {
        let mut shop = Shop::default();
        let mut c = fresh();
        shop.buy(&mut c, 2).unwrap();

        let mut reloaded = Shop::default();
        reloaded.sync_with(&c.inventory);
        assert!(reloaded.stock()[2].purchased);
        assert_eq!(reloaded.stock().iter().filter(|i| i.purchased).count(), 1);
    }
}
