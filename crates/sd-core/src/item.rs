use serde::{Deserialize, Serialize};

/// The equipment slot an item occupies.
///
/// At most one item of each kind may be equipped at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Hand slot: swords, axes, spears.
    Weapon,
    /// Body slot.
    Armor,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weapon => write!(f, "weapon"),
            Self::Armor => write!(f, "armor"),
        }
    }
}

/// A piece of equipment.
///
/// The template fields never change after construction. `purchased` and
/// `equipped` are the only mutable state: the shop flips `purchased` on its
/// stock, the inventory flips `equipped` on owned copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name, unique within the shop.
    pub name: String,
    /// Bonus added to effective attack while equipped.
    pub attack: f64,
    /// Bonus added to effective defense while equipped.
    pub defense: f64,
    /// Flavor text.
    pub description: String,
    /// Purchase price in gold.
    pub price: f64,
    /// Which slot the item occupies.
    pub kind: ItemKind,
    /// Whether the player owns this item.
    pub purchased: bool,
    /// Whether the item currently contributes to effective stats.
    pub equipped: bool,
}

impl Item {
    /// Create an unowned, unequipped item template.
    pub fn new(
        name: impl Into<String>,
        kind: ItemKind,
        attack: f64,
        defense: f64,
        price: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            attack,
            defense,
            description: description.into(),
            price,
            kind,
            purchased: false,
            equipped: false,
        }
    }

    /// Short stat label such as `"attack +5"`, or empty for a bonus-less item.
    pub fn stat_label(&self) -> String {
        if self.attack > 0.0 {
            format!("attack +{}", self.attack)
        } else if self.defense > 0.0 {
            format!("defense +{}", self.defense)
        } else {
            String::new()
        }
    }
}
