use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::inventory::Inventory;

/// Health a character starts with and returns to after resting.
pub const MAX_HEALTH: f64 = 100.0;

/// A character's job. Flavor only; it has no mechanical effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Job {
    /// Front-line fighter.
    #[default]
    Warrior,
    /// Light-footed rogue.
    Thief,
}

impl Job {
    /// Parse a job name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "warrior" => Some(Self::Warrior),
            "thief" => Some(Self::Thief),
            _ => None,
        }
    }
}

impl std::fmt::Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warrior => write!(f, "Warrior"),
            Self::Thief => write!(f, "Thief"),
        }
    }
}

/// The persistent player character.
///
/// Owns its inventory outright. Level and base stats change only through
/// progression; health and gold through encounters, rest and trade.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    /// Display name.
    pub name: String,
    /// Flavor job.
    pub job: Job,
    /// Current level, starting at 1.
    pub level: u32,
    /// Attack before equipment bonuses.
    pub base_attack: f64,
    /// Defense before equipment bonuses.
    pub base_defense: f64,
    /// Remaining health, 0 to [`MAX_HEALTH`].
    pub health: f64,
    /// Gold on hand.
    pub gold: f64,
    /// Dungeon clears not yet converted into levels.
    pub clear_credits: f64,
    /// Owned equipment.
    pub inventory: Inventory,
}

impl Character {
    /// Create a fresh level 1 character with starting stats and gold.
    pub fn new(name: impl Into<String>, job: Job) -> Self {
        Self {
            name: name.into(),
            job,
            level: 1,
            base_attack: 10.0,
            base_defense: 5.0,
            health: MAX_HEALTH,
            gold: 15000.0,
            clear_credits: 0.0,
            inventory: Inventory::new(),
        }
    }

    /// Whether the character can still enter a dungeon.
    pub fn is_incapacitated(&self) -> bool {
        self.health <= 0.0
    }

    /// Check the data-model bounds, e.g. after loading a snapshot.
    pub fn validate(&self) -> CoreResult<()> {
        if self.level == 0 {
            return Err(CoreError::Validation("level must be at least 1".into()));
        }
        for (label, value) in [
            ("base attack", self.base_attack),
            ("base defense", self.base_defense),
        ] {
            if value < 0.0 {
                return Err(CoreError::Validation(format!(
                    "{label} {value} is negative"
                )));
            }
        }
        if !(0.0..=MAX_HEALTH).contains(&self.health) {
            return Err(CoreError::Validation(format!(
                "health {} outside 0..={MAX_HEALTH}",
                self.health
            )));
        }
        if self.gold < 0.0 {
            return Err(CoreError::Validation(format!(
                "gold {} is negative",
                self.gold
            )));
        }
        if self.clear_credits < 0.0 {
            return Err(CoreError::Validation(format!(
                "clear credits {} are negative",
                self.clear_credits
            )));
        }
        self.inventory.validate()
    }
}
