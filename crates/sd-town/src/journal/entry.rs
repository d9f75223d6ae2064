//! Journal entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in the session journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum JournalEntry {
    /// A dungeon attempt and its outcome.
    Dungeon {
        /// Tier name.
        tier: String,
        /// Whether the dungeon was cleared.
        cleared: bool,
        /// Damage taken.
        damage: i64,
        /// Health after the run.
        health_after: f64,
        /// Gold gained.
        gold_gained: f64,
        /// Levels reached by this run, ascending.
        new_levels: Vec<u32>,
        /// When the run happened.
        timestamp: DateTime<Utc>,
    },
    /// An item bought from the shop.
    Purchase {
        /// Item name.
        item: String,
        /// Price paid.
        price: f64,
        /// When bought.
        timestamp: DateTime<Utc>,
    },
    /// An item sold to the shop.
    Sale {
        /// Item name.
        item: String,
        /// Gold refunded.
        refund: f64,
        /// When sold.
        timestamp: DateTime<Utc>,
    },
    /// An equip or unequip.
    Equipment {
        /// Human-readable description of the change.
        change: String,
        /// When changed.
        timestamp: DateTime<Utc>,
    },
    /// A night at the inn.
    Rest {
        /// Gold paid.
        cost: f64,
        /// Health before resting.
        health_before: f64,
        /// When rested.
        timestamp: DateTime<Utc>,
    },
}
