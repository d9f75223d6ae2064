//! Clear-credits and the cascading level-up rule.
//!
//! The current level is the number of credits needed to leave it: level 1
//! needs 1 credit, level 2 needs 2 more, and so on. Converting credits is a
//! loop because a single update may cross several thresholds.

use serde::{Deserialize, Serialize};
use tracing::debug;

use sd_core::Character;

/// Base attack gained per level.
pub const ATTACK_PER_LEVEL: f64 = 0.5;
/// Base defense gained per level.
pub const DEFENSE_PER_LEVEL: f64 = 1.0;

/// One threshold crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    /// Level before the crossing.
    pub from: u32,
    /// Level after the crossing (always `from + 1`).
    pub to: u32,
}

/// Add one clear-credit and convert accumulated credits into levels.
///
/// Returns one event per level gained, in ascending order.
pub fn register_clear(character: &mut Character) -> Vec<LevelUp> {
    character.clear_credits += 1.0;
    debug!(credits = character.clear_credits, "dungeon clear registered");
    apply_credits(character)
}

/// Convert accumulated credits into levels without adding a credit.
///
/// On return `clear_credits < level` holds.
pub fn apply_credits(character: &mut Character) -> Vec<LevelUp> {
    let mut events = Vec::new();
    while character.clear_credits >= f64::from(character.level) {
        let from = character.level;
        character.clear_credits -= f64::from(from);
        character.base_attack += ATTACK_PER_LEVEL;
        character.base_defense += DEFENSE_PER_LEVEL;
        character.level = from + 1;
        debug!(from, to = character.level, "level up");
        events.push(LevelUp {
            from,
            to: character.level,
        });
    }
    events
}
