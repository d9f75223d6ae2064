//! JSON save files.
//!
//! A save holds the character's stats plus the ordered inventory. Writes go
//! to a sibling temp file that is renamed over the target, so a failed save
//! never leaves a truncated file behind.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use sd_core::{Character, Inventory, Item, Job};

use crate::error::{TownError, TownResult};

/// Persistent character fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Character name.
    pub name: String,
    /// Flavor job.
    pub job: Job,
    /// Current level.
    pub level: u32,
    /// Attack before equipment.
    pub base_attack: f64,
    /// Defense before equipment.
    pub base_defense: f64,
    /// Unconverted dungeon clears.
    #[serde(default)]
    pub clear_credits: f64,
}

/// The on-disk save layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveGame {
    /// Character stats.
    pub player: PlayerState,
    /// Owned items in order.
    pub inventory: Vec<Item>,
    /// Remaining health.
    pub health: f64,
    /// Gold on hand.
    pub gold: f64,
}

impl SaveGame {
    /// Snapshot a character.
    pub fn from_character(character: &Character) -> Self {
        Self {
            player: PlayerState {
                name: character.name.clone(),
                job: character.job,
                level: character.level,
                base_attack: character.base_attack,
                base_defense: character.base_defense,
                clear_credits: character.clear_credits,
            },
            inventory: character.inventory.items().to_vec(),
            health: character.health,
            gold: character.gold,
        }
    }

    /// Rebuild the character, checking data-model invariants.
    pub fn into_character(self) -> TownResult<Character> {
        let inventory = Inventory::from_items(self.inventory)?;
        let character = Character {
            name: self.player.name,
            job: self.player.job,
            level: self.player.level,
            base_attack: self.player.base_attack,
            base_defense: self.player.base_defense,
            health: self.health,
            gold: self.gold,
            clear_credits: self.player.clear_credits,
            inventory,
        };
        character.validate()?;
        Ok(character)
    }
}

/// Write `character` to `path` as pretty-printed JSON.
pub fn save(character: &Character, path: &Path) -> TownResult<()> {
    let json = serde_json::to_string_pretty(&SaveGame::from_character(character))?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    info!(path = %path.display(), "game saved");
    Ok(())
}

/// Read a character from `path`.
pub fn load(path: &Path) -> TownResult<Character> {
    if !path.exists() {
        return Err(TownError::NoSaveFile(path.to_path_buf()));
    }
    let json = fs::read_to_string(path)?;
    let state: SaveGame = serde_json::from_str(&json)?;
    let character = state.into_character()?;
    info!(path = %path.display(), name = %character.name, "game loaded");
    Ok(character)
}
