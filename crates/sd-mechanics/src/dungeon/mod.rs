//! Dungeon tiers and encounter resolution.

pub mod resolve;

pub use resolve::{EncounterResult, resolve};

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// A dungeon difficulty tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterTier {
    /// Display name.
    pub name: String,
    /// Effective defense at or above which the failure roll is skipped.
    pub recommended_defense: f64,
    /// Gold granted on a clear before the attack-based bonus.
    pub base_reward: f64,
}

impl EncounterTier {
    /// Create a tier.
    pub fn new(name: impl Into<String>, recommended_defense: f64, base_reward: f64) -> Self {
        Self {
            name: name.into(),
            recommended_defense,
            base_reward,
        }
    }
}

/// The ordered, read-only list of dungeon tiers.
#[derive(Debug, Clone)]
pub struct EncounterCatalog {
    tiers: Vec<EncounterTier>,
}

impl EncounterCatalog {
    /// All tiers, easiest first.
    pub fn tiers(&self) -> &[EncounterTier] {
        &self.tiers
    }

    /// The tier at `index`.
    pub fn tier_at(&self, index: usize) -> MechResult<&EncounterTier> {
        self.tiers.get(index).ok_or(MechError::InvalidTier {
            index,
            len: self.tiers.len(),
        })
    }

    /// Number of tiers.
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Whether the catalog has no tiers.
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

impl Default for EncounterCatalog {
    fn default() -> Self {
        Self {
            tiers: vec![
                EncounterTier::new("Easy Dungeon", 5.0, 1000.0),
                EncounterTier::new("Normal Dungeon", 11.0, 1700.0),
                EncounterTier::new("Hard Dungeon", 17.0, 2500.0),
            ],
        }
    }
}
