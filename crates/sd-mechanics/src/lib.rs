//! Encounter resolution and progression engine for Sparta Dungeon.
//!
//! Provides stat aggregation over equipped items, the cascading level-up
//! rule, the fixed dungeon tier catalog, and the resolver that turns a
//! character plus a tier into damage, gold, and level-ups.

pub mod dungeon;
pub mod error;
pub mod progression;
pub mod stats;

pub use dungeon::{EncounterCatalog, EncounterResult, EncounterTier, resolve};
pub use error::{MechError, MechResult};
pub use progression::{LevelUp, apply_credits, register_clear};
pub use stats::{attack_bonus, defense_bonus, effective_attack, effective_defense};
