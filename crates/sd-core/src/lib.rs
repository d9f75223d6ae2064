//! Core types for Sparta Dungeon: characters, items, and inventory.
//!
//! This crate holds the data model that the mechanics engine mutates and the
//! town layer persists. It carries no game rules beyond the inventory's
//! one-equipped-item-per-kind invariant.

/// The player character and its job.
pub mod character;
/// Error types used throughout the crate.
pub mod error;
/// Ordered collection of owned items with equip bookkeeping.
pub mod inventory;
/// Equipment items and their kind tag.
pub mod item;

/// Re-export character types.
pub use character::{Character, Job, MAX_HEALTH};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export inventory types.
pub use inventory::{EquipChange, Inventory};
/// Re-export item types.
pub use item::{Item, ItemKind};
