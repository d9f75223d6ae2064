//! Error types for town services.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for town operations.
pub type TownResult<T> = Result<T, TownError>;

/// Errors that can occur in the shop, at the inn, or while saving.
#[derive(Debug, Error)]
pub enum TownError {
    /// The character cannot afford the action.
    #[error("not enough gold: need {needed}, have {available}")]
    NotEnoughGold {
        /// Gold required.
        needed: f64,
        /// Gold on hand.
        available: f64,
    },

    /// The shop item is already owned.
    #[error("already purchased: {0}")]
    AlreadyPurchased(String),

    /// No shop or inventory entry exists at this index.
    #[error("no item at position {0}")]
    NoSuchItem(usize),

    /// Invalid choice or input.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// No save file exists at the given path.
    #[error("no save file at {}", .0.display())]
    NoSaveFile(PathBuf),

    /// Data-model error.
    #[error("{0}")]
    Core(#[from] sd_core::CoreError),

    /// Encounter engine error.
    #[error("{0}")]
    Mech(#[from] sd_mechanics::MechError),

    /// Reading or writing the save file failed.
    #[error("save file I/O: {0}")]
    Io(#[from] std::io::Error),

    /// The save file could not be encoded or decoded.
    #[error("save file format: {0}")]
    Save(#[from] serde_json::Error),
}
