//! Error types for the mechanics engine.

/// Errors that can occur while resolving an encounter.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MechError {
    /// The requested tier index is outside the catalog.
    #[error("invalid tier {index}: catalog has {len} tiers")]
    InvalidTier {
        /// The index that was requested.
        index: usize,
        /// Number of tiers in the catalog.
        len: usize,
    },

    /// The character has no health left and cannot enter a dungeon.
    #[error("character is incapacitated (health {health})")]
    IncapacitatedCharacter {
        /// Health at the time of the attempt.
        health: f64,
    },
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
