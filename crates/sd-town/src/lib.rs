//! Town services for Sparta Dungeon.
//!
//! Everything around the encounter engine: the equipment shop, resting at
//! the inn, JSON save files, a run journal, and [`TownSession`], which ties
//! them together behind typed operations and a small text command
//! interpreter.

pub mod config;
pub mod error;
pub mod journal;
pub mod rest;
pub mod save;
pub mod session;
pub mod shop;

pub use config::SessionConfig;
pub use error::{TownError, TownResult};
pub use session::{TownSession, is_quit_command};
pub use shop::Shop;
