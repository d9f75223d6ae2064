//! A chronological record of what happened during a session.

pub mod entry;
pub mod log;

pub use entry::JournalEntry;
pub use log::Journal;
