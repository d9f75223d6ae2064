//! Journal storage and export.

use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;

/// A chronological log of session events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the journal.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of dungeon runs recorded, and how many of them were cleared.
    pub fn dungeon_tally(&self) -> (usize, usize) {
        self.entries
            .iter()
            .filter_map(|e| match e {
                JournalEntry::Dungeon { cleared, .. } => Some(*cleared),
                _ => None,
            })
            .fold((0, 0), |(runs, clears), cleared| {
                (runs + 1, clears + usize::from(cleared))
            })
    }

    /// Export the journal as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Adventure Journal\n=================\n\n");
        for entry in &self.entries {
            let time = match entry {
                JournalEntry::Dungeon { timestamp, .. }
                | JournalEntry::Purchase { timestamp, .. }
                | JournalEntry::Sale { timestamp, .. }
                | JournalEntry::Equipment { timestamp, .. }
                | JournalEntry::Rest { timestamp, .. } => timestamp.format("%H:%M:%S"),
            };
            out.push_str(&format!("[{time}] "));
            match entry {
                JournalEntry::Dungeon {
                    tier,
                    cleared,
                    damage,
                    health_after,
                    gold_gained,
                    new_levels,
                    ..
                } => {
                    let verdict = if *cleared { "cleared" } else { "failed" };
                    out.push_str(&format!(
                        "{tier} {verdict}: -{damage} HP (now {health_after}), +{gold_gained} G\n"
                    ));
                    for level in new_levels {
                        out.push_str(&format!("    Level up! Now level {level}\n"));
                    }
                }
                JournalEntry::Purchase { item, price, .. } => {
                    out.push_str(&format!("Bought {item} for {price} G\n"));
                }
                JournalEntry::Sale { item, refund, .. } => {
                    out.push_str(&format!("Sold {item} for {refund} G\n"));
                }
                JournalEntry::Equipment { change, .. } => {
                    out.push_str(&format!("{change}\n"));
                }
                JournalEntry::Rest {
                    cost,
                    health_before,
                    ..
                } => {
                    out.push_str(&format!("Rested for {cost} G ({health_before} -> 100 HP)\n"));
                }
            }
        }
        out
    }
}
