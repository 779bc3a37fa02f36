//! History ledger - ordered log of calculation entries
//!
//! Insertion order is chronological (most recent last). Entries are never
//! mutated in place; corrections go through remove + append.

use chrono::Utc;

use crate::core::CalculationEntry;

/// Ordered, mutable log of calculation entries with unique identifiers
#[derive(Debug, Default)]
pub struct Ledger {
    entries: Vec<CalculationEntry>,
    last_id: i64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, assigning its identifier when unset, and return
    /// the assigned identifier.
    pub fn append(&mut self, mut entry: CalculationEntry) -> i64 {
        if entry.id == 0 {
            entry.id = self.next_id();
        }
        self.last_id = self.last_id.max(entry.id);
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    /// Find an entry by identifier
    pub fn find_by_id(&self, id: i64) -> Option<&CalculationEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Remove the entry with the given identifier and return it
    pub fn remove_by_id(&mut self, id: i64) -> Option<CalculationEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }

    /// All entries in insertion order (most recent last)
    pub fn all(&self) -> &[CalculationEntry] {
        &self.entries
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Millisecond-timestamp identifiers, bumped past the last assigned id
    /// so that rapid appends stay unique and monotonic.
    fn next_id(&self) -> i64 {
        Utc::now().timestamp_millis().max(self.last_id + 1)
    }
}
