//! Bounded clipboard history
//!
//! Records are kept newest first. Only the newest record is checked for
//! duplicates, so copying `a`, `b`, `a` yields three records: the history
//! reflects "what was copied last", not a set of distinct texts.

use chrono::Utc;

use super::record::{ClipId, ClipRecord};

/// Default number of records retained
pub const MAX_CLIPS: usize = 50;

/// Number of history positions bound to quick-paste accelerators
pub const VISIBLE_SLOTS: usize = 10;

/// In-memory, insertion-ordered history of clips.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    records: Vec<ClipRecord>,
    capacity: usize,
}

impl HistoryStore {
    /// Create an empty store holding at most `MAX_CLIPS` records
    pub fn new() -> Self {
        Self::with_capacity(MAX_CLIPS)
    }

    /// Create an empty store with a custom capacity (at least one record)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert `text` as the newest record.
    ///
    /// Returns `None` when the text is blank or equal to the newest record.
    pub fn append(&mut self, text: &str) -> Option<ClipRecord> {
        if text.trim().is_empty() {
            return None;
        }
        if let Some(newest) = self.records.first() {
            if newest.text() == text {
                return None;
            }
        }

        // Keep created_at non-decreasing even if the wall clock steps back
        let now = Utc::now();
        let created_at = match self.records.first() {
            Some(newest) if newest.created_at() > now => newest.created_at(),
            _ => now,
        };

        let record = ClipRecord::new(text.to_string(), created_at);
        self.records.insert(0, record.clone());
        self.records.truncate(self.capacity);
        Some(record)
    }

    /// First `limit` records, newest first
    pub fn list(&self, limit: usize) -> &[ClipRecord] {
        &self.records[..limit.min(self.records.len())]
    }

    /// Look up a record by id
    pub fn find_by_id(&self, id: &ClipId) -> Option<&ClipRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Record bound to quick-paste slot `n` (1-based)
    pub fn slot_at(&self, n: usize) -> Option<&ClipRecord> {
        n.checked_sub(1).and_then(|index| self.records.get(index))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
