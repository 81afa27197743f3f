//! Linear undo/redo history over committed surface states.
//!
//! DESIGN
//! ======
//! History is an ordered list of immutable entries plus one cursor naming the
//! entry currently on screen. It is seeded with the initial state, so the
//! cursor is always a valid index. Committing after an undo truncates every
//! entry past the cursor before appending: redo lineage is a straight line,
//! never a tree.
//!
//! An optional depth limit evicts the oldest entries. The cursor shifts with
//! the eviction so it keeps naming the same entry.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct History<T> {
    entries: VecDeque<T>,
    cursor: usize,
    limit: Option<usize>,
}

impl<T> History<T> {
    /// Unbounded history seeded with `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self::with_limit(initial, None)
    }

    /// History seeded with `initial` that keeps at most `limit` entries.
    /// A limit of zero is treated as one; the current entry is never evicted.
    #[must_use]
    pub fn with_limit(initial: T, limit: Option<usize>) -> Self {
        let mut entries = VecDeque::new();
        entries.push_back(initial);
        Self { entries, cursor: 0, limit: limit.map(|n| n.max(1)) }
    }

    /// Number of entries, including the seed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the seed entry is never removed except by eviction,
    /// which keeps at least one entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// The entry under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.entries.get(self.cursor)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    /// Append `entry` after the cursor and move the cursor onto it.
    ///
    /// Returns how many redo-able entries were discarded.
    pub fn commit(&mut self, entry: T) -> usize {
        let keep = self.cursor + 1;
        let discarded = self.entries.len().saturating_sub(keep);
        self.entries.truncate(keep);
        self.entries.push_back(entry);
        self.cursor = self.entries.len() - 1;

        if let Some(limit) = self.limit {
            while self.entries.len() > limit {
                self.entries.pop_front();
                self.cursor -= 1;
            }
        }
        discarded
    }

    /// Step the cursor back and return the entry now under it.
    /// `None` at the oldest entry, where nothing changes.
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Step the cursor forward and return the entry now under it.
    /// `None` at the newest entry, where nothing changes.
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }
}
