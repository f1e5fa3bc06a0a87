//! Snapshot stack of past generations.
//!
//! The forward rule is not invertible, so stepping backward restores a stored
//! copy instead of recomputing anything. Each snapshot owns its own cell array.

use crate::state::Cell;

/// A deep copy of the grid at one generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub cells: Vec<Cell>,
    pub side_length: usize,
    pub generation: u64,
}

/// Append-only on evolve, popped on devolve.
#[derive(Clone, Debug, Default)]
pub struct HistoryStack {
    entries: Vec<Snapshot>,
}

impl HistoryStack {
    pub fn new() -> Self {
        HistoryStack::default()
    }

    /// The slot "now" occupies. Always equal to the number of stored snapshots,
    /// so `entries[current_slot - 1]` is the generation before the current one.
    #[inline]
    pub fn current_slot(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push(snapshot);
    }

    /// Remove and return the most recent snapshot, or None at slot 0.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop()
    }

    pub fn peek(&self) -> Option<&Snapshot> {
        self.entries.last()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
