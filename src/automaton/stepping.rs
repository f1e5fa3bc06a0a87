//! Game of Life stepping, forward and backward.

use log::debug;
use rayon::prelude::*;

use super::history::Snapshot;
use crate::state::{Cell, GridSimulator};

/// Grids with at least this many cells evaluate the rule on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 64 * 64;

/// Conway's B3/S23 rule.
///
/// - Survival: an alive cell with 2 or 3 neighbors stays alive
/// - Birth: a dead cell with exactly 3 neighbors becomes alive
/// - Everything else is dead next generation
#[inline]
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    matches!((alive, live_neighbors), (true, 2) | (true, 3) | (false, 3))
}

impl GridSimulator {
    fn next_cell(&self, index: usize) -> Cell {
        Cell {
            alive: next_state(self.cells[index].alive, self.count_live_neighbors(index)),
            index,
        }
    }

    /// Record the current generation and advance by one.
    ///
    /// Every cell reads only the current array; the next array is swapped in
    /// once it is complete.
    pub fn evolve(&mut self) {
        self.history.push(Snapshot {
            cells: self.cells.clone(),
            side_length: self.side_length,
            generation: self.generation,
        });

        let len = self.cells.len();
        let next_cells: Vec<Cell> = if len >= PARALLEL_THRESHOLD {
            (0..len).into_par_iter().map(|i| self.next_cell(i)).collect()
        } else {
            (0..len).map(|i| self.next_cell(i)).collect()
        };

        self.cells = next_cells;
        self.generation += 1;
        debug!("Evolved to slot {}", self.history.current_slot());
    }

    /// Restore the previous generation. No-op at slot 0.
    pub fn devolve(&mut self) {
        if let Some(snapshot) = self.history.pop() {
            self.cells = snapshot.cells;
            self.side_length = snapshot.side_length;
            self.generation = snapshot.generation;
            debug!("Devolved to slot {}", self.history.current_slot());
        }
    }

    /// Devolve until the current slot is `slot`. No-op if already at or below it.
    pub fn rewind_to(&mut self, slot: usize) {
        while self.history.current_slot() > slot {
            self.devolve();
        }
    }
}
