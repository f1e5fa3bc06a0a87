//! Core state structures and read accessors.

use serde::{Deserialize, Serialize};

use crate::automaton::history::HistoryStack;

/// A single cell of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub alive: bool,
    /// Position within the flat row-major cell array.
    pub index: usize,
}

impl Cell {
    pub fn dead(index: usize) -> Self {
        Cell {
            alive: false,
            index,
        }
    }
}

/// A point on the host surface, in the same units as [`Extent`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

/// A width/height pair. Used for the host surface and for a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub fn new(width: f32, height: f32) -> Self {
        Extent { width, height }
    }

    /// True if both components are finite and strictly positive.
    pub fn is_positive(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// A square Game of Life grid with its generation history.
///
/// Cells are stored row-major: `index = row * side_length + col`. The grid is
/// only ever resized through a full reinitialization.
#[derive(Clone, Debug)]
pub struct GridSimulator {
    pub(crate) side_length: usize,
    pub(crate) cells: Vec<Cell>,
    pub(crate) history: HistoryStack,
    pub(crate) generation: u64,
}

impl GridSimulator {
    /// Number of cells along one side.
    #[inline]
    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// The current generation, row-major.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of generations evolved since the last initialization, net of devolves.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Position of "now" in the history stack. Equal to the number of stored snapshots.
    pub fn current_slot(&self) -> usize {
        self.history.current_slot()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
