//! Grid initialization, cell access and neighbor addressing.

use log::info;

use super::history::HistoryStack;
use crate::error::{Error, Result};
use crate::state::{Cell, Extent, GridSimulator, Point};

/// Moore neighborhood offsets as (row, col) deltas: N, NE, E, SE, S, SW, W, NW.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Build an all-dead row-major cell array for a `side_length` square.
fn dead_cells(side_length: usize) -> Result<Vec<Cell>> {
    let len = side_length.checked_mul(side_length).ok_or_else(|| {
        Error::InvalidConfiguration(format!("{side_length} subdivisions overflow the cell count"))
    })?;

    let mut cells = Vec::new();
    cells.try_reserve_exact(len).map_err(|e| {
        Error::InvalidConfiguration(format!("cannot allocate {len} cells: {e}"))
    })?;
    cells.extend((0..len).map(Cell::dead));
    Ok(cells)
}

/// Calculate the linear index for a row/column pair.
#[inline]
pub fn index_of(side_length: usize, row: usize, col: usize) -> usize {
    row * side_length + col
}

/// Split a linear index into its row/column pair.
#[inline]
pub fn coords_of(side_length: usize, index: usize) -> (usize, usize) {
    (index / side_length, index % side_length)
}

/// Step `base` by `delta` with wraparound in `[0, side_length)`.
#[inline]
fn wrap(base: usize, delta: isize, side_length: usize) -> usize {
    let n = side_length as isize;
    (base as isize + delta).rem_euclid(n) as usize
}

/// Keep only the live cells of `cells`.
pub fn get_live_cells_in(cells: &[Cell]) -> Vec<Cell> {
    cells.iter().filter(|cell| cell.alive).copied().collect()
}

impl GridSimulator {
    /// Create a `subdivisions × subdivisions` grid of dead cells.
    pub fn new(subdivisions: usize) -> Result<Self> {
        let mut grid = GridSimulator {
            side_length: 0,
            cells: Vec::new(),
            history: HistoryStack::new(),
            generation: 0,
        };
        grid.initialize(subdivisions)?;
        Ok(grid)
    }

    /// Recreate the grid at the given size, all cells dead, history cleared.
    ///
    /// Leaves the grid untouched on failure.
    pub fn initialize(&mut self, subdivisions: usize) -> Result<()> {
        if subdivisions == 0 {
            return Err(Error::InvalidConfiguration(
                "subdivisions must be at least 1".to_string(),
            ));
        }
        let cells = dead_cells(subdivisions)?;

        self.side_length = subdivisions;
        self.cells = cells;
        self.history.clear();
        self.generation = 0;

        info!(
            "Initialized {}x{} grid ({} cells)",
            subdivisions,
            subdivisions,
            self.cells.len()
        );
        Ok(())
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        if index < self.cells.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.cells.len(),
            })
        }
    }

    /// Indices of the 8 wrapped neighbors of `index`, in N, NE, E, SE, S, SW, W, NW order.
    ///
    /// On grids narrower than 3 cells the wrapped offsets alias the same cells.
    /// `index` must be in range.
    pub fn neighbor_indices(&self, index: usize) -> [usize; 8] {
        let n = self.side_length;
        let (row, col) = coords_of(n, index);
        NEIGHBOR_OFFSETS.map(|(dr, dc)| index_of(n, wrap(row, dr, n), wrap(col, dc, n)))
    }

    /// The 8 toroidally adjacent cells of `index`.
    pub fn get_neighbors(&self, index: usize) -> Result<[Cell; 8]> {
        self.check_index(index)?;
        Ok(self.neighbor_indices(index).map(|i| self.cells[i]))
    }

    /// Count alive neighbors (with multiplicity on tiny grids). `index` must be in range.
    pub fn count_live_neighbors(&self, index: usize) -> u8 {
        self.neighbor_indices(index)
            .iter()
            .filter(|&&i| self.cells[i].alive)
            .count() as u8
    }

    pub fn is_alive(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.cells[index].alive)
    }

    /// Mark a cell alive. Does not record history.
    pub fn set_cell_alive(&mut self, index: usize) -> Result<()> {
        self.set_cell(index, true)
    }

    /// Mark a cell dead. Does not record history.
    pub fn set_cell_dead(&mut self, index: usize) -> Result<()> {
        self.set_cell(index, false)
    }

    pub fn set_cell(&mut self, index: usize, alive: bool) -> Result<()> {
        self.check_index(index)?;
        self.cells[index].alive = alive;
        Ok(())
    }

    pub fn get_live_cells(&self) -> Vec<Cell> {
        get_live_cells_in(&self.cells)
    }

    /// Map a surface point to the index of the cell under it.
    ///
    /// Rows and columns are clamped into the grid, so points outside the
    /// surface land on a border cell.
    pub fn cell_index_from_point(&self, point: Point, cell_size: Extent) -> Result<usize> {
        if !cell_size.is_positive() {
            return Err(Error::InvalidConfiguration(format!(
                "cell size must be finite and positive, got {}x{}",
                cell_size.width, cell_size.height
            )));
        }

        let max = (self.side_length - 1) as f32;
        // f32::max drops NaN, so a NaN coordinate lands on 0.
        let col = (point.x / cell_size.width).floor().max(0.0).min(max) as usize;
        let row = (point.y / cell_size.height).floor().max(0.0).min(max) as usize;

        Ok(index_of(self.side_length, row, col))
    }
}
