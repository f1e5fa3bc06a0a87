//! Alive/dead array exchange with a rendering collaborator.

use log::warn;

use super::grid::index_of;
use crate::error::{Error, Result};
use crate::state::GridSimulator;

/// Clamp a half-open row/column rectangle to the grid.
/// Returns None if the clamped rectangle is empty.
fn clamp_rect(
    side_length: usize,
    min_row: usize,
    min_col: usize,
    max_row: usize,
    max_col: usize,
) -> Option<(usize, usize, usize, usize)> {
    let min_row = min_row.min(side_length);
    let min_col = min_col.min(side_length);
    let max_row = max_row.min(side_length);
    let max_col = max_col.min(side_length);

    if min_row >= max_row || min_col >= max_col {
        None
    } else {
        Some((min_row, min_col, max_row, max_col))
    }
}

impl GridSimulator {
    /// The current alive/dead state of every cell, row-major.
    pub fn alive_mask(&self) -> Vec<bool> {
        self.cells.iter().map(|cell| cell.alive).collect()
    }

    /// Replace the alive/dead state of every cell. Does not record history.
    pub fn load_alive_mask(&mut self, mask: &[bool]) -> Result<()> {
        if mask.len() != self.cells.len() {
            return Err(Error::LengthMismatch {
                expected: self.cells.len(),
                actual: mask.len(),
            });
        }

        for (cell, &alive) in self.cells.iter_mut().zip(mask) {
            cell.alive = alive;
        }
        Ok(())
    }

    /// Extract a rectangular region into a flat buffer, one byte per cell (1 = alive).
    ///
    /// # Layout
    /// Row-major over `[min_row, max_row) × [min_col, max_col)`, clamped to the grid.
    ///
    /// # Returns
    /// Number of bytes written, or 0 if the region is empty or the buffer too short.
    pub fn extract_region(
        &self,
        out_buf: &mut [u8],
        min_row: usize,
        min_col: usize,
        max_row: usize,
        max_col: usize,
    ) -> usize {
        let Some((min_row, min_col, max_row, max_col)) =
            clamp_rect(self.side_length, min_row, min_col, max_row, max_col)
        else {
            return 0;
        };

        let total_size = (max_row - min_row) * (max_col - min_col);
        if out_buf.len() < total_size {
            warn!(
                "extract_region: buffer holds {} bytes, region needs {}",
                out_buf.len(),
                total_size
            );
            return 0;
        }

        let mut offset = 0;
        for row in min_row..max_row {
            for col in min_col..max_col {
                let idx = index_of(self.side_length, row, col);
                out_buf[offset] = self.cells[idx].alive as u8;
                offset += 1;
            }
        }

        offset
    }

    /// Import a rectangular region from a flat buffer laid out like [`extract_region`].
    ///
    /// Any non-zero byte is alive. Does not record history.
    ///
    /// [`extract_region`]: GridSimulator::extract_region
    pub fn import_region(
        &mut self,
        in_buf: &[u8],
        min_row: usize,
        min_col: usize,
        max_row: usize,
        max_col: usize,
    ) -> usize {
        let Some((min_row, min_col, max_row, max_col)) =
            clamp_rect(self.side_length, min_row, min_col, max_row, max_col)
        else {
            return 0;
        };

        let total_size = (max_row - min_row) * (max_col - min_col);
        if in_buf.len() < total_size {
            warn!(
                "import_region: buffer holds {} bytes, region needs {}",
                in_buf.len(),
                total_size
            );
            return 0;
        }

        let mut offset = 0;
        for row in min_row..max_row {
            for col in min_col..max_col {
                let idx = index_of(self.side_length, row, col);
                self.cells[idx].alive = in_buf[offset] != 0;
                offset += 1;
            }
        }

        offset
    }
}
