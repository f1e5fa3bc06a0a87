//! Grid (re)initialization, cell access and stepping.

use log::warn;

use crate::state::{Extent, GridSimulator, Point};

/// Indices that don't fit in `usize` can't name a cell; map them past any grid.
#[inline]
fn cell_index(index: u64) -> usize {
    usize::try_from(index).unwrap_or(usize::MAX)
}

/// Recreates the grid at a new size, all cells dead, history cleared.
///
/// # Safety
/// - `ptr` must be a valid pointer to a grid
///
/// # Returns
/// 0 on success, 1 on failure (null pointer or 0 subdivisions)
#[no_mangle]
pub unsafe extern "C" fn gol_initialize(ptr: *mut GridSimulator, subdivisions: u32) -> i32 {
    if ptr.is_null() {
        warn!("gol_initialize: null grid pointer");
        return 1;
    }

    match (*ptr).initialize(subdivisions as usize) {
        Ok(()) => 0,
        Err(e) => {
            warn!("gol_initialize: {}", e);
            1
        }
    }
}

/// Sets a cell to alive (non-zero) or dead (0).
///
/// # Safety
/// - `ptr` must be a valid pointer to a grid
///
/// # Returns
/// 0 on success, 1 on failure (null pointer or index out of range)
#[no_mangle]
pub unsafe extern "C" fn gol_set_cell(ptr: *mut GridSimulator, index: u64, alive: u8) -> i32 {
    if ptr.is_null() {
        warn!("gol_set_cell: null grid pointer");
        return 1;
    }

    match (*ptr).set_cell(cell_index(index), alive != 0) {
        Ok(()) => 0,
        Err(e) => {
            warn!("gol_set_cell: {}", e);
            1
        }
    }
}

/// Gets the state of a cell (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to a grid
///
/// # Returns
/// 0 if out of range, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn gol_get_cell(ptr: *const GridSimulator, index: u64) -> u8 {
    if ptr.is_null() {
        return 0;
    }

    (*ptr).is_alive(cell_index(index)).unwrap_or(false) as u8
}

/// Advances the grid by one generation, recording the current one in history.
///
/// # Safety
/// - `ptr` must be a valid pointer to a grid
#[no_mangle]
pub unsafe extern "C" fn gol_evolve(ptr: *mut GridSimulator) {
    if ptr.is_null() {
        return;
    }
    (*ptr).evolve();
}

/// Restores the previous generation. No-op at slot 0.
///
/// # Safety
/// - `ptr` must be a valid pointer to a grid
#[no_mangle]
pub unsafe extern "C" fn gol_devolve(ptr: *mut GridSimulator) {
    if ptr.is_null() {
        return;
    }
    (*ptr).devolve();
}

/// Maps a surface point to the index of the cell under it, clamped onto the grid.
///
/// # Safety
/// - `ptr` must be a valid pointer to a grid
///
/// # Returns
/// The cell index, or -1 on null pointer or a non-positive cell size.
#[no_mangle]
pub unsafe extern "C" fn gol_cell_index_from_point(
    ptr: *const GridSimulator,
    x: f32,
    y: f32,
    cell_width: f32,
    cell_height: f32,
) -> i64 {
    if ptr.is_null() {
        warn!("gol_cell_index_from_point: null grid pointer");
        return -1;
    }

    match (*ptr).cell_index_from_point(Point::new(x, y), Extent::new(cell_width, cell_height)) {
        Ok(index) => index as i64,
        Err(e) => {
            warn!("gol_cell_index_from_point: {}", e);
            -1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::lifecycle;
    use std::ptr;

    #[test]
    fn test_set_and_get_cell() {
        unsafe {
            let grid = lifecycle::gol_create(8);

            assert_eq!(gol_set_cell(grid, 0, 1), 0);
            assert_eq!(gol_get_cell(grid, 0), 1);

            assert_eq!(gol_set_cell(grid, 0, 0), 0);
            assert_eq!(gol_get_cell(grid, 0), 0);

            lifecycle::gol_destroy(grid);
        }
    }

    #[test]
    fn test_out_of_range_access() {
        unsafe {
            let grid = lifecycle::gol_create(4);

            assert_eq!(gol_get_cell(grid, 16), 0);
            assert_eq!(gol_set_cell(grid, 16, 1), 1);

            // Indices beyond usize never alias a real cell
            assert_eq!(gol_set_cell(grid, u64::MAX, 1), 1);
            assert_eq!(gol_get_cell(grid, u64::MAX), 0);
            assert_eq!(gol_set_cell(grid, (1u64 << 32) + 3, 1), 1);
            assert_eq!(gol_get_cell(grid, 3), 0);

            lifecycle::gol_destroy(grid);
        }
    }

    #[test]
    fn test_evolve_and_devolve() {
        unsafe {
            let grid = lifecycle::gol_create(5);

            // Horizontal blinker through the center
            for i in [11, 12, 13] {
                gol_set_cell(grid, i, 1);
            }

            gol_evolve(grid);
            assert_eq!(lifecycle::gol_get_generation(grid), 1);
            assert_eq!(lifecycle::gol_current_slot(grid), 1);
            assert_eq!(gol_get_cell(grid, 7), 1);
            assert_eq!(gol_get_cell(grid, 17), 1);
            assert_eq!(gol_get_cell(grid, 11), 0);

            gol_devolve(grid);
            assert_eq!(lifecycle::gol_current_slot(grid), 0);
            assert_eq!(gol_get_cell(grid, 11), 1);
            assert_eq!(gol_get_cell(grid, 7), 0);

            lifecycle::gol_destroy(grid);
        }
    }

    #[test]
    fn test_initialize() {
        unsafe {
            let grid = lifecycle::gol_create(4);
            gol_set_cell(grid, 3, 1);

            assert_eq!(gol_initialize(grid, 6), 0);
            assert_eq!(lifecycle::gol_side_length(grid), 6);
            assert_eq!(gol_get_cell(grid, 3), 0);

            assert_eq!(gol_initialize(grid, 0), 1);
            assert_eq!(lifecycle::gol_side_length(grid), 6);

            lifecycle::gol_destroy(grid);
        }
    }

    #[test]
    fn test_cell_index_from_point() {
        unsafe {
            let grid = lifecycle::gol_create(10);

            assert_eq!(gol_cell_index_from_point(grid, 15.0, 25.0, 10.0, 10.0), 21);
            assert_eq!(gol_cell_index_from_point(grid, -5.0, 999.0, 10.0, 10.0), 90);
            assert_eq!(gol_cell_index_from_point(grid, 1.0, 1.0, 0.0, 10.0), -1);

            lifecycle::gol_destroy(grid);
        }
    }

    #[test]
    fn test_cell_index_conversion() {
        assert_eq!(cell_index(7), 7);
        assert_eq!(cell_index(u64::MAX), usize::MAX);
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            assert_eq!(gol_initialize(ptr::null_mut(), 8), 1);
            assert_eq!(gol_set_cell(ptr::null_mut(), 0, 1), 1);
            assert_eq!(gol_get_cell(ptr::null(), 0), 0);
            assert_eq!(gol_cell_index_from_point(ptr::null(), 0.0, 0.0, 1.0, 1.0), -1);
            gol_evolve(ptr::null_mut()); // Should not crash
            gol_devolve(ptr::null_mut()); // Should not crash
        }
    }
}
