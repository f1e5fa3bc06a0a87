//! Grid creation, destruction, queries and logger setup.

use log::{warn, LevelFilter};

use crate::state::GridSimulator;

/// Creates a `subdivisions × subdivisions` grid and returns an opaque pointer.
///
/// # Returns
/// A pointer to a new grid, or null if `subdivisions` is 0.
///
/// # Safety
/// The returned pointer must eventually be freed with `gol_destroy()`.
#[no_mangle]
pub extern "C" fn gol_create(subdivisions: u32) -> *mut GridSimulator {
    match GridSimulator::new(subdivisions as usize) {
        Ok(grid) => Box::into_raw(Box::new(grid)),
        Err(e) => {
            warn!("gol_create: {}", e);
            std::ptr::null_mut()
        }
    }
}

/// Destroys a grid and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `gol_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn gol_destroy(ptr: *mut GridSimulator) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the current generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to a grid, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gol_get_generation(ptr: *const GridSimulator) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

/// # Safety
/// - `ptr` must be a valid pointer to a grid, or null
///
/// # Returns
/// Cells per side, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gol_side_length(ptr: *const GridSimulator) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).side_length() as u64
}

/// # Safety
/// - `ptr` must be a valid pointer to a grid, or null
///
/// # Returns
/// The current history slot, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn gol_current_slot(ptr: *const GridSimulator) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).current_slot() as u64
}

/// Installs a stderr logger for the library's `log` output.
///
/// `level`: 0 = error, 1 = warn, 2 = info, 3 = debug, anything higher = trace.
///
/// # Returns
/// 0 on success, 1 if a logger is already installed.
#[no_mangle]
pub extern "C" fn gol_init_logging(level: u8) -> i32 {
    let filter = match level {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    match simple_logger::SimpleLogger::new().with_level(filter).init() {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_create_and_destroy() {
        unsafe {
            let grid = gol_create(8);
            assert!(!grid.is_null());
            assert_eq!(gol_side_length(grid), 8);
            assert_eq!(gol_get_generation(grid), 0);
            assert_eq!(gol_current_slot(grid), 0);

            // Should not crash
            gol_destroy(grid);
        }
    }

    #[test]
    fn test_create_rejects_bad_sizes() {
        assert!(gol_create(0).is_null());
        // Too many cells to allocate: rejected, not aborted
        assert!(gol_create(u32::MAX).is_null());
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            gol_destroy(ptr::null_mut());
            assert_eq!(gol_get_generation(ptr::null()), 0);
            assert_eq!(gol_side_length(ptr::null()), 0);
            assert_eq!(gol_current_slot(ptr::null()), 0);
        }
    }
}
