//! Region extraction and import for the renderer.

use log::warn;

use crate::state::GridSimulator;

/// Extracts a rectangular region of cells into a flat output buffer (1 = alive).
///
/// # Layout
/// Row-major over `[min_row, max_row) × [min_col, max_col)`, clamped to the grid.
///
/// # Safety
/// - `ptr` must be a valid grid pointer from `gol_create()`
/// - `out_buf` must point to at least `buf_len` writable bytes
///
/// # Returns
/// Number of bytes written, or 0 on error (null ptr/buffer, empty region, short buffer)
#[no_mangle]
pub unsafe extern "C" fn gol_extract_region(
    ptr: *const GridSimulator,
    out_buf: *mut u8,
    buf_len: u64,
    min_row: u32,
    min_col: u32,
    max_row: u32,
    max_col: u32,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        warn!("gol_extract_region: null grid or buffer pointer");
        return 0;
    }

    let out = std::slice::from_raw_parts_mut(out_buf, buf_len as usize);
    (*ptr).extract_region(
        out,
        min_row as usize,
        min_col as usize,
        max_row as usize,
        max_col as usize,
    ) as u64
}

/// Imports a rectangular region of cells from a flat buffer.
///
/// Buffer layout matches `gol_extract_region`. Any non-zero byte is alive.
///
/// # Safety
/// - `ptr` must be a valid grid pointer from `gol_create()`
/// - `in_buf` must point to at least `buf_len` readable bytes
///
/// # Returns
/// Number of bytes read, or 0 on error (null ptr/buffer, empty region, short buffer)
#[no_mangle]
pub unsafe extern "C" fn gol_import_region(
    ptr: *mut GridSimulator,
    in_buf: *const u8,
    buf_len: u64,
    min_row: u32,
    min_col: u32,
    max_row: u32,
    max_col: u32,
) -> u64 {
    if ptr.is_null() || in_buf.is_null() {
        warn!("gol_import_region: null grid or buffer pointer");
        return 0;
    }

    let input = std::slice::from_raw_parts(in_buf, buf_len as usize);
    (*ptr).import_region(
        input,
        min_row as usize,
        min_col as usize,
        max_row as usize,
        max_col as usize,
    ) as u64
}
