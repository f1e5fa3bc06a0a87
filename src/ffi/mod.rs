//! C FFI layer for host renderers.
//!
//! This module exports C ABI functions for a host that owns the window and
//! draws the cells. All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in `automaton` and `session`. These functions are thin wrappers
//! that handle null checks, pointer safety, and C-to-Rust conversions.

pub mod grid;
pub mod lifecycle;
pub mod region;
pub mod session;

pub use grid::{
    gol_cell_index_from_point, gol_devolve, gol_evolve, gol_get_cell, gol_initialize,
    gol_set_cell,
};
pub use lifecycle::{
    gol_create, gol_current_slot, gol_destroy, gol_get_generation, gol_init_logging,
    gol_side_length,
};
pub use region::{gol_extract_region, gol_import_region};
pub use session::{
    gol_session_apply, gol_session_create, gol_session_destroy, gol_session_grid,
    gol_session_hovered, gol_session_is_ticking, gol_session_tick,
};
