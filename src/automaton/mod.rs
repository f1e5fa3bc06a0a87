//! Core automaton logic.
//!
//! This module contains the grid addressing, the Game of Life rule, the
//! generation history and the alive/dead array exchange. The FFI layer in
//! `ffi/` and the frame-driven `session` call into these.

pub mod grid;
pub mod history;
pub mod region;
pub mod stepping;

pub use grid::{coords_of, get_live_cells_in, index_of, NEIGHBOR_OFFSETS};
pub use history::{HistoryStack, Snapshot};
pub use stepping::{next_state, PARALLEL_THRESHOLD};
