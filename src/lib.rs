//! Life Grid - Conway's Game of Life engine with generation history
//!
//! A square grid with toroidal neighbor addressing, stepped forward by the
//! B3/S23 rule and backward through a snapshot stack. A frame-driven
//! [`Session`] turns user actions and per-frame ticks into grid operations,
//! and the `ffi` module exposes both over a C ABI for a host renderer.

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod session;
pub mod state;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{Error, Result};
pub use session::{Action, Frame, Session};
pub use state::{Cell, Extent, GridSimulator, Point};
