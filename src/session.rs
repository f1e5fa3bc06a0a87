//! Frame-driven simulation loop.
//!
//! A [`Session`] owns one grid and is driven by the host's render loop: user
//! input arrives as [`Action`] values and `tick()` is called once per frame.
//! While running, a generation is produced every `tick_rate` frames. The
//! renderer reads back a [`Frame`] between ticks.

use log::info;

use crate::config::Config;
use crate::error::Result;
use crate::state::{Cell, Extent, GridSimulator, Point};

/// A discrete user action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// Paint the cell under the point alive.
    PaintAlive(Point),
    /// Paint the cell under the point dead.
    PaintDead(Point),
    /// Move the cursor without painting.
    Hover(Point),
    /// Start or pause the simulation.
    ToggleTick,
    StepForward,
    StepBackward,
    /// Clear the grid at the configured size.
    Reset,
}

/// Read-only view of the grid for a renderer.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub cells: &'a [Cell],
    pub side_length: usize,
    pub cell_size: Extent,
    /// Index of the cell under the cursor, drawn highlighted.
    pub hovered: usize,
    pub generation: u64,
    pub ticking: bool,
}

pub struct Session {
    grid: GridSimulator,
    config: Config,
    cell_size: Extent,
    ticking: bool,
    frames_since_evolve: u32,
    hovered: usize,
}

impl Session {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let grid = GridSimulator::new(config.subdivisions)?;

        Ok(Session {
            grid,
            cell_size: config.cell_size(),
            config,
            ticking: false,
            frames_since_evolve: 0,
            hovered: 0,
        })
    }

    pub fn grid(&self) -> &GridSimulator {
        &self.grid
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cell_size(&self) -> Extent {
        self.cell_size
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    pub fn hovered(&self) -> usize {
        self.hovered
    }

    /// Apply one user action. Painting never fails for a valid session since
    /// points are clamped onto the grid.
    pub fn apply(&mut self, action: Action) -> Result<()> {
        match action {
            Action::PaintAlive(point) => {
                self.hover(point)?;
                self.grid.set_cell_alive(self.hovered)?;
            }
            Action::PaintDead(point) => {
                self.hover(point)?;
                self.grid.set_cell_dead(self.hovered)?;
            }
            Action::Hover(point) => self.hover(point)?,
            Action::ToggleTick => {
                self.ticking = !self.ticking;
                self.frames_since_evolve = 0;
                info!(
                    "Simulation {}",
                    if self.ticking { "running" } else { "paused" }
                );
            }
            Action::StepForward => self.grid.evolve(),
            Action::StepBackward => self.grid.devolve(),
            Action::Reset => {
                self.grid.initialize(self.config.subdivisions)?;
                self.ticking = false;
                self.frames_since_evolve = 0;
                self.hovered = 0;
            }
        }
        Ok(())
    }

    fn hover(&mut self, point: Point) -> Result<()> {
        self.hovered = self.grid.cell_index_from_point(point, self.cell_size)?;
        Ok(())
    }

    /// Advance the frame counter. Returns true if a generation was produced.
    ///
    /// Every generation keeps a full copy of the previous one in history, so a
    /// session left running grows without bound until `Reset` or `resize`.
    pub fn tick(&mut self) -> bool {
        if !self.ticking {
            return false;
        }

        self.frames_since_evolve += 1;
        if self.frames_since_evolve >= self.config.tick_rate {
            self.frames_since_evolve = 0;
            self.grid.evolve();
            true
        } else {
            false
        }
    }

    /// Reinitialize at a new size. History is discarded.
    pub fn resize(&mut self, subdivisions: usize) -> Result<()> {
        let config = Config {
            subdivisions,
            ..self.config.clone()
        };
        config.validate()?;
        self.grid.initialize(subdivisions)?;
        self.cell_size = config.cell_size();
        self.config = config;
        self.hovered = 0;
        Ok(())
    }

    /// Track a change in the host surface size.
    pub fn set_extent(&mut self, extent: Extent) -> Result<()> {
        let config = Config {
            extent,
            ..self.config.clone()
        };
        config.validate()?;
        self.cell_size = config.cell_size();
        self.config = config;
        Ok(())
    }

    pub fn set_tick_rate(&mut self, tick_rate: u32) -> Result<()> {
        let config = Config {
            tick_rate,
            ..self.config.clone()
        };
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            cells: self.grid.cells(),
            side_length: self.grid.side_length(),
            cell_size: self.cell_size,
            hovered: self.hovered,
            generation: self.grid.generation(),
            ticking: self.ticking,
        }
    }
}
