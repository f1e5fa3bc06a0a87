//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::state::Extent;

/// User-tunable settings for a [`Session`](crate::session::Session).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cells along each side of the square grid.
    pub subdivisions: usize,
    /// Frames between generations while the simulation runs. Lower is faster.
    pub tick_rate: u32,
    /// Size of the host surface the grid covers.
    pub extent: Extent,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            subdivisions: 60,
            tick_rate: 35,
            extent: Extent::new(800.0, 800.0),
        }
    }
}

impl Config {
    /// Parse a TOML document. Missing keys take their default values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(source).map_err(|e| Error::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.subdivisions == 0 {
            return Err(Error::InvalidConfiguration(
                "subdivisions must be at least 1".to_string(),
            ));
        }
        if self.tick_rate == 0 {
            return Err(Error::InvalidConfiguration(
                "tick_rate must be at least 1".to_string(),
            ));
        }
        if !self.extent.is_positive() {
            return Err(Error::InvalidConfiguration(format!(
                "extent must be finite and positive, got {}x{}",
                self.extent.width, self.extent.height
            )));
        }
        let cell_size = self.cell_size();
        if !cell_size.is_positive() {
            return Err(Error::InvalidConfiguration(format!(
                "extent {}x{} is too small for {} subdivisions",
                self.extent.width, self.extent.height, self.subdivisions
            )));
        }
        Ok(())
    }

    /// Size of one cell on the host surface.
    pub fn cell_size(&self) -> Extent {
        cell_size_for(self.extent, self.subdivisions)
    }
}

fn cell_size_for(extent: Extent, subdivisions: usize) -> Extent {
    let n = subdivisions.max(1) as f32;
    Extent::new(extent.width / n, extent.height / n)
}
