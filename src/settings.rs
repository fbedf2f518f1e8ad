//! Simulation settings
//!
//! Every value here may change between ticks; the step reads the config fresh
//! on each call, so an accepted change takes effect on the next tick.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, Result};
use crate::sim::{GridInsert, grid_dims};

/// Runtime parameters for the simulation step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Arena width (arena units, origin top-left)
    pub arena_width: f32,
    /// Arena height (y grows downward)
    pub arena_height: f32,
    /// Apply gravity each tick
    pub gravity_enabled: bool,
    /// Run the broad and narrow collision phases
    pub collisions_enabled: bool,
    /// Downward acceleration used when gravity is enabled
    pub gravity: f32,
    /// Fraction of speed lost per wall hit, per axis
    pub energy_loss: f32,
    /// Diameter shared by every ball
    pub ball_diameter: f32,
    /// Broad-phase bucket edge length
    pub cell_size: f32,
    /// Which bodies get a grid bucket
    pub grid_insert: GridInsert,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            gravity_enabled: true,
            collisions_enabled: true,
            gravity: GRAVITY,
            energy_loss: ENERGY_LOSS,
            ball_diameter: BALL_DIAMETER,
            cell_size: GRID_CELL_SIZE,
            grid_insert: GridInsert::Every,
        }
    }
}

impl SimulationConfig {
    /// Default settings for an arena of the given size
    pub fn with_arena(width: f32, height: f32) -> Result<Self> {
        let mut config = Self::default();
        config.set_arena(width, height)?;
        Ok(config)
    }

    /// Parse settings from JSON; missing fields fall back to defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Check every invariant the step relies on
    pub fn validate(&self) -> Result<()> {
        check_diameter(self.ball_diameter)?;
        check_energy_loss(self.energy_loss)?;
        check_cell_size(self.cell_size)?;
        check_gravity(self.gravity)?;
        check_arena(self.arena_width, self.arena_height, self.ball_diameter)?;
        check_grid(self.arena_width, self.arena_height, self.cell_size)
    }

    /// Ball radius (half the diameter)
    #[inline]
    pub fn radius(&self) -> f32 {
        self.ball_diameter / 2.0
    }

    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity_enabled = enabled;
        log::debug!("Gravity {}", if enabled { "on" } else { "off" });
    }

    pub fn set_collisions_enabled(&mut self, enabled: bool) {
        self.collisions_enabled = enabled;
        log::debug!("Collisions {}", if enabled { "on" } else { "off" });
    }

    pub fn set_energy_loss(&mut self, fraction: f32) -> Result<()> {
        check_energy_loss(fraction)?;
        self.energy_loss = fraction;
        log::debug!("Energy loss set to {fraction}");
        Ok(())
    }

    /// Changes the collision diameter of every ball; mass is untouched
    pub fn set_diameter(&mut self, diameter: f32) -> Result<()> {
        check_diameter(diameter)?;
        check_arena(self.arena_width, self.arena_height, diameter)?;
        self.ball_diameter = diameter;
        log::debug!("Ball diameter set to {diameter}");
        Ok(())
    }

    /// Broad-phase bucket size; the resulting grid must stay within
    /// `MAX_BUCKETS`
    pub fn set_cell_size(&mut self, cell_size: f32) -> Result<()> {
        check_cell_size(cell_size)?;
        check_grid(self.arena_width, self.arena_height, cell_size)?;
        self.cell_size = cell_size;
        log::debug!("Grid cell size set to {cell_size}");
        Ok(())
    }

    pub fn set_grid_insert(&mut self, policy: GridInsert) {
        self.grid_insert = policy;
        log::debug!("Grid insert policy set to {policy:?}");
    }

    pub fn set_gravity(&mut self, gravity: f32) -> Result<()> {
        check_gravity(gravity)?;
        self.gravity = gravity;
        log::debug!("Gravity set to {gravity}");
        Ok(())
    }

    /// Resize the arena (window resize); bodies outside are pulled back in
    /// by the next tick's wall pass
    pub fn set_arena(&mut self, width: f32, height: f32) -> Result<()> {
        check_arena(width, height, self.ball_diameter)?;
        check_grid(width, height, self.cell_size)?;
        self.arena_width = width;
        self.arena_height = height;
        log::debug!("Arena resized to {width}x{height}");
        Ok(())
    }
}

fn check_diameter(diameter: f32) -> Result<()> {
    if diameter.is_finite() && diameter > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDiameter(diameter))
    }
}

fn check_energy_loss(fraction: f32) -> Result<()> {
    if (0.0..=1.0).contains(&fraction) {
        Ok(())
    } else {
        Err(ConfigError::InvalidEnergyLoss(fraction))
    }
}

fn check_cell_size(cell_size: f32) -> Result<()> {
    if cell_size.is_finite() && cell_size > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidCellSize(cell_size))
    }
}

fn check_grid(width: f32, height: f32, cell_size: f32) -> Result<()> {
    match grid_dims(width, height, cell_size) {
        Some(_) => Ok(()),
        None => Err(ConfigError::GridTooFine {
            cell_size,
            width,
            height,
        }),
    }
}

fn check_gravity(gravity: f32) -> Result<()> {
    if gravity.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidGravity(gravity))
    }
}

fn check_arena(width: f32, height: f32, diameter: f32) -> Result<()> {
    // NaN fails both comparisons
    if width.is_finite() && height.is_finite() && width > diameter && height > diameter {
        Ok(())
    } else {
        Err(ConfigError::ArenaTooSmall {
            width,
            height,
            diameter,
        })
    }
}
