//! Ballpit - a 2D arena of bouncing balls
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gravity, wall bounces, ball collisions)
//! - `settings`: Runtime configuration surface
//! - `spawn`: Batch body creation (rings, stars, scatters)
//! - `renderer`: Circle extraction for whatever draws the frame
//! - `platform`: Fixed-rate scheduling and browser front end

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod spawn;

pub use error::{ConfigError, Result};
pub use settings::SimulationConfig;

use glam::Vec2;

/// Simulation defaults
pub mod consts {
    /// Target tick rate (ticks per second)
    pub const FRAME_RATE: u32 = 100;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / FRAME_RATE as f32;
    /// Maximum ticks run per scheduler wakeup before backlog is dropped
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Downward acceleration (arena units/s²)
    pub const GRAVITY: f32 = 900.81;
    /// Fraction of speed lost on each wall hit
    pub const ENERGY_LOSS: f32 = 0.15;

    /// Ball defaults
    pub const BALL_DIAMETER: f32 = 4.0;
    pub const BALL_MASS: f32 = 100.0;

    /// Broad-phase bucket edge length
    pub const GRID_CELL_SIZE: f32 = 100.0;

    /// Arena used when nothing else is configured
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Click spawn: balls arranged on a circle around the cursor
    pub const RING_BALLS: u32 = 100;
    pub const RING_RADIUS: f32 = 200.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(v: Vec2) -> (f32, f32) {
    (v.length(), v.y.atan2(v.x))
}
