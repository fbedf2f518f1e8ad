//! Simulation state: motion, bodies and the world that owns them

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::SpatialGrid;
use crate::error::{ConfigError, Result};
use crate::{cartesian_to_polar, polar_to_cartesian};

/// Velocity in polar form
///
/// Replaced wholesale on every update: new values are always built from a
/// Cartesian velocity or from a whole (speed, heading) pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Motion {
    speed: f32,
    heading: f32,
}

impl Motion {
    /// At rest, heading 0
    pub const REST: Self = Self {
        speed: 0.0,
        heading: 0.0,
    };

    /// Build from speed and heading (radians). A negative speed is folded
    /// into the opposite heading so speed stays non-negative.
    pub fn new(speed: f32, heading: f32) -> Self {
        if speed < 0.0 {
            Self {
                speed: -speed,
                heading: heading + std::f32::consts::PI,
            }
        } else {
            Self { speed, heading }
        }
    }

    /// Build from Cartesian velocity components
    #[inline]
    pub fn from_velocity(velocity: Vec2) -> Self {
        let (speed, heading) = cartesian_to_polar(velocity);
        Self { speed, heading }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Cartesian velocity (vx, vy)
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        polar_to_cartesian(self.speed, self.heading)
    }

    /// Same heading, speed scaled by `factor`
    #[inline]
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.speed * factor, self.heading)
    }

    /// Reflect off a vertical wall (x component flips)
    #[inline]
    pub fn mirrored_x(self) -> Self {
        Self::new(self.speed, std::f32::consts::PI - self.heading)
    }

    /// Reflect off a horizontal wall (y component flips)
    #[inline]
    pub fn mirrored_y(self) -> Self {
        Self::new(self.speed, -self.heading)
    }
}

/// A simulated ball
///
/// `pos` is the top-left corner of the ball's bounding box, matching the
/// arena bounds `[0, width - diameter] x [0, height - diameter]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    mass: f32,
    pub motion: Motion,
}

impl Body {
    /// A body at rest. Mass must be finite and positive.
    pub fn new(pos: Vec2, mass: f32) -> Result<Self> {
        Self::with_motion(pos, mass, Motion::REST)
    }

    pub fn with_motion(pos: Vec2, mass: f32, motion: Motion) -> Result<Self> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(ConfigError::InvalidMass(mass));
        }
        Ok(Self { pos, mass, motion })
    }

    /// Mass is fixed for the body's lifetime
    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Momentum vector (mass-weighted Cartesian velocity)
    #[inline]
    pub fn momentum(&self) -> Vec2 {
        self.motion.velocity() * self.mass
    }

    /// Kinetic energy
    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.motion.speed() * self.motion.speed()
    }
}

/// Population plus the tick-scoped broad-phase grid
///
/// Bodies are only ever appended, and only between ticks.
#[derive(Debug, Default)]
pub struct World {
    pub(crate) bodies: Vec<Body>,
    pub(crate) grid: SpatialGrid,
    pub(crate) tick_count: u64,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bodies(bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            ..Self::default()
        }
    }

    /// Append a batch of bodies (call between ticks)
    pub fn spawn(&mut self, bodies: impl IntoIterator<Item = Body>) {
        let before = self.bodies.len();
        self.bodies.extend(bodies);
        log::debug!(
            "Spawned {} bodies (population {})",
            self.bodies.len() - before,
            self.bodies.len()
        );
    }

    /// Bodies in insertion order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn population(&self) -> usize {
        self.bodies.len()
    }

    /// Grid as built by the most recent tick
    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    /// Ticks run so far
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Total momentum of the population
    pub fn total_momentum(&self) -> Vec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }
}
