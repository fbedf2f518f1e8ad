//! Configuration error types.

use thiserror::Error;

/// Errors raised at the configuration and spawn boundary.
///
/// Nothing inside a tick returns these; invalid values are rejected before
/// they can reach the step.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Ball diameter must be finite and positive.
    #[error("invalid ball diameter: {0}")]
    InvalidDiameter(f32),

    /// Energy loss must lie in [0, 1].
    #[error("energy loss must be within [0, 1], got {0}")]
    InvalidEnergyLoss(f32),

    /// Grid cell size must be finite and positive.
    #[error("invalid grid cell size: {0}")]
    InvalidCellSize(f32),

    /// The cell size would cut the arena into too many buckets.
    #[error("cell size {cell_size} is too fine for a {width}x{height} arena")]
    GridTooFine {
        cell_size: f32,
        width: f32,
        height: f32,
    },

    /// Gravity must be finite.
    #[error("invalid gravity: {0}")]
    InvalidGravity(f32),

    /// Body mass must be finite and positive.
    #[error("invalid body mass: {0}")]
    InvalidMass(f32),

    /// The arena has to fit at least one ball on each axis.
    #[error("arena {width}x{height} cannot hold a ball of diameter {diameter}")]
    ArenaTooSmall {
        width: f32,
        height: f32,
        diameter: f32,
    },

    /// Config file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for this schema.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
