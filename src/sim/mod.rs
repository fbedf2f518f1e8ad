//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (population insertion order)
//! - No rendering or platform dependencies

pub mod boundary;
pub mod collision;
pub mod grid;
pub mod integrator;
pub mod state;
pub mod tick;

pub use boundary::{WallHits, resolve_walls};
pub use collision::{Contact, detect_collision, handle_collision, resolve_pair};
pub use grid::{GridInsert, MAX_BUCKETS, SpatialGrid, grid_dims};
pub use integrator::{apply_gravity, integrate, tentative_position};
pub use state::{Body, Motion, World};
pub use tick::{TickStats, tick};
