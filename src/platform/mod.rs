//! Platform abstraction layer
//!
//! Handles native/browser differences for:
//! - Tick scheduling and realized-rate reporting
//! - Drawing (2D canvas on web)
//! - Input events and configuration toggles (DOM on web)

pub mod clock;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use clock::{FixedStep, FpsCounter};
