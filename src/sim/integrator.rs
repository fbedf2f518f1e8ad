//! Gravity and translation
//!
//! Gravity acts along +y (the arena's "down"). It is a Cartesian force, so the
//! polar motion is decomposed, nudged on y, and recomposed.

use glam::Vec2;

use super::state::{Body, Motion};

/// Add `g * dt` to the body's vertical velocity
pub fn apply_gravity(body: &mut Body, g: f32, dt: f32) {
    let velocity = body.motion.velocity() + Vec2::new(0.0, g * dt);
    body.motion = Motion::from_velocity(velocity);
}

/// Position after moving `speed * dt` along the heading
///
/// Does not touch the body; the wall pass decides the final position.
#[inline]
pub fn tentative_position(body: &Body, dt: f32) -> Vec2 {
    let distance = body.motion.speed() * dt;
    let heading = body.motion.heading();
    body.pos + Vec2::new(distance * heading.cos(), distance * heading.sin())
}

/// Gravity (when enabled) then translation, with no wall handling
pub fn integrate(body: &mut Body, gravity: Option<f32>, dt: f32) {
    if let Some(g) = gravity {
        apply_gravity(body, g, dt);
    }
    body.pos = tentative_position(body, dt);
}
