//! Arena wall response
//!
//! Valid positions are `[0, width - diameter] x [0, height - diameter]` so the
//! whole ball stays visible. Each axis is handled on its own: a violation
//! damps the speed and mirrors the heading, then the coordinate is clamped.
//! A corner hit therefore damps twice.

use glam::Vec2;

use super::state::Body;

/// Which walls were touched this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallHits {
    /// Left or right wall
    pub x: bool,
    /// Top or bottom wall
    pub y: bool,
}

impl WallHits {
    #[inline]
    pub fn any(&self) -> bool {
        self.x || self.y
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.x as u32 + self.y as u32
    }
}

/// Settle a body at `tentative`, bouncing off any wall it reached
///
/// Flags are taken from the unclamped position; touching a bound counts as a
/// hit. The body always ends inside the bounds.
pub fn resolve_walls(
    body: &mut Body,
    tentative: Vec2,
    width: f32,
    height: f32,
    diameter: f32,
    energy_loss: f32,
) -> WallHits {
    let max_x = width - diameter;
    let max_y = height - diameter;
    let keep = 1.0 - energy_loss;

    let right = tentative.x >= max_x;
    let left = tentative.x <= 0.0;
    let bottom = tentative.y >= max_y;
    let top = tentative.y <= 0.0;

    let mut pos = tentative;
    let hits = WallHits {
        x: left || right,
        y: top || bottom,
    };

    if hits.x {
        body.motion = body.motion.scaled(keep).mirrored_x();
        pos.x = if right { max_x } else { 0.0 };
    }

    if hits.y {
        body.motion = body.motion.scaled(keep).mirrored_y();
        pos.y = if bottom { max_y } else { 0.0 };
    }

    body.pos = pos;
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Motion;
    use std::f32::consts::PI;

    const W: f32 = 1000.0;
    const H: f32 = 800.0;
    const D: f32 = 4.0;

    fn body_moving(speed: f32, heading: f32) -> Body {
        Body::with_motion(Vec2::new(500.0, 400.0), 100.0, Motion::new(speed, heading)).unwrap()
    }

    #[test]
    fn test_inside_is_untouched() {
        let mut body = body_moving(10.0, 0.3);
        let hits = resolve_walls(&mut body, Vec2::new(510.0, 420.0), W, H, D, 0.15);

        assert!(!hits.any());
        assert_eq!(body.pos, Vec2::new(510.0, 420.0));
        assert_eq!(body.motion.speed(), 10.0);
    }

    #[test]
    fn test_right_wall_reflects_and_clamps() {
        let mut body = body_moving(50.0, 0.0);
        let hits = resolve_walls(&mut body, Vec2::new(W - 0.5, 400.0), W, H, D, 0.15);

        assert!(hits.x && !hits.y);
        assert_eq!(body.pos.x, W - D);
        assert!((body.motion.speed() - 42.5).abs() < 1e-4);
        assert!(body.motion.velocity().x < 0.0);
        assert!((body.motion.heading() - PI).abs() < 1e-6);
    }

    #[test]
    fn test_floor_bounce_flips_vertical() {
        let mut body = body_moving(20.0, PI / 2.0);
        let hits = resolve_walls(&mut body, Vec2::new(300.0, H + 3.0), W, H, D, 0.0);

        assert!(hits.y && !hits.x);
        assert_eq!(body.pos.y, H - D);
        assert!(body.motion.velocity().y < 0.0);
        assert_eq!(body.motion.speed(), 20.0);
    }

    #[test]
    fn test_corner_damps_twice() {
        let mut body = body_moving(100.0, -3.0 * PI / 4.0);
        let hits = resolve_walls(&mut body, Vec2::new(-5.0, -5.0), W, H, D, 0.1);

        assert_eq!(hits.count(), 2);
        assert_eq!(body.pos, Vec2::ZERO);
        assert!((body.motion.speed() - 81.0).abs() < 1e-3);

        let v = body.motion.velocity();
        assert!(v.x > 0.0 && v.y > 0.0);
    }

    #[test]
    fn test_far_outside_is_pulled_back() {
        let mut body = body_moving(0.0, 0.0);
        resolve_walls(&mut body, Vec2::new(5000.0, -300.0), W, H, D, 0.15);
        assert_eq!(body.pos, Vec2::new(W - D, 0.0));
    }
}
