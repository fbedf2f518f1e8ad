//! Ball-ball narrow phase and elastic response
//!
//! Two balls touch when their centres are closer than one diameter. The
//! response is a frictionless elastic collision: velocities are split into
//! components along the line of centres (normal) and across it (tangent), the
//! normal components go through the 1D elastic formulas, and the tangent
//! components are kept. Momentum and kinetic energy are conserved.

use glam::Vec2;

use super::state::{Body, Motion};

/// What happened when a pair was resolved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal from the first body toward the second
    pub normal: Vec2,
    /// Centre distance before separation
    pub distance: f32,
    /// Centres coincided; `normal` is the +x fallback
    pub degenerate: bool,
}

/// True when the two balls overlap
#[inline]
pub fn detect_collision(a: &Body, b: &Body, diameter: f32) -> bool {
    a.pos.distance(b.pos) < diameter
}

/// Exchange momentum along the line of centres and push the pair apart
///
/// When the centres coincide the line of centres is undefined; +x is used
/// instead so the pair still separates and nothing goes non-finite.
pub fn handle_collision(a: &mut Body, b: &mut Body, diameter: f32) -> Contact {
    let delta = b.pos - a.pos;
    let distance = delta.length();

    let degenerate = !(distance > f32::MIN_POSITIVE);
    let normal = if degenerate { Vec2::X } else { delta / distance };
    let tangent = normal.perp();

    let v1 = a.motion.velocity();
    let v2 = b.motion.velocity();

    let normal1 = v1.dot(normal);
    let normal2 = v2.dot(normal);
    let tangent1 = v1.dot(tangent);
    let tangent2 = v2.dot(tangent);

    let m1 = a.mass();
    let m2 = b.mass();
    let total = m1 + m2;

    let new_normal1 = (normal1 * (m1 - m2) + 2.0 * m2 * normal2) / total;
    let new_normal2 = (normal2 * (m2 - m1) + 2.0 * m1 * normal1) / total;

    a.motion = Motion::from_velocity(normal * new_normal1 + tangent * tangent1);
    b.motion = Motion::from_velocity(normal * new_normal2 + tangent * tangent2);

    if distance < diameter {
        let push = normal * (0.5 * (diameter - distance));
        a.pos -= push;
        b.pos += push;
    }

    Contact {
        normal,
        distance,
        degenerate,
    }
}

/// Detect and, on overlap, resolve bodies `i` and `j` of the population
pub fn resolve_pair(bodies: &mut [Body], i: usize, j: usize, diameter: f32) -> Option<Contact> {
    let (a, b) = pair_mut(bodies, i, j);
    if detect_collision(a, b, diameter) {
        Some(handle_collision(a, b, diameter))
    } else {
        None
    }
}

/// Two distinct mutable bodies, returned in (i, j) order
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    assert_ne!(i, j, "a body cannot collide with itself");
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}
