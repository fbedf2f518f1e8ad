//! Batch body creation
//!
//! Every spawn produces bodies at rest. Positions are top-left corners, so
//! each point is shifted by the ball radius to centre the drawn circle on it.
//! Points outside the arena are accepted; the next tick's wall pass pulls them
//! back in.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{RING_BALLS, RING_RADIUS};
use crate::error::Result;
use crate::polar_to_cartesian;
use crate::sim::Body;

/// Arrangement of a spawned batch around a centre point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnPattern {
    /// `count` balls evenly spaced on a circle
    Ring { count: u32, radius: f32 },
    /// Balls along the outline of a star, pointing up
    Star {
        points: u32,
        per_edge: u32,
        inner_radius: f32,
        outer_radius: f32,
    },
    /// Seeded uniform scatter within `spread` of the centre on each axis
    Scatter { count: u32, spread: f32, seed: u64 },
}

impl Default for SpawnPattern {
    fn default() -> Self {
        SpawnPattern::Ring {
            count: RING_BALLS,
            radius: RING_RADIUS,
        }
    }
}

impl SpawnPattern {
    /// Centre points of the batch
    pub fn points(&self, center: Vec2) -> Vec<Vec2> {
        match *self {
            SpawnPattern::Ring { count, radius } => (0..count)
                .map(|i| center + polar_to_cartesian(radius, i as f32 / count as f32 * TAU))
                .collect(),
            SpawnPattern::Star {
                points,
                per_edge,
                inner_radius,
                outer_radius,
            } => star_outline(center, points, per_edge, inner_radius, outer_radius),
            SpawnPattern::Scatter {
                count,
                spread,
                seed,
            } => {
                let mut rng = Pcg32::seed_from_u64(seed);
                (0..count)
                    .map(|_| {
                        let u: f32 = rng.random();
                        let v: f32 = rng.random();
                        center + Vec2::new(u * 2.0 - 1.0, v * 2.0 - 1.0) * spread
                    })
                    .collect()
            }
        }
    }
}

/// Create a batch of resting bodies of the given mass around `center`
pub fn spawn(
    pattern: SpawnPattern,
    center: Vec2,
    mass: f32,
    ball_radius: f32,
) -> Result<Vec<Body>> {
    let offset = Vec2::splat(ball_radius);
    pattern
        .points(center)
        .into_iter()
        .map(|p| Body::new(p - offset, mass))
        .collect()
}

fn star_outline(center: Vec2, points: u32, per_edge: u32, inner: f32, outer: f32) -> Vec<Vec2> {
    if points == 0 || per_edge == 0 {
        return Vec::new();
    }

    // Alternating outer tip and inner notch, first tip straight up (-y)
    let corners: Vec<Vec2> = (0..points * 2)
        .map(|k| {
            let r = if k % 2 == 0 { outer } else { inner };
            let theta = k as f32 * PI / points as f32 - FRAC_PI_2;
            center + polar_to_cartesian(r, theta)
        })
        .collect();

    let mut out = Vec::with_capacity(corners.len() * per_edge as usize);
    for (k, &from) in corners.iter().enumerate() {
        let to = corners[(k + 1) % corners.len()];
        for j in 0..per_edge {
            out.push(from.lerp(to, j as f32 / per_edge as f32));
        }
    }
    out
}
