//! Fixed timestep simulation tick
//!
//! One pass over the population in insertion order. For each body: gravity,
//! translation, wall response, grid insertion, then a pairwise sweep of every
//! bucket. The sweep runs once per body rather than once per tick, so a pair
//! resolved early in the pass is compared again, with its new state, as later
//! bodies are filed. Results depend on population order and are reproducible
//! for a given order.
//!
//! Separation runs after the wall clamp and is not clamped itself. A ball
//! pushed apart near a wall can end the tick slightly outside the arena; the
//! next tick's wall pass pulls it back.

use super::boundary::resolve_walls;
use super::collision::resolve_pair;
use super::grid::SpatialGrid;
use super::integrator::integrate;
use super::state::{Body, World};
use crate::settings::SimulationConfig;

/// Counters gathered during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Axis violations (a corner counts twice)
    pub wall_hits: u32,
    /// Bodies filed into a bucket
    pub inserted: u32,
    /// Narrow-phase distance tests
    pub pair_checks: u64,
    /// Overlapping pairs resolved
    pub collisions: u32,
    /// Resolved pairs whose centres coincided
    pub degenerate_contacts: u32,
}

/// Advance the world by one fixed timestep
pub fn tick(world: &mut World, config: &SimulationConfig, dt: f32) -> TickStats {
    let World {
        bodies,
        grid,
        tick_count,
    } = world;

    grid.rebuild(config.arena_width, config.arena_height, config.cell_size);

    let gravity = config.gravity_enabled.then_some(config.gravity);
    let diameter = config.ball_diameter;
    let mut stats = TickStats::default();

    for index in 0..bodies.len() {
        let body = &mut bodies[index];

        integrate(body, gravity, dt);
        let tentative = body.pos;
        let hits = resolve_walls(
            body,
            tentative,
            config.arena_width,
            config.arena_height,
            diameter,
            config.energy_loss,
        );
        stats.wall_hits += hits.count();

        if !config.collisions_enabled {
            continue;
        }

        if grid.insert(index, body.pos, config.grid_insert).is_some() {
            stats.inserted += 1;
        }

        sweep(bodies, grid, diameter, &mut stats);
    }

    *tick_count += 1;

    log::trace!(
        "tick {}: {} bodies, {} wall hits, {} collisions ({} degenerate), {} pair checks",
        tick_count,
        bodies.len(),
        stats.wall_hits,
        stats.collisions,
        stats.degenerate_contacts,
        stats.pair_checks
    );

    stats
}

/// Resolve every overlapping pair that shares a bucket
fn sweep(bodies: &mut [Body], grid: &SpatialGrid, diameter: f32, stats: &mut TickStats) {
    for bucket in grid.buckets() {
        for (k, &i) in bucket.iter().enumerate() {
            for &j in &bucket[k + 1..] {
                stats.pair_checks += 1;
                if let Some(contact) = resolve_pair(bodies, i, j, diameter) {
                    stats.collisions += 1;
                    if contact.degenerate {
                        stats.degenerate_contacts += 1;
                    }
                }
            }
        }
    }
}
