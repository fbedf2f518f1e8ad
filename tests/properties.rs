//! Physical invariants checked over random inputs

use std::f32::consts::PI;

use ballpit::SimulationConfig;
use ballpit::sim::{Body, GridInsert, Motion, SpatialGrid, World, handle_collision, tick};
use glam::Vec2;
use proptest::prelude::*;

fn body(pos: Vec2, mass: f32, speed: f32, heading: f32) -> Body {
    Body::with_motion(pos, mass, Motion::new(speed, heading)).unwrap()
}

proptest! {
    #[test]
    fn collision_conserves_momentum_and_energy(
        m1 in 1.0f32..1000.0,
        m2 in 1.0f32..1000.0,
        s1 in 0.0f32..100.0,
        s2 in 0.0f32..100.0,
        h1 in -PI..PI,
        h2 in -PI..PI,
        offset_angle in -PI..PI,
        offset_len in 0.1f32..3.9,
    ) {
        let a_pos = Vec2::new(500.0, 500.0);
        let b_pos = a_pos + Vec2::new(offset_angle.cos(), offset_angle.sin()) * offset_len;
        let mut a = body(a_pos, m1, s1, h1);
        let mut b = body(b_pos, m2, s2, h2);

        let p_before = a.momentum() + b.momentum();
        let e_before = a.kinetic_energy() + b.kinetic_energy();
        let scale = a.momentum().length() + b.momentum().length() + 1.0;

        handle_collision(&mut a, &mut b, 4.0);

        let p_after = a.momentum() + b.momentum();
        let e_after = a.kinetic_energy() + b.kinetic_energy();

        prop_assert!((p_before - p_after).length() <= 1e-3 * scale);
        prop_assert!((e_before - e_after).abs() <= 1e-3 * (e_before + 1.0));
    }

    #[test]
    fn collision_leaves_pair_separated(
        diameter in 1.0f32..20.0,
        frac in 0.0f32..1.0,
        offset_angle in -PI..PI,
        s1 in 0.0f32..100.0,
        h1 in -PI..PI,
    ) {
        let a_pos = Vec2::new(300.0, 300.0);
        let b_pos = a_pos + Vec2::new(offset_angle.cos(), offset_angle.sin()) * diameter * frac;
        let mut a = body(a_pos, 100.0, s1, h1);
        let mut b = body(b_pos, 100.0, 0.0, 0.0);

        handle_collision(&mut a, &mut b, diameter);

        prop_assert!(a.pos.is_finite() && b.pos.is_finite());
        prop_assert!(a.pos.distance(b.pos) >= diameter - 1e-3);
    }

    #[test]
    fn one_tick_keeps_bodies_in_arena(
        starts in prop::collection::vec(
            (-200.0f32..1200.0, -200.0f32..1000.0, 0.0f32..5000.0, -PI..PI),
            1..40,
        ),
        gravity_enabled in any::<bool>(),
    ) {
        let mut config = SimulationConfig::with_arena(1000.0, 800.0).unwrap();
        config.set_gravity_enabled(gravity_enabled);
        // Pair separation can push a ball past a wall until the next tick
        config.set_collisions_enabled(false);

        let bodies = starts
            .iter()
            .map(|&(x, y, s, h)| body(Vec2::new(x, y), 100.0, s, h))
            .collect();
        let mut world = World::with_bodies(bodies);
        tick(&mut world, &config, 0.01);

        let max_x = config.arena_width - config.ball_diameter;
        let max_y = config.arena_height - config.ball_diameter;
        for b in world.bodies() {
            prop_assert!((0.0..=max_x).contains(&b.pos.x));
            prop_assert!((0.0..=max_y).contains(&b.pos.y));
        }
    }

    #[test]
    fn grid_files_each_body_once_at_floor_cell(
        positions in prop::collection::vec((0.0f32..996.0, 0.0f32..796.0), 0..200),
    ) {
        let mut grid = SpatialGrid::new(1000.0, 800.0, 100.0);
        for (i, &(x, y)) in positions.iter().enumerate() {
            grid.insert(i, Vec2::new(x, y), GridInsert::Every);
        }

        prop_assert_eq!(grid.len(), positions.len());
        for (i, &(x, y)) in positions.iter().enumerate() {
            let col = (x / 100.0).floor() as usize;
            let row = (y / 100.0).floor() as usize;
            let found: Vec<(usize, usize)> = (0..10)
                .flat_map(|c| (0..8).map(move |r| (c, r)))
                .filter(|&(c, r)| grid.bucket(c, r).contains(&i))
                .collect();
            prop_assert_eq!(found, vec![(col, row)]);
        }
    }
}

#[test]
fn falling_ball_scenario() {
    let config = SimulationConfig::with_arena(1000.0, 1000.0).unwrap();
    let mut world = World::with_bodies(vec![body(Vec2::new(400.0, 50.0), 100.0, 0.0, 0.0)]);

    tick(&mut world, &config, 0.01);

    let b = &world.bodies()[0];
    assert!(b.pos.y > 50.0);
    assert!(b.motion.speed() > 0.0);
}

#[test]
fn head_on_scenario() {
    let mut a = body(Vec2::new(100.0, 100.0), 100.0, 10.0, 0.0);
    let mut b = body(Vec2::new(103.0, 100.0), 100.0, 10.0, PI);

    handle_collision(&mut a, &mut b, 4.0);

    assert!((a.motion.speed() - 10.0).abs() < 1e-3);
    assert!((b.motion.speed() - 10.0).abs() < 1e-3);
    assert!((a.motion.heading().abs() - PI).abs() < 1e-3);
    assert!(b.motion.heading().abs() < 1e-3);
    assert!(a.pos.distance(b.pos) >= 4.0 - 1e-4);
}

#[test]
fn right_wall_scenario() {
    let mut config = SimulationConfig::with_arena(800.0, 600.0).unwrap();
    config.set_gravity_enabled(false);
    let mut world = World::with_bodies(vec![body(Vec2::new(799.0, 300.0), 100.0, 50.0, 0.0)]);

    tick(&mut world, &config, 0.01);

    let b = &world.bodies()[0];
    assert_eq!(b.pos.x, 800.0 - config.ball_diameter);
    assert!((b.motion.heading() - PI).abs() < 1e-6);
}

#[test]
fn spawned_ring_settles_without_blowing_up() {
    use ballpit::spawn::{SpawnPattern, spawn};

    let config = SimulationConfig::with_arena(800.0, 600.0).unwrap();
    let mut world = World::new();
    for center in [Vec2::new(400.0, 300.0), Vec2::new(420.0, 280.0)] {
        let ring = spawn(SpawnPattern::default(), center, 100.0, config.radius()).unwrap();
        world.spawn(ring);
    }

    for _ in 0..500 {
        tick(&mut world, &config, 0.01);
    }

    assert_eq!(world.population(), 200);
    for b in world.bodies() {
        assert!(b.pos.is_finite());
        assert!(b.motion.speed().is_finite());
    }
}
