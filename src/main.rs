//! Ballpit entry point
//!
//! Native: `ballpit [config.json] [seconds]` runs headless at the fixed tick
//! rate, dropping a ring of balls somewhere in the arena every second.
//! Web: the canvas front end in `platform::web`.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    log::info!("Ballpit starting...");
    ballpit::platform::web::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = native::run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::{Duration, Instant};

    use glam::Vec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use ballpit::consts::*;
    use ballpit::platform::{FixedStep, FpsCounter};
    use ballpit::renderer::{Frame, FrameBuffer, Renderer};
    use ballpit::sim::{World, tick};
    use ballpit::spawn::{SpawnPattern, spawn};
    use ballpit::{Result, SimulationConfig};

    const DEFAULT_SECONDS: u64 = 5;
    const SPAWN_SEED: u64 = 0x5eed;

    /// Stands in for a drawing surface
    #[derive(Default)]
    struct LogRenderer {
        frames: u64,
    }

    impl Renderer for LogRenderer {
        fn render(&mut self, frame: &Frame<'_>) {
            self.frames += 1;
            log::trace!(
                "frame {}: {} circles, population {}",
                self.frames,
                frame.circles.len(),
                frame.population
            );
        }
    }

    pub fn run(args: &[String]) -> Result<()> {
        let config = match args.first() {
            Some(path) => SimulationConfig::load(path)?,
            None => SimulationConfig::default(),
        };
        let seconds = match args.get(1).map(|s| s.parse::<u64>()) {
            Some(Ok(seconds)) => seconds,
            Some(Err(e)) => {
                log::warn!("Bad duration {:?} ({e}), using {DEFAULT_SECONDS}s", args[1]);
                DEFAULT_SECONDS
            }
            None => DEFAULT_SECONDS,
        };

        log::info!(
            "Ballpit (native) {}x{} arena for {seconds}s",
            config.arena_width,
            config.arena_height
        );

        let mut rng = Pcg32::seed_from_u64(SPAWN_SEED);
        let mut world = World::new();
        let mut clock = FixedStep::default();
        let mut fps = FpsCounter::new();
        let mut frames = FrameBuffer::new();
        let mut renderer = LogRenderer::default();

        let start = Instant::now();
        let duration = Duration::from_secs(seconds);
        let mut last = start;
        let mut next_spawn = 0;

        while start.elapsed() < duration {
            // Spawns land between ticks, never during one
            if start.elapsed().as_secs() >= next_spawn {
                let center = Vec2::new(
                    rng.random_range(0.0..config.arena_width),
                    rng.random_range(0.0..config.arena_height),
                );
                world.spawn(spawn(SpawnPattern::default(), center, BALL_MASS, config.radius())?);
                next_spawn += 1;
            }

            let now = Instant::now();
            let ticks = clock.advance((now - last).as_secs_f32());
            last = now;

            for _ in 0..ticks {
                let stats = tick(&mut world, &config, clock.step());
                log::debug!(
                    "{} collisions, {} wall hits",
                    stats.collisions,
                    stats.wall_hits
                );
                if let Some(rate) = fps.record(start.elapsed().as_secs_f64() * 1000.0) {
                    log::info!("FPS: {rate}  Objects: {}", world.population());
                }
            }

            if ticks > 0 {
                renderer.render(&frames.frame(&world, &config, fps.fps()));
            }

            std::thread::sleep(Duration::from_secs_f32(clock.step() / 2.0));
        }

        log::info!(
            "Finished: {} ticks, {} frames, {} bodies",
            world.tick_count(),
            renderer.frames,
            world.population()
        );
        Ok(())
    }
}
