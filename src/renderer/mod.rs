//! Rendering interface
//!
//! The simulation never draws. Each tick a `Frame` is assembled from the
//! population and handed to whatever `Renderer` the platform provides.

pub mod instance;

pub use instance::{CircleInstance, extract_circles};

use crate::settings::SimulationConfig;
use crate::sim::World;

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub circles: &'a [CircleInstance],
    /// Live body count for the counter display
    pub population: usize,
    /// Most recent realized tick rate, once one has been measured
    pub fps: Option<u32>,
}

/// Draws filled circles
pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>);
}

/// Reusable circle buffer so frames don't allocate once warmed up
#[derive(Debug, Default)]
pub struct FrameBuffer {
    circles: Vec<CircleInstance>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract the world and build a frame borrowing this buffer
    pub fn frame(
        &mut self,
        world: &World,
        config: &SimulationConfig,
        fps: Option<u32>,
    ) -> Frame<'_> {
        extract_circles(world.bodies(), config.ball_diameter, &mut self.circles);
        Frame {
            circles: &self.circles,
            population: world.population(),
            fps,
        }
    }
}
