//! Fixed-rate scheduling and tick-rate measurement
//!
//! Both types take time as plain numbers so the same logic drives the native
//! sleep loop, the browser interval timer and the tests.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Accumulator that turns elapsed wall time into whole ticks
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps,
            accumulator: 0.0,
        }
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Add `elapsed` seconds and return how many ticks to run now
    ///
    /// At most `max_substeps` ticks are returned; any backlog beyond that is
    /// dropped so a slow frame can't snowball.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.max(0.0);

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_substeps {
            self.accumulator -= self.step;
            ticks += 1;
        }

        if ticks == self.max_substeps && self.accumulator >= self.step {
            log::debug!(
                "Dropping {:.3}s of simulation backlog",
                self.accumulator - self.accumulator % self.step
            );
            self.accumulator %= self.step;
        }
        ticks
    }
}

/// Counts ticks and reports the realized rate once per second
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    window_start_ms: Option<f64>,
    frames: u32,
    fps: Option<u32>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one tick at `now_ms`
    ///
    /// Returns the number of ticks in the last window whenever at least
    /// 1000 ms have passed since the window opened; the window then restarts.
    pub fn record(&mut self, now_ms: f64) -> Option<u32> {
        self.frames += 1;
        let start = *self.window_start_ms.get_or_insert(now_ms);

        if now_ms - start >= 1000.0 {
            let fps = self.frames;
            self.fps = Some(fps);
            self.frames = 0;
            self.window_start_ms = Some(now_ms);
            Some(fps)
        } else {
            None
        }
    }

    /// Last reported rate
    pub fn fps(&self) -> Option<u32> {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_step_accumulates() {
        let mut clock = FixedStep::new(0.01, 8);
        assert_eq!(clock.advance(0.004), 0);
        assert_eq!(clock.advance(0.004), 0);
        assert_eq!(clock.advance(0.004), 1);
        assert_eq!(clock.advance(0.025), 2);
    }

    #[test]
    fn test_fixed_step_caps_backlog() {
        let mut clock = FixedStep::new(0.01, 8);
        assert_eq!(clock.advance(1.0), 8);
        // Backlog was dropped, not carried over
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn test_fixed_step_ignores_negative_time() {
        let mut clock = FixedStep::default();
        assert_eq!(clock.advance(-5.0), 0);
        assert_eq!(clock.advance(clock.step()), 1);
    }

    #[test]
    fn test_fps_reports_once_per_second() {
        let mut counter = FpsCounter::new();
        assert_eq!(counter.fps(), None);

        // 100 ticks spaced 10 ms apart starting at t = 0
        let mut reports = Vec::new();
        for i in 0..=100 {
            if let Some(fps) = counter.record(i as f64 * 10.0) {
                reports.push(fps);
            }
        }
        assert_eq!(reports, vec![101]);
        assert_eq!(counter.fps(), Some(101));

        // Next window restarts the count
        assert_eq!(counter.record(1500.0), None);
        assert_eq!(counter.record(2000.0), Some(2));
    }
}
