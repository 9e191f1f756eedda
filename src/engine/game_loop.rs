//! Fixed-step simulation driver
//!
//! Runs a fixed number of physics steps of a fixed timestep and paces
//! them against the wall clock so the output can be watched. Every step
//! completes before the frame callback sees the world, so rendering never
//! observes a half-updated body.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::engine::physics::PhysicsWorld;

/// Driver settings
#[derive(Debug, Clone, PartialEq)]
pub struct LoopConfig {
    /// Number of steps to run
    pub frames: u32,
    /// Simulated seconds per step
    pub timestep: f32,
    /// Wall-clock pause after each frame (zero = run flat out)
    pub frame_delay: Duration,
}

/// Settings of the two-ball demo: 300 steps of 0.1 s, 50 ms apart
pub const DEFAULT_LOOP_CONFIG: LoopConfig = LoopConfig {
    frames: 300,
    timestep: 0.1,
    frame_delay: Duration::from_millis(50),
};

impl Default for LoopConfig {
    fn default() -> Self {
        DEFAULT_LOOP_CONFIG
    }
}

/// Loop timing state
pub struct SimulationLoop {
    config: LoopConfig,

    /// Time when the loop was created
    start_time: Instant,

    /// Frames completed so far
    frame_count: u64,

    /// Contacts resolved across all frames
    collision_count: u64,
}

impl SimulationLoop {
    pub fn new(config: LoopConfig) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            frame_count: 0,
            collision_count: 0,
        }
    }

    /// Step `world` once per frame, calling `on_frame` after each step.
    ///
    /// Stops at the first error returned by `on_frame`.
    pub fn run<F, E>(&mut self, world: &mut PhysicsWorld, mut on_frame: F) -> Result<(), E>
    where
        F: FnMut(&PhysicsWorld, u64) -> Result<(), E>,
    {
        info!(
            "Running {} frames of dt={} with {} bodies",
            self.config.frames,
            self.config.timestep,
            world.len()
        );

        for _ in 0..self.config.frames {
            world.step(self.config.timestep);
            self.frame_count += 1;

            let events = world.collision_events();
            if !events.is_empty() {
                self.collision_count += events.len() as u64;
                debug!("frame {}: {} contacts", self.frame_count, events.len());
            }

            on_frame(world, self.frame_count)?;

            if !self.config.frame_delay.is_zero() {
                std::thread::sleep(self.config.frame_delay);
            }
        }

        info!(
            "Finished {} frames in {:.2?}, {} contacts resolved",
            self.frame_count,
            self.elapsed(),
            self.collision_count
        );
        Ok(())
    }

    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    /// Get total number of frames run
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn collision_count(&self) -> u64 {
        self.collision_count
    }

    /// Get total elapsed wall time since start
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }
}

impl Default for SimulationLoop {
    fn default() -> Self {
        Self::new(LoopConfig::default())
    }
}
