//! Time management for the game loop.

use std::time::{Duration, Instant};

/// Manages frame timing and delta time calculation.
///
/// The loop either samples the wall clock with [`Time::update`] or steps a
/// simulated clock with [`Time::advance`] (headless runs).
#[derive(Debug)]
pub struct Time {
    /// Time when the engine started.
    start_time: Instant,
    /// Time of the last frame.
    last_frame: Instant,
    /// Duration of the last frame.
    delta: Duration,
    /// Total elapsed time since start.
    elapsed: Duration,
    /// Frame count since start.
    frame_count: u64,
    /// Frame budget derived from the target frame rate (default 60 Hz).
    target_frame_time: Duration,
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

impl Time {
    /// Create a new time manager.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_frame: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
            target_frame_time: Duration::from_secs_f64(1.0 / 60.0),
        }
    }

    /// Update timing at the start of a new frame.
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last_frame;
        self.last_frame = now;
        self.elapsed = now - self.start_time;
        self.frame_count += 1;
    }

    /// Step the clock by a fixed delta without looking at the wall clock.
    pub fn advance(&mut self, delta: Duration) {
        self.delta = delta;
        self.elapsed += delta;
        self.frame_count += 1;
    }

    /// Get the delta time in seconds.
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Get total elapsed time as Duration.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Get the current frame count.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the current FPS (averaged over last frame).
    pub fn fps(&self) -> f32 {
        if self.delta.as_secs_f32() > 0.0 {
            1.0 / self.delta.as_secs_f32()
        } else {
            0.0
        }
    }

    /// Set the target frame rate in Hz. Non-positive rates are ignored.
    pub fn set_target_fps(&mut self, hz: f64) {
        if hz > 0.0 {
            self.target_frame_time = Duration::from_secs_f64(1.0 / hz);
        }
    }

    /// Frame budget for the target frame rate.
    pub fn target_frame_time(&self) -> Duration {
        self.target_frame_time
    }

    /// Time left in the current frame's budget, measured from the last `update`.
    pub fn remaining_frame_budget(&self) -> Duration {
        self.target_frame_time.saturating_sub(self.last_frame.elapsed())
    }
}
