//! Simulation clock and frame pacing.
//!
//! The [`Clock`] is the single source of simulation time. It does not read the
//! wall clock: it advances by a fixed step per rendered frame, so the motion
//! shown on screen depends only on how many frames have been drawn since the
//! last reset.
//!
//! [`FramePacer`] is the wall-clock side: it sleeps out the remainder of each
//! frame interval and keeps a running FPS estimate.
//!
//! # Example
//!
//! ```
//! use pendulum_sim::time::Clock;
//!
//! let mut clock = Clock::new(1.0);
//! clock.advance(60);
//! assert!((clock.elapsed() - 1.0 / 60.0).abs() < 1e-12);
//! clock.reset();
//! assert_eq!(clock.elapsed(), 0.0);
//! ```

use std::time::{Duration, Instant};

/// Elapsed simulation time with a constant speed multiplier.
#[derive(Debug, Clone, PartialEq)]
pub struct Clock {
    /// Elapsed simulation time in seconds.
    t: f64,
    /// Time scale multiplier (1.0 = real time at the target frame rate).
    speed: f64,
}

impl Clock {
    /// Create a clock at `t = 0`. Negative speeds clamp to 0.
    pub fn new(speed: f64) -> Self {
        Self {
            t: 0.0,
            speed: speed.max(0.0),
        }
    }

    /// Advance by one frame at `frame_rate` frames per second.
    ///
    /// Returns the new elapsed time.
    pub fn advance(&mut self, frame_rate: u32) -> f64 {
        self.t += frame_delta(frame_rate) * self.speed;
        self.t
    }

    /// Set elapsed time back to zero.
    pub fn reset(&mut self) {
        self.t = 0.0;
    }

    /// Elapsed simulation time in seconds.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.t
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Seconds per frame for a given frame rate.
#[inline]
pub fn frame_delta(frame_rate: u32) -> f64 {
    1.0 / f64::from(frame_rate.max(1))
}

/// Caps the loop at a target frame rate by sleeping.
#[derive(Debug)]
pub struct FramePacer {
    /// Target time between frames.
    interval: Duration,
    /// When the previous tick returned.
    last_tick: Instant,
    /// Total frames since start.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
}

impl FramePacer {
    pub fn new(frame_rate: u32) -> Self {
        let now = Instant::now();
        Self {
            interval: Duration::from_secs_f64(frame_delta(frame_rate)),
            last_tick: now,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
        }
    }

    /// Time left until the next frame is due, zero if it is already late.
    pub fn remaining(&self) -> Duration {
        self.interval.saturating_sub(self.last_tick.elapsed())
    }

    /// Sleep until the frame interval since the previous tick has elapsed.
    ///
    /// The sleep is bounded by one interval. Returns the wall time since the
    /// previous tick.
    pub fn tick(&mut self) -> Duration {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }

        let now = Instant::now();
        let frame_time = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
            tracing::debug!(fps = self.fps, "frame rate");
        }

        frame_time
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Measured frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}
