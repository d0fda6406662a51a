//! Frame timing for the world tick
//!
//! The world never reads wall-clock time itself. It is handed a delta by a
//! `Clock` once per frame: `FrameClock` measures real elapsed time for the
//! interactive shell, `FixedClock` returns a constant step for replays and
//! tests.

use std::time::{Duration, Instant};

/// Upper bound for a single frame delta, in seconds.
/// Longer stalls (window drag, debugger) are clamped so bodies never jump
/// more than a fraction of a tile in one tick.
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Supplies the time elapsed since the previous tick
pub trait Clock {
    /// Seconds since the last call (the first call measures from creation)
    fn seconds_since_last_tick(&mut self) -> f32;
}

/// Wall-clock frame timer
#[derive(Debug)]
pub struct FrameClock {
    /// Time of last tick
    last_tick: Instant,

    /// Time when the clock was created
    start_time: Instant,

    /// Whether time is frozen
    paused: bool,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Number of ticks handed out
    frame_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_tick: now,
            start_time: now,
            paused: false,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            current_fps: 0.0,
        }
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total elapsed time since creation
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }

    /// Get total number of ticks handed out
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Freeze time: every tick reports a zero delta until resumed
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Clock paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Drop the time spent paused instead of replaying it in one tick
            self.last_tick = Instant::now();
            log::info!("Clock resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    fn record_frame(&mut self, frame_time: Duration) {
        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }
    }

    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FrameClock {
    fn seconds_since_last_tick(&mut self) -> f32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.frame_count += 1;
        self.record_frame(frame_time);

        if self.paused {
            return 0.0;
        }

        frame_time.as_secs_f32().min(MAX_FRAME_DELTA)
    }
}

/// Clock that reports the same delta every tick
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    step: f32,
}

impl FixedClock {
    pub fn new(step: f32) -> Self {
        Self {
            step: step.max(0.0),
        }
    }

    /// 60 ticks per second
    pub fn sixty_hz() -> Self {
        Self::new(1.0 / 60.0)
    }
}

impl Clock for FixedClock {
    fn seconds_since_last_tick(&mut self) -> f32 {
        self.step
    }
}
