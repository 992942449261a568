//! Frame-rate limiter for the event loop

use std::time::{Duration, Instant};

/// Paces redraws to a fixed target rate
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    next_frame: Instant,
}

impl FrameClock {
    pub fn new(target_fps: u32, now: Instant) -> Self {
        Self {
            period: Duration::from_secs_f64(1.0 / target_fps.max(1) as f64),
            next_frame: now,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// When the loop should wake for the next frame
    pub fn deadline(&self) -> Instant {
        self.next_frame
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Mark a frame as started. If the loop fell behind, the schedule restarts
    /// from `now` instead of bursting to catch up.
    pub fn tick(&mut self, now: Instant) {
        self.next_frame += self.period;
        if self.next_frame < now {
            self.next_frame = now + self.period;
        }
    }
}
