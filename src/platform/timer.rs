//! Repeating timer on a logical clock
//!
//! The session advances the timer by one frame's worth of time per poll and
//! queues one event per elapsed period. Nothing runs on another thread.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    interval: Duration,
    elapsed: Duration,
    armed: bool,
}

impl RepeatingTimer {
    /// A disarmed timer with the given period
    pub fn new(interval: Duration) -> Self {
        debug_assert!(!interval.is_zero(), "timer interval must be positive");
        Self {
            interval,
            elapsed: Duration::ZERO,
            armed: false,
        }
    }

    /// Start counting from zero
    pub fn arm(&mut self) {
        self.armed = true;
        self.elapsed = Duration::ZERO;
    }

    pub fn disarm(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Advance by `dt`; returns how many periods completed
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if !self.armed || self.interval.is_zero() {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }
}
