//! Frame pacing
//!
//! Sleeps out the remainder of each frame so the loop runs at a fixed
//! cadence. Unthrottled clocks return immediately (tests, fast replays).

use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    last: Option<Instant>,
    throttled: bool,
    frames: u64,
}

impl FrameClock {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            last: None,
            throttled: true,
            frames: 0,
        }
    }

    /// A clock that never sleeps
    pub fn unthrottled(frame: Duration) -> Self {
        Self {
            throttled: false,
            ..Self::new(frame)
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Mark the end of a frame, sleeping if it finished early
    pub fn tick(&mut self) {
        self.frames += 1;
        if !self.throttled {
            return;
        }
        let now = Instant::now();
        if let Some(last) = self.last {
            let spent = now.duration_since(last);
            if spent < self.frame {
                thread::sleep(self.frame - spent);
            }
        }
        self.last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unthrottled_counts_without_sleeping() {
        let mut clock = FrameClock::unthrottled(Duration::from_secs(1));
        let start = Instant::now();
        for _ in 0..100 {
            clock.tick();
        }
        assert_eq!(clock.frames(), 100);
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_throttled_clock_paces_frames() {
        let frame = Duration::from_millis(5);
        let mut clock = FrameClock::new(frame);
        let start = Instant::now();
        for _ in 0..5 {
            clock.tick();
        }
        // first tick only records the start point
        assert!(start.elapsed() >= frame * 4);
    }
}
