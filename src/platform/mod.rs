//! Platform abstraction layer
//!
//! Handles the collaborators around the simulation:
//! - Input events (keyboard, quit, timers)
//! - Repeating timers on a logical clock
//! - Frame pacing

pub mod autopilot;
pub mod clock;
pub mod timer;

use std::collections::VecDeque;

pub use autopilot::Autopilot;
pub use clock::FrameClock;
pub use timer::RepeatingTimer;

use crate::sim::{Direction, GameState};

/// Keys the game distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Arrow(Direction),
    /// Anything else, by platform key code
    Other(u32),
}

impl Key {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Arrow(dir) => Some(dir),
            Key::Other(_) => None,
        }
    }
}

/// Timers the session arms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerId {
    EnemySpawn,
}

/// One discrete platform event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    TimerFired(TimerId),
}

/// Produces the events for one frame.
///
/// Sources see the current state read-only, so demo and replay drivers can
/// react to it the way a player watching the screen would.
pub trait EventSource {
    fn poll(&mut self, state: &GameState, out: &mut Vec<InputEvent>);
}

/// Plays back a fixed list of per-frame events, then emits quit.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
    quit_when_done: bool,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self {
            frames: VecDeque::new(),
            quit_when_done: true,
        }
    }

    /// Keep polling empty frames after the script runs out
    pub fn endless(mut self) -> Self {
        self.quit_when_done = false;
        self
    }

    /// Append one frame worth of events
    pub fn frame(mut self, events: impl IntoIterator<Item = InputEvent>) -> Self {
        self.frames.push_back(events.into_iter().collect());
        self
    }

    /// Append `count` frames with no events
    pub fn idle(mut self, count: usize) -> Self {
        self.frames.extend(std::iter::repeat_n(Vec::new(), count));
        self
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl EventSource for ScriptedInput {
    fn poll(&mut self, _state: &GameState, out: &mut Vec<InputEvent>) {
        match self.frames.pop_front() {
            Some(events) => out.extend(events),
            None if self.quit_when_done => out.push(InputEvent::Quit),
            None => {}
        }
    }
}
