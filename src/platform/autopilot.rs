//! Idle/demo mode - the computer plays the game
//!
//! Drives the same keyboard events a player would: hold the arrow that
//! closes the larger gap to the coin. It makes no attempt to dodge enemies,
//! so the score keeps getting reset, which is fine for a demo.

use glam::Vec2;

use super::{EventSource, InputEvent, Key};
use crate::consts::COIN_SIZE;
use crate::sim::{Direction, GameState, MovementModel};

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    held: Option<Direction>,
    frames: u64,
    max_frames: Option<u64>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send quit after `frames` polls
    pub fn with_frame_limit(frames: u64) -> Self {
        Self {
            max_frames: Some(frames),
            ..Self::default()
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Arrow that best closes the gap from `from` to `to`, if any is needed
pub fn steer(from: Vec2, to: Vec2, tolerance: f32) -> Option<Direction> {
    let delta = to - from;
    if delta.x.abs() <= tolerance && delta.y.abs() <= tolerance {
        return None;
    }
    let dir = if delta.x.abs() >= delta.y.abs() {
        if delta.x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if delta.y > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    };
    Some(dir)
}

impl EventSource for Autopilot {
    fn poll(&mut self, state: &GameState, out: &mut Vec<InputEvent>) {
        self.frames += 1;
        if self.max_frames.is_some_and(|max| self.frames > max) {
            out.push(InputEvent::Quit);
            return;
        }

        let desired = state
            .world
            .coins()
            .next()
            .and_then(|coin| steer(state.player.rect.center(), coin.rect.center(), COIN_SIZE / 2.0));

        match state.player.model {
            MovementModel::Continuous => {
                if desired == self.held {
                    return;
                }
                if let Some(prev) = self.held {
                    out.push(InputEvent::KeyUp(Key::Arrow(prev)));
                }
                if let Some(next) = desired {
                    out.push(InputEvent::KeyDown(Key::Arrow(next)));
                }
                self.held = desired;
            }
            MovementModel::Step => {
                if let Some(next) = desired.filter(|_| state.player.accepts_input()) {
                    out.push(InputEvent::KeyDown(Key::Arrow(next)));
                }
            }
        }
    }
}
