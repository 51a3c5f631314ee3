//! Directional input and how it becomes velocity

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One of the four arrow directions (screen space, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::X,
            Direction::Up | Direction::Down => Axis::Y,
        }
    }
}

/// Screen axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Component of `v` along this axis
    #[inline]
    pub fn of(self, v: Vec2) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }

    pub fn unit(self) -> Vec2 {
        match self {
            Axis::X => Vec2::X,
            Axis::Y => Vec2::Y,
        }
    }
}

/// How key presses turn into player velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementModel {
    /// Velocity follows the keys currently held
    #[default]
    Continuous,
    /// Each press moves the player about one tile, then stops
    Step,
}

/// Directions currently commanding the player
///
/// At most one direction per axis, so never two opposing ones. Pressing a
/// direction replaces its opposite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldDirections {
    horizontal: Option<Direction>,
    vertical: Option<Direction>,
}

impl HeldDirections {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, axis: Axis) -> &mut Option<Direction> {
        match axis {
            Axis::X => &mut self.horizontal,
            Axis::Y => &mut self.vertical,
        }
    }

    pub fn press(&mut self, dir: Direction) {
        *self.slot(dir.axis()) = Some(dir);
    }

    /// Release `dir`. Releasing a direction that was already replaced by its
    /// opposite is a no-op.
    pub fn release(&mut self, dir: Direction) {
        let slot = self.slot(dir.axis());
        if *slot == Some(dir) {
            *slot = None;
        }
    }

    pub fn clear_axis(&mut self, axis: Axis) {
        *self.slot(axis) = None;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.horizontal.is_none() && self.vertical.is_none()
    }

    pub fn contains(&self, dir: Direction) -> bool {
        self.horizontal == Some(dir) || self.vertical == Some(dir)
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> {
        self.horizontal.into_iter().chain(self.vertical)
    }

    /// Velocity for the held set at `speed` px per frame per axis
    pub fn velocity(&self, speed: f32) -> Vec2 {
        self.iter().map(Direction::unit).sum::<Vec2>() * speed
    }
}
