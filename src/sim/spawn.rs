//! Arena layout and spawn rolls
//!
//! Coins and enemies never use free coordinates: both snap to one of three
//! lanes per axis, which keeps coins clear of the walls.

use glam::Vec2;
use rand::Rng;

use super::input::Direction;
use super::rect::Rect;
use crate::consts::*;

/// The four arena walls, in draw order (left, bottom, right, top)
pub fn arena_walls() -> [Rect; 4] {
    [
        Rect::new(ARENA_LEFT, ARENA_TOP, WALL_THICKNESS, WALL_LENGTH),
        Rect::new(
            ARENA_LEFT,
            ARENA_TOP + WALL_LENGTH,
            WALL_LENGTH,
            WALL_THICKNESS,
        ),
        Rect::new(
            ARENA_LEFT + WALL_LENGTH,
            ARENA_TOP,
            WALL_THICKNESS,
            WALL_LENGTH + WALL_THICKNESS,
        ),
        Rect::new(ARENA_LEFT, ARENA_TOP, WALL_LENGTH, WALL_THICKNESS),
    ]
}

/// Where the player starts: bottom-left cell of the arena
pub fn player_start() -> Vec2 {
    Vec2::new(PLAYER_START_X, PLAYER_START_Y)
}

/// Top-left offset of lane `index` along an axis whose wall starts at `origin`
#[inline]
pub fn lane_offset(origin: f32, index: u32) -> f32 {
    origin + WALL_THICKNESS + index as f32 * TILE_SIZE + TILE_SIZE / 2.0
}

pub fn x_lane(index: u32) -> f32 {
    lane_offset(ARENA_LEFT, index)
}

pub fn y_lane(index: u32) -> f32 {
    lane_offset(ARENA_TOP, index)
}

/// Every position a coin may occupy, row by row
pub fn coin_cells() -> Vec<Vec2> {
    (0..LANES)
        .flat_map(|row| (0..LANES).map(move |col| Vec2::new(x_lane(col), y_lane(row))))
        .collect()
}

pub fn coin_rect(cell: Vec2) -> Rect {
    Rect::square(cell, COIN_SIZE)
}

/// Pick a coin cell uniformly, skipping cells that overlap `avoid`.
///
/// Falls back to every cell when all of them overlap.
pub fn pick_coin_cell<R: Rng>(rng: &mut R, avoid: &Rect) -> Vec2 {
    let cells = coin_cells();
    let free: Vec<Vec2> = cells
        .iter()
        .copied()
        .filter(|&c| !coin_rect(c).intersects(avoid))
        .collect();
    let pool = if free.is_empty() { &cells } else { &free };
    pool[rng.random_range(0..pool.len())]
}

/// A rolled enemy: where it appears and how it moves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemySpawn {
    pub heading: Direction,
    pub rect: Rect,
    pub vel: Vec2,
}

/// Spawn position for an enemy travelling toward `heading` in `lane`.
///
/// Enemies appear just inside the edge opposite to where they are headed.
pub fn enemy_origin(heading: Direction, lane: u32) -> Vec2 {
    match heading {
        Direction::Up => Vec2::new(x_lane(lane), SCREEN_HEIGHT - ENEMY_EDGE_INSET),
        Direction::Down => Vec2::new(x_lane(lane), ENEMY_EDGE_INSET),
        Direction::Left => Vec2::new(SCREEN_WIDTH - ENEMY_EDGE_INSET, y_lane(lane)),
        Direction::Right => Vec2::new(ENEMY_EDGE_INSET, y_lane(lane)),
    }
}

/// Roll a random edge and lane for a new enemy moving at `speed`
pub fn roll_enemy<R: Rng>(rng: &mut R, speed: f32) -> EnemySpawn {
    let heading = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
    let lane = rng.random_range(0..LANES);
    EnemySpawn {
        heading,
        rect: Rect::square(enemy_origin(heading, lane), ENEMY_SIZE),
        vel: heading.unit() * speed,
    }
}

/// Region outside of which enemies are dropped
pub fn cull_bounds(margin: f32) -> Rect {
    Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT).inflate(margin)
}
