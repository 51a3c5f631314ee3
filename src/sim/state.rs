//! Game state and core simulation types
//!
//! Everything the session needs between frames lives in [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::input::{Axis, Direction, HeldDirections, MovementModel};
use super::rect::Rect;
use super::spawn::{arena_walls, coin_rect, pick_coin_cell, player_start, roll_enemy};
use super::world::{EntityId, EntityKind, World};
use crate::consts::*;
use crate::tuning::Tuning;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the first arrow key; enemies are held back
    NotStarted,
    /// Active gameplay
    Running,
    /// Quit received, nothing else happens
    Stopped,
}

/// Commands applied at the start of a tick, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Press(Direction),
    Release(Direction),
    /// The enemy spawn timer fired
    SpawnEnemy,
    Quit,
}

/// Things that happened during a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Started,
    CoinCollected { score: u32 },
    /// Player touched an enemy; `lost` is the score before the reset
    PlayerHit { lost: u32, best: u32 },
    EnemySpawned { id: EntityId, heading: Direction },
    EnemiesCulled { count: usize },
    Quit,
}

/// The player's square
#[derive(Debug, Clone)]
pub struct Player {
    pub id: EntityId,
    pub rect: Rect,
    pub model: MovementModel,
    /// Pixels per frame per axis
    pub speed: f32,
    pub(crate) held: HeldDirections,
    /// Distance covered by the current step (step model only)
    pub(crate) traveled: f32,
}

impl Player {
    pub fn new(id: EntityId, pos: Vec2, model: MovementModel, speed: f32) -> Self {
        Self {
            id,
            rect: Rect::square(pos, PLAYER_SIZE),
            model,
            speed,
            held: HeldDirections::new(),
            traveled: 0.0,
        }
    }

    /// Current velocity in px per frame, derived from the held directions
    pub fn velocity(&self) -> Vec2 {
        self.held.velocity(self.speed)
    }

    pub fn held(&self) -> &HeldDirections {
        &self.held
    }

    pub fn traveled(&self) -> f32 {
        self.traveled
    }

    /// True when no step is in progress. Always true for continuous movement.
    pub fn accepts_input(&self) -> bool {
        match self.model {
            MovementModel::Continuous => true,
            MovementModel::Step => self.traveled == 0.0,
        }
    }

    /// Apply a key press. Returns false if the press was ignored.
    pub fn press(&mut self, dir: Direction) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.held.press(dir);
        true
    }

    /// Apply a key release. Step movement ignores releases.
    pub fn release(&mut self, dir: Direction) {
        if self.model == MovementModel::Continuous {
            self.held.release(dir);
        }
    }

    /// Gap to leave against a wall after a hit
    pub fn wall_clearance(&self) -> f32 {
        match self.model {
            MovementModel::Continuous => 0.0,
            MovementModel::Step => STEP_WALL_CLEARANCE,
        }
    }

    /// A wall stopped movement along `axis`
    pub(crate) fn on_wall_hit(&mut self, axis: Axis) {
        if self.model == MovementModel::Step {
            self.held.clear_axis(axis);
            self.traveled = 0.0;
        }
    }

    pub(crate) fn record_travel(&mut self, distance: f32) {
        if self.model == MovementModel::Step {
            self.traveled += distance.abs();
        }
    }

    /// Stop once a step has covered a full tile
    pub(crate) fn finish_step(&mut self) {
        if self.model == MovementModel::Step && self.traveled > TILE_SIZE {
            self.held.clear();
            self.traveled = 0.0;
        }
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub tuning: Tuning,
    pub score: u32,
    /// Highest score reached before a reset; never decreases
    pub best: u32,
    /// Set by the first accepted arrow key
    pub started: bool,
    /// Set by quit
    pub game_over: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub world: World,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Build the arena, the player and the first coin
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut world = World::new();
        for wall in arena_walls() {
            world.spawn(EntityKind::Wall, wall);
        }
        let player = Player::new(
            world.allocate_id(),
            player_start(),
            tuning.movement,
            tuning.player_speed,
        );

        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            score: 0,
            best: 0,
            started: false,
            game_over: false,
            time_ticks: 0,
            player,
            world,
            events: Vec::new(),
        };
        state.spawn_coin();
        state
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::Stopped
        } else if self.started {
            GamePhase::Running
        } else {
            GamePhase::NotStarted
        }
    }

    /// Apply one command. Everything after a quit is ignored.
    pub fn apply(&mut self, command: Command) {
        if self.game_over {
            return;
        }
        match command {
            Command::Quit => {
                self.game_over = true;
                self.events.push(GameEvent::Quit);
            }
            Command::SpawnEnemy => {
                if self.started {
                    self.spawn_enemy();
                }
            }
            Command::Press(dir) => {
                if self.player.press(dir) && !self.started {
                    self.started = true;
                    self.events.push(GameEvent::Started);
                }
            }
            Command::Release(dir) => self.player.release(dir),
        }
    }

    /// Place a new coin on a cell away from the player
    pub fn spawn_coin(&mut self) -> EntityId {
        let cell = pick_coin_cell(&mut self.rng, &self.player.rect);
        let id = self.world.spawn(EntityKind::Coin, coin_rect(cell));
        log::debug!("Coin {} spawned at ({:.1}, {:.1})", id, cell.x, cell.y);
        id
    }

    /// Launch an enemy from a random edge
    pub fn spawn_enemy(&mut self) -> EntityId {
        let spawn = roll_enemy(&mut self.rng, self.tuning.enemy_speed);
        let id = self
            .world
            .spawn(EntityKind::Enemy { vel: spawn.vel }, spawn.rect);
        log::debug!("Enemy {} heading {:?}", id, spawn.heading);
        self.events.push(GameEvent::EnemySpawned {
            id,
            heading: spawn.heading,
        });
        id
    }

    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }
}
