//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, velocities in px per frame
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod input;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod world;

pub use collision::apply_velocity_and_resolve;
pub use input::{Axis, Direction, HeldDirections, MovementModel};
pub use rect::{Rect, intersects};
pub use spawn::{EnemySpawn, arena_walls, coin_cells, roll_enemy};
pub use state::{Command, GameEvent, GamePhase, GameState, Player};
pub use tick::{TickInput, step, tick};
pub use world::{Entity, EntityClass, EntityId, EntityKind, World};
