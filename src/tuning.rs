//! Data-driven game balance

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::MovementModel;

/// Gameplay values that may be overridden from the settings file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player speed (px per frame per axis)
    pub player_speed: f32,
    /// Enemy speed (px per frame)
    pub enemy_speed: f32,
    /// How arrow keys move the player
    pub movement: MovementModel,
    /// Enemy spawn timer period
    pub enemy_spawn_interval_ms: u64,
    /// Drop enemies this far off screen. `None` keeps them forever.
    pub enemy_cull_margin: Option<f32>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            enemy_speed: ENEMY_SPEED,
            movement: MovementModel::Continuous,
            enemy_spawn_interval_ms: ENEMY_SPAWN_INTERVAL_MS,
            enemy_cull_margin: Some(ENEMY_CULL_MARGIN),
        }
    }
}
