//! PGSQR - a tiny arena arcade game
//!
//! A white square lives inside a walled arena. Arrow keys move it toward the
//! coin; black squares fly in from the screen edges and reset the score.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, spawning, scoring)
//! - `session`: Game loop driving input -> simulate -> render
//! - `platform`: Input events, timers and frame pacing
//! - `renderer`: Draw lists handed to a render sink
//! - `audio`: Sound cues handed to an audio sink
//! - `settings` / `tuning`: Data-driven configuration and game balance

pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::StartupError;
pub use session::{Session, SessionPhase};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Target loop cadence (frames per second)
    pub const FRAME_RATE: u32 = 60;
    /// Highest accepted cadence
    pub const MAX_FRAME_RATE: u32 = 1000;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 700.0;
    pub const SCREEN_HEIGHT: f32 = 500.0;

    /// Arena walls: thin bars of `WALL_LENGTH` around the screen center
    pub const WALL_THICKNESS: f32 = 10.0;
    pub const WALL_LENGTH: f32 = 300.0;
    pub const ARENA_LEFT: f32 = SCREEN_WIDTH / 2.0 - WALL_LENGTH / 2.0;
    pub const ARENA_TOP: f32 = SCREEN_HEIGHT / 2.0 - WALL_LENGTH / 2.0;

    /// One maze cell. The arena holds a 3x3 grid of them.
    pub const TILE_SIZE: f32 = WALL_LENGTH / 3.5;
    /// Number of lanes per axis for coins and enemies
    pub const LANES: u32 = 3;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = TILE_SIZE;
    pub const PLAYER_SPEED: f32 = 7.0; // px per frame
    pub const PLAYER_START_X: f32 = ARENA_LEFT + 20.0;
    pub const PLAYER_START_Y: f32 = ARENA_TOP + WALL_LENGTH - TILE_SIZE - 10.0;
    /// Gap left between player and wall after a step-move wall hit
    pub const STEP_WALL_CLEARANCE: f32 = WALL_LENGTH / 3.0 - TILE_SIZE;
    /// Player speed must stay below this so a move always overlaps a wall it crosses
    pub const MAX_PLAYER_SPEED: f32 = WALL_THICKNESS;

    /// Coin defaults
    pub const COIN_SIZE: f32 = 30.0;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 20.0;
    pub const ENEMY_SPEED: f32 = 5.0; // px per frame
    /// Distance from the screen edge where enemies appear
    pub const ENEMY_EDGE_INSET: f32 = 20.0;
    pub const ENEMY_SPAWN_INTERVAL_MS: u64 = 750;
    /// Enemy speed must stay below this so an enemy cannot skip over the player
    pub const MAX_ENEMY_SPEED: f32 = PLAYER_SIZE + ENEMY_SIZE;
    /// Enemies this far past the screen edge are dropped
    pub const ENEMY_CULL_MARGIN: f32 = 2.0 * ENEMY_SIZE;

    /// Audio
    pub const COIN_PICKUP_VOLUME: f32 = 0.3;

    /// HUD layout
    pub const HUD_FONT_SIZE: f32 = 20.0;
    pub const HUD_SCORE_POS: (f32, f32) = (30.0, 30.0);
    pub const HUD_BEST_POS: (f32, f32) = (30.0, 50.0);
    pub const HUD_CAPTION_POS: (f32, f32) = (200.0, 80.0);
    pub const HUD_CAPTION: &str = "Use arrow keys to take the coin";
}
