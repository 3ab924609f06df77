//! Coin Hopper - A side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Simulation (physics, collisions, combat, scoring, levels, camera)
//! - `input`: Key code to action mapping, produces per-tick input snapshots
//! - `audio`: Sound effect routing for simulation events
//! - `renderer`: Read-only frame consumers
//! - `settings`: Configuration loaded from JSON

pub mod audio;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use audio::{AudioManager, AudioSink, SoundEffect};
pub use input::{Action, InputState, KeyBindings};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Downward acceleration for player and enemies (units/s²)
    pub const GRAVITY: f32 = 1200.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 32.0;
    /// Horizontal acceleration while a direction is held (units/s²)
    pub const PLAYER_SPEED: f32 = 200.0;
    pub const PLAYER_MAX_SPEED: f32 = 300.0;
    pub const PLAYER_JUMP_POWER: f32 = 600.0;
    /// Per-tick velocity multiplier when no direction is held
    pub const PLAYER_FRICTION: f32 = 0.8;
    /// Below this horizontal speed friction snaps velocity to zero
    pub const PLAYER_STOP_SPEED: f32 = 10.0;
    /// Upward velocity after a stomp (fixed, independent of jump power)
    pub const STOMP_BOUNCE_SPEED: f32 = 200.0;
    pub const PLAYER_FRAME_MS: f32 = 150.0;
    pub const PLAYER_FRAME_COUNT: u8 = 4;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 28.0;
    pub const ENEMY_HEIGHT: f32 = 28.0;
    pub const ENEMY_PATROL_SPEED: f32 = 50.0;
    pub const ENEMY_FRAME_MS: f32 = 200.0;
    pub const ENEMY_FRAME_COUNT: u8 = 2;
    /// Enemies turn around at this x regardless of level width
    pub const ENEMY_WORLD_EDGE: f32 = 3072.0;

    /// Coin defaults
    pub const COIN_SIZE: f32 = 20.0;
    pub const COIN_FRAME_MS: f32 = 100.0;
    pub const COIN_FRAME_COUNT: u8 = 4;
    pub const COIN_BOB_AMPLITUDE: f32 = 0.5;
    pub const COIN_BOB_RATE: f32 = 0.005;

    /// Scoring
    pub const COIN_SCORE: u64 = 50;
    pub const STOMP_SCORE: u64 = 100;
    pub const LEVEL_ONE_BONUS: u64 = 1000;
    pub const COMPLETION_BONUS: u64 = 2000;

    pub const STARTING_LIVES: u8 = 3;

    /// Player spawn point: fixed x, y measured up from the bottom of the world
    pub const SPAWN_X: f32 = 100.0;
    pub const SPAWN_HEIGHT: f32 = 100.0;

    /// Levels are this many screens wide
    pub const LEVEL_SCREENS: f32 = 3.0;
}
