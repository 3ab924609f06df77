//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of I/O:
//! - Elapsed time is supplied by the host
//! - Stable iteration order (entity list order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod level;
pub mod player;
pub mod state;
pub mod tick;

pub use collision::{Bounds, Rect, point_in_rect, rect_overlap};
pub use level::{LevelLayout, build_level};
pub use player::Player;
pub use state::{
    Coin, Enemy, EnemyKind, Facing, Frame, GameEvent, GameOutcome, GamePhase, GameState, Hud,
    Level, Platform, PlatformKind,
};
pub use tick::{TickInput, tick};
