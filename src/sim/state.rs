//! Game state and core simulation types
//!
//! The world owns every entity. Platforms are immutable once a level is
//! loaded; enemies and coins are removed from their lists the moment they
//! are stomped or collected.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Bounds, Rect, rect_overlap};
use super::level::build_level;
use super::player::Player;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended (terminal until restart)
    GameOver,
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Both levels cleared
    Completed,
    /// Lives ran out
    OutOfLives,
}

impl GameOutcome {
    /// Message shown by the game-over screen
    pub fn message(&self) -> &'static str {
        match self {
            GameOutcome::Completed => "Congratulations! You completed the game!",
            GameOutcome::OutOfLives => "You ran out of lives!",
        }
    }
}

/// The two authored levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    One,
    Two,
}

impl Level {
    /// 1-based level number for display
    pub fn number(&self) -> u8 {
        match self {
            Level::One => 1,
            Level::Two => 2,
        }
    }

    /// The level that follows this one, if any
    pub fn next(&self) -> Option<Level> {
        match self {
            Level::One => Some(Level::Two),
            Level::Two => None,
        }
    }

    /// Score bonus for clearing this level
    pub fn clear_bonus(&self) -> u64 {
        match self {
            Level::One => LEVEL_ONE_BONUS,
            Level::Two => COMPLETION_BONUS,
        }
    }
}

/// Horizontal facing, shared by the player and enemies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }
}

/// Frame counter driven by accumulated milliseconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub frame: u8,
    pub timer_ms: f32,
}

impl Animation {
    /// Advance one frame once more than `period_ms` has accumulated
    pub fn advance(&mut self, dt_ms: f32, period_ms: f32, frame_count: u8) {
        self.timer_ms += dt_ms;
        if self.timer_ms > period_ms {
            self.frame = (self.frame + 1) % frame_count;
            self.timer_ms = 0.0;
        }
    }
}

/// Platform surface, only affects how it is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlatformKind {
    #[default]
    Ground,
    Floating,
}

/// A static platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub kind: PlatformKind,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32, kind: PlatformKind) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            kind,
        }
    }

    pub fn ground(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, width, height, PlatformKind::Ground)
    }

    pub fn floating(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, width, height, PlatformKind::Floating)
    }
}

impl Bounds for Platform {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// A collectible coin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub pos: Vec2,
    pub collected: bool,
    pub animation: Animation,
    /// Cosmetic vertical offset, never part of the collision box
    pub bob: f32,
}

impl Coin {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            collected: false,
            animation: Animation::default(),
            bob: 0.0,
        }
    }

    /// Spin and float. `clock_ms` is the world clock driving the bob phase.
    pub fn update(&mut self, dt_ms: f32, clock_ms: f64) {
        if self.collected {
            return;
        }
        self.animation.advance(dt_ms, COIN_FRAME_MS, COIN_FRAME_COUNT);
        self.bob += ((clock_ms * COIN_BOB_RATE as f64).sin() as f32) * COIN_BOB_AMPLITUDE;
    }

    /// Where the coin is drawn
    pub fn draw_pos(&self) -> Vec2 {
        self.pos + Vec2::new(0.0, self.bob)
    }
}

impl Bounds for Coin {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, COIN_SIZE, COIN_SIZE)
    }
}

/// Enemy types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Walks back and forth, turns at walls and world edges
    #[default]
    Goomba,
}

impl EnemyKind {
    pub fn patrol_speed(&self) -> f32 {
        match self {
            EnemyKind::Goomba => ENEMY_PATROL_SPEED,
        }
    }
}

/// A patrolling enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Always matches the sign of `vel.x`
    pub facing: Facing,
    pub animation: Animation,
}

impl Enemy {
    /// Enemies start walking left
    pub fn new(x: f32, y: f32, kind: EnemyKind) -> Self {
        Self {
            kind,
            pos: Vec2::new(x, y),
            vel: Vec2::new(-kind.patrol_speed(), 0.0),
            facing: Facing::Left,
            animation: Animation::default(),
        }
    }

    pub fn turn_around(&mut self) {
        self.vel.x = -self.vel.x;
        self.facing = self.facing.flipped();
    }

    /// Advance by `dt_ms` milliseconds against the level's platforms
    pub fn update(&mut self, dt_ms: f32, platforms: &[Platform]) {
        let dt = dt_ms / 1000.0;

        self.vel.y += GRAVITY * dt;
        self.pos += self.vel * dt;

        self.resolve_platforms(platforms);

        self.animation.advance(dt_ms, ENEMY_FRAME_MS, ENEMY_FRAME_COUNT);

        // World edge bounce, independent of platforms
        if self.pos.x <= 0.0 || self.pos.x + ENEMY_WIDTH >= ENEMY_WORLD_EDGE {
            self.turn_around();
        }
    }

    /// Every overlapping platform is checked in order. A turn flips the
    /// direction test, so platforms alone turn an enemy at most once a tick.
    fn resolve_platforms(&mut self, platforms: &[Platform]) {
        for platform in platforms {
            if !rect_overlap(&self.bounds(), &platform.rect) {
                continue;
            }
            let p = platform.rect;

            if self.vel.y > 0.0 && self.pos.y < p.y {
                self.pos.y = p.y - ENEMY_HEIGHT;
                self.vel.y = 0.0;
            } else if (self.vel.x > 0.0 && self.pos.x < p.x)
                || (self.vel.x < 0.0 && self.pos.x > p.right())
            {
                self.turn_around();
            }
        }
    }
}

impl Bounds for Enemy {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, ENEMY_WIDTH, ENEMY_HEIGHT)
    }
}

/// Something that happened during a tick, in occurrence order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player left the ground
    Jumped,
    CoinCollected,
    EnemyStomped,
    /// Player touched an enemy or fell out of the world
    PlayerHit { lives: u8 },
    /// All enemies and coins of `level` are gone; its bonus is already scored
    LevelCleared { level: Level },
    /// Emitted once per run, at the transition to `GameOver`
    GameOver { score: u64, outcome: GameOutcome },
}

/// Values the HUD pulls every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u64,
    pub lives: u8,
    pub level: u8,
}

/// Read-only view handed to renderers
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub player: &'a Player,
    pub enemies: &'a [Enemy],
    pub coins: &'a [Coin],
    pub platforms: &'a [Platform],
    pub camera_x: f32,
    /// Visible area
    pub view_width: f32,
    pub view_height: f32,
    /// Full scrollable width
    pub level_width: f32,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Screen dimensions, fixed for the session
    pub width: f32,
    pub height: f32,
    pub level: Level,
    pub lives: u8,
    pub score: u64,
    pub phase: GamePhase,
    /// Set together with the `GameOver` phase
    pub outcome: Option<GameOutcome>,
    pub camera_x: f32,
    /// Accumulated simulation time
    pub clock_ms: f64,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
}

impl GameState {
    /// Create a new game on level 1
    pub fn new(width: f32, height: f32) -> Self {
        let spawn = Vec2::new(SPAWN_X, height - SPAWN_HEIGHT);
        let mut state = Self {
            width,
            height,
            level: Level::One,
            lives: STARTING_LIVES,
            score: 0,
            phase: GamePhase::Playing,
            outcome: None,
            camera_x: 0.0,
            clock_ms: 0.0,
            player: Player::new(spawn.x, spawn.y),
            platforms: Vec::new(),
            enemies: Vec::new(),
            coins: Vec::new(),
        };
        state.load_level(Level::One);
        state
    }

    /// Where the player appears at start, after a hit and on level change
    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new(SPAWN_X, self.height - SPAWN_HEIGHT)
    }

    /// Full scrollable width of a level
    pub fn level_width(&self) -> f32 {
        self.width * LEVEL_SCREENS
    }

    /// Camera never scrolls past this
    pub fn max_camera_x(&self) -> f32 {
        self.level_width() - self.width
    }

    /// Replace every platform, enemy and coin with the authored layout
    pub fn load_level(&mut self, level: Level) {
        let layout = build_level(level, self.width, self.height);
        log::info!(
            "Level {}: {} platforms, {} enemies, {} coins",
            level.number(),
            layout.platforms.len(),
            layout.enemies.len(),
            layout.coins.len()
        );
        self.level = level;
        self.platforms = layout.platforms;
        self.enemies = layout.enemies;
        self.coins = layout.coins;
    }

    /// Put the player back at the spawn point
    pub fn respawn_player(&mut self) {
        let spawn = self.spawn_point();
        self.player.reset(spawn.x, spawn.y);
    }

    /// Keep the player a third of the way into the view
    pub fn update_camera(&mut self) {
        let target = self.player.pos.x - self.width / 3.0;
        self.camera_x = target.max(0.0).min(self.max_camera_x());
    }

    /// Start over from level 1 with fresh score and lives
    pub fn restart(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.phase = GamePhase::Playing;
        self.outcome = None;
        self.camera_x = 0.0;
        self.clock_ms = 0.0;
        self.respawn_player();
        self.load_level(Level::One);
        log::info!("Game restarted");
    }

    /// True once every enemy and coin is gone
    pub fn level_cleared(&self) -> bool {
        self.enemies.is_empty() && self.coins.is_empty()
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn hud(&self) -> Hud {
        Hud {
            score: self.score,
            lives: self.lives,
            level: self.level.number(),
        }
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            player: &self.player,
            enemies: &self.enemies,
            coins: &self.coins,
            platforms: &self.platforms,
            camera_x: self.camera_x,
            view_width: self.width,
            view_height: self.height,
            level_width: self.level_width(),
        }
    }
}
