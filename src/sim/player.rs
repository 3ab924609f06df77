//! The player character
//!
//! Each update runs input, physics, platform collision and animation in
//! that order. `is_grounded` is rebuilt from collisions every tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Bounds, Rect, rect_overlap};
use super::state::{Animation, Facing, Platform};
use super::tick::TickInput;
use crate::consts::*;

/// The player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Horizontal acceleration while a direction is held
    pub speed: f32,
    pub jump_power: f32,
    pub max_speed: f32,
    pub is_jumping: bool,
    pub is_grounded: bool,
    pub facing: Facing,
    pub animation: Animation,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            speed: PLAYER_SPEED,
            jump_power: PLAYER_JUMP_POWER,
            max_speed: PLAYER_MAX_SPEED,
            is_jumping: false,
            is_grounded: false,
            facing: Facing::Right,
            animation: Animation::default(),
        }
    }

    /// Advance by `dt_ms` milliseconds. Returns true if a jump started.
    pub fn update(&mut self, dt_ms: f32, input: &TickInput, platforms: &[Platform]) -> bool {
        let dt = dt_ms / 1000.0;

        let jumped = self.handle_input(input, dt);
        self.apply_physics(dt);
        self.resolve_platforms(platforms);
        self.animation.advance(dt_ms, PLAYER_FRAME_MS, PLAYER_FRAME_COUNT);

        jumped
    }

    fn handle_input(&mut self, input: &TickInput, dt: f32) -> bool {
        if input.left {
            self.vel.x = (self.vel.x - self.speed * dt).max(-self.max_speed);
            self.facing = Facing::Left;
        } else if input.right {
            self.vel.x = (self.vel.x + self.speed * dt).min(self.max_speed);
            self.facing = Facing::Right;
        } else {
            self.vel.x *= PLAYER_FRICTION;
            if self.vel.x.abs() < PLAYER_STOP_SPEED {
                self.vel.x = 0.0;
            }
        }

        if input.jump && self.is_grounded && !self.is_jumping {
            self.vel.y = -self.jump_power;
            self.is_jumping = true;
            self.is_grounded = false;
            return true;
        }
        false
    }

    fn apply_physics(&mut self, dt: f32) {
        self.vel.y += GRAVITY * dt;
        self.pos += self.vel * dt;

        // Left wall only; the level scrolls to the right
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.vel.x = 0.0;
        }
    }

    /// Later platforms can override what earlier ones resolved this tick
    fn resolve_platforms(&mut self, platforms: &[Platform]) {
        self.is_grounded = false;

        for platform in platforms {
            if !rect_overlap(&self.bounds(), &platform.rect) {
                continue;
            }
            let p = platform.rect;

            if self.vel.y > 0.0 && self.pos.y < p.y {
                // Landing on top
                self.pos.y = p.y - PLAYER_HEIGHT;
                self.vel.y = 0.0;
                self.is_grounded = true;
                self.is_jumping = false;
            } else if self.vel.y < 0.0 && self.pos.y > p.y {
                // Head hit the underside
                self.pos.y = p.bottom();
                self.vel.y = 0.0;
            } else if self.vel.x > 0.0 && self.pos.x < p.x {
                self.pos.x = p.x - PLAYER_WIDTH;
                self.vel.x = 0.0;
            } else if self.vel.x < 0.0 && self.pos.x > p.x {
                self.pos.x = p.right();
                self.vel.x = 0.0;
            }
        }
    }

    /// Small hop after stomping an enemy
    pub fn bounce(&mut self) {
        self.vel.y = -STOMP_BOUNCE_SPEED;
    }

    pub fn reset(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
        self.vel = Vec2::ZERO;
        self.is_jumping = false;
        self.is_grounded = false;
        self.facing = Facing::Right;
    }

    /// True while airborne from a jump and moving down
    pub fn is_descending_jump(&self) -> bool {
        self.is_jumping && self.vel.y > 0.0
    }
}

impl Bounds for Player {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT_MS: f32 = 16.0;

    fn floor() -> Vec<Platform> {
        vec![Platform::ground(0.0, 500.0, 3072.0, 32.0)]
    }

    /// Drop the player onto the floor and let it settle
    fn grounded_player() -> (Player, Vec<Platform>) {
        let platforms = floor();
        let mut player = Player::new(100.0, 460.0);
        let idle = TickInput::default();
        for _ in 0..30 {
            player.update(DT_MS, &idle, &platforms);
        }
        assert!(player.is_grounded);
        (player, platforms)
    }

    #[test]
    fn test_landing_snaps_to_top() {
        let (player, _) = grounded_player();
        assert_eq!(player.pos.y, 500.0 - PLAYER_HEIGHT);
        assert_eq!(player.vel.y, 0.0);
        assert!(!player.is_jumping);
    }

    #[test]
    fn test_jump_from_ground() {
        let (mut player, platforms) = grounded_player();
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        let jumped = player.update(DT_MS, &jump, &platforms);
        assert!(jumped);
        assert!(player.is_jumping);
        assert!(!player.is_grounded);
        assert!(player.vel.y < 0.0);
        assert!(player.pos.y < 500.0 - PLAYER_HEIGHT);
    }

    #[test]
    fn test_no_double_jump() {
        let (mut player, platforms) = grounded_player();
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        player.update(DT_MS, &jump, &platforms);
        let vy = player.vel.y;
        let jumped = player.update(DT_MS, &jump, &platforms);
        assert!(!jumped);
        // Only gravity acted on the second tick
        assert!((player.vel.y - (vy + GRAVITY * DT_MS / 1000.0)).abs() < 1e-3);
    }

    #[test]
    fn test_jump_lands_and_clears_jumping() {
        let (mut player, platforms) = grounded_player();
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        player.update(DT_MS, &jump, &platforms);
        let idle = TickInput::default();
        for _ in 0..120 {
            player.update(DT_MS, &idle, &platforms);
        }
        assert!(player.is_grounded);
        assert!(!player.is_jumping);
        assert_eq!(player.pos.y, 500.0 - PLAYER_HEIGHT);
    }

    #[test]
    fn test_horizontal_accel_and_cap() {
        let (mut player, platforms) = grounded_player();
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        player.update(100.0, &right, &platforms);
        assert!((player.vel.x - 20.0).abs() < 1e-3);
        assert_eq!(player.facing, Facing::Right);

        for _ in 0..100 {
            player.update(100.0, &right, &platforms);
        }
        assert_eq!(player.vel.x, PLAYER_MAX_SPEED);
    }

    #[test]
    fn test_left_wins_over_right() {
        let (mut player, platforms) = grounded_player();
        let both = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        player.update(100.0, &both, &platforms);
        assert!(player.vel.x < 0.0);
        assert_eq!(player.facing, Facing::Left);
    }

    #[test]
    fn test_friction_snaps_to_zero() {
        let (mut player, platforms) = grounded_player();
        player.vel.x = 100.0;
        let idle = TickInput::default();
        player.update(DT_MS, &idle, &platforms);
        assert!((player.vel.x - 80.0).abs() < 1e-3);

        player.vel.x = 12.0;
        player.update(DT_MS, &idle, &platforms);
        assert_eq!(player.vel.x, 0.0);
    }

    #[test]
    fn test_left_boundary_clamp() {
        let (mut player, platforms) = grounded_player();
        player.pos.x = 0.5;
        player.vel.x = -300.0;
        let left = TickInput {
            left: true,
            ..Default::default()
        };
        player.update(DT_MS, &left, &platforms);
        assert_eq!(player.pos.x, 0.0);
        assert_eq!(player.vel.x, 0.0);
    }

    #[test]
    fn test_head_hits_ceiling() {
        let platforms = vec![Platform::floating(80.0, 400.0, 100.0, 32.0)];
        let mut player = Player::new(100.0, 440.0);
        player.vel.y = -600.0;
        player.update(DT_MS, &TickInput::default(), &platforms);
        assert_eq!(player.pos.y, 432.0);
        assert_eq!(player.vel.y, 0.0);
        assert!(!player.is_grounded);
    }

    #[test]
    fn test_side_collision_stops_player() {
        // Tall wall to the right, player standing beside it
        let platforms = vec![
            Platform::ground(0.0, 500.0, 3072.0, 32.0),
            Platform::floating(140.0, 300.0, 40.0, 200.0),
        ];
        let mut player = Player::new(100.0, 500.0 - PLAYER_HEIGHT);
        player.vel.x = 300.0;
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        player.update(100.0, &right, &platforms);
        assert_eq!(player.pos.x, 140.0 - PLAYER_WIDTH);
        assert_eq!(player.vel.x, 0.0);
    }

    #[test]
    fn test_side_collision_moving_left() {
        // Tall wall to the left, player standing beside it
        let platforms = vec![
            Platform::ground(0.0, 500.0, 3072.0, 32.0),
            Platform::floating(40.0, 300.0, 40.0, 200.0),
        ];
        let mut player = Player::new(90.0, 500.0 - PLAYER_HEIGHT);
        player.vel.x = -300.0;
        let left = TickInput {
            left: true,
            ..Default::default()
        };
        player.update(100.0, &left, &platforms);
        assert_eq!(player.pos.x, 80.0);
        assert_eq!(player.vel.x, 0.0);
        assert_eq!(player.pos.y, 500.0 - PLAYER_HEIGHT);
        assert!(player.is_grounded);
    }

    #[test]
    fn test_later_platform_sees_earlier_resolution() {
        // Landing on the floor lifts the player into a low ledge to the
        // right; only a ledge listed after the floor catches that
        let floor = Platform::ground(0.0, 500.0, 3072.0, 32.0);
        let ledge = Platform::floating(140.0, 440.0, 100.0, 30.0);
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        let run = |platforms: &[Platform]| {
            let mut player = Player::new(100.0, 500.0 - PLAYER_HEIGHT);
            player.vel.x = PLAYER_MAX_SPEED;
            player.update(100.0, &right, platforms);
            player
        };

        let blocked = run(&[floor.clone(), ledge.clone()]);
        assert_eq!(blocked.pos.x, 140.0 - PLAYER_WIDTH);
        assert_eq!(blocked.vel.x, 0.0);
        assert_eq!(blocked.pos.y, 500.0 - PLAYER_HEIGHT);

        let passed = run(&[ledge, floor]);
        assert!((passed.pos.x - 130.0).abs() < 1e-3);
        assert_eq!(passed.vel.x, PLAYER_MAX_SPEED);
        assert_eq!(passed.pos.y, 500.0 - PLAYER_HEIGHT);
    }

    #[test]
    fn test_bounce_and_reset() {
        let mut player = Player::new(10.0, 10.0);
        player.bounce();
        assert_eq!(player.vel.y, -200.0);

        player.vel.x = 50.0;
        player.is_jumping = true;
        player.facing = Facing::Left;
        player.reset(100.0, 476.0);
        assert_eq!(player.pos, Vec2::new(100.0, 476.0));
        assert_eq!(player.vel, Vec2::ZERO);
        assert!(!player.is_jumping);
        assert!(!player.is_grounded);
        assert_eq!(player.facing, Facing::Right);
    }

    #[test]
    fn test_animation_advances_every_150ms() {
        let mut player = Player::new(0.0, 0.0);
        let idle = TickInput::default();
        player.update(150.0, &idle, &[]);
        assert_eq!(player.animation.frame, 0);
        player.update(1.0, &idle, &[]);
        assert_eq!(player.animation.frame, 1);
    }
}
