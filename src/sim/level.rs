//! Authored level layouts
//!
//! Coordinates are measured from the bottom of the screen (`h - offset`)
//! so layouts adapt to the configured screen height. Floor strips are
//! `Ground`, raised ledges `Floating`.

use super::state::{Coin, Enemy, EnemyKind, Level, Platform};

/// Height of every platform in both levels
const SLAB: f32 = 32.0;

/// Everything a level spawns
#[derive(Debug, Clone)]
pub struct LevelLayout {
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
}

/// Build the layout for `level` on a `width` x `height` screen
pub fn build_level(level: Level, width: f32, height: f32) -> LevelLayout {
    match level {
        Level::One => level_one(width, height),
        Level::Two => level_two(width, height),
    }
}

fn spawn_goombas(height: f32, spots: &[(f32, f32)]) -> Vec<Enemy> {
    spots
        .iter()
        .map(|&(x, up)| Enemy::new(x, height - up, EnemyKind::Goomba))
        .collect()
}

fn spawn_coins(height: f32, spots: &[(f32, f32)]) -> Vec<Coin> {
    spots
        .iter()
        .map(|&(x, up)| Coin::new(x, height - up))
        .collect()
}

fn ledges(height: f32, spots: &[(f32, f32, f32)]) -> impl Iterator<Item = Platform> {
    spots
        .iter()
        .map(move |&(x, up, w)| Platform::floating(x, height - up, w, SLAB))
}

/// Introduction: one continuous floor, low ledges
fn level_one(w: f32, h: f32) -> LevelLayout {
    let mut platforms = vec![Platform::ground(0.0, h - SLAB, w * 3.0, SLAB)];
    platforms.extend(ledges(
        h,
        &[
            (300.0, 128.0, 200.0),
            (600.0, 200.0, 150.0),
            (850.0, 150.0, 120.0),
            (1200.0, 180.0, 180.0),
            (1500.0, 120.0, 150.0),
            (1800.0, 250.0, 200.0),
        ],
    ));

    let enemies = spawn_goombas(
        h,
        &[
            (400.0, 64.0),
            (700.0, 64.0),
            (900.0, 180.0),
            (1300.0, 64.0),
            (1600.0, 64.0),
        ],
    );

    let coins = spawn_coins(
        h,
        &[
            (350.0, 180.0),
            (380.0, 180.0),
            (650.0, 250.0),
            (900.0, 200.0),
            (1250.0, 230.0),
            (1280.0, 230.0),
            (1550.0, 170.0),
            (1850.0, 300.0),
            (1880.0, 300.0),
        ],
    );

    LevelLayout {
        platforms,
        enemies,
        coins,
    }
}

/// Gaps in the floor, stacked ledges and three high bonus perches
fn level_two(w: f32, h: f32) -> LevelLayout {
    let mut platforms = vec![
        Platform::ground(0.0, h - SLAB, 400.0, SLAB),
        Platform::ground(500.0, h - SLAB, 300.0, SLAB),
        Platform::ground(900.0, h - SLAB, w * 2.0, SLAB),
    ];
    platforms.extend(ledges(
        h,
        &[
            (200.0, 120.0, 100.0),
            (400.0, 180.0, 120.0),
            (600.0, 240.0, 100.0),
            (800.0, 200.0, 150.0),
            (1100.0, 160.0, 100.0),
            (1300.0, 220.0, 120.0),
            (1500.0, 280.0, 100.0),
            (1700.0, 180.0, 150.0),
            (1950.0, 240.0, 100.0),
            (2200.0, 160.0, 200.0),
            // High perches
            (750.0, 320.0, 80.0),
            (1450.0, 360.0, 80.0),
            (2100.0, 340.0, 80.0),
        ],
    ));

    let enemies = spawn_goombas(
        h,
        &[
            (250.0, 64.0),
            (550.0, 64.0),
            (450.0, 210.0),
            (850.0, 230.0),
            (1150.0, 190.0),
            (1350.0, 250.0),
            (1750.0, 210.0),
            (2000.0, 270.0),
            (2250.0, 190.0),
        ],
    );

    let coins = spawn_coins(
        h,
        &[
            // Floor
            (150.0, 80.0),
            (180.0, 80.0),
            (650.0, 80.0),
            // Ledges
            (230.0, 170.0),
            (430.0, 230.0),
            (630.0, 290.0),
            (830.0, 250.0),
            (1130.0, 210.0),
            (1330.0, 270.0),
            (1530.0, 330.0),
            (1730.0, 230.0),
            (1980.0, 290.0),
            (2230.0, 210.0),
            // High perches
            (780.0, 370.0),
            (1480.0, 410.0),
            (2130.0, 390.0),
            // Trail over the first gap
            (500.0, 100.0),
            (520.0, 120.0),
            (540.0, 140.0),
        ],
    );

    LevelLayout {
        platforms,
        enemies,
        coins,
    }
}
