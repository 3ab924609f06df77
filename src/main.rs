//! Coin Hopper entry point
//!
//! Headless host: drives the simulation with a fixed frame clock and a
//! scripted autopilot, routes events to audio and logging, and prints the
//! result. Pass a settings JSON path as the first argument.

use std::path::PathBuf;

use coin_hopper::audio::LogSink;
use coin_hopper::consts::PLAYER_WIDTH;
use coin_hopper::renderer::{Renderer, TextRenderer};
use coin_hopper::sim::{GameEvent, GameState, TickInput, tick};
use coin_hopper::{AudioManager, InputState, Settings};

/// Host frame period (60 Hz)
const FRAME_MS: f32 = 1000.0 / 60.0;
/// Give up after two minutes of game time
const MAX_FRAMES: u32 = 60 * 120;
/// How far ahead the autopilot looks for enemies
const LOOKAHEAD: f32 = 90.0;

/// Hold right, jump at enemies ahead and at the end of solid ground
fn autopilot(state: &GameState, input: &mut InputState) {
    let player = &state.player;
    let front = player.pos.x + PLAYER_WIDTH;

    let enemy_ahead = state.enemies.iter().any(|e| {
        let gap = e.pos.x - front;
        (0.0..LOOKAHEAD).contains(&gap) && (e.pos.y - player.pos.y).abs() < 64.0
    });
    let edge_ahead = !state.platforms.iter().any(|p| {
        let probe = front + 24.0;
        probe >= p.rect.x && probe <= p.rect.right() && p.rect.y >= player.pos.y
    });

    input.key_down("ArrowRight");
    if enemy_ahead || edge_ahead {
        input.key_down("Space");
    } else {
        input.key_up("Space");
    }
}

fn main() {
    env_logger::init();
    log::info!("Coin Hopper (headless) starting...");

    let settings = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load(&path),
        None => Settings::default(),
    };

    let mut state = GameState::new(settings.world_width, settings.world_height);
    let mut input = InputState::new(settings.bindings.clone());
    let mut audio = AudioManager::new(Some(Box::new(LogSink)));
    audio.apply_settings(&settings);
    let mut renderer = TextRenderer::default();

    log::info!(
        "World {}x{}, level width {}",
        state.width,
        state.height,
        state.level_width()
    );

    let mut result = None;
    for frame in 0..MAX_FRAMES {
        autopilot(&state, &mut input);
        let tick_input: TickInput = input.snapshot();

        let events = tick(&mut state, &tick_input, settings.frame_ms(FRAME_MS));
        audio.handle_events(&events);

        for event in &events {
            match *event {
                GameEvent::LevelCleared { level } => {
                    log::info!("Level {} cleared!", level.number())
                }
                GameEvent::GameOver { score, outcome } => result = Some((score, outcome)),
                _ => {}
            }
        }

        renderer.render(&state.frame());
        if frame % 60 == 0 {
            let hud = state.hud();
            log::info!(
                "t={}s score={} lives={} level={}",
                frame / 60,
                hud.score,
                hud.lives,
                hud.level
            );
            log::debug!("\n{}", renderer.output());
        }

        if result.is_some() {
            break;
        }
    }

    match result {
        Some((score, outcome)) => {
            println!("{}", outcome.message());
            println!("Final score: {}", score);
        }
        None => {
            let hud = state.hud();
            println!(
                "Demo ended: score {}, lives {}, level {}",
                hud.score, hud.lives, hud.level
            );
        }
    }
}
