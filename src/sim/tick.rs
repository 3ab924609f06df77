//! Per-frame simulation tick
//!
//! Advances entities, resolves player interactions, and evaluates
//! win/lose conditions. Elapsed time comes from the host and is not clamped
//! here; a long stall can tunnel entities through thin platforms.

use serde::{Deserialize, Serialize};

use super::collision::{Bounds, overlaps, rect_overlap};
use super::state::{GameEvent, GameOutcome, GamePhase, GameState};
use crate::consts::*;

/// Held inputs for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Advance the game by `dt_ms` milliseconds. Returns what happened, in order.
///
/// Does nothing once the game is over; only [`GameState::restart`] leaves
/// that phase.
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Playing {
        return events;
    }

    state.clock_ms += dt_ms as f64;

    if state.player.update(dt_ms, input, &state.platforms) {
        events.push(GameEvent::Jumped);
    }
    for enemy in &mut state.enemies {
        enemy.update(dt_ms, &state.platforms);
    }
    let clock_ms = state.clock_ms;
    for coin in &mut state.coins {
        coin.update(dt_ms, clock_ms);
    }

    state.update_camera();

    resolve_enemies(state, &mut events);
    if state.is_over() {
        return events;
    }
    collect_coins(state, &mut events);

    if state.player.pos.y > state.height {
        player_hit(state, &mut events);
        if state.is_over() {
            return events;
        }
    }

    check_level_clear(state, &mut events);
    events
}

/// Stomp or get hit by each overlapping enemy, in list order. Stomped
/// enemies are flagged during the scan and dropped afterwards so none is
/// skipped or visited twice.
fn resolve_enemies(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let mut stomped = vec![false; state.enemies.len()];

    for i in 0..state.enemies.len() {
        if !overlaps(&state.player, &state.enemies[i]) {
            continue;
        }
        if state.player.is_descending_jump() {
            stomped[i] = true;
            state.score += STOMP_SCORE;
            state.player.bounce();
            log::debug!("Stomped enemy {} (score {})", i, state.score);
            events.push(GameEvent::EnemyStomped);
        } else {
            player_hit(state, events);
            if state.is_over() {
                break;
            }
        }
    }

    let mut flags = stomped.into_iter();
    state.enemies.retain(|_| !flags.next().unwrap_or(false));
}

fn collect_coins(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let player_box = state.player.bounds();
    for coin in &mut state.coins {
        if rect_overlap(&player_box, &coin.bounds()) {
            coin.collected = true;
            state.score += COIN_SCORE;
            events.push(GameEvent::CoinCollected);
        }
    }
    state.coins.retain(|coin| !coin.collected);
}

/// Lose a life; respawn or end the run
fn player_hit(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.lives = state.lives.saturating_sub(1);
    log::debug!("Player hit, {} lives left", state.lives);
    events.push(GameEvent::PlayerHit { lives: state.lives });

    if state.lives == 0 {
        end_run(state, GameOutcome::OutOfLives, events);
    } else {
        state.respawn_player();
    }
}

fn check_level_clear(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if !state.level_cleared() {
        return;
    }

    let cleared = state.level;
    state.score += cleared.clear_bonus();
    events.push(GameEvent::LevelCleared { level: cleared });

    match cleared.next() {
        Some(next) => {
            state.load_level(next);
            state.respawn_player();
            state.camera_x = 0.0;
        }
        None => end_run(state, GameOutcome::Completed, events),
    }
}

fn end_run(state: &mut GameState, outcome: GameOutcome, events: &mut Vec<GameEvent>) {
    state.phase = GamePhase::GameOver;
    state.outcome = Some(outcome);
    log::info!("Game over ({:?}), final score {}", outcome, state.score);
    events.push(GameEvent::GameOver {
        score: state.score,
        outcome,
    });
}
