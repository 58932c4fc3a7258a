//! Per-frame rules.
//!
//! One call to [`run_frame`] is one animation frame: enemy AI, the stage timer,
//! player collisions and stage clearing, then the cosmetic countdowns.

use log::info;

use crate::config::game::{MAX_FRAME_MS, STAGE_CLEAR_BONUS, TIMER_STEP_MS};
use crate::game::entities::hit_player;
use crate::game::events::GameEvent;
use crate::game::state::GameState;
use crate::game::systems::ai::update_enemies;
use crate::game::types::Phase;

pub fn run_frame(game_state: &mut GameState, dt_ms: f64) {
    game_state.frame += 1;

    if game_state.phase == Phase::Running {
        game_state.sec_accum += dt_ms.clamp(0.0, MAX_FRAME_MS);
        update_enemies(game_state);
        tick_stage_timer(game_state);

        // Collisions still count on the frame the timer runs out.
        resolve_collisions(game_state);
        if game_state.phase == Phase::Running && game_state.crows.is_empty() && game_state.dogs.is_empty() {
            clear_stage(game_state);
        }
    }

    tick_effects(game_state);
}

/// Count the stage timer down once per accumulated second.
fn tick_stage_timer(game_state: &mut GameState) {
    if game_state.sec_accum < TIMER_STEP_MS {
        return;
    }
    game_state.sec_accum -= TIMER_STEP_MS;
    game_state.time = game_state.time.saturating_sub(1);

    if game_state.time == 0 {
        game_state.phase = Phase::Over;
        game_state.flash("Time up!", true);
        game_state.emit(GameEvent::TimeUp);
        game_state.emit(GameEvent::GameOver { score: game_state.score });
        info!("[Game] Time up on stage {} with score {}", game_state.stage, game_state.score);
    }
}

/// At most one hit from a crow and one from a dog per frame.
fn resolve_collisions(game_state: &mut GameState) {
    let player = game_state.player.pos;
    if game_state.lives > 0 && game_state.crows.iter().any(|c| c.pos == player) {
        hit_player(game_state);
    }

    let player = game_state.player.pos;
    if game_state.lives > 0 && game_state.dogs.iter().any(|d| d.pos == player) {
        hit_player(game_state);
    }
}

fn clear_stage(game_state: &mut GameState) {
    let cleared = game_state.stage;
    game_state.stage += 1;
    game_state.score += STAGE_CLEAR_BONUS;
    game_state.flash("Stage clear!", true);
    game_state.emit(GameEvent::StageCleared { stage: cleared });
    info!("[Game] Stage {} cleared, score {}", cleared, game_state.score);
    game_state.build_stage();
}

/// Flash message and wall shake count down every frame, whatever the phase.
fn tick_effects(game_state: &mut GameState) {
    if let Some(flash) = game_state.flash.as_mut() {
        flash.frames_left = flash.frames_left.saturating_sub(1);
        if flash.frames_left == 0 {
            game_state.flash = None;
        }
    }
    if let Some(shake) = game_state.shake.as_mut() {
        shake.frames_left = shake.frames_left.saturating_sub(1);
        if shake.frames_left == 0 {
            game_state.shake = None;
        }
    }
}
