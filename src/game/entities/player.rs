//! Player entity logic.
//!
//! Item pickups and the damage taken when an enemy reaches the player.

use log::info;

use crate::config::game::{CHURU_SCORE, MAX_CLAW_CHARGE};
use crate::game::events::GameEvent;
use crate::game::state::GameState;
use crate::game::types::{Cell, Phase, Position};

/// Collect the item lying at `pos`, if any. Returns the picked item.
pub fn pickup_item(game_state: &mut GameState, pos: Position) -> Option<Cell> {
    let item = game_state.grid.get(pos)?;
    match item {
        Cell::ClawItem => {
            game_state.player.claw_charge = MAX_CLAW_CHARGE;
            game_state.flash("Got a claw sharpener!", false);
        }
        Cell::Churu => {
            game_state.score += CHURU_SCORE;
            game_state.flash("Got a churu!", false);
        }
        _ => return None,
    }
    game_state.grid.set(pos, Cell::Empty);
    game_state.emit(GameEvent::ItemPicked { item, pos });
    Some(item)
}

/// An enemy reached the player: lose a life, respawn at the start cell, or end the game.
pub fn hit_player(game_state: &mut GameState) {
    game_state.lives = game_state.lives.saturating_sub(1);
    game_state.flash("Ouch!", true);
    game_state.emit(GameEvent::PlayerHit { lives_left: game_state.lives });

    if game_state.lives == 0 {
        game_state.flash("Game over", true);
        // A time-up on the same frame has already ended the game.
        if game_state.phase != Phase::Over {
            game_state.phase = Phase::Over;
            game_state.emit(GameEvent::GameOver { score: game_state.score });
            info!("[Game] Game over on stage {} with score {}", game_state.stage, game_state.score);
        }
    } else {
        game_state.player.pos = game_state.player_start;
    }
}
