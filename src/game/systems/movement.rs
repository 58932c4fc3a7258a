//! Player movement system.
//!
//! This module handles moving the player on the grid.

use crate::game::entities::pickup_item;
use crate::game::state::GameState;
use crate::game::systems::push::push_hairball;
use crate::game::types::{Cell, Direction, Phase, Position};

/// Move the player one cell in the given direction.
/// Walking onto an item picks it up; walking into a hairball pushes it.
/// Returns the new position.
pub fn move_player(game_state: &mut GameState, direction: Direction) -> Position {
    if game_state.phase != Phase::Running {
        return game_state.player.pos;
    }
    game_state.player.facing = direction;

    let Some(target) = game_state.grid.neighbour(game_state.player.pos, direction) else {
        return game_state.player.pos;
    };

    if game_state.grid.is_walkable(target) {
        game_state.player.pos = target;
        pickup_item(game_state, target);
    } else if game_state.grid.is(target, Cell::Hairball) {
        push_hairball(game_state, target, direction);
    }

    game_state.player.pos
}
