//! The push/interact action.
//!
//! Acts on the cell the player faces, first match wins:
//! hairball (push), sand (crumble), border wall (rattle, trees stun nearby
//! enemies), then a claw attack on enemies standing there.

use log::debug;

use crate::config::game::{
    CROW_SCORE, DOG_SCORE, SHAKE_FRAMES, TREE_STUN_FRAMES, TREE_STUN_RADIUS,
};
use crate::game::entities::{crumble_sand, stun_around};
use crate::game::events::GameEvent;
use crate::game::state::GameState;
use crate::game::systems::push::{PushOutcome, push_hairball};
use crate::game::types::{BorderSide, Cell, Phase, Position, WallShake};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// A hairball was faced; `None` when it could not move.
    Pushed(Option<PushOutcome>),
    Crumbled { dropped_claw: bool },
    Rattled { side: BorderSide, tree: bool, stunned: usize },
    Clawed { crows: u32, dogs: u32 },
    Nothing,
}

pub fn push_action(game_state: &mut GameState) -> Interaction {
    if game_state.phase != Phase::Running {
        return Interaction::Nothing;
    }
    let Some(target) = game_state.grid.neighbour(game_state.player.pos, game_state.player.facing) else {
        return Interaction::Nothing;
    };

    if game_state.grid.is(target, Cell::Hairball) {
        let direction = game_state.player.facing;
        return Interaction::Pushed(push_hairball(game_state, target, direction));
    }

    if let Some(dropped_claw) = crumble_sand(&mut game_state.grid, &mut game_state.rng, target) {
        game_state.flash("Crumble! (the sand mound collapsed)", false);
        game_state.emit(GameEvent::SandCrumbled { pos: target, dropped_claw });
        return Interaction::Crumbled { dropped_claw };
    }

    let mut result = Interaction::Nothing;
    if let Some(side) = game_state.grid.border_side(target) {
        let tree = game_state.grid.is_tree(target);
        let stunned = if tree { tree_stun(game_state, target) } else { 0 };
        start_shake(game_state, side, target);
        result = Interaction::Rattled { side, tree, stunned };
    }

    if game_state.player.claw_charge > 0 {
        if let Some(clawed) = claw_attack(game_state, target) {
            return clawed;
        }
    }
    result
}

fn tree_stun(game_state: &mut GameState, tree: Position) -> usize {
    let stunned = stun_around(&mut game_state.crows, tree, TREE_STUN_RADIUS, TREE_STUN_FRAMES)
        + stun_around(&mut game_state.dogs, tree, TREE_STUN_RADIUS, TREE_STUN_FRAMES);
    debug!("[Interact] Tree at ({}, {}) stunned {} enemies", tree.x, tree.y, stunned);
    game_state.emit(GameEvent::TreeStun { pos: tree, stunned });
    stunned
}

/// Start a wall shake unless one is still playing.
fn start_shake(game_state: &mut GameState, side: BorderSide, origin: Position) {
    if game_state.shake.is_some() {
        return;
    }
    game_state.shake = Some(WallShake {
        side,
        origin,
        frames_left: SHAKE_FRAMES,
    });
    game_state.emit(GameEvent::WallRattled { side, pos: origin });
}

/// Remove every enemy on `target`, spending the claw charge if anything was hit.
fn claw_attack(game_state: &mut GameState, target: Position) -> Option<Interaction> {
    let crows_before = game_state.crows.len();
    game_state.crows.retain(|c| c.pos != target);
    let crows = (crows_before - game_state.crows.len()) as u32;

    let dogs_before = game_state.dogs.len();
    game_state.dogs.retain(|d| d.pos != target);
    let dogs = (dogs_before - game_state.dogs.len()) as u32;

    if crows + dogs == 0 {
        return None;
    }

    let score = crows * CROW_SCORE + dogs * DOG_SCORE;
    game_state.score += score;
    game_state.player.claw_charge = 0;
    game_state.flash(format!("Claw attack! x{}", crows + dogs), false);
    game_state.emit(GameEvent::ClawAttack { count: crows + dogs, score });
    Some(Interaction::Clawed { crows, dogs })
}
