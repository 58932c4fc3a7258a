//! Hairball push resolution.
//!
//! A pushed hairball slides until the next cell is not walkable. Enemies on the
//! cells it crosses are hit: crows die on the spot, dogs lose one hit point.
//! A resulting line of three hairballs summons a churu.

use log::debug;

use crate::config::game::{CROW_SCORE, DOG_SCORE};
use crate::game::entities::spawn_churu;
use crate::game::events::GameEvent;
use crate::game::state::GameState;
use crate::game::types::{Cell, Direction, EnemyKind, Phase, Position};

/// Result of a successful push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushOutcome {
    pub landed: Position,
    pub crows_killed: u32,
    pub dogs_killed: u32,
    pub churu: Option<Position>,
}

/// Score for crows crushed by a single push; multi-kills grow quadratically.
pub fn crow_kill_score(killed: u32) -> u32 {
    CROW_SCORE * killed * if killed > 1 { killed } else { 1 }
}

/// Push the hairball at `from` in `direction`.
/// Returns `None` (and changes nothing) when there is no hairball or the cell
/// right behind it is blocked.
pub fn push_hairball(game_state: &mut GameState, from: Position, direction: Direction) -> Option<PushOutcome> {
    if game_state.phase == Phase::Over || !game_state.grid.is(from, Cell::Hairball) {
        return None;
    }
    let grid = &game_state.grid;
    let mut next = grid.neighbour(from, direction).filter(|p| grid.is_walkable(*p))?;

    game_state.grid.set(from, Cell::Empty);
    let landed = loop {
        let current = next;
        for crow in game_state.crows.iter_mut().filter(|c| c.pos == current) {
            crow.hit = true;
        }
        for dog in game_state.dogs.iter_mut().filter(|d| d.pos == current) {
            if let EnemyKind::Dog { hp } = &mut dog.kind {
                *hp = hp.saturating_sub(1);
            }
            dog.hit = true;
        }

        let grid = &game_state.grid;
        match grid.neighbour(current, direction).filter(|p| grid.is_walkable(*p)) {
            Some(p) => next = p,
            None => break current,
        }
    };
    game_state.grid.set(landed, Cell::Hairball);
    game_state.emit(GameEvent::HairballPushed { from, to: landed });

    let crows_before = game_state.crows.len();
    game_state.crows.retain(|c| !c.hit);
    let crows_killed = (crows_before - game_state.crows.len()) as u32;

    let dogs_before = game_state.dogs.len();
    game_state.dogs.retain(|d| d.hp().is_some_and(|hp| hp > 0));
    let dogs_killed = (dogs_before - game_state.dogs.len()) as u32;

    if crows_killed > 0 {
        let score = crow_kill_score(crows_killed);
        game_state.score += score;
        game_state.flash(format!("Crows defeated! x{crows_killed}"), true);
        game_state.emit(GameEvent::CrowsDefeated { count: crows_killed, score });
    }
    if dogs_killed > 0 {
        let score = DOG_SCORE * dogs_killed;
        game_state.score += score;
        game_state.flash(format!("Dogs defeated! x{dogs_killed}"), true);
        game_state.emit(GameEvent::DogsDefeated { count: dogs_killed, score });
    }

    let churu = resolve_hairball_match(game_state);

    debug!(
        "[Push] ({}, {}) -> ({}, {}): {} crows, {} dogs killed",
        from.x, from.y, landed.x, landed.y, crows_killed, dogs_killed
    );

    Some(PushOutcome {
        landed,
        crows_killed,
        dogs_killed,
        churu,
    })
}

/// Spawn at most one churu when three or more hairballs line up.
/// The match is announced even when the churu cap leaves nothing to place.
pub fn resolve_hairball_match(game_state: &mut GameState) -> Option<Position> {
    if !game_state.grid.has_hairball_run(3) {
        return None;
    }
    let churu = spawn_churu(&mut game_state.grid, &mut game_state.rng);
    game_state.flash("A churu appeared!", false);
    if let Some(pos) = churu {
        game_state.emit(GameEvent::ChuruSpawned { pos });
    }
    churu
}
