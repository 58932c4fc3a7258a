//! Item logic: churu spawns and sand crumbling.

use log::warn;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::config::game::{CLAW_DROP_CHANCE, MAX_CHURU};
use crate::game::grid::Grid;
use crate::game::types::{Cell, Position};

/// Put a churu on a random empty interior cell, unless the board already holds
/// the maximum. Returns where it landed.
pub fn spawn_churu<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Option<Position> {
    if grid.count(Cell::Churu) >= MAX_CHURU {
        return None;
    }

    let candidates = grid.positions_of(Cell::Empty);
    let Some(&pos) = candidates.choose(rng) else {
        warn!("[Item] No free tile to place a churu!");
        return None;
    };
    grid.set(pos, Cell::Churu);
    Some(pos)
}

/// Crumble the sand mound at `pos`. The cell becomes empty or, by chance, a claw
/// sharpener. Returns whether a claw sharpener dropped; `None` if there was no sand.
pub fn crumble_sand<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, pos: Position) -> Option<bool> {
    if !grid.is(pos, Cell::Sand) {
        return None;
    }
    let dropped_claw = rng.random_bool(CLAW_DROP_CHANCE);
    grid.set(pos, if dropped_claw { Cell::ClawItem } else { Cell::Empty });
    Some(dropped_claw)
}
