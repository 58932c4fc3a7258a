//! Enemy movement.
//!
//! Each enemy ticks every frame but only acts on its own cadence: crows every
//! 12 frames, dogs every 18. A stunned enemy burns one stun frame instead.
//! On its turn an enemy walks straight ahead, turning at random when blocked
//! (up to 4 tries). Crows occasionally shove a hairball standing in their way.

use rand::Rng;

use crate::config::game::{CROW_MOVE_INTERVAL, CROW_PUSH_CHANCE, DOG_MOVE_INTERVAL, MOVE_RETRIES};
use crate::game::grid::Grid;
use crate::game::state::GameState;
use crate::game::types::{Cell, Direction, Enemy, EnemyKind};

/// Frames between two moves of an enemy kind.
pub fn move_interval(kind: EnemyKind) -> u32 {
    match kind {
        EnemyKind::Crow => CROW_MOVE_INTERVAL,
        EnemyKind::Dog { .. } => DOG_MOVE_INTERVAL,
    }
}

/// Advance every crow, then every dog, by one frame.
pub fn update_enemies(game_state: &mut GameState) {
    let GameState { grid, crows, dogs, rng, .. } = game_state;
    for crow in crows.iter_mut() {
        tick_enemy(crow, grid, rng);
    }
    for dog in dogs.iter_mut() {
        tick_enemy(dog, grid, rng);
    }
}

/// Advance one enemy by one frame. Returns whether it changed cell.
pub fn tick_enemy<R: Rng + ?Sized>(enemy: &mut Enemy, grid: &mut Grid, rng: &mut R) -> bool {
    if enemy.stun > 0 {
        enemy.stun -= 1;
        return false;
    }

    enemy.move_tick += 1;
    if enemy.move_tick % move_interval(enemy.kind) != 0 {
        return false;
    }

    let is_crow = enemy.kind == EnemyKind::Crow;
    if !is_crow {
        enemy.hit = false;
    }

    for _ in 0..MOVE_RETRIES {
        if let Some(next) = grid.neighbour(enemy.pos, enemy.dir) {
            if grid.is_walkable(next) {
                enemy.pos = next;
                return true;
            }
            if is_crow && grid.is(next, Cell::Hairball) {
                let beyond = grid.neighbour(next, enemy.dir).filter(|p| grid.is_walkable(*p));
                if let Some(beyond) = beyond {
                    if rng.random_bool(CROW_PUSH_CHANCE) {
                        grid.set(next, Cell::Empty);
                        grid.set(beyond, Cell::Hairball);
                        enemy.pos = next;
                        return true;
                    }
                }
            }
        }
        enemy.dir = Direction::random(rng);
    }
    false
}
