//! Crow and dog entity logic.
//!
//! This module handles spawning enemies and the stun applied by rattled trees.

use log::warn;
use rand::Rng;

use crate::config::stage::{CROW_BASE, CROW_MAX, DOG_BASE, DOG_MAX, SPAWN_ATTEMPTS};
use crate::game::grid::Grid;
use crate::game::types::{Cell, Direction, Enemy, Position};

/// Number of crows on a given stage.
pub fn crow_count(stage: u32) -> usize {
    (CROW_BASE + stage).min(CROW_MAX) as usize
}

/// Number of dogs on a given stage.
pub fn dog_count(stage: u32) -> usize {
    (DOG_BASE + stage / 2).min(DOG_MAX) as usize
}

/// Spawn up to `count` enemies on random empty cells of the upper half of the board,
/// strictly farther than `min_distance` from `player_start`.
/// Gives up after a fixed number of attempts, so fewer enemies may be returned.
pub fn spawn_enemies<R, F>(
    grid: &Grid,
    rng: &mut R,
    player_start: Position,
    count: usize,
    min_distance: usize,
    make: F,
) -> Vec<Enemy>
where
    R: Rng + ?Sized,
    F: Fn(Position, Direction) -> Enemy,
{
    let mut enemies = Vec::with_capacity(count);
    if grid.cols() < 3 || grid.rows() < 3 {
        return enemies;
    }

    let max_y = (grid.rows() / 2).max(1);
    let mut attempts = 0;
    while enemies.len() < count && attempts < SPAWN_ATTEMPTS {
        attempts += 1;
        let pos = Position {
            x: rng.random_range(1..=grid.cols() - 2),
            y: rng.random_range(1..=max_y),
        };
        if grid.is(pos, Cell::Empty) && pos.manhattan(player_start) > min_distance {
            enemies.push(make(pos, Direction::random(rng)));
        }
    }

    if enemies.len() < count {
        warn!("[Spawn] Only {} of {} enemies placed after {} attempts", enemies.len(), count, attempts);
    }
    enemies
}

/// Stun every enemy within `radius` (Euclidean) of `center` for at least `frames`.
/// Returns how many enemies were affected.
pub fn stun_around(enemies: &mut [Enemy], center: Position, radius: i64, frames: u32) -> usize {
    let r2 = radius * radius;
    let mut stunned = 0;
    for enemy in enemies.iter_mut().filter(|e| e.pos.distance_squared(center) <= r2) {
        enemy.stun = enemy.stun.max(frames);
        stunned += 1;
    }
    stunned
}
