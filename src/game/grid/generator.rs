//! Corridor carving.
//!
//! A stroke is a single non-branching, non-self-intersecting corridor. It grows
//! from its head, or from its tail when the head is stuck, into a neighbour that
//! touches no other empty cell.

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::stage::{CARVE_GUARD, EXTRA_STROKE_START_TRIES};
use crate::game::grid::Grid;
use crate::game::types::{Cell, Direction, Position};

/// Carve one stroke starting at `start`, aiming for `len_factor` of the interior area.
/// Returns the corridor cells in path order (tail first).
pub fn carve_stroke<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    start: Position,
    len_factor: f64,
) -> Vec<Position> {
    if !grid.is_interior(start) {
        return Vec::new();
    }
    grid.set(start, Cell::Empty);

    let interior_area = grid.cols().saturating_sub(2) * grid.rows().saturating_sub(2);
    let target_len = (interior_area as f64 * len_factor).floor() as usize;

    let mut path = VecDeque::from([start]);
    let mut guard = 0;
    while path.len() < target_len && guard < CARVE_GUARD {
        guard += 1;

        if let Some(next) = path.back().and_then(|head| extension(grid, rng, *head)) {
            grid.set(next, Cell::Empty);
            path.push_back(next);
            continue;
        }
        if let Some(next) = path.front().and_then(|tail| extension(grid, rng, *tail)) {
            grid.set(next, Cell::Empty);
            path.push_front(next);
            continue;
        }
        break;
    }

    path.into()
}

/// Pick a random interior cell, not yet carved and with no carved neighbour,
/// to start an additional stroke from.
pub fn find_isolated_start<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Option<Position> {
    if grid.cols() < 5 || grid.rows() < 5 {
        return None;
    }
    (0..EXTRA_STROKE_START_TRIES).find_map(|_| {
        let pos = Position {
            x: rng.random_range(2..=grid.cols() - 3),
            y: rng.random_range(2..=grid.rows() - 3),
        };
        (!grid.is(pos, Cell::Empty) && grid.empty_neighbour_count(pos) == 0).then_some(pos)
    })
}

fn extension<R: Rng + ?Sized>(grid: &Grid, rng: &mut R, end: Position) -> Option<Position> {
    let mut directions = Direction::ALL;
    directions.shuffle(rng);

    directions
        .into_iter()
        .filter_map(|d| grid.neighbour(end, d))
        .find(|p| {
            grid.is_interior(*p)
                && !grid.is(*p, Cell::Wall)
                && !grid.is(*p, Cell::Empty)
                && grid.empty_neighbour_count(*p) == 1
        })
}
