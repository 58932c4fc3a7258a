//! Hairball placement.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::game::grid::Grid;
use crate::game::types::{Cell, Position};

/// Place up to `target` hairballs on empty interior cells, never next to the player
/// start and never 4-adjacent to another hairball. Returns the chosen cells.
pub fn place_hairballs<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    player_start: Position,
    target: usize,
) -> Vec<Position> {
    let mut empties = grid.positions_of(Cell::Empty);
    empties.shuffle(rng);

    let mut placed = Vec::with_capacity(target);
    for pos in empties {
        if placed.len() >= target {
            break;
        }
        if pos.manhattan(player_start) <= 1 {
            continue;
        }
        if grid.neighbours(pos).any(|n| grid.is(n, Cell::Hairball)) {
            continue;
        }
        grid.set(pos, Cell::Hairball);
        placed.push(pos);
    }
    placed
}
