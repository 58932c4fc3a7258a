//! Stage generation.
//!
//! Builds a fresh board for a stage number: corridors carved out of sand,
//! hairballs scattered along them, crows and dogs away from the player start.

use log::info;
use rand::Rng;

use crate::config::stage::{
    CROW_MIN_DISTANCE, DOG_MIN_DISTANCE, EXTRA_STROKE_FACTOR_MIN, EXTRA_STROKE_FACTOR_SPREAD,
    EXTRA_STROKES_MAX, EXTRA_STROKES_MIN, HAIRBALLS_MAX, HAIRBALLS_MIN, MAIN_STROKE_FACTOR_MIN,
    MAIN_STROKE_FACTOR_SPREAD,
};
use crate::game::entities::{crow_count, dog_count, place_hairballs, spawn_enemies};
use crate::game::grid::{Grid, carve_stroke, find_isolated_start};
use crate::game::types::{Cell, Enemy, Position};

/// Everything a stage starts with.
#[derive(Debug, Clone)]
pub struct StageLayout {
    pub grid: Grid,
    pub player_start: Position,
    /// Carved corridors in path order; the first one starts at the player start.
    pub corridors: Vec<Vec<Position>>,
    pub hairballs: Vec<Position>,
    pub crows: Vec<Enemy>,
    pub dogs: Vec<Enemy>,
}

/// Player start cell: third column, third row from the bottom.
pub fn player_start(rows: usize) -> Position {
    Position { x: 2, y: rows.saturating_sub(3) }
}

pub fn generate_stage<R: Rng + ?Sized>(rng: &mut R, rows: usize, cols: usize, stage: u32) -> StageLayout {
    let mut grid = Grid::new(rows, cols, Cell::Sand);
    let start = player_start(rows);

    let mut corridors = Vec::new();
    let main_factor = MAIN_STROKE_FACTOR_MIN + rng.random::<f64>() * MAIN_STROKE_FACTOR_SPREAD;
    corridors.push(carve_stroke(&mut grid, rng, start, main_factor));

    let extra_strokes = rng.random_range(EXTRA_STROKES_MIN..=EXTRA_STROKES_MAX);
    for _ in 0..extra_strokes {
        if let Some(extra_start) = find_isolated_start(&grid, rng) {
            let factor = EXTRA_STROKE_FACTOR_MIN + rng.random::<f64>() * EXTRA_STROKE_FACTOR_SPREAD;
            corridors.push(carve_stroke(&mut grid, rng, extra_start, factor));
        }
    }

    // Hairballs never touch each other, so a fresh stage holds no 3-in-a-row.
    let hairball_target = rng.random_range(HAIRBALLS_MIN..=HAIRBALLS_MAX);
    let hairballs = place_hairballs(&mut grid, rng, start, hairball_target);

    let crows = spawn_enemies(&grid, rng, start, crow_count(stage), CROW_MIN_DISTANCE, Enemy::crow);
    let dogs = spawn_enemies(&grid, rng, start, dog_count(stage), DOG_MIN_DISTANCE, Enemy::dog);

    info!(
        "[Stage] Stage {} built: {} corridors, {} cells carved, {} hairballs, {} crows, {} dogs",
        stage,
        corridors.len(),
        corridors.iter().map(Vec::len).sum::<usize>(),
        hairballs.len(),
        crows.len(),
        dogs.len()
    );

    StageLayout {
        grid,
        player_start: start,
        corridors,
        hairballs,
        crows,
        dogs,
    }
}
