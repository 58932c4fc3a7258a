//! Grid model.
//!
//! The board is a rows × cols matrix of [`Cell`]s whose perimeter is always wall.
//! Every lookup is bounds-checked; positions off the board read as `None` and are
//! treated as blocked by callers.

use log::warn;
use serde::{Serialize, Deserialize};

use crate::game::types::{BorderSide, Cell, Direction, Position};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Build a grid with a wall perimeter and every interior cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: Cell) -> Self {
        let cells = (0..rows)
            .map(|y| {
                (0..cols)
                    .map(|x| {
                        if x == 0 || y == 0 || x + 1 == cols || y + 1 == rows {
                            Cell::Wall
                        } else {
                            fill
                        }
                    })
                    .collect()
            })
            .collect();

        Grid { cells, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x < self.cols && pos.y < self.rows
    }

    pub fn is_interior(&self, pos: Position) -> bool {
        pos.x >= 1 && pos.y >= 1 && pos.x + 1 < self.cols && pos.y + 1 < self.rows
    }

    pub fn is_perimeter(&self, pos: Position) -> bool {
        self.in_bounds(pos) && !self.is_interior(pos)
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.y).and_then(|row| row.get(pos.x)).copied()
    }

    /// Write a cell. Perimeter cells only accept walls; returns whether the write happened.
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        if !self.in_bounds(pos) {
            return false;
        }
        if self.is_perimeter(pos) && cell != Cell::Wall {
            warn!("[Grid] Refused to overwrite perimeter wall at ({}, {}) with {:?}", pos.x, pos.y, cell);
            return false;
        }
        self.cells[pos.y][pos.x] = cell;
        true
    }

    pub fn is(&self, pos: Position, cell: Cell) -> bool {
        self.get(pos) == Some(cell)
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(Cell::is_walkable)
    }

    /// Cell next to `pos` in `direction`, if it is on the board.
    pub fn neighbour(&self, pos: Position, direction: Direction) -> Option<Position> {
        pos.step(direction).filter(|p| self.in_bounds(*p))
    }

    pub fn neighbours(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::ALL.into_iter().filter_map(move |d| self.neighbour(pos, d))
    }

    /// Trees stand on every other perimeter cell, corners excluded.
    pub fn is_tree(&self, pos: Position) -> bool {
        if !self.is_perimeter(pos) {
            return false;
        }
        let on_vertical_edge = pos.x == 0 || pos.x + 1 == self.cols;
        let on_horizontal_edge = pos.y == 0 || pos.y + 1 == self.rows;
        match (on_horizontal_edge, on_vertical_edge) {
            (true, true) => false,
            (true, false) => pos.x % 2 == 0,
            (false, true) => pos.y % 2 == 0,
            (false, false) => false,
        }
    }

    /// Perimeter wall side of `pos`; top/bottom win over left/right on corners.
    pub fn border_side(&self, pos: Position) -> Option<BorderSide> {
        if !self.is_perimeter(pos) || !self.is(pos, Cell::Wall) {
            return None;
        }
        if pos.y == 0 {
            Some(BorderSide::Top)
        } else if pos.y + 1 == self.rows {
            Some(BorderSide::Bottom)
        } else if pos.x == 0 {
            Some(BorderSide::Left)
        } else {
            Some(BorderSide::Right)
        }
    }

    /// Interior positions in row-major order.
    pub fn interior_positions(&self) -> impl Iterator<Item = Position> + '_ {
        (1..self.rows.saturating_sub(1))
            .flat_map(move |y| (1..self.cols.saturating_sub(1)).map(move |x| Position { x, y }))
    }

    pub fn positions_of(&self, cell: Cell) -> Vec<Position> {
        self.interior_positions().filter(|p| self.is(*p, cell)).collect()
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.interior_positions().filter(|p| self.is(*p, cell)).count()
    }

    /// Number of empty 4-neighbours of `pos` inside the interior.
    pub fn empty_neighbour_count(&self, pos: Position) -> usize {
        self.neighbours(pos)
            .filter(|p| self.is_interior(*p) && self.is(*p, Cell::Empty))
            .count()
    }

    /// Whether any interior row or column holds `min_len` or more contiguous hairballs.
    pub fn has_hairball_run(&self, min_len: usize) -> bool {
        let interior_rows = 1..self.rows.saturating_sub(1);
        let interior_cols = 1..self.cols.saturating_sub(1);

        let horizontal = interior_rows.clone().any(|y| {
            longest_run(interior_cols.clone().map(|x| self.cells[y][x])) >= min_len
        });
        horizontal
            || interior_cols.clone().any(|x| {
                longest_run(interior_rows.clone().map(|y| self.cells[y][x])) >= min_len
            })
    }

    /// Cell codes, row by row.
    pub fn codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }

    /// Rebuild a grid from exported codes. `None` on an unknown code or a ragged row.
    pub fn from_codes(codes: &[Vec<u8>]) -> Option<Self> {
        let rows = codes.len();
        let cols = codes.first().map_or(0, Vec::len);
        let cells = codes
            .iter()
            .map(|row| {
                if row.len() != cols {
                    return None;
                }
                row.iter().map(|&code| Cell::from_code(code)).collect::<Option<Vec<_>>>()
            })
            .collect::<Option<Vec<_>>>()?;
        Some(Grid { cells, rows, cols })
    }
}

fn longest_run(cells: impl Iterator<Item = Cell>) -> usize {
    let mut best = 0;
    let mut run = 0;
    for cell in cells {
        if cell == Cell::Hairball {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}
