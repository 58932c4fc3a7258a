use serde::{Serialize, Deserialize};
use rand::Rng;

use crate::config::game::DOG_HP;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Neighbouring position in `direction`, or `None` when it would leave the
    /// non-negative quadrant.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.delta();
        Some(Position {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    pub fn manhattan(self, other: Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    pub fn distance_squared(self, other: Position) -> i64 {
        let dx = self.x as i64 - other.x as i64;
        let dy = self.y as i64 - other.y as i64;
        dx * dx + dy * dy
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Right, Direction::Left, Direction::Down, Direction::Up];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Direction {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Content of a grid cell. The numeric codes are what the presentation layer
/// receives in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Wall,
    Hairball,
    Sand,
    ClawItem,
    Churu,
}

impl Cell {
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Wall => 1,
            Cell::Hairball => 2,
            Cell::Sand => 3,
            Cell::ClawItem => 4,
            Cell::Churu => 5,
        }
    }

    pub fn from_code(code: u8) -> Option<Cell> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Wall),
            2 => Some(Cell::Hairball),
            3 => Some(Cell::Sand),
            4 => Some(Cell::ClawItem),
            5 => Some(Cell::Churu),
            _ => None,
        }
    }

    /// Actors may stand on empty cells and on items.
    pub fn is_walkable(self) -> bool {
        matches!(self, Cell::Empty | Cell::ClawItem | Cell::Churu)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Position,
    pub facing: Direction,
    pub claw_charge: u32,
}

impl Player {
    pub fn new(pos: Position) -> Self {
        Self {
            pos,
            facing: Direction::Down,
            claw_charge: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Crow,
    Dog { hp: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Position,
    pub dir: Direction,
    pub move_tick: u32,
    pub stun: u32,
    /// Set while a hairball slide passes over this enemy.
    pub hit: bool,
}

impl Enemy {
    pub fn crow(pos: Position, dir: Direction) -> Self {
        Self::with_kind(EnemyKind::Crow, pos, dir)
    }

    pub fn dog(pos: Position, dir: Direction) -> Self {
        Self::with_kind(EnemyKind::Dog { hp: DOG_HP }, pos, dir)
    }

    fn with_kind(kind: EnemyKind, pos: Position, dir: Direction) -> Self {
        Self {
            kind,
            pos,
            dir,
            move_tick: 0,
            stun: 0,
            hit: false,
        }
    }

    pub fn is_stunned(&self) -> bool {
        self.stun > 0
    }

    pub fn hp(&self) -> Option<u32> {
        match self.kind {
            EnemyKind::Crow => None,
            EnemyKind::Dog { hp } => Some(hp),
        }
    }
}

/// Top-level phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    Running,
    Over,
}

/// Discrete input the state machine reacts to, besides the frame tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    Move(Direction),
    Push,
}

/// Side of the board a rattled border wall belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderSide {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallShake {
    pub side: BorderSide,
    pub origin: Position,
    pub frames_left: u32,
}
