//! Frame snapshot for the presentation layer.
//!
//! The core never draws; each frame the renderer reads a [`FrameSnapshot`],
//! either directly or as JSON.

use serde::{Serialize, Deserialize};

use crate::game::events::Flash;
use crate::game::grid::Grid;
use crate::game::state::GameState;
use crate::game::types::{Direction, Enemy, Phase, Position, WallShake};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorView {
    pub pos: Position,
    pub dir: Direction,
    pub stunned: bool,
    /// Remaining hit points, dogs only.
    pub hp: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u32,
    pub lives: u32,
    pub time: u32,
    pub stage: u32,
    pub claw_charge: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Frames stepped since the game was created.
    pub frame: u64,
    pub phase: Phase,
    /// Cell codes, row by row (0 empty, 1 wall, 2 hairball, 3 sand, 4 claw, 5 churu).
    pub grid: Vec<Vec<u8>>,
    pub player: Position,
    pub facing: Direction,
    pub crows: Vec<ActorView>,
    pub dogs: Vec<ActorView>,
    pub hud: Hud,
    pub flash: Option<Flash>,
    pub shake: Option<WallShake>,
}

impl FrameSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Decode the cell codes back into a board.
    pub fn board(&self) -> Option<Grid> {
        Grid::from_codes(&self.grid)
    }

    /// Whether `self` looks any different from `previous` once the frame counter is ignored.
    pub fn differs_from(&self, previous: &FrameSnapshot) -> bool {
        *previous != FrameSnapshot { frame: previous.frame, ..self.clone() }
    }
}

fn actor_view(enemy: &Enemy) -> ActorView {
    ActorView {
        pos: enemy.pos,
        dir: enemy.dir,
        stunned: enemy.is_stunned(),
        hp: enemy.hp(),
    }
}

pub fn snapshot(game_state: &GameState) -> FrameSnapshot {
    FrameSnapshot {
        frame: game_state.frame,
        phase: game_state.phase,
        grid: game_state.grid.codes(),
        player: game_state.player.pos,
        facing: game_state.player.facing,
        crows: game_state.crows.iter().map(actor_view).collect(),
        dogs: game_state.dogs.iter().map(actor_view).collect(),
        hud: Hud {
            score: game_state.score,
            lives: game_state.lives,
            time: game_state.time,
            stage: game_state.stage,
            claw_charge: game_state.player.claw_charge,
        },
        flash: game_state.flash.clone(),
        shake: game_state.shake,
    }
}
