//! Game events and the on-screen flash message.
//!
//! Events are queued on the state during a frame and drained by the
//! presentation layer; they never feed back into the simulation.

use serde::{Serialize, Deserialize};

use crate::game::types::{BorderSide, Cell, Position};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    HairballPushed { from: Position, to: Position },
    CrowsDefeated { count: u32, score: u32 },
    DogsDefeated { count: u32, score: u32 },
    ClawAttack { count: u32, score: u32 },
    ChuruSpawned { pos: Position },
    ItemPicked { item: Cell, pos: Position },
    SandCrumbled { pos: Position, dropped_claw: bool },
    WallRattled { side: BorderSide, pos: Position },
    TreeStun { pos: Position, stunned: usize },
    PlayerHit { lives_left: u32 },
    StageCleared { stage: u32 },
    TimeUp,
    GameOver { score: u32 },
}

/// Short notification shown for a fixed number of frames. `overlay` messages
/// are drawn over the board, the others only in the HUD line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub message: String,
    pub frames_left: u32,
    pub overlay: bool,
}
