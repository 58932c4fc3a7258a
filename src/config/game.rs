/// Game configuration constants.
/// 
/// This module defines the main gameplay parameters such as grid dimensions,
/// actor cadences, scores and timers.

/// Number of columns in the game grid.
pub const GRID_COLS: usize = 12;

/// Number of rows in the game grid.
pub const GRID_ROWS: usize = 16;

/// Lives at the start of a game.
pub const START_LIVES: u32 = 3;

/// Time limit of a stage, in seconds.
pub const STAGE_TIME_SECS: u32 = 60;

/// Length of one countdown step of the stage timer (ms).
pub const TIMER_STEP_MS: f64 = 1000.0;

/// Upper bound for a single frame delta (ms). Long pauses do not fast-forward the timer.
pub const MAX_FRAME_MS: f64 = 33.0;

/// A crow acts once every this many unstunned frames.
pub const CROW_MOVE_INTERVAL: u32 = 12;

/// A dog acts once every this many unstunned frames. Must stay above the crow interval.
pub const DOG_MOVE_INTERVAL: u32 = 18;

/// Hit points of a freshly spawned dog.
pub const DOG_HP: u32 = 2;

/// Direction retries of an actor blocked on its turn.
pub const MOVE_RETRIES: u32 = 4;

/// Chance that a crow blocked by a hairball shoves it one cell.
pub const CROW_PUSH_CHANCE: f64 = 0.10;

/// Base score per crow crushed by a hairball.
pub const CROW_SCORE: u32 = 100;

/// Score per dog crushed by a hairball or clawed.
pub const DOG_SCORE: u32 = 200;

/// Score of a churu pickup.
pub const CHURU_SCORE: u32 = 500;

/// Bonus for clearing a stage.
pub const STAGE_CLEAR_BONUS: u32 = 500;

/// Maximum number of churu items on the board at once.
pub const MAX_CHURU: usize = 3;

/// Claw charges are capped at one.
pub const MAX_CLAW_CHARGE: u32 = 1;

/// Chance that crumbling sand drops a claw sharpener.
pub const CLAW_DROP_CHANCE: f64 = 0.18;

/// Radius (Euclidean, in cells) of the stun caused by rattling a tree.
pub const TREE_STUN_RADIUS: i64 = 2;

/// Stun length caused by rattling a tree (frames, about one second).
pub const TREE_STUN_FRAMES: u32 = 60;

/// Frames a flash message stays on screen.
pub const FLASH_FRAMES: u32 = 60;

/// Frames a rattled border wall keeps shaking.
pub const SHAKE_FRAMES: u32 = 18;
