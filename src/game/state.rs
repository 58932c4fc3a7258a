use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::game::{FLASH_FRAMES, GRID_COLS, GRID_ROWS, START_LIVES, STAGE_TIME_SECS};
use crate::game::events::{Flash, GameEvent};
use crate::game::grid::Grid;
use crate::game::stage::{StageLayout, generate_stage};
use crate::game::systems::{FrameSnapshot, move_player, push_action, run_frame, snapshot};
use crate::game::types::{Direction, Enemy, Input, Phase, Player, Position, WallShake};

/// Smallest board the generator can work with.
const MIN_DIMENSION: usize = 5;

/// The single game instance. Owned and mutated by whoever drives the frames.
#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: Grid,
    pub player: Player,
    pub player_start: Position,
    pub crows: Vec<Enemy>,
    pub dogs: Vec<Enemy>,
    pub score: u32,
    pub lives: u32,
    pub time: u32,
    pub stage: u32,
    pub phase: Phase,
    /// Milliseconds accumulated towards the next timer step.
    pub sec_accum: f64,
    pub frame: u64,
    pub flash: Option<Flash>,
    pub shake: Option<WallShake>,
    pub(crate) events: Vec<GameEvent>,
    pub(crate) rng: StdRng,
}

impl GameState {
    /// Create a game on a `rows` × `cols` board with stage 1 built, waiting for [`start`].
    /// A seed makes the whole game reproducible.
    ///
    /// [`start`]: GameState::start
    pub fn new(rows: usize, cols: usize, seed: Option<u64>) -> Self {
        let (rows, cols) = if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
            warn!("[Game] Board {}x{} too small, using {}x{} minimum", cols, rows, MIN_DIMENSION, MIN_DIMENSION);
            (rows.max(MIN_DIMENSION), cols.max(MIN_DIMENSION))
        } else {
            (rows, cols)
        };
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let layout = generate_stage(&mut rng, rows, cols, 1);
        GameState {
            grid: layout.grid,
            player: Player::new(layout.player_start),
            player_start: layout.player_start,
            crows: layout.crows,
            dogs: layout.dogs,
            score: 0,
            lives: START_LIVES,
            time: STAGE_TIME_SECS,
            stage: 1,
            phase: Phase::NotStarted,
            sec_accum: 0.0,
            frame: 0,
            flash: None,
            shake: None,
            events: Vec::new(),
            rng,
        }
    }

    /// Standard 12 × 16 board.
    pub fn standard(seed: Option<u64>) -> Self {
        Self::new(GRID_ROWS, GRID_COLS, seed)
    }

    /// Regenerate the board for the current stage number and reset the stage timer.
    pub fn build_stage(&mut self) {
        let layout = generate_stage(&mut self.rng, self.grid.rows(), self.grid.cols(), self.stage);
        self.apply_layout(layout);
    }

    fn apply_layout(&mut self, layout: StageLayout) {
        self.grid = layout.grid;
        self.player_start = layout.player_start;
        self.player.pos = layout.player_start;
        self.crows = layout.crows;
        self.dogs = layout.dogs;
        self.time = STAGE_TIME_SECS;
    }

    /// Leave the title screen: a fresh game starts running.
    pub fn start(&mut self) {
        self.restart();
        info!("[Game] Game started");
    }

    /// Reset score, lives, stage and timers and build stage 1.
    pub fn restart(&mut self) {
        self.score = 0;
        self.lives = START_LIVES;
        self.stage = 1;
        self.sec_accum = 0.0;
        self.player.claw_charge = 0;
        self.player.facing = Direction::Down;
        self.flash = None;
        self.shake = None;
        self.phase = Phase::Running;
        self.build_stage();
    }

    /// React to a directional or push input. Ignored unless the game is running.
    pub fn apply_input(&mut self, input: Input) {
        if self.phase != Phase::Running {
            return;
        }
        match input {
            Input::Move(direction) => {
                move_player(self, direction);
            }
            Input::Push => {
                push_action(self);
            }
        }
    }

    /// Advance one frame; `dt_ms` is the wall-clock time since the previous frame.
    pub fn step(&mut self, dt_ms: f64) {
        run_frame(self, dt_ms);
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    /// Show a message for the standard flash duration, replacing any current one.
    pub fn flash(&mut self, message: impl Into<String>, overlay: bool) {
        self.flash = Some(Flash {
            message: message.into(),
            frames_left: FLASH_FRAMES,
            overlay,
        });
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand the queued events to the caller.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        snapshot(self)
    }
}
