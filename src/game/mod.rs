//! Nyango game core.
//!
//! A single [`GameState`] owns the board, the player and the enemies. Drivers
//! call [`GameState::step`] once per frame and [`GameState::apply_input`] on
//! player input, then read [`GameState::snapshot`] and drain the events.

pub mod types;
pub mod events;
pub mod state;
pub mod stage;

pub mod entities;
pub mod grid;
pub mod systems;
pub mod demo;


pub use events::{Flash, GameEvent};
pub use state::GameState;
pub use systems::FrameSnapshot;
pub use types::{Cell, Direction, Input, Phase, Position};
