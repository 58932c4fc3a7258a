//! Game rendering system (terminal).
//!
//! This module renders the board, the HUD and the flash message as text.

use crate::game::state::GameState;
use crate::game::types::{Cell, Phase, Position};

/// Symbol of a board cell, ignoring actors.
fn cell_symbol(game_state: &GameState, pos: Position, cell: Cell) -> String {
    match cell {
        Cell::Wall if game_state.grid.is_tree(pos) => "TT".to_string(),
        Cell::Wall => "██".to_string(),
        Cell::Empty => "  ".to_string(),
        Cell::Hairball => "()".to_string(),
        Cell::Sand => "::".to_string(),
        Cell::ClawItem => "/\\".to_string(),
        Cell::Churu => "$$".to_string(),
    }
}

/// Render the grid with the player, dogs and crows on top, in that priority.
pub fn render_board(game_state: &GameState) -> String {
    let mut out = String::new();
    for y in 0..game_state.grid.rows() {
        for x in 0..game_state.grid.cols() {
            let pos = Position { x, y };
            let Some(cell) = game_state.grid.get(pos) else { continue };

            let symbol = if game_state.player.pos == pos {
                "Ca".to_string()
            } else if let Some(dog) = game_state.dogs.iter().find(|d| d.pos == pos) {
                format!("D{}", dog.hp().unwrap_or(0))
            } else if let Some(crow) = game_state.crows.iter().find(|c| c.pos == pos) {
                if crow.is_stunned() { "cr".to_string() } else { "Cr".to_string() }
            } else {
                cell_symbol(game_state, pos, cell)
            };

            out.push_str(&format!("{:<3}", symbol));
        }
        out.push('\n');
    }
    out
}

/// HUD line plus the current flash message and phase hints.
pub fn render_hud(game_state: &GameState) -> String {
    let mut out = format!(
        "SCORE: {}  LIVES: {}  TIME: {}  STAGE: {}  CLAW: {}\n",
        game_state.score,
        "♥".repeat(game_state.lives as usize),
        game_state.time,
        game_state.stage,
        if game_state.player.claw_charge > 0 { "ready" } else { "-" },
    );
    if let Some(flash) = &game_state.flash {
        out.push_str(&format!(">> {}\n", flash.message));
    }
    match game_state.phase {
        Phase::NotStarted => out.push_str("Press r + Enter to start.\n"),
        Phase::Over => out.push_str("GAME OVER. Press r + Enter to play again.\n"),
        Phase::Running => {}
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_has_one_line_per_row() {
        let game_state = GameState::standard(Some(12));
        let board = render_board(&game_state);

        assert_eq!(board.lines().count(), game_state.grid.rows());
        assert_eq!(board.matches("Ca").count(), 1);
        assert!(board.contains("TT"));
    }

    #[test]
    fn test_hud_shows_start_hint_before_start() {
        let mut game_state = GameState::standard(Some(12));
        assert!(render_hud(&game_state).contains("to start"));

        game_state.start();
        let hud = render_hud(&game_state);
        assert!(hud.contains("LIVES: ♥♥♥"));
        assert!(!hud.contains("to start"));
    }
}
