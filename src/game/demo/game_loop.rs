//! Standalone game loop for local play in a terminal.
//!
//! Frames run on a fixed tokio interval. Typed lines are read from stdin on a
//! detached thread and forwarded as commands; queued moves are consumed at the
//! keyboard poll interval, like held keys in the browser build.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::thread;
use std::time::Duration;

use log::debug;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior, interval};

use crate::config::demo::{FRAME_INTERVAL_MS, KEY_POLL_INTERVAL_MS};
use crate::game::demo::render::{render_board, render_hud};
use crate::game::state::GameState;
use crate::game::systems::FrameSnapshot;
use crate::game::types::{Direction, Input, Phase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Push,
    Start,
    Dump,
    Quit,
}

/// Map a typed line to commands, one per recognised character.
/// w/a/s/d move, space or p pushes, r starts, j dumps the snapshot as JSON, q quits.
pub fn parse_commands(line: &str) -> Vec<Command> {
    line.chars()
        .filter_map(|c| match c.to_ascii_lowercase() {
            'w' => Some(Command::Move(Direction::Up)),
            'a' => Some(Command::Move(Direction::Left)),
            's' => Some(Command::Move(Direction::Down)),
            'd' => Some(Command::Move(Direction::Right)),
            ' ' | 'p' => Some(Command::Push),
            'r' => Some(Command::Start),
            'j' => Some(Command::Dump),
            'q' => Some(Command::Quit),
            _ => None,
        })
        .collect()
}

/// Blocking stdin reads live on their own thread so quitting never waits on them.
fn spawn_stdin_reader(tx: mpsc::UnboundedSender<Command>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            for command in parse_commands(&line) {
                if tx.send(command).is_err() {
                    return;
                }
            }
        }
    });
}

/// The screen is redrawn whenever anything visible changed since the last draw,
/// enemy steps and flash countdowns included.
pub fn needs_redraw(last_drawn: Option<&FrameSnapshot>, current: &FrameSnapshot) -> bool {
    last_drawn.is_none_or(|last| current.differs_from(last))
}

fn draw(game_state: &GameState) {
    print!("\x1b[2J\x1b[H{}{}", render_board(game_state), render_hud(game_state));
}

/// Run the interactive loop until `q` or end of input.
pub async fn run_game_loop(seed: Option<u64>) -> io::Result<()> {
    let mut game_state = GameState::standard(seed);

    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_stdin_reader(tx);

    let mut frames = interval(Duration::from_millis(FRAME_INTERVAL_MS));
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut key_poll = interval(Duration::from_millis(KEY_POLL_INTERVAL_MS));
    key_poll.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut pending_moves: VecDeque<Direction> = VecDeque::new();
    let mut last_frame = Instant::now();
    let mut last_drawn: Option<FrameSnapshot> = None;

    loop {
        tokio::select! {
            _ = frames.tick() => {
                let now = Instant::now();
                let dt_ms = now.duration_since(last_frame).as_secs_f64() * 1000.0;
                last_frame = now;

                game_state.step(dt_ms);
                for event in game_state.drain_events() {
                    debug!("[Demo] {:?}", event);
                }
                let current = game_state.snapshot();
                if needs_redraw(last_drawn.as_ref(), &current) {
                    draw(&game_state);
                    last_drawn = Some(current);
                }
            }
            _ = key_poll.tick() => {
                if let Some(direction) = pending_moves.pop_front() {
                    game_state.apply_input(Input::Move(direction));
                }
            }
            command = rx.recv() => {
                match command {
                    Some(Command::Move(direction)) => pending_moves.push_back(direction),
                    Some(Command::Push) => game_state.apply_input(Input::Push),
                    Some(Command::Start) => {
                        match game_state.phase {
                            Phase::NotStarted => game_state.start(),
                            _ => game_state.restart(),
                        }
                        pending_moves.clear();
                    }
                    Some(Command::Dump) => {
                        let json = game_state.snapshot().to_json().map_err(io::Error::other)?;
                        println!("{json}");
                    }
                    Some(Command::Quit) | None => break,
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::Grid;
    use crate::game::types::{Cell, Enemy, Position};

    #[test]
    fn test_parse_commands_maps_keys() {
        assert_eq!(
            parse_commands("wAsd"),
            vec![
                Command::Move(Direction::Up),
                Command::Move(Direction::Left),
                Command::Move(Direction::Down),
                Command::Move(Direction::Right),
            ]
        );
        assert_eq!(parse_commands(" p"), vec![Command::Push, Command::Push]);
        assert_eq!(parse_commands("rxjq"), vec![Command::Start, Command::Dump, Command::Quit]);
        assert!(parse_commands("123").is_empty());
    }

    #[test]
    fn test_enemy_steps_trigger_redraw_without_events() {
        let mut game_state = GameState::standard(Some(3));
        game_state.start();
        game_state.grid = Grid::new(game_state.grid.rows(), game_state.grid.cols(), Cell::Empty);
        game_state.crows = vec![Enemy::crow(Position::new(5, 5), Direction::Right)];
        game_state.dogs.clear();
        let mut last_drawn = game_state.snapshot();
        assert!(needs_redraw(None, &last_drawn));

        let mut redraws = 0;
        for _ in 0..60 {
            game_state.step(16.0);
            game_state.flash = None;
            let current = game_state.snapshot();
            if needs_redraw(Some(&last_drawn), &current) {
                redraws += 1;
                last_drawn = current;
            }
        }

        assert_eq!(game_state.time, 60);
        assert_eq!(game_state.crows[0].pos, Position::new(10, 5));
        assert_eq!(redraws, 5);
    }

    #[test]
    fn test_idle_frames_do_not_redraw() {
        let mut game_state = GameState::standard(Some(3));
        let last_drawn = game_state.snapshot();

        game_state.step(16.0);
        let current = game_state.snapshot();

        assert_ne!(current.frame, last_drawn.frame);
        assert!(!needs_redraw(Some(&last_drawn), &current));
    }
}
