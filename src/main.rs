//! Main entry point for the terminal demo.
//!
//! Initializes logging, reads an optional RNG seed from the environment and runs
//! the interactive game loop until the player quits.

use log::warn;

use nyango::config::demo::SEED_ENV_VAR;
use nyango::game::demo::game_loop::run_game_loop;

/// Seed from the environment, if set and numeric.
fn read_seed() -> Option<u64> {
    let raw = std::env::var(SEED_ENV_VAR).ok()?;
    match raw.trim().parse() {
        Ok(seed) => Some(seed),
        Err(_) => {
            warn!("[Config] Ignoring {}={:?}: not an unsigned integer", SEED_ENV_VAR, raw);
            None
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    run_game_loop(read_seed()).await
}
