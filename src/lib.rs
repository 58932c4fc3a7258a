//! Nyango core crate.
//!
//! `game` holds the grid puzzle-action game (stage generation, enemy AI, hairball
//! physics, frame loop); `card_pack` holds the Nyancard pack opener. Neither
//! draws anything: presentation layers read snapshots and events.

pub mod config;
pub mod game;
pub mod card_pack;
