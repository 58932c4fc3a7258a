//! Game entities module.
//!
//! This module organizes player, enemy, hairball and item entity logic.

pub mod player;
pub mod enemy;
pub mod hairball;
pub mod item;

pub use player::*;
pub use enemy::*;
pub use hairball::*;
pub use item::*;
