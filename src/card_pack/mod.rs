//! Nyancard pack opener.
//!
//! Opening a pack reveals one cat card. Rarity is drawn by weight first, then a
//! card of that rarity uniformly.

pub mod cards;
pub mod pack;

pub use cards::*;
pub use pack::*;
