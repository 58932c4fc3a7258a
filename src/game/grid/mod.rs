//! Board model and corridor carving.

pub mod grid;
pub mod generator;

pub use grid::*;
pub use generator::*;
