pub mod ai;
pub mod interaction;
pub mod movement;
pub mod push;
pub mod rules;
pub mod render;

pub use ai::*;
pub use interaction::*;
pub use movement::*;
pub use push::*;
pub use rules::*;
pub use render::*;
