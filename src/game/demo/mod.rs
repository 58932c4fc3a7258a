// Demo module for the game. Provides a terminal front end: a tokio-driven
// game loop and ASCII rendering of the board and HUD.
pub mod game_loop;
pub mod render;
