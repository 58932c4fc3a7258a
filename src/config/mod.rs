/// Main configuration module.
/// 
/// Re-exports submodules for game, stage generation, card pack and demo configuration.
pub mod game;
pub mod stage;
pub mod card_pack;
pub mod demo;
