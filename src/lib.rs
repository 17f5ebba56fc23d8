pub mod config;
pub mod core;
pub mod fsm;
pub mod input;
pub mod physics;
pub mod player;
pub mod scene;

#[cfg(test)]
pub(crate) mod testing;
