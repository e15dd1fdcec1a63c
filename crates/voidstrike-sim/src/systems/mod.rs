//! Per-tick systems that operate on the world state.
//!
//! Systems are free functions over borrowed state. They do not own state;
//! everything lives in `WorldState` and its hecs world.

pub mod boss_ai;
pub mod boss_director;
pub mod cleanup;
pub mod collision;
pub mod effects;
pub mod enemy_ai;
pub mod movement;
pub mod player;
pub mod powerups;
pub mod progression;
pub mod snapshot;
pub mod spawner;
pub mod timers;
pub mod weapons;
