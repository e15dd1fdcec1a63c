//! Simulation core for VOIDSTRIKE.
//!
//! Owns the world state and its hecs ECS world, runs every system in a
//! fixed order each tick, and produces render snapshots for the host.

pub mod engine;
pub mod systems;
pub mod world;
pub mod world_setup;

pub use engine::{tick, SimConfig, SimulationEngine};
pub use voidstrike_core as core;
pub use world::WorldState;
