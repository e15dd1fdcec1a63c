//! Enemy AI for VOIDSTRIKE.
//!
//! Per-type enemy and boss tuning tables, boss attack-pattern generation,
//! and the boss director state machine. Everything here operates on plain
//! data and has no ECS dependency.

pub mod director;
pub mod patterns;
pub mod profiles;

pub use voidstrike_core as core;

#[cfg(test)]
mod tests;
