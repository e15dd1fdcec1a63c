//! VOIDSTRIKE headless host.
//!
//! Drives the simulation on a game loop thread and exposes a small control
//! surface standing in for the rendering, audio and persistence layers.

pub mod autopilot;
pub mod game_loop;
pub mod host;
pub mod state;

pub use voidstrike_core as core;
