//! Core types and definitions for the VOIDSTRIKE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, tick input and commands, render snapshots, events, and
//! tuning constants. It has no dependency on the ECS or any host runtime.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
