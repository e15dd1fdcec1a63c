//! Host inputs: per-tick control state and run-level commands.
//!
//! Commands are queued and processed at the next tick boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Control state sampled by the host once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    /// Absolute pointer/touch target. Overrides the direction keys and
    /// counts as holding fire while present.
    pub pointer: Option<Vec2>,
}

impl TickInput {
    pub fn firing(&self) -> bool {
        self.fire || self.pointer.is_some()
    }
}

/// Run-level actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Reset the world and begin a new run.
    StartRun,
    Pause,
    Resume,
    /// Abandon the run and return to the start screen.
    ReturnToStart,
}
