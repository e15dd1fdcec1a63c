//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box in play-field space (top-left anchored, y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Play field dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

/// Logical simulation clock.
///
/// Advances by a fixed step regardless of host frame timing, so every
/// elapsed-time threshold evaluates identically across machines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Logical milliseconds elapsed since the engine was created.
    pub now_ms: u64,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict AABB overlap: touching edges do not count as a hit.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True once a box has left the visible field on any side.
    pub fn is_outside(&self, rect: &Rect) -> bool {
        rect.y + rect.height < 0.0
            || rect.y > self.height
            || rect.x + rect.width < 0.0
            || rect.x > self.width
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(
            crate::constants::FIELD_WIDTH,
            crate::constants::FIELD_HEIGHT,
        )
    }
}

impl SimTime {
    /// Advance by one fixed logical step.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.now_ms += crate::constants::TICK_MS;
    }
}

/// Screen-space angle from `from` toward `to` (0 = +x, π/2 = straight down).
pub fn angle_between(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}
