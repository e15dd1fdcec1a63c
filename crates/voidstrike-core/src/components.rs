//! ECS components for hecs entities, plus the singleton player record.
//!
//! Components are plain data structs. Game logic lives in systems.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;
use crate::types::Rect;

/// Spatial extent and scalar speed shared by every moving entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner.
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per tick. Signed for bosses (horizontal direction).
    pub speed: f32,
}

/// A projectile. Player bullets fly up, enemy bullets down or outward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    /// Direction of travel in radians. For player bullets 0 is straight up;
    /// for enemy bullets it is a screen-space angle (π/2 straight down).
    pub angle: f32,
    pub damage: i32,
    pub is_enemy: bool,
    pub alive: bool,
}

/// A regular enemy or a boss.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub health: i32,
    pub max_health: i32,
    pub score_value: u64,
    pub is_boss: bool,
    /// Time of the last attack (ranged enemies and bosses only).
    pub attack_timer: u64,
    pub color: u32,
    pub alive: bool,
}

/// Boss-only data attached alongside `Enemy`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub name: String,
    pub spawned_at: u64,
}

/// A falling power-up capsule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub alive: bool,
}

/// A cosmetic particle. Never affects gameplay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Starts at 1, removed at <= 0.
    pub life: f32,
    pub max_life: f32,
    pub color: u32,
    pub size: f32,
}

/// The player's ship. Exactly one per run, owned by the world state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub health: u32,
    pub max_health: u32,
    pub shield_active: bool,
    pub invincible: bool,
    /// Time of the last damaging hit.
    pub invincible_timer: u64,
    pub active_power_up: Option<PowerUpKind>,
    /// Time the active power-up was acquired.
    pub power_up_timer: u64,
    /// Time of the last shot, `None` before the first.
    pub last_shot_at: Option<u64>,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self { pos, size, speed }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

impl Player {
    /// A fresh ship centered horizontally near the bottom edge.
    pub fn new(field_width: f32, field_height: f32, max_health: u32) -> Self {
        let pos = Vec2::new(
            (field_width - PLAYER_WIDTH) / 2.0,
            field_height - PLAYER_SPAWN_MARGIN,
        );
        Self {
            body: Body::new(pos, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT), PLAYER_SPEED),
            health: max_health,
            max_health,
            shield_active: false,
            invincible: false,
            invincible_timer: 0,
            active_power_up: None,
            power_up_timer: 0,
            last_shot_at: None,
        }
    }
}
