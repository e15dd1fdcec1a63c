//! Render snapshot: the immutable view of the world handed to the host
//! between ticks. Rendering, audio and persistence read it and never
//! write back.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Rect, SimTime};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub encounter: EncounterPhase,
    /// Boss name while the warning banner is up.
    pub boss_warning: Option<String>,
    pub score: u64,
    pub level: u32,
    pub player: PlayerView,
    /// Regular enemies and bosses, sorted by id.
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    pub power_ups: Vec<PowerUpView>,
    pub particles: Vec<ParticleView>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub bounds: Rect,
    pub health: u32,
    pub max_health: u32,
    pub shield_active: bool,
    pub invincible: bool,
    pub active_power_up: Option<PowerUpKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u64,
    pub kind: EnemyKind,
    pub bounds: Rect,
    pub health: i32,
    pub max_health: i32,
    pub is_boss: bool,
    /// Boss display name.
    pub name: Option<String>,
    pub color: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletView {
    pub id: u64,
    pub bounds: Rect,
    pub angle: f32,
    pub is_enemy: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUpView {
    pub id: u64,
    pub kind: PowerUpKind,
    pub bounds: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleView {
    pub x: f32,
    pub y: f32,
    /// Remaining life in [0, 1], for alpha.
    pub life: f32,
    pub color: u32,
    pub size: f32,
}
