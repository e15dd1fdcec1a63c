//! World state: the single mutable aggregate for one run.
//!
//! Enemies, bosses, bullets and power-ups are hecs entities. The player,
//! progression counters, director phase and effects are plain fields so
//! systems can borrow them alongside the ECS world.

use std::collections::BTreeSet;

use hecs::{Entity, World};

use voidstrike_core::components::{Enemy, Player};
use voidstrike_core::enums::Achievement;
use voidstrike_core::types::Field;
use voidstrike_enemy_ai::director::DirectorPhase;

use crate::engine::SimConfig;
use crate::systems::effects::Effects;

/// Score, level and per-run achievement bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub score: u64,
    pub level: u32,
    /// Last even level that granted a heal.
    pub last_healed_level: u32,
    /// Achievements already announced this run.
    pub unlocked: BTreeSet<Achievement>,
    pub power_ups_collected: u32,
    /// Whether the player was hit since the current boss encounter spawned.
    pub hit_during_encounter: bool,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            score: 0,
            level: 1,
            last_healed_level: 1,
            unlocked: BTreeSet::new(),
            power_ups_collected: 0,
            hit_during_encounter: false,
        }
    }
}

pub struct WorldState {
    pub field: Field,
    pub world: World,
    pub player: Player,
    pub progress: Progress,
    pub director: DirectorPhase,
    /// Boss name while the warning banner is up.
    pub boss_warning: Option<String>,
    /// Time of the last regular enemy spawn.
    pub last_enemy_spawn: u64,
    pub effects: Effects,
    pub(crate) despawn_buffer: Vec<Entity>,
}

impl WorldState {
    /// Fresh run state: score 0, level 1, full health, no entities.
    pub fn new(config: &SimConfig, now_ms: u64) -> Self {
        let field = config.field();
        Self {
            field,
            world: World::new(),
            player: Player::new(field.width, field.height, config.max_health),
            progress: Progress::default(),
            director: DirectorPhase::Idle,
            boss_warning: None,
            last_enemy_spawn: now_ms,
            effects: Effects::new(config.seed),
            despawn_buffer: Vec::new(),
        }
    }

    /// Drop every enemy, boss, bullet and power-up and cancel any boss
    /// encounter in flight.
    pub fn clear_transients(&mut self) {
        self.world.clear();
        self.despawn_buffer.clear();
        self.director = DirectorPhase::Idle;
        self.boss_warning = None;
    }

    /// Number of bosses in the world, including ones killed this tick but
    /// not yet swept.
    pub fn boss_count(&self) -> usize {
        self.world
            .query::<&Enemy>()
            .iter()
            .filter(|(_, enemy)| enemy.is_boss)
            .count()
    }

    pub fn regular_enemy_count(&self) -> usize {
        self.world
            .query::<&Enemy>()
            .iter()
            .filter(|(_, enemy)| !enemy.is_boss)
            .count()
    }

    pub fn bullet_count(&self, enemy: bool) -> usize {
        self.world
            .query::<&voidstrike_core::components::Bullet>()
            .iter()
            .filter(|(_, bullet)| bullet.is_enemy == enemy)
            .count()
    }
}
