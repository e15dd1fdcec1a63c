//! Enemy and boss tuning tables.
//!
//! Consolidates per-type parameters for spawning and AI.

use voidstrike_core::constants::*;
use voidstrike_core::enums::EnemyKind;

/// Static parameters for a regular enemy type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    /// Health at level 0; the level bonus is added on spawn.
    pub base_health: i32,
    pub score_value: u64,
    /// Base descent speed (pixels per tick).
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    pub color: u32,
}

/// Static parameters for a boss tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossProfile {
    /// Level that triggers this encounter.
    pub level: u32,
    pub name: &'static str,
    /// Bosses spawned side by side.
    pub count: u32,
    /// Reinforced HEAVY enemies spawned with the bosses.
    pub escorts: u32,
    pub health: i32,
    pub score_value: u64,
    /// Horizontal patrol speed (pixels per tick).
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    pub color: u32,
}

/// Get the profile for a regular enemy type.
pub fn get_profile(kind: EnemyKind) -> EnemyProfile {
    match kind {
        EnemyKind::Basic => EnemyProfile {
            base_health: 1,
            score_value: 100,
            speed: 2.0,
            width: 40.0,
            height: 40.0,
            color: 0xff4444,
        },
        EnemyKind::Fast => EnemyProfile {
            base_health: 1,
            score_value: 150,
            speed: 4.0,
            width: 30.0,
            height: 30.0,
            color: 0xffaa00,
        },
        EnemyKind::Heavy => EnemyProfile {
            base_health: 3,
            score_value: 300,
            speed: 1.0,
            width: 60.0,
            height: 60.0,
            color: 0x8844ff,
        },
        EnemyKind::Ranged => EnemyProfile {
            base_health: 2,
            score_value: 200,
            speed: 1.5,
            width: 40.0,
            height: 40.0,
            color: 0x44ddff,
        },
    }
}

/// Boss tiers in ascending trigger level.
pub const BOSS_TIERS: [BossProfile; 5] = [
    BossProfile {
        level: 5,
        name: "Iron Warden",
        count: 1,
        escorts: 0,
        health: 50,
        score_value: 1000,
        speed: 2.0,
        width: 120.0,
        height: 80.0,
        color: 0xcc3333,
    },
    BossProfile {
        level: 10,
        name: "Hive Matriarch",
        count: 1,
        escorts: 0,
        health: 100,
        score_value: 2000,
        speed: 2.5,
        width: 140.0,
        height: 90.0,
        color: 0x33cc66,
    },
    BossProfile {
        level: 20,
        name: "Twin Reapers",
        count: 2,
        escorts: 2,
        health: 120,
        score_value: 2500,
        speed: 3.0,
        width: 110.0,
        height: 80.0,
        color: 0x9933cc,
    },
    BossProfile {
        level: 30,
        name: "Triad Sentinels",
        count: 3,
        escorts: 3,
        health: 150,
        score_value: 3000,
        speed: 3.0,
        width: 100.0,
        height: 80.0,
        color: 0xcccc33,
    },
    BossProfile {
        level: 50,
        name: "Void Sovereign",
        count: 1,
        escorts: 5,
        health: 500,
        score_value: 10_000,
        speed: 3.5,
        width: 180.0,
        height: 110.0,
        color: 0xff00ff,
    },
];

/// Whether reaching `level` opens a boss encounter.
pub fn is_boss_level(level: u32) -> bool {
    BOSS_LEVELS.contains(&level)
}

/// Boss tier for a level. Levels without a tier of their own fall back to
/// the highest tier.
pub fn boss_for_level(level: u32) -> &'static BossProfile {
    BOSS_TIERS
        .iter()
        .find(|tier| tier.level == level)
        .unwrap_or(&BOSS_TIERS[BOSS_TIERS.len() - 1])
}

/// Spawn health for a regular enemy: base + floor(level / 2).
pub fn enemy_health(kind: EnemyKind, level: u32) -> i32 {
    get_profile(kind).base_health + (level / 2) as i32
}

/// Descent speed including the per-level bonus.
pub fn enemy_speed(base_speed: f32, level: u32) -> f32 {
    base_speed + level as f32 * ENEMY_SPEED_PER_LEVEL
}

/// Pick a type from a uniform draw `r` in [0, 1).
///
/// Gates are evaluated in a fixed order and the last one that passes wins.
pub fn choose_enemy_kind(level: u32, r: f32) -> EnemyKind {
    let mut kind = EnemyKind::Basic;
    for (gate, candidate) in [
        (FAST_SPAWN_GATE, EnemyKind::Fast),
        (RANGED_SPAWN_GATE, EnemyKind::Ranged),
        (HEAVY_SPAWN_GATE, EnemyKind::Heavy),
    ] {
        let (min_level, threshold) = gate;
        if level >= min_level && r > threshold {
            kind = candidate;
        }
    }
    kind
}

/// Milliseconds between regular spawns.
pub fn spawn_interval_ms(level: u32) -> u64 {
    SPAWN_INTERVAL_BASE_MS
        .saturating_sub(level as u64 * SPAWN_INTERVAL_PER_LEVEL_MS)
        .max(SPAWN_INTERVAL_MIN_MS)
}

/// Milliseconds between boss attacks.
pub fn boss_attack_interval_ms(level: u32) -> u64 {
    if level >= BOSS_FAST_ATTACK_LEVEL {
        BOSS_ATTACK_INTERVAL_FAST_MS
    } else {
        BOSS_ATTACK_INTERVAL_MS
    }
}
