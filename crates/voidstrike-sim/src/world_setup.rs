//! Entity spawn factories.
//!
//! Creates enemies, boss encounters, bullets and power-ups with the
//! appropriate component bundles.

use glam::Vec2;
use hecs::{Entity, World};

use voidstrike_core::components::*;
use voidstrike_core::constants::*;
use voidstrike_core::enums::{EnemyKind, PowerUpKind};
use voidstrike_core::types::Field;

use voidstrike_enemy_ai::patterns::BulletSpawn;
use voidstrike_enemy_ai::profiles::{enemy_health, get_profile, BossProfile};

/// Spawn a regular enemy just above the top edge at `x`.
pub fn spawn_enemy(world: &mut World, kind: EnemyKind, level: u32, x: f32, now_ms: u64) -> Entity {
    let profile = get_profile(kind);
    let health = enemy_health(kind, level);
    let size = Vec2::new(profile.width, profile.height);

    world.spawn((
        Body::new(Vec2::new(x, -profile.height), size, profile.speed),
        Enemy {
            kind,
            health,
            max_health: health,
            score_value: profile.score_value,
            is_boss: false,
            attack_timer: now_ms,
            color: profile.color,
            alive: true,
        },
    ))
}

/// Spawn a boss tier's bosses spread across the field width with
/// alternating direction, plus its escorts one row above them.
pub fn spawn_encounter(
    world: &mut World,
    tier: &BossProfile,
    level: u32,
    field: &Field,
    now_ms: u64,
) -> Vec<Entity> {
    let mut spawned = Vec::with_capacity((tier.count + tier.escorts) as usize);

    for i in 0..tier.count {
        let x = spread_x(field.width, i, tier.count, tier.width);
        let speed = if i % 2 == 0 { tier.speed } else { -tier.speed };
        spawned.push(world.spawn((
            Body::new(
                Vec2::new(x, -tier.height),
                Vec2::new(tier.width, tier.height),
                speed,
            ),
            Enemy {
                kind: EnemyKind::Heavy,
                health: tier.health,
                max_health: tier.health,
                score_value: tier.score_value,
                is_boss: true,
                attack_timer: now_ms,
                color: tier.color,
                alive: true,
            },
            Boss {
                name: tier.name.to_string(),
                spawned_at: now_ms,
            },
        )));
    }

    let escort = get_profile(EnemyKind::Heavy);
    let escort_health = enemy_health(EnemyKind::Heavy, level) * ESCORT_HEALTH_MULTIPLIER;
    let escort_y = -tier.height - ESCORT_OFFSET_Y - escort.height;
    for i in 0..tier.escorts {
        let x = spread_x(field.width, i, tier.escorts, escort.width);
        spawned.push(world.spawn((
            Body::new(
                Vec2::new(x, escort_y),
                Vec2::new(escort.width, escort.height),
                escort.speed,
            ),
            Enemy {
                kind: EnemyKind::Heavy,
                health: escort_health,
                max_health: escort_health,
                score_value: escort.score_value,
                is_boss: false,
                attack_timer: now_ms,
                color: escort.color,
                alive: true,
            },
        )));
    }

    spawned
}

/// Left edge of slot `index` of `count` evenly spaced slots.
fn spread_x(field_width: f32, index: u32, count: u32, width: f32) -> f32 {
    field_width * (index + 1) as f32 / (count + 1) as f32 - width / 2.0
}

/// Spawn a player bullet with its top-left corner at `pos`.
pub fn spawn_player_bullet(world: &mut World, pos: Vec2, angle: f32) -> Entity {
    world.spawn((
        Body::new(
            pos,
            Vec2::new(PLAYER_BULLET_WIDTH, PLAYER_BULLET_HEIGHT),
            PLAYER_BULLET_SPEED,
        ),
        Bullet {
            angle,
            damage: PLAYER_BULLET_DAMAGE,
            is_enemy: false,
            alive: true,
        },
    ))
}

pub fn spawn_enemy_bullet(world: &mut World, spawn: &BulletSpawn) -> Entity {
    world.spawn((
        Body::new(spawn.pos, spawn.size, spawn.speed),
        Bullet {
            angle: spawn.angle,
            damage: spawn.damage,
            is_enemy: true,
            alive: true,
        },
    ))
}

/// Spawn a falling power-up just above the top edge.
pub fn spawn_power_up(world: &mut World, kind: PowerUpKind, x: f32) -> Entity {
    world.spawn((
        Body::new(
            Vec2::new(x, -POWERUP_SIZE),
            Vec2::splat(POWERUP_SIZE),
            POWERUP_SPEED,
        ),
        PowerUp { kind, alive: true },
    ))
}
