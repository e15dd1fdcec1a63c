//! Boss movement and attack emission.
//!
//! Bosses bounce between the side walls, sink toward the hover line and
//! fire a random pattern on every attack interval.

use glam::Vec2;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use voidstrike_core::components::{Body, Enemy};
use voidstrike_core::constants::{BOSS_DESCENT_SPEED, BOSS_HOVER_Y};
use voidstrike_core::types::Field;

use voidstrike_enemy_ai::patterns::{boss_attack, AttackContext, BulletSpawn};
use voidstrike_enemy_ai::profiles::boss_attack_interval_ms;

use crate::world_setup;

/// Horizontal bounce: speed sign flips at either wall.
pub fn bounce(body: &mut Body, field_width: f32) {
    body.pos.x += body.speed;
    if body.pos.x <= 0.0 {
        body.pos.x = 0.0;
        body.speed = body.speed.abs();
    } else if body.pos.x + body.size.x >= field_width {
        body.pos.x = (field_width - body.size.x).max(0.0);
        body.speed = -body.speed.abs();
    }
}

pub fn run(
    world: &mut World,
    player_center: Vec2,
    level: u32,
    field: &Field,
    now_ms: u64,
    rng: &mut ChaCha8Rng,
) {
    let interval = boss_attack_interval_ms(level);
    let mut volley: Vec<BulletSpawn> = Vec::new();

    for (_entity, (body, enemy)) in world.query_mut::<(&mut Body, &mut Enemy)>() {
        if !enemy.is_boss || !enemy.alive {
            continue;
        }

        bounce(body, field.width);
        if body.pos.y < BOSS_HOVER_Y {
            body.pos.y = (body.pos.y + BOSS_DESCENT_SPEED).min(BOSS_HOVER_Y);
        }

        if now_ms.saturating_sub(enemy.attack_timer) >= interval {
            enemy.attack_timer = now_ms;
            let ctx = AttackContext {
                boss_center: body.center(),
                boss_bottom: body.pos.y + body.size.y,
                player_center,
                level,
                now_ms,
                field_width: field.width,
            };
            volley.extend(boss_attack(&ctx, rng));
        }
    }

    for spawn in &volley {
        world_setup::spawn_enemy_bullet(world, spawn);
    }
}
