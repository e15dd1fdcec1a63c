//! Regular enemy behavior: descent, ranged fire and escapes.
//!
//! Bosses are driven by `boss_ai` and skipped here.

use hecs::{Entity, World};
use log::trace;

use voidstrike_core::components::{Body, Enemy};
use voidstrike_core::constants::{RANGED_FIRE_INTERVAL_MS, RANGED_HOLD_Y};
use voidstrike_core::enums::EnemyKind;
use voidstrike_core::events::GameEvent;
use voidstrike_core::types::Field;

use voidstrike_enemy_ai::patterns::{aimed_shot, BulletSpawn};
use voidstrike_enemy_ai::profiles::enemy_speed;

use crate::systems::progression;
use crate::world::Progress;
use crate::world_setup;

/// Move regular enemies down and let ranged enemies take their shots.
pub fn run(world: &mut World, player_center: glam::Vec2, level: u32, now_ms: u64) {
    // Spawn after the query to avoid borrowing the world twice.
    let mut shots: Vec<BulletSpawn> = Vec::new();

    for (_entity, (body, enemy)) in world.query_mut::<(&mut Body, &mut Enemy)>() {
        if enemy.is_boss || !enemy.alive {
            continue;
        }
        let speed = enemy_speed(body.speed, level);

        match enemy.kind {
            EnemyKind::Ranged => {
                if body.pos.y < RANGED_HOLD_Y {
                    body.pos.y += speed;
                } else if now_ms.saturating_sub(enemy.attack_timer) >= RANGED_FIRE_INTERVAL_MS {
                    enemy.attack_timer = now_ms;
                    shots.push(aimed_shot(body.center(), player_center));
                }
            }
            EnemyKind::Basic | EnemyKind::Fast | EnemyKind::Heavy => {
                body.pos.y += speed;
            }
        }
    }

    for shot in &shots {
        world_setup::spawn_enemy_bullet(world, shot);
    }
}

/// Despawn regular enemies below the bottom edge and charge the escape
/// penalty once for the whole batch. Returns the number that escaped.
pub fn cull_escaped(
    world: &mut World,
    field: &Field,
    progress: &mut Progress,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) -> usize {
    despawn_buffer.clear();

    for (entity, (body, enemy)) in world.query_mut::<(&Body, &Enemy)>() {
        if !enemy.is_boss && body.pos.y > field.height {
            despawn_buffer.push(entity);
        }
    }

    let escaped = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    if escaped > 0 {
        trace!("{escaped} enemies escaped");
        progression::apply_escape_penalty(progress, escaped, events);
    }
    escaped
}
