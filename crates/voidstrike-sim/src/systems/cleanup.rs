//! End-of-tick sweep: removes bullets, enemies and power-ups flagged dead
//! during the tick.

use hecs::{Entity, World};

use voidstrike_core::components::{Bullet, Enemy, PowerUp};

/// Despawn every entity whose `alive` flag was cleared this tick.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, bullet) in world.query_mut::<&Bullet>() {
        if !bullet.alive {
            despawn_buffer.push(entity);
        }
    }

    for (entity, enemy) in world.query_mut::<&Enemy>() {
        if !enemy.alive {
            despawn_buffer.push(entity);
        }
    }

    for (entity, power_up) in world.query_mut::<&PowerUp>() {
        if !power_up.alive {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
