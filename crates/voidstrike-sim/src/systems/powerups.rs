//! Power-up spawning, fall and cull.

use hecs::{Entity, World};
use log::debug;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidstrike_core::components::{Body, PowerUp};
use voidstrike_core::constants::{POWERUP_SIZE, POWERUP_SPAWN_CHANCE};
use voidstrike_core::enums::PowerUpKind;
use voidstrike_core::types::Field;

use crate::world_setup;

pub fn run(world: &mut World, field: &Field, rng: &mut ChaCha8Rng, despawn_buffer: &mut Vec<Entity>) {
    if rng.gen_bool(POWERUP_SPAWN_CHANCE) {
        let kind = if rng.gen_bool(0.5) {
            PowerUpKind::TripleShot
        } else {
            PowerUpKind::Shield
        };
        let x = rng.gen_range(0.0..(field.width - POWERUP_SIZE).max(1.0));
        debug!("power-up {kind:?} at x={x:.0}");
        world_setup::spawn_power_up(world, kind, x);
    }

    despawn_buffer.clear();
    for (entity, (body, _power_up)) in world.query_mut::<(&mut Body, &PowerUp)>() {
        body.pos.y += body.speed;
        if body.pos.y > field.height {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
