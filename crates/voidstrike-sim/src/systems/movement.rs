//! Bullet kinematics.
//!
//! Player bullets travel along (sin a, -cos a) so angle 0 is straight up.
//! Enemy bullets use screen-space angles, (cos a, sin a).

use glam::Vec2;
use hecs::{Entity, World};

use voidstrike_core::components::{Body, Bullet};
use voidstrike_core::types::Field;

/// Per-tick displacement of a bullet.
pub fn bullet_step(bullet: &Bullet, speed: f32) -> Vec2 {
    let (sin, cos) = bullet.angle.sin_cos();
    if bullet.is_enemy {
        Vec2::new(cos, sin) * speed
    } else {
        Vec2::new(sin, -cos) * speed
    }
}

/// Advance every bullet and despawn the ones that left the field.
pub fn run(world: &mut World, field: &Field, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (body, bullet)) in world.query_mut::<(&mut Body, &Bullet)>() {
        body.pos += bullet_step(bullet, body.speed);
        if field.is_outside(&body.rect()) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
