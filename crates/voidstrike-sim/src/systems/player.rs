//! Player movement: pointer-follow or discrete key axes, then field clamp.

use glam::Vec2;

use voidstrike_core::commands::TickInput;
use voidstrike_core::components::Player;
use voidstrike_core::constants::POINTER_FOLLOW_FACTOR;
use voidstrike_core::types::Field;

/// Move the ship for one tick. A pointer target takes priority over keys.
pub fn run(player: &mut Player, input: &TickInput) {
    let body = &mut player.body;
    match input.pointer {
        Some(target) => {
            let delta = target - body.center();
            body.pos += delta * POINTER_FOLLOW_FACTOR;
        }
        None => {
            let mut axis = Vec2::ZERO;
            if input.left {
                axis.x -= 1.0;
            }
            if input.right {
                axis.x += 1.0;
            }
            if input.up {
                axis.y -= 1.0;
            }
            if input.down {
                axis.y += 1.0;
            }
            body.pos += axis * body.speed;
        }
    }
}

/// Keep the whole ship inside the play field.
pub fn clamp_to_field(player: &mut Player, field: &Field) {
    let body = &mut player.body;
    let max = Vec2::new(field.width - body.size.x, field.height - body.size.y).max(Vec2::ZERO);
    body.pos = body.pos.clamp(Vec2::ZERO, max);
}
