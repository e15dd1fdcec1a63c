//! A simple pilot for the demo binary: chase the lowest enemy's column,
//! keep clear of it once it gets close, and hold fire.

use voidstrike_core::commands::TickInput;
use voidstrike_core::state::WorldSnapshot;

/// Horizontal slack before the pilot bothers to move.
const DEAD_ZONE: f32 = 8.0;
/// Enemies this close above the ship are dodged instead of chased.
const DANGER_DISTANCE: f32 = 120.0;

pub fn steer(snapshot: &WorldSnapshot) -> TickInput {
    let ship = snapshot.player.bounds;
    let ship_x = ship.center().x;

    let target = snapshot
        .enemies
        .iter()
        .max_by(|a, b| a.bounds.y.total_cmp(&b.bounds.y));

    let mut input = TickInput {
        fire: true,
        ..Default::default()
    };
    let Some(target) = target else {
        return input;
    };

    let dx = target.bounds.center().x - ship_x;
    let gap = ship.y - (target.bounds.y + target.bounds.height);
    let close = !target.is_boss && gap < DANGER_DISTANCE;
    if close {
        // Step away from the column it occupies.
        if dx >= 0.0 {
            input.left = true;
        } else {
            input.right = true;
        }
    } else if dx > DEAD_ZONE {
        input.right = true;
    } else if dx < -DEAD_ZONE {
        input.left = true;
    }
    input
}
