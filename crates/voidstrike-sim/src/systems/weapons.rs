//! Player weapon: fire-rate gate and level/power-up driven shot patterns.

use glam::Vec2;
use hecs::World;

use voidstrike_core::commands::TickInput;
use voidstrike_core::components::Player;
use voidstrike_core::constants::*;
use voidstrike_core::enums::PowerUpKind;

use crate::world_setup;

/// Shot pattern for one trigger pull. Tiers are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirePattern {
    Single,
    Dual,
    Triple,
    Fan,
}

/// First match wins: triple-shot power-up or level 15..25, then the fan at
/// 25+, then dual at 5+.
pub fn select_pattern(level: u32, power_up: Option<PowerUpKind>) -> FirePattern {
    if power_up == Some(PowerUpKind::TripleShot)
        || (TRIPLE_SHOT_LEVEL..FAN_SHOT_LEVEL).contains(&level)
    {
        FirePattern::Triple
    } else if level >= FAN_SHOT_LEVEL {
        FirePattern::Fan
    } else if level >= DUAL_SHOT_LEVEL {
        FirePattern::Dual
    } else {
        FirePattern::Single
    }
}

pub fn fire_interval_ms(level: u32) -> u64 {
    if level >= FAST_FIRE_LEVEL {
        FIRE_INTERVAL_FAST_MS
    } else {
        FIRE_INTERVAL_MS
    }
}

/// Bullet origins (top-left) and angles for a pattern fired from `player`.
pub fn shot_layout(player: &Player, pattern: FirePattern) -> Vec<(Vec2, f32)> {
    let body = &player.body;
    let center_x = body.center().x - PLAYER_BULLET_WIDTH / 2.0;
    let muzzle = Vec2::new(center_x, body.pos.y);

    match pattern {
        FirePattern::Single => vec![(muzzle, 0.0)],
        FirePattern::Dual => vec![
            (Vec2::new(body.pos.x, body.pos.y), 0.0),
            (
                Vec2::new(body.pos.x + body.size.x - PLAYER_BULLET_WIDTH, body.pos.y),
                0.0,
            ),
        ],
        FirePattern::Triple => vec![
            (muzzle, 0.0),
            (muzzle, -TRIPLE_SHOT_SPREAD),
            (muzzle, TRIPLE_SHOT_SPREAD),
        ],
        FirePattern::Fan => (-2..=2)
            .map(|i| (muzzle, i as f32 * FAN_SHOT_STEP))
            .collect(),
    }
}

/// Fire if the trigger is held and the gate has elapsed. Returns the number
/// of bullets spawned.
pub fn run(world: &mut World, player: &mut Player, level: u32, input: &TickInput, now_ms: u64) -> usize {
    if !input.firing() {
        return 0;
    }
    if let Some(last) = player.last_shot_at {
        if now_ms.saturating_sub(last) < fire_interval_ms(level) {
            return 0;
        }
    }

    player.last_shot_at = Some(now_ms);
    let pattern = select_pattern(level, player.active_power_up);
    let shots = shot_layout(player, pattern);
    for (pos, angle) in &shots {
        world_setup::spawn_player_bullet(world, *pos, *angle);
    }
    shots.len()
}
