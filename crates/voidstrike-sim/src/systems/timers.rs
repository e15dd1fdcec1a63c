//! Elapsed-time expiry for invincibility and the active power-up.

use voidstrike_core::components::Player;
use voidstrike_core::constants::{INVINCIBILITY_MS, POWERUP_DURATION_MS};

pub fn run(player: &mut Player, now_ms: u64) {
    if player.invincible && now_ms.saturating_sub(player.invincible_timer) > INVINCIBILITY_MS {
        player.invincible = false;
    }
    if player.active_power_up.is_some()
        && now_ms.saturating_sub(player.power_up_timer) > POWERUP_DURATION_MS
    {
        player.active_power_up = None;
    }
}
