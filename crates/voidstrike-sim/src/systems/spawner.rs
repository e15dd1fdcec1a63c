//! Regular enemy spawning on a level-scaled interval.
//!
//! Only runs while the boss director is idle and no boss is present.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidstrike_core::enums::EnemyKind;
use voidstrike_enemy_ai::director::DirectorPhase;
use voidstrike_enemy_ai::profiles::{choose_enemy_kind, get_profile, spawn_interval_ms};

use crate::world::WorldState;
use crate::world_setup;

/// Whether the regular spawner may fire at all this tick.
pub fn spawning_allowed(director: DirectorPhase, bosses_present: usize) -> bool {
    !director.suspends_spawning() && bosses_present == 0
}

/// Spawn one regular enemy if the interval has elapsed. Returns true when
/// an enemy was spawned.
pub fn run(state: &mut WorldState, now_ms: u64, rng: &mut ChaCha8Rng) -> bool {
    if !spawning_allowed(state.director, state.boss_count()) {
        return false;
    }
    let level = state.progress.level;
    if now_ms.saturating_sub(state.last_enemy_spawn) < spawn_interval_ms(level) {
        return false;
    }

    state.last_enemy_spawn = now_ms;
    let kind = choose_enemy_kind(level, rng.gen::<f32>());
    spawn_random(&mut state.world, rng, kind, level, state.field.width, now_ms);
    true
}

fn spawn_random(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: EnemyKind,
    level: u32,
    field_width: f32,
    now_ms: u64,
) {
    let width = get_profile(kind).width;
    let x = rng.gen_range(0.0..(field_width - width).max(1.0));
    world_setup::spawn_enemy(world, kind, level, x, now_ms);
}
