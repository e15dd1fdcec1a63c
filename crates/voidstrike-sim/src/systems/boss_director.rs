//! Boss director integration: applies the director FSM's actions to the
//! world and eases freshly spawned bosses into view.

use hecs::World;
use log::{debug, info};

use voidstrike_core::components::{Body, Enemy};
use voidstrike_core::constants::{BOSS_ENTRANCE_EASE, BOSS_ENTRANCE_MS, BOSS_HOVER_Y};
use voidstrike_core::enums::MusicCue;
use voidstrike_core::events::GameEvent;

use voidstrike_enemy_ai::director::{evaluate, DirectorAction, DirectorContext, DirectorPhase};

use crate::world::WorldState;
use crate::world_setup;

/// Evaluate the director for this tick and carry out its action.
pub fn run(state: &mut WorldState, now_ms: u64, events: &mut Vec<GameEvent>) {
    let ctx = DirectorContext {
        now_ms,
        level: state.progress.level,
        bosses_present: state.boss_count(),
    };
    let update = evaluate(state.director, &ctx);
    state.director = update.new_phase;

    match update.action {
        DirectorAction::None => {}
        DirectorAction::BeginWarning(tier) => {
            info!("boss warning: {} (level {})", tier.name, tier.level);
            state.boss_warning = Some(tier.name.to_string());
            events.push(GameEvent::BossWarning {
                name: Some(tier.name.to_string()),
            });
            let cleared = clear_regular_enemies(&mut state.world);
            debug!("cleared {cleared} regular enemies for the warning");
        }
        DirectorAction::SpawnEncounter(tier) => {
            info!(
                "spawning {}: {} boss(es), {} escort(s)",
                tier.name, tier.count, tier.escorts
            );
            state.boss_warning = None;
            events.push(GameEvent::BossWarning { name: None });
            world_setup::spawn_encounter(
                &mut state.world,
                tier,
                state.progress.level,
                &state.field,
                now_ms,
            );
            state.progress.hit_during_encounter = false;
            events.push(GameEvent::Music {
                cue: MusicCue::Boss,
            });
        }
        DirectorAction::EntranceComplete => {
            info!("boss entrance complete");
        }
    }
}

/// Exponential approach toward the hover line during the entrance window.
pub fn ease_entrance(world: &mut World, director: DirectorPhase, now_ms: u64) {
    let Some(since) = director.entering_since() else {
        return;
    };
    if now_ms.saturating_sub(since) >= BOSS_ENTRANCE_MS {
        return;
    }
    for (_entity, (body, enemy)) in world.query_mut::<(&mut Body, &Enemy)>() {
        if enemy.is_boss {
            body.pos.y += (BOSS_HOVER_Y - body.pos.y) * BOSS_ENTRANCE_EASE;
        }
    }
}

fn clear_regular_enemies(world: &mut World) -> usize {
    let doomed: Vec<hecs::Entity> = world
        .query::<&Enemy>()
        .iter()
        .filter(|(_, enemy)| !enemy.is_boss)
        .map(|(entity, _)| entity)
        .collect();
    let count = doomed.len();
    for entity in doomed {
        let _ = world.despawn(entity);
    }
    count
}
