//! Collision resolution, in a fixed order:
//!
//! 1. player bullets vs bosses
//! 2. player bullets vs regular enemies
//! 3. sweep dead enemies and bosses (last boss down clears the encounter)
//! 4. enemy bullets vs player
//! 5. bosses vs player (contact)
//! 6. regular enemies vs player (contact, enemy always destroyed)
//! 7. player vs power-ups
//!
//! All tests are strict AABB overlaps. Spent bullets are flagged here and
//! swept by `cleanup` at the end of the tick.

use hecs::{Entity, World};
use log::info;

use voidstrike_core::components::{Body, Bullet, Enemy, Player, PowerUp};
use voidstrike_core::constants::*;
use voidstrike_core::enums::{Achievement, MusicCue, PowerUpKind};
use voidstrike_core::events::GameEvent;
use voidstrike_core::types::Rect;

use voidstrike_enemy_ai::director::DirectorPhase;

use crate::systems::effects::Effects;
use crate::systems::progression;
use crate::world::{Progress, WorldState};

/// A live player bullet, cached for the bullet passes.
struct Shot {
    entity: Entity,
    rect: Rect,
    damage: i32,
    spent: bool,
}

/// How a qualifying hit on the player was absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    Shielded,
    Damaged,
}

pub fn run(state: &mut WorldState, now_ms: u64, events: &mut Vec<GameEvent>) {
    let mut shots = collect_shots(&state.world);
    bullets_vs_bosses(state, &mut shots, events);
    let boss_active = state.boss_count() > 0;
    bullets_vs_enemies(state, &mut shots, boss_active, events);
    retire_shots(&mut state.world, &shots);

    sweep_dead_enemies(state, events);

    enemy_bullets_vs_player(state, now_ms, events);
    bosses_vs_player(state, now_ms, events);
    enemies_vs_player(state, now_ms, events);
    player_vs_power_ups(state, now_ms, events);
}

fn collect_shots(world: &World) -> Vec<Shot> {
    world
        .query::<(&Body, &Bullet)>()
        .iter()
        .filter(|(_, (_, bullet))| !bullet.is_enemy && bullet.alive)
        .map(|(entity, (body, bullet))| Shot {
            entity,
            rect: body.rect(),
            damage: bullet.damage,
            spent: false,
        })
        .collect()
}

fn retire_shots(world: &mut World, shots: &[Shot]) {
    for shot in shots.iter().filter(|s| s.spent) {
        if let Ok(mut bullet) = world.get::<&mut Bullet>(shot.entity) {
            bullet.alive = false;
        }
    }
}

fn bullets_vs_bosses(state: &mut WorldState, shots: &mut [Shot], events: &mut Vec<GameEvent>) {
    for (_entity, (body, enemy)) in state.world.query_mut::<(&Body, &mut Enemy)>() {
        if !enemy.is_boss {
            continue;
        }
        let rect = body.rect();
        for shot in shots.iter_mut().filter(|s| !s.spent) {
            if !shot.rect.overlaps(&rect) {
                continue;
            }
            shot.spent = true;
            enemy.health -= shot.damage;
            state
                .effects
                .spawn_explosion(shot.rect.center(), HIT_FLASH_COLOR, HIT_FLASH_PARTICLES);

            if enemy.alive && enemy.health <= 0 {
                enemy.alive = false;
                state
                    .effects
                    .spawn_explosion(body.center(), enemy.color, BOSS_EXPLOSION_PARTICLES);
                progression::award_boss_kill(&mut state.progress, enemy.score_value, events);
            }
        }
    }
}

fn bullets_vs_enemies(
    state: &mut WorldState,
    shots: &mut [Shot],
    boss_active: bool,
    events: &mut Vec<GameEvent>,
) {
    for (_entity, (body, enemy)) in state.world.query_mut::<(&Body, &mut Enemy)>() {
        if enemy.is_boss {
            continue;
        }
        let rect = body.rect();
        for shot in shots.iter_mut().filter(|s| !s.spent) {
            if !shot.rect.overlaps(&rect) {
                continue;
            }
            shot.spent = true;
            enemy.health -= shot.damage;

            // Score once, on the hit that first takes health to zero.
            if enemy.alive && enemy.health <= 0 {
                enemy.alive = false;
                state.effects.spawn_explosion(
                    body.center(),
                    enemy.color,
                    DEFAULT_EXPLOSION_PARTICLES,
                );
                progression::award_kill(
                    &mut state.progress,
                    &mut state.player,
                    enemy.score_value,
                    boss_active,
                    events,
                );
            }
        }
    }
}

/// Despawn every enemy flagged dead. When that removes the last boss the
/// encounter is over.
fn sweep_dead_enemies(state: &mut WorldState, events: &mut Vec<GameEvent>) {
    let mut bosses_killed = 0;
    state.despawn_buffer.clear();
    for (entity, enemy) in state.world.query_mut::<&Enemy>() {
        if !enemy.alive {
            if enemy.is_boss {
                bosses_killed += 1;
            }
            state.despawn_buffer.push(entity);
        }
    }
    for entity in state.despawn_buffer.drain(..) {
        let _ = state.world.despawn(entity);
    }

    if bosses_killed > 0 && state.boss_count() == 0 {
        info!("last boss defeated");
        progression::boss_encounter_cleared(&mut state.progress, events);
        events.push(GameEvent::Music {
            cue: MusicCue::Normal,
        });
        state.director = DirectorPhase::Idle;
    }
}

/// Shield absorbs the hit, otherwise one point of health is lost. Either
/// way the invincibility window restarts.
pub fn hit_player(
    player: &mut Player,
    progress: &mut Progress,
    effects: &mut Effects,
    now_ms: u64,
    events: &mut Vec<GameEvent>,
) -> HitOutcome {
    let outcome = if player.shield_active {
        player.shield_active = false;
        HitOutcome::Shielded
    } else {
        player.health = player.health.saturating_sub(1);
        events.push(GameEvent::HealthChanged {
            health: player.health,
        });
        HitOutcome::Damaged
    };

    player.invincible = true;
    player.invincible_timer = now_ms;
    progress.hit_during_encounter = true;
    effects.spawn_explosion(player.body.center(), PLAYER_HIT_COLOR, PLAYER_HIT_PARTICLES);
    outcome
}

fn enemy_bullets_vs_player(state: &mut WorldState, now_ms: u64, events: &mut Vec<GameEvent>) {
    for (_entity, (body, bullet)) in state.world.query_mut::<(&Body, &mut Bullet)>() {
        if state.player.invincible {
            break;
        }
        if !bullet.is_enemy || !bullet.alive {
            continue;
        }
        if body.rect().overlaps(&state.player.body.rect()) {
            bullet.alive = false;
            hit_player(
                &mut state.player,
                &mut state.progress,
                &mut state.effects,
                now_ms,
                events,
            );
        }
    }
}

fn bosses_vs_player(state: &mut WorldState, now_ms: u64, events: &mut Vec<GameEvent>) {
    for (_entity, (body, enemy)) in state.world.query_mut::<(&Body, &Enemy)>() {
        if state.player.invincible {
            break;
        }
        if enemy.is_boss && body.rect().overlaps(&state.player.body.rect()) {
            hit_player(
                &mut state.player,
                &mut state.progress,
                &mut state.effects,
                now_ms,
                events,
            );
        }
    }
}

fn enemies_vs_player(state: &mut WorldState, now_ms: u64, events: &mut Vec<GameEvent>) {
    for (_entity, (body, enemy)) in state.world.query_mut::<(&Body, &mut Enemy)>() {
        if state.player.invincible {
            break;
        }
        if enemy.is_boss || !enemy.alive || !body.rect().overlaps(&state.player.body.rect()) {
            continue;
        }

        let outcome = hit_player(
            &mut state.player,
            &mut state.progress,
            &mut state.effects,
            now_ms,
            events,
        );
        if outcome == HitOutcome::Shielded {
            progression::unlock(&mut state.progress, Achievement::ShieldMaster, events);
        }
        enemy.health = 0;
        enemy.alive = false;
    }
}

fn player_vs_power_ups(state: &mut WorldState, now_ms: u64, events: &mut Vec<GameEvent>) {
    for (_entity, (body, power_up)) in state.world.query_mut::<(&Body, &mut PowerUp)>() {
        if !power_up.alive || !body.rect().overlaps(&state.player.body.rect()) {
            continue;
        }

        match power_up.kind {
            PowerUpKind::Shield => state.player.shield_active = true,
            PowerUpKind::TripleShot => {
                state.player.active_power_up = Some(power_up.kind);
                state.player.power_up_timer = now_ms;
                progression::unlock(&mut state.progress, Achievement::TripleThreat, events);
            }
        }
        power_up.alive = false;
        state
            .effects
            .spawn_explosion(body.center(), PICKUP_COLOR, PICKUP_PARTICLES);
        progression::record_pickup(&mut state.progress, events);
    }
}
