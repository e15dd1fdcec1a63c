//! Snapshot system: builds the render snapshot from the world state.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use voidstrike_core::components::*;
use voidstrike_core::enums::GamePhase;
use voidstrike_core::state::*;
use voidstrike_core::types::SimTime;

use crate::world::WorldState;

/// Build a complete WorldSnapshot from the current world state.
pub fn build_snapshot(state: &WorldState, time: SimTime, phase: GamePhase) -> WorldSnapshot {
    WorldSnapshot {
        time,
        phase,
        encounter: state.director.encounter_phase(),
        boss_warning: state.boss_warning.clone(),
        score: state.progress.score,
        level: state.progress.level,
        player: build_player(&state.player),
        enemies: build_enemies(&state.world),
        bullets: build_bullets(&state.world),
        power_ups: build_power_ups(&state.world),
        particles: build_particles(&state.effects.particles),
    }
}

fn build_player(player: &Player) -> PlayerView {
    PlayerView {
        bounds: player.body.rect(),
        health: player.health,
        max_health: player.max_health,
        shield_active: player.shield_active,
        invincible: player.invincible,
        active_power_up: player.active_power_up,
    }
}

/// Regular enemies and bosses together, sorted by id.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut views: Vec<EnemyView> = world
        .query::<(&Body, &Enemy, Option<&Boss>)>()
        .iter()
        .map(|(entity, (body, enemy, boss))| EnemyView {
            id: entity.to_bits().get(),
            kind: enemy.kind,
            bounds: body.rect(),
            health: enemy.health,
            max_health: enemy.max_health,
            is_boss: enemy.is_boss,
            name: boss.map(|b| b.name.clone()),
            color: enemy.color,
        })
        .collect();

    views.sort_by_key(|e| e.id);
    views
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    let mut views: Vec<BulletView> = world
        .query::<(&Body, &Bullet)>()
        .iter()
        .map(|(entity, (body, bullet))| BulletView {
            id: entity.to_bits().get(),
            bounds: body.rect(),
            angle: bullet.angle,
            is_enemy: bullet.is_enemy,
        })
        .collect();

    views.sort_by_key(|b| b.id);
    views
}

fn build_power_ups(world: &World) -> Vec<PowerUpView> {
    let mut views: Vec<PowerUpView> = world
        .query::<(&Body, &PowerUp)>()
        .iter()
        .map(|(entity, (body, power_up))| PowerUpView {
            id: entity.to_bits().get(),
            kind: power_up.kind,
            bounds: body.rect(),
        })
        .collect();

    views.sort_by_key(|p| p.id);
    views
}

fn build_particles(particles: &[Particle]) -> Vec<ParticleView> {
    particles
        .iter()
        .map(|p| ParticleView {
            x: p.pos.x,
            y: p.pos.y,
            life: p.life.max(0.0),
            color: p.color,
            size: p.size,
        })
        .collect()
}
