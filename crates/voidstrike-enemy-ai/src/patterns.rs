//! Boss and ranged-enemy bullet patterns.
//!
//! Pure functions that turn a firing situation into a list of bullet
//! spawns. The caller owns the world and materializes the bullets.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::Vec2;
use rand::Rng;

use voidstrike_core::constants::*;
use voidstrike_core::types::angle_between;

/// One of the four regular boss attacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackPattern {
    CircularBurst,
    TargetedBurst,
    Spiral,
    RainWithGap,
}

impl AttackPattern {
    pub const ALL: [AttackPattern; 4] = [
        AttackPattern::CircularBurst,
        AttackPattern::TargetedBurst,
        AttackPattern::Spiral,
        AttackPattern::RainWithGap,
    ];
}

/// An enemy bullet to be spawned. Angles are screen-space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulletSpawn {
    /// Top-left corner.
    pub pos: Vec2,
    pub size: Vec2,
    pub angle: f32,
    pub speed: f32,
    pub damage: i32,
}

/// Situation a boss is firing from.
#[derive(Debug, Clone, Copy)]
pub struct AttackContext {
    pub boss_center: Vec2,
    /// y of the boss's bottom edge, where column waves start.
    pub boss_bottom: f32,
    pub player_center: Vec2,
    pub level: u32,
    pub now_ms: u64,
    pub field_width: f32,
}

impl BulletSpawn {
    /// A bullet whose center sits at `center`.
    fn centered(center: Vec2, size: Vec2, angle: f32, speed: f32, damage: i32) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
            angle,
            speed,
            damage,
        }
    }
}

/// Pick an attack uniformly at random.
pub fn choose_pattern<R: Rng + ?Sized>(rng: &mut R) -> AttackPattern {
    AttackPattern::ALL[rng.gen_range(0..AttackPattern::ALL.len())]
}

/// Full boss volley: one random pattern, plus the ultimate wave on a
/// lucky roll once the level allows it.
pub fn boss_attack<R: Rng + ?Sized>(ctx: &AttackContext, rng: &mut R) -> Vec<BulletSpawn> {
    let pattern = choose_pattern(rng);
    let mut bullets = emit(pattern, ctx, rng);
    if ctx.level >= ULTIMATE_LEVEL && rng.gen_bool(ULTIMATE_CHANCE) {
        bullets.extend(ultimate_wave(ctx));
    }
    bullets
}

/// Emit a specific pattern.
pub fn emit<R: Rng + ?Sized>(
    pattern: AttackPattern,
    ctx: &AttackContext,
    rng: &mut R,
) -> Vec<BulletSpawn> {
    match pattern {
        AttackPattern::CircularBurst => circular_burst(ctx),
        AttackPattern::TargetedBurst => targeted_burst(ctx),
        AttackPattern::Spiral => spiral(ctx),
        AttackPattern::RainWithGap => {
            let gap = rng.gen_range(0..RAIN_COLUMNS - 1);
            rain_with_gap(ctx, gap)
        }
    }
}

fn boss_bullet_size() -> Vec2 {
    Vec2::splat(BOSS_BULLET_SIZE)
}

/// Evenly spaced ring around the boss.
pub fn circular_burst(ctx: &AttackContext) -> Vec<BulletSpawn> {
    let count = if ctx.level >= BOSS_ENHANCED_LEVEL {
        CIRCULAR_BURST_COUNT_ENHANCED
    } else {
        CIRCULAR_BURST_COUNT
    };
    (0..count)
        .map(|i| {
            let angle = i as f32 * TAU / count as f32;
            BulletSpawn::centered(
                ctx.boss_center,
                boss_bullet_size(),
                angle,
                CIRCULAR_BURST_SPEED,
                BOSS_BULLET_DAMAGE,
            )
        })
        .collect()
}

/// Odd fan centered on the player.
pub fn targeted_burst(ctx: &AttackContext) -> Vec<BulletSpawn> {
    let count = if ctx.level >= BOSS_ENHANCED_LEVEL {
        TARGETED_BURST_COUNT_ENHANCED
    } else {
        TARGETED_BURST_COUNT
    };
    let aim = angle_between(ctx.boss_center, ctx.player_center);
    let half = (count / 2) as i32;
    (-half..=half)
        .map(|i| {
            BulletSpawn::centered(
                ctx.boss_center,
                boss_bullet_size(),
                aim + i as f32 * TARGETED_BURST_SPACING,
                TARGETED_BURST_SPEED,
                BOSS_BULLET_DAMAGE,
            )
        })
        .collect()
}

/// Four arms whose phase follows the clock, so consecutive volleys rotate.
pub fn spiral(ctx: &AttackContext) -> Vec<BulletSpawn> {
    // Reduce in f64 first; raw host timestamps overflow f32 precision.
    let phase = ((ctx.now_ms as f64 / 1000.0) % std::f64::consts::TAU) as f32;
    (0..SPIRAL_ARMS)
        .map(|i| {
            BulletSpawn::centered(
                ctx.boss_center,
                boss_bullet_size(),
                phase + i as f32 * (PI / 2.0),
                SPIRAL_SPEED,
                BOSS_BULLET_DAMAGE,
            )
        })
        .collect()
}

/// Straight-down columns across the field with two adjacent columns left
/// open starting at `gap`.
pub fn rain_with_gap(ctx: &AttackContext, gap: u32) -> Vec<BulletSpawn> {
    let spacing = ctx.field_width / RAIN_COLUMNS as f32;
    let size = Vec2::new(RAIN_BULLET_WIDTH, RAIN_BULLET_HEIGHT);
    (0..RAIN_COLUMNS)
        .filter(|&col| col != gap && col != gap + 1)
        .map(|col| {
            let x = spacing * col as f32 + spacing / 2.0 - RAIN_BULLET_WIDTH / 2.0;
            BulletSpawn {
                pos: Vec2::new(x, ctx.boss_bottom),
                size,
                angle: FRAC_PI_2,
                speed: RAIN_SPEED,
                damage: BOSS_BULLET_DAMAGE,
            }
        })
        .collect()
}

/// Screen-wide slow wave with heavier bullets.
pub fn ultimate_wave(ctx: &AttackContext) -> Vec<BulletSpawn> {
    let spacing = ctx.field_width / ULTIMATE_COUNT as f32;
    (0..ULTIMATE_COUNT)
        .map(|i| {
            let x = spacing * i as f32 + spacing / 2.0 - BOSS_BULLET_SIZE / 2.0;
            BulletSpawn {
                pos: Vec2::new(x, ctx.boss_bottom),
                size: boss_bullet_size(),
                angle: FRAC_PI_2,
                speed: ULTIMATE_SPEED,
                damage: ULTIMATE_DAMAGE,
            }
        })
        .collect()
}

/// A single shot from `from` aimed at `target` (ranged enemies).
pub fn aimed_shot(from: Vec2, target: Vec2) -> BulletSpawn {
    BulletSpawn::centered(
        from,
        Vec2::splat(RANGED_BULLET_SIZE),
        angle_between(from, target),
        RANGED_BULLET_SPEED,
        1,
    )
}
