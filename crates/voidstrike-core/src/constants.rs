//! Simulation constants and tuning parameters.
//!
//! Every duration is in logical milliseconds, every speed in pixels per tick.

/// Fixed logical step per tick (milliseconds).
pub const TICK_MS: u64 = 16;

// --- Play field ---

/// Default play field width (pixels).
pub const FIELD_WIDTH: f32 = 600.0;

/// Default play field height (pixels).
pub const FIELD_HEIGHT: f32 = 800.0;

// --- Player ---

pub const PLAYER_WIDTH: f32 = 50.0;
pub const PLAYER_HEIGHT: f32 = 50.0;

/// Distance from the bottom edge at which the ship spawns.
pub const PLAYER_SPAWN_MARGIN: f32 = 100.0;

/// Discrete key movement per tick.
pub const PLAYER_SPEED: f32 = 6.0;

/// Fraction of the remaining distance to the pointer covered each tick.
pub const POINTER_FOLLOW_FACTOR: f32 = 0.2;

pub const PLAYER_MAX_HEALTH: u32 = 5;

/// Invincibility window after a hit.
pub const INVINCIBILITY_MS: u64 = 2000;

/// Lifetime of a timed power-up effect.
pub const POWERUP_DURATION_MS: u64 = 10_000;

// --- Weapons ---

pub const FIRE_INTERVAL_MS: u64 = 200;
pub const FIRE_INTERVAL_FAST_MS: u64 = 120;
pub const FAST_FIRE_LEVEL: u32 = 30;

/// Levels at which the built-in weapon tiers unlock.
pub const DUAL_SHOT_LEVEL: u32 = 5;
pub const TRIPLE_SHOT_LEVEL: u32 = 15;
pub const FAN_SHOT_LEVEL: u32 = 25;

/// Angular offset of the outer triple-shot bullets (radians).
pub const TRIPLE_SHOT_SPREAD: f32 = 0.2;

/// Angular step between five-way fan bullets (radians).
pub const FAN_SHOT_STEP: f32 = 0.15;

pub const PLAYER_BULLET_WIDTH: f32 = 4.0;
pub const PLAYER_BULLET_HEIGHT: f32 = 12.0;
pub const PLAYER_BULLET_SPEED: f32 = 10.0;
pub const PLAYER_BULLET_DAMAGE: i32 = 1;

// --- Regular enemies ---

/// Extra descent speed per level.
pub const ENEMY_SPEED_PER_LEVEL: f32 = 0.3;

/// Ranged enemies stop descending at this y.
pub const RANGED_HOLD_Y: f32 = 200.0;
pub const RANGED_FIRE_INTERVAL_MS: u64 = 2000;
pub const RANGED_BULLET_SIZE: f32 = 8.0;
pub const RANGED_BULLET_SPEED: f32 = 5.0;

pub const SPAWN_INTERVAL_BASE_MS: u64 = 1500;
pub const SPAWN_INTERVAL_PER_LEVEL_MS: u64 = 120;
pub const SPAWN_INTERVAL_MIN_MS: u64 = 300;

/// Type-selection thresholds: (minimum level, draw must exceed).
pub const FAST_SPAWN_GATE: (u32, f32) = (3, 0.6);
pub const RANGED_SPAWN_GATE: (u32, f32) = (5, 0.75);
pub const HEAVY_SPAWN_GATE: (u32, f32) = (7, 0.9);

/// Score lost per enemy that escapes past the bottom edge.
pub const ESCAPE_PENALTY: u64 = 50;

// --- Progression ---

/// Score needed per level: level-up when score >= level * LEVEL_SCORE_STEP.
pub const LEVEL_SCORE_STEP: u64 = 2000;
pub const ACE_SCORE: u64 = 10_000;
pub const LEVEL_UP_ACHIEVEMENT_LEVEL: u32 = 5;
pub const POWER_HUNGRY_PICKUPS: u32 = 10;

// --- Boss director ---

pub const BOSS_LEVELS: [u32; 5] = [5, 10, 20, 30, 50];
pub const BOSS_WARNING_MS: u64 = 3000;
pub const BOSS_ENTRANCE_MS: u64 = 2000;
pub const BOSS_HOVER_Y: f32 = 50.0;
pub const BOSS_ENTRANCE_EASE: f32 = 0.05;
pub const BOSS_DESCENT_SPEED: f32 = 1.0;
pub const ESCORT_HEALTH_MULTIPLIER: i32 = 2;
pub const ESCORT_OFFSET_Y: f32 = 100.0;

// --- Boss attacks ---

pub const BOSS_ATTACK_INTERVAL_MS: u64 = 1000;
pub const BOSS_ATTACK_INTERVAL_FAST_MS: u64 = 500;
pub const BOSS_FAST_ATTACK_LEVEL: u32 = 20;

/// Level at which burst patterns grow denser.
pub const BOSS_ENHANCED_LEVEL: u32 = 30;
pub const BOSS_BULLET_SIZE: f32 = 10.0;
pub const BOSS_BULLET_DAMAGE: i32 = 1;

pub const CIRCULAR_BURST_COUNT: u32 = 12;
pub const CIRCULAR_BURST_COUNT_ENHANCED: u32 = 20;
pub const CIRCULAR_BURST_SPEED: f32 = 4.0;

pub const TARGETED_BURST_COUNT: u32 = 3;
pub const TARGETED_BURST_COUNT_ENHANCED: u32 = 5;
pub const TARGETED_BURST_SPACING: f32 = 0.15;
pub const TARGETED_BURST_SPEED: f32 = 6.0;

pub const SPIRAL_ARMS: u32 = 4;
pub const SPIRAL_SPEED: f32 = 5.0;

pub const RAIN_COLUMNS: u32 = 10;
pub const RAIN_SPEED: f32 = 5.0;
pub const RAIN_BULLET_WIDTH: f32 = 6.0;
pub const RAIN_BULLET_HEIGHT: f32 = 20.0;

pub const ULTIMATE_LEVEL: u32 = 50;
pub const ULTIMATE_CHANCE: f64 = 0.1;
pub const ULTIMATE_COUNT: u32 = 20;
pub const ULTIMATE_SPEED: f32 = 3.0;
pub const ULTIMATE_DAMAGE: i32 = 2;

// --- Power-ups ---

pub const POWERUP_SPAWN_CHANCE: f64 = 0.002;
pub const POWERUP_SIZE: f32 = 30.0;
pub const POWERUP_SPEED: f32 = 2.0;

// --- Effects ---

pub const PARTICLE_DECAY: f32 = 0.02;
/// Particles at or below this life are spent (50 ticks from full life).
pub const PARTICLE_LIFE_EPSILON: f32 = 1e-4;
pub const PARTICLE_MAX_SPEED: f32 = 4.0;
pub const PARTICLE_MIN_SIZE: f32 = 2.0;
pub const PARTICLE_MAX_SIZE: f32 = 6.0;
pub const PARTICLE_MIN_MAX_LIFE: f32 = 0.5;

pub const DEFAULT_EXPLOSION_PARTICLES: usize = 15;
pub const HIT_FLASH_PARTICLES: usize = 3;
pub const BOSS_EXPLOSION_PARTICLES: usize = 50;
pub const PLAYER_HIT_PARTICLES: usize = 20;
pub const PICKUP_PARTICLES: usize = 10;

pub const HIT_FLASH_COLOR: u32 = 0xffffff;
pub const PLAYER_HIT_COLOR: u32 = 0xff0000;
pub const PICKUP_COLOR: u32 = 0x00ff00;
