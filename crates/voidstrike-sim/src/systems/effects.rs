//! Particle effects. Purely cosmetic: the particle rng is a separate stream
//! from the gameplay rng so explosions never shift spawn or attack rolls.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use voidstrike_core::components::Particle;
use voidstrike_core::constants::*;

/// Stream id for the cosmetic rng.
const PARTICLE_STREAM: u64 = 7;

pub struct Effects {
    pub particles: Vec<Particle>,
    rng: ChaCha8Rng,
}

impl Effects {
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(PARTICLE_STREAM);
        Self {
            particles: Vec::new(),
            rng,
        }
    }

    /// Burst of `count` particles at `center`.
    pub fn spawn_explosion(&mut self, center: Vec2, color: u32, count: usize) {
        self.particles.reserve(count);
        for _ in 0..count {
            let vel = Vec2::new(
                self.rng.gen_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
                self.rng.gen_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
            );
            self.particles.push(Particle {
                pos: center,
                vel,
                life: 1.0,
                max_life: self.rng.gen_range(PARTICLE_MIN_MAX_LIFE..1.0),
                color,
                size: self.rng.gen_range(PARTICLE_MIN_SIZE..PARTICLE_MAX_SIZE),
            });
        }
    }
}

/// Advance every particle one step and drop the spent ones.
pub fn run(effects: &mut Effects) {
    for particle in effects.particles.iter_mut() {
        particle.pos += particle.vel;
        particle.life -= PARTICLE_DECAY;
    }
    // Repeated f32 subtraction leaves a residue just above zero.
    effects.particles.retain(|p| p.life > PARTICLE_LIFE_EPSILON);
}
