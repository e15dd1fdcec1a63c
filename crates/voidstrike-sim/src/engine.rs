//! Simulation engine: the tick scheduler and its host-facing wrapper.
//!
//! `tick` threads one `WorldState` through every system in a fixed order
//! and returns the events raised along the way. `SimulationEngine` wraps it
//! with a logical clock, the run phase and a command queue. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use voidstrike_core::commands::{PlayerCommand, TickInput};
use voidstrike_core::constants::{FIELD_HEIGHT, FIELD_WIDTH, PLAYER_MAX_HEALTH};
use voidstrike_core::enums::{GamePhase, MusicCue};
use voidstrike_core::events::GameEvent;
use voidstrike_core::state::WorldSnapshot;
use voidstrike_core::types::{Field, SimTime};

use crate::systems;
use crate::world::WorldState;

/// Configuration for a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub field_width: f32,
    pub field_height: f32,
    pub max_health: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            max_health: PLAYER_MAX_HEALTH,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<SimConfig, String> {
        let config: SimConfig =
            serde_json::from_str(json).map_err(|e| format!("invalid sim config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.field_width > 0.0 && self.field_height > 0.0) {
            return Err(format!(
                "field must have positive dimensions, got {}x{}",
                self.field_width, self.field_height
            ));
        }
        if self.max_health == 0 {
            return Err("max_health must be at least 1".to_string());
        }
        Ok(())
    }

    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height)
    }
}

/// Advance the world by one fixed step at time `now_ms`.
pub fn tick(
    state: &mut WorldState,
    input: &TickInput,
    now_ms: u64,
    rng: &mut ChaCha8Rng,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let field = state.field;

    // 1. Background scroll is drawn by the host.
    // 2. Player movement
    systems::player::run(&mut state.player, input);
    // 3. Clamp to field
    systems::player::clamp_to_field(&mut state.player, &field);
    // 4. Weapon fire
    systems::weapons::run(
        &mut state.world,
        &mut state.player,
        state.progress.level,
        input,
        now_ms,
    );
    // 5. Bullet movement and out-of-bounds cull
    systems::movement::run(&mut state.world, &field, &mut state.despawn_buffer);
    // 6. Boss movement and attacks
    let player_center = state.player.body.center();
    systems::boss_ai::run(
        &mut state.world,
        player_center,
        state.progress.level,
        &field,
        now_ms,
        rng,
    );
    // 7. Boss director
    systems::boss_director::run(state, now_ms, &mut events);
    // 8. Boss entrance easing
    systems::boss_director::ease_entrance(&mut state.world, state.director, now_ms);
    // 9. Regular enemy spawn
    systems::spawner::run(state, now_ms, rng);
    // 10. Regular enemy movement and ranged fire
    systems::enemy_ai::run(&mut state.world, player_center, state.progress.level, now_ms);
    // 11. Escapes and score penalty
    systems::enemy_ai::cull_escaped(
        &mut state.world,
        &field,
        &mut state.progress,
        &mut events,
        &mut state.despawn_buffer,
    );
    // 12. Power-ups
    systems::powerups::run(&mut state.world, &field, rng, &mut state.despawn_buffer);
    // 13. Collisions
    systems::collision::run(state, now_ms, &mut events);
    // 14. Timers
    systems::timers::run(&mut state.player, now_ms);
    // 15. Particles
    systems::effects::run(&mut state.effects);

    systems::cleanup::run(&mut state.world, &mut state.despawn_buffer);
    events
}

/// The simulation engine. Owns the world state, clock and run phase.
pub struct SimulationEngine {
    config: SimConfig,
    state: WorldState,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    pending_events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            state: WorldState::new(&config, 0),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            pending_events: Vec::new(),
            config,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance one tick on the logical 16 ms clock.
    pub fn tick(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let now_ms = self.time.now_ms + voidstrike_core::constants::TICK_MS;
        self.tick_at(input, now_ms)
    }

    /// Advance one tick at a host-supplied timestamp. The logical clock
    /// only moves while a run is in progress.
    pub fn tick_at(&mut self, input: &TickInput, now_ms: u64) -> Vec<GameEvent> {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.time.tick += 1;
            self.time.now_ms = now_ms;
            let events = tick(&mut self.state, input, now_ms, &mut self.rng);
            self.pending_events.extend(events);

            if self.state.player.health == 0 {
                info!(
                    "run over: score {}, level {}",
                    self.state.progress.score, self.state.progress.level
                );
                self.leave_playing(GamePhase::GameOver);
            }
        }

        std::mem::take(&mut self.pending_events)
    }

    /// Render snapshot of the current state.
    pub fn snapshot(&self) -> WorldSnapshot {
        systems::snapshot::build_snapshot(&self.state, self.time, self.phase)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Read-only access to the world state.
    pub fn state(&self) -> &WorldState {
        &self.state
    }

    /// Mutable access for scenario setup in tests and tools.
    pub fn state_mut(&mut self) -> &mut WorldState {
        &mut self.state
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRun => {
                if matches!(self.phase, GamePhase::Start | GamePhase::GameOver) {
                    self.start_run();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Playing {
                    self.leave_playing(GamePhase::Paused);
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    info!("run resumed");
                    self.phase = GamePhase::Playing;
                }
            }
            PlayerCommand::ReturnToStart => {
                if self.phase != GamePhase::Start {
                    self.leave_playing(GamePhase::Start);
                }
            }
        }
    }

    fn start_run(&mut self) {
        info!("run started (seed {})", self.config.seed);
        self.state = WorldState::new(&self.config, self.time.now_ms);
        self.phase = GamePhase::Playing;
        self.pending_events.extend([
            GameEvent::ScoreChanged { score: 0 },
            GameEvent::LevelChanged { level: 1 },
            GameEvent::HealthChanged {
                health: self.state.player.health,
            },
            GameEvent::Music {
                cue: MusicCue::Normal,
            },
        ]);
    }

    /// Every exit from PLAYING drops the transient entities and cancels
    /// any boss encounter.
    fn leave_playing(&mut self, next: GamePhase) {
        info!("phase {:?} -> {:?}", self.phase, next);
        self.state.clear_transients();
        self.phase = next;
    }
}
