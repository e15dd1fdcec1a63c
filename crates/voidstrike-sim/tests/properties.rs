//! Property tests for the run-level invariants.

use proptest::prelude::*;

use voidstrike_sim::core::commands::{PlayerCommand, TickInput};
use voidstrike_sim::core::constants::ESCAPE_PENALTY;
use voidstrike_sim::core::enums::EnemyKind;
use voidstrike_sim::core::events::GameEvent;
use voidstrike_sim::systems::enemy_ai;
use voidstrike_sim::{world_setup, SimConfig, SimulationEngine, WorldState};

fn input_strategy() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(up, down, left, right, fire)| TickInput {
            up,
            down,
            left,
            right,
            fire,
            pointer: None,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn health_and_level_stay_in_bounds(
        seed in any::<u64>(),
        start_level in 1u32..60,
        inputs in prop::collection::vec(input_strategy(), 1..600),
    ) {
        let mut engine = SimulationEngine::new(SimConfig { seed, ..Default::default() });
        engine.queue_command(PlayerCommand::StartRun);
        engine.tick(&TickInput::default());
        engine.state_mut().progress.level = start_level;

        let max_health = engine.config().max_health;
        let mut last_level = start_level;
        for input in &inputs {
            let events = engine.tick(input);
            let snapshot = engine.snapshot();
            prop_assert!(snapshot.player.health <= max_health);
            prop_assert!(snapshot.level >= last_level);
            last_level = snapshot.level;

            let mut last_score = None;
            for event in events {
                match event {
                    GameEvent::HealthChanged { health } => prop_assert!(health <= max_health),
                    GameEvent::ScoreChanged { score } => last_score = Some(score),
                    _ => {}
                }
            }
            if let Some(score) = last_score {
                prop_assert_eq!(score, snapshot.score);
            }
            if snapshot.player.health == 0 {
                break;
            }
        }
    }

    #[test]
    fn escape_penalty_is_min_of_score(score in 0u64..5000, escaped in 0usize..12) {
        let mut state = WorldState::new(&SimConfig::default(), 0);
        state.progress.score = score;
        let below = state.field.height + 1.0;
        for i in 0..escaped {
            let e = world_setup::spawn_enemy(&mut state.world, EnemyKind::Basic, 1, i as f32 * 40.0, 0);
            if let Ok(mut body) = state.world.get::<&mut voidstrike_sim::core::components::Body>(e) {
                body.pos.y = below;
            }
        }

        let mut events = Vec::new();
        enemy_ai::cull_escaped(&mut state.world, &state.field, &mut state.progress, &mut events, &mut Vec::new());

        let expected = score - score.min(ESCAPE_PENALTY * escaped as u64);
        prop_assert_eq!(state.progress.score, expected);
        prop_assert_eq!(events.len(), usize::from(expected != score));
    }
}
