use std::time::{Duration, Instant};

use log::{info, warn};

use voidstrike_app::state::AppState;
use voidstrike_app::{autopilot, host};
use voidstrike_core::commands::PlayerCommand;
use voidstrike_core::enums::GamePhase;
use voidstrike_sim::SimConfig;

/// How long the autopilot demo plays before shutting down.
const DEMO_LENGTH: Duration = Duration::from_secs(30);
const STEER_INTERVAL: Duration = Duration::from_millis(50);

fn load_config() -> Result<SimConfig, String> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .map_err(|e| format!("failed to read {path}: {e}"))?;
            SimConfig::from_json(&json)
        }
        None => Ok(SimConfig::default()),
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    info!("starting autopilot demo with seed {}", config.seed);

    let state = AppState::new();
    let events = host::start_simulation(&state, config)?;
    host::send_command(&state, PlayerCommand::StartRun)?;

    let started = Instant::now();
    let mut event_count = 0usize;
    while started.elapsed() < DEMO_LENGTH {
        std::thread::sleep(STEER_INTERVAL);
        event_count += events.try_iter().count();

        let Some(snapshot) = host::get_snapshot(&state)? else {
            continue;
        };
        if snapshot.phase == GamePhase::GameOver {
            warn!("ship lost at level {}", snapshot.level);
            break;
        }
        host::send_input(&state, autopilot::steer(&snapshot))?;
    }

    let final_snapshot = host::get_snapshot(&state)?;
    host::shutdown(&state)?;

    if let Some(snapshot) = final_snapshot {
        info!(
            "demo finished: score {}, level {}, {} events",
            snapshot.score, snapshot.level, event_count
        );
    }
    Ok(())
}
