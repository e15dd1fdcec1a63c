//! Host-facing control surface over the game loop thread.
//!
//! The rendering, audio and persistence collaborators call these to drive
//! a run and read its state. All of them are read-only consumers of the
//! snapshot; the simulation is only ever changed through commands.

use std::sync::mpsc;

use voidstrike_core::commands::{PlayerCommand, TickInput};
use voidstrike_core::events::GameEvent;
use voidstrike_core::state::WorldSnapshot;
use voidstrike_sim::SimConfig;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running
/// and returns the receiver for outbound events.
pub fn start_simulation(
    state: &AppState,
    config: SimConfig,
) -> Result<mpsc::Receiver<GameEvent>, String> {
    config.validate()?;
    let mut running = state.running.lock().map_err(|e| e.to_string())?;

    if *running {
        return Err("Simulation already running".into());
    }

    let (event_tx, event_rx) = mpsc::channel();
    let (cmd_tx, handle) =
        game_loop::spawn_game_loop(config, state.latest_snapshot.clone(), event_tx)?;

    *state.command_tx.lock().map_err(|e| e.to_string())? = Some(cmd_tx);
    *state.loop_handle.lock().map_err(|e| e.to_string())? = Some(handle);
    *running = true;

    Ok(event_rx)
}

fn send(state: &AppState, command: GameLoopCommand) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(command)
            .map_err(|e| format!("Failed to send command: {}", e)),
        None => Err("Simulation not started".into()),
    }
}

/// Send a run-level command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), String> {
    send(state, GameLoopCommand::Player(command))
}

/// Replace the control state applied to following ticks.
pub fn send_input(state: &AppState, input: TickInput) -> Result<(), String> {
    send(state, GameLoopCommand::Input(input))
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<WorldSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Stop the game loop and wait for the thread to exit.
pub fn shutdown(state: &AppState) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;
    if !*running {
        return Ok(());
    }

    if let Some(tx) = state.command_tx.lock().map_err(|e| e.to_string())?.take() {
        // A loop that already exited has dropped its receiver.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    if let Some(handle) = state.loop_handle.lock().map_err(|e| e.to_string())?.take() {
        handle
            .join()
            .map_err(|_| "Game loop thread panicked".to_string())?;
    }
    *running = false;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use voidstrike_core::enums::GamePhase;

    #[test]
    fn test_commands_rejected_before_start() {
        let state = AppState::new();
        assert!(send_command(&state, PlayerCommand::StartRun).is_err());
        assert!(send_input(&state, TickInput::default()).is_err());
        assert_eq!(get_snapshot(&state).unwrap(), None);
        assert!(shutdown(&state).is_ok());
    }

    #[test]
    fn test_invalid_config_does_not_start() {
        let state = AppState::new();
        let config = SimConfig {
            max_health: 0,
            ..Default::default()
        };
        assert!(start_simulation(&state, config).is_err());
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_start_drive_and_shutdown() {
        let state = AppState::new();
        let events = start_simulation(&state, SimConfig::default()).unwrap();
        assert!(start_simulation(&state, SimConfig::default()).is_err());

        send_command(&state, PlayerCommand::StartRun).unwrap();
        send_input(
            &state,
            TickInput {
                fire: true,
                ..Default::default()
            },
        )
        .unwrap();
        std::thread::sleep(Duration::from_millis(200));

        let snapshot = get_snapshot(&state).unwrap().unwrap();
        assert_eq!(snapshot.phase, GamePhase::Playing);
        assert!(events
            .try_iter()
            .any(|e| e == GameEvent::LevelChanged { level: 1 }));

        shutdown(&state).unwrap();
        assert!(!*state.running.lock().unwrap());
        assert!(send_command(&state, PlayerCommand::Pause).is_err());
    }
}
