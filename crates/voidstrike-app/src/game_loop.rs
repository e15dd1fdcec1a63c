//! Game loop thread: runs the simulation engine at the fixed 16 ms cadence.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. Events are logged and
//! forwarded to the host; snapshots are stored for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, info};

use voidstrike_core::commands::TickInput;
use voidstrike_core::constants::TICK_MS;
use voidstrike_core::events::GameEvent;
use voidstrike_core::state::WorldSnapshot;
use voidstrike_sim::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Wall-clock duration of one logical tick.
pub const TICK_DURATION: Duration = Duration::from_millis(TICK_MS);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the host to use and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<WorldSnapshot>>>,
    event_tx: mpsc::Sender<GameEvent>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), String> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("voidstrike-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot, &event_tx);
        })
        .map_err(|e| format!("Failed to spawn game loop thread: {e}"))?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<WorldSnapshot>>,
    event_tx: &mpsc::Sender<GameEvent>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut input = TickInput::default();
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    debug!("queueing {cmd:?}");
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Input(next)) => input = next,
                Ok(GameLoopCommand::Shutdown) => {
                    info!("game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let events = engine.tick(&input);

        // 3. Log and forward events; a dropped receiver is not fatal
        for event in events {
            info!("{}", serde_json::to_string(&event).unwrap_or_default());
            let _ = event_tx.send(event);
        }

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(engine.snapshot());
        }

        // 5. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voidstrike_core::commands::PlayerCommand;
    use voidstrike_core::enums::GamePhase;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::StartRun))
            .unwrap();
        tx.send(GameLoopCommand::Input(TickInput {
            fire: true,
            ..Default::default()
        }))
        .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<GameLoopCommand> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::StartRun)
        ));
        assert!(matches!(commands[1], GameLoopCommand::Input(i) if i.fire));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_runs_and_shuts_down() {
        let snapshot = Arc::new(Mutex::new(None));
        let (event_tx, event_rx) = mpsc::channel();
        let (cmd_tx, handle) =
            spawn_game_loop(SimConfig::default(), snapshot.clone(), event_tx).unwrap();

        cmd_tx
            .send(GameLoopCommand::Player(PlayerCommand::StartRun))
            .unwrap();
        std::thread::sleep(Duration::from_millis(200));
        cmd_tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();

        let events: Vec<GameEvent> = event_rx.try_iter().collect();
        assert!(events.contains(&GameEvent::ScoreChanged { score: 0 }));
        let latest = snapshot.lock().unwrap().clone().unwrap();
        assert_eq!(latest.phase, GamePhase::Playing);
        assert!(latest.time.tick > 0);
    }

    #[test]
    fn test_loop_exits_when_host_disconnects() {
        let (event_tx, _event_rx) = mpsc::channel();
        let (cmd_tx, handle) =
            spawn_game_loop(SimConfig::default(), Arc::new(Mutex::new(None)), event_tx)
                .unwrap();
        drop(cmd_tx);
        handle.join().unwrap();
    }

    #[test]
    fn test_snapshot_survives_json() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartRun);
        let input = TickInput {
            fire: true,
            ..Default::default()
        };

        // Run enough ticks to populate entities
        for _ in 0..300 {
            engine.tick(&input);
        }

        let snapshot = engine.snapshot();
        assert!(!snapshot.bullets.is_empty());
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: WorldSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_tick_duration_constant() {
        assert_eq!(TICK_DURATION.as_millis(), 16);
    }
}
