//! Application state shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use voidstrike_core::commands::{PlayerCommand, TickInput};
use voidstrike_core::state::WorldSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A run-level command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Replace the control state applied on every following tick.
    Input(TickInput),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` sits behind a `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` for state that does not exist before `start_simulation`
/// - `Arc<Mutex<...>>` for the latest snapshot (shared with the game loop thread)
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` before `start_simulation` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous polling.
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<WorldSnapshot>>>,
    pub loop_handle: Mutex<Option<JoinHandle<()>>>,
    /// Whether the game loop is currently running.
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_handle: Mutex::new(None),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
