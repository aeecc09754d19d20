//! Application state shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use bastion_core::commands::PlayerCommand;
use bastion_core::state::GameStateSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to apply to the simulation engine before the next frame.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` sits behind a `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` for state that does not exist before the loop starts
/// - `Arc<Mutex<...>>` for the latest snapshot (shared with the game loop thread)
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` until the loop is spawned.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for polling. Updated by the game loop after each frame.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Whether the game loop is currently running.
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a player command to the game loop.
    /// Returns false if the loop is not running or has hung up.
    pub fn send(&self, command: PlayerCommand) -> bool {
        if !self.is_running() {
            return false;
        }
        let Ok(tx) = self.command_tx.lock() else {
            return false;
        };
        match tx.as_ref() {
            Some(tx) => tx.send(GameLoopCommand::Player(command)).is_ok(),
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.lock().map(|running| *running).unwrap_or(false)
    }

    /// Ask the game loop to stop and forget its sender.
    pub fn shutdown(&self) {
        if let Ok(mut tx) = self.command_tx.lock() {
            if let Some(tx) = tx.take() {
                let _ = tx.send(GameLoopCommand::Shutdown);
            }
        }
        if let Ok(mut running) = self.running.lock() {
            *running = false;
        }
    }

    /// Clone of the most recent snapshot, if any frame has run yet.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|lock| lock.clone())
    }
}
