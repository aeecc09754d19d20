//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is moved into this thread. Commands arrive via `mpsc` channel and
//! are applied immediately, before the next frame. Snapshots are stored in
//! shared state for polling, and session outcomes go to a `SessionObserver`.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::Context;
use log::{info, warn};

use bastion_core::config::EngineConfig;
use bastion_core::constants::TICK_RATE;
use bastion_core::events::GameEvent;
use bastion_core::state::GameStateSnapshot;
use bastion_sim::engine::SimulationEngine;

use crate::state::GameLoopCommand;

/// Nominal duration of one frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Receives the end of each session.
pub trait SessionObserver: Send {
    fn on_win(&mut self, score: u32, tick: u64);
    fn on_loss(&mut self, score: u32, tick: u64);
}

/// Observer that only logs outcomes.
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl SessionObserver for LoggingObserver {
    fn on_win(&mut self, score: u32, tick: u64) {
        info!("victory: score {score} after {tick} frames");
    }

    fn on_loss(&mut self, score: u32, tick: u64) {
        info!("defeat: score {score} after {tick} frames");
    }
}

/// Forward terminal events to the observer.
pub fn notify_observer(events: &[GameEvent], observer: &mut dyn SessionObserver) {
    for event in events {
        match *event {
            GameEvent::SessionWon { score, tick } => observer.on_win(score, tick),
            GameEvent::SessionLost { score, tick } => observer.on_loss(score, tick),
            _ => {}
        }
    }
}

/// Whether the loop should keep going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// The engine plus everything a frame touches outside it.
pub struct GameLoop {
    engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    observer: Box<dyn SessionObserver>,
}

impl GameLoop {
    pub fn new(
        engine: SimulationEngine,
        cmd_rx: mpsc::Receiver<GameLoopCommand>,
        latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
        observer: Box<dyn SessionObserver>,
    ) -> Self {
        Self {
            engine,
            cmd_rx,
            latest_snapshot,
            observer,
        }
    }

    /// Apply every pending command. Exits on Shutdown or channel disconnect.
    pub fn drain_commands(&mut self) -> LoopControl {
        loop {
            match self.cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    self.engine.command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return LoopControl::Exit,
                Err(mpsc::TryRecvError::Empty) => return LoopControl::Continue,
                Err(mpsc::TryRecvError::Disconnected) => return LoopControl::Exit,
            }
        }
    }

    /// One frame: drain commands, advance the engine, publish the snapshot.
    pub fn step(&mut self, elapsed_ms: f64) -> LoopControl {
        if self.drain_commands() == LoopControl::Exit {
            return LoopControl::Exit;
        }

        let snapshot = self.engine.tick(elapsed_ms);
        notify_observer(&snapshot.events, self.observer.as_mut());

        if let Ok(mut lock) = self.latest_snapshot.lock() {
            *lock = Some(snapshot);
        }
        LoopControl::Continue
    }

    /// Run until Shutdown or channel disconnect, one frame per `FRAME_DURATION`.
    pub fn run(mut self) {
        info!("game loop started at {TICK_RATE}Hz");
        let mut last_frame = Instant::now();
        let mut next_frame_time = last_frame;

        loop {
            let now = Instant::now();
            let elapsed = now - last_frame;
            last_frame = now;
            if elapsed > FRAME_DURATION * 2 {
                warn!("frame overran: {:.1}ms", elapsed.as_secs_f64() * 1000.0);
            }

            if self.step(elapsed.as_secs_f64() * 1000.0) == LoopControl::Exit {
                break;
            }

            next_frame_time += FRAME_DURATION;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > FRAME_DURATION * 2 {
                // Too far behind. Reset to avoid a catch-up spiral.
                next_frame_time = now;
            }
        }
        info!("game loop stopped");
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: EngineConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    observer: Box<dyn SessionObserver>,
) -> anyhow::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let engine = SimulationEngine::try_new(config).context("invalid engine configuration")?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let game_loop = GameLoop::new(engine, cmd_rx, latest_snapshot, observer);

    let handle = std::thread::Builder::new()
        .name("bastion-game-loop".into())
        .spawn(move || game_loop.run())
        .context("failed to spawn game loop thread")?;

    Ok((cmd_tx, handle))
}
