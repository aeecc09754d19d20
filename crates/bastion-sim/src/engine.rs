//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, applies player commands
//! synchronously, runs the per-frame system pipeline and produces
//! `GameStateSnapshot`s. Completely headless, so it can be driven from tests,
//! a game-loop thread or a batch runner alike.

use hecs::World;
use log::{info, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bastion_core::commands::{FireOutcome, PlayerCommand};
use bastion_core::config::{ConfigError, EngineConfig};
use bastion_core::enums::{GamePhase, SessionOutcome};
use bastion_core::events::GameEvent;
use bastion_core::state::GameStateSnapshot;
use bastion_core::types::{Position, SimTime};

use crate::score::ScoreState;
use crate::systems;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    config: EngineConfig,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    score: ScoreState,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::from_validated(EngineConfig::default())
    }

    /// Create an engine from a custom configuration, rejecting unplayable ones.
    pub fn try_new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: EngineConfig) -> Self {
        Self {
            world: World::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            time: SimTime::default(),
            phase: GamePhase::default(),
            score: ScoreState::default(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Start a fresh session from any phase.
    ///
    /// Lays out every city and launch site with full ammo, clears everything
    /// in flight and resets score, statistics and time.
    pub fn start(&mut self) {
        self.world.clear();
        world_setup::setup_session(&mut self.world, &self.config);
        self.score = ScoreState::default();
        self.time = SimTime::default();
        self.events.clear();
        self.events.push(GameEvent::SessionStarted);
        self.phase = GamePhase::Playing;
        info!(
            "session started: {} cities, {} launch sites, win at {}",
            self.config.city_count, self.config.battery_count, self.config.win_score
        );
    }

    /// Apply a player command immediately.
    ///
    /// Returns the fire outcome for `FireAt`, `None` for every other command.
    pub fn command(&mut self, command: PlayerCommand) -> Option<FireOutcome> {
        match command {
            PlayerCommand::Start => {
                self.start();
                None
            }
            PlayerCommand::FireAt { x, y } => Some(self.fire_at(Position::new(x, y))),
            PlayerCommand::ReturnToMenu => {
                self.world.clear();
                self.score = ScoreState::default();
                self.time = SimTime::default();
                self.events.clear();
                self.phase = GamePhase::Menu;
                None
            }
        }
    }

    /// Fire from the nearest eligible launch site toward `target`.
    pub fn fire_at(&mut self, target: Position) -> FireOutcome {
        if self.phase != GamePhase::Playing {
            trace!("fire ignored in phase {:?}", self.phase);
            return FireOutcome::NotPlaying;
        }
        systems::fire_control::fire_at(
            &mut self.world,
            &self.config,
            target,
            &mut self.score,
            &mut self.events,
        )
    }

    /// Advance the simulation by one frame of `elapsed_ms` milliseconds and
    /// return the resulting snapshot. Outside `Playing` the world is frozen.
    pub fn tick(&mut self, elapsed_ms: f64) -> GameStateSnapshot {
        if self.phase == GamePhase::Playing {
            let elapsed_ms = if elapsed_ms.is_finite() {
                elapsed_ms.max(0.0)
            } else {
                0.0
            };
            self.run_systems(elapsed_ms);
            self.time.advance(elapsed_ms);
            self.evaluate_terminal();
        }

        let events = std::mem::take(&mut self.events);
        self.build_snapshot(events)
    }

    /// Build a snapshot of the current state without advancing.
    /// Pending events are included but not consumed.
    pub fn snapshot(&self) -> GameStateSnapshot {
        self.build_snapshot(self.events.clone())
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the running score state.
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Get the configuration the engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn an incoming projectile at an explicit position (for testing).
    #[cfg(test)]
    pub fn spawn_test_incoming(
        &mut self,
        position: Position,
        target: Position,
        speed: f64,
    ) -> hecs::Entity {
        world_setup::spawn_incoming_at(&mut self.world, position, target, speed)
    }

    /// Spawn a blast with a preset life and radius (for testing).
    #[cfg(test)]
    pub fn spawn_test_blast(&mut self, center: Position, life: f64) -> hecs::Entity {
        let entity = world_setup::spawn_blast(
            &mut self.world,
            center,
            self.config.blast_max_radius,
            bastion_core::enums::BlastCause::Interceptor,
        );
        if let Ok(mut blast) = self
            .world
            .get::<&mut bastion_core::components::Blast>(entity)
        {
            blast.life = life;
        }
        entity
    }

    /// Get a mutable reference to the ECS world (for testing).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Overwrite the score (for testing).
    #[cfg(test)]
    pub fn set_test_score(&mut self, score: u32) {
        self.score.score = score;
    }

    /// Run all systems in order.
    fn run_systems(&mut self, elapsed_ms: f64) {
        // 1. Spawn
        systems::spawner::run(&mut self.world, &mut self.rng, &self.config);
        // 2. Kinematics
        systems::movement::run(&mut self.world, elapsed_ms, self.config.frame_ms);
        // 3. Impacts and detonations
        systems::impact::run(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        systems::detonation::run(
            &mut self.world,
            &self.config,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 4. Blast lifecycle and interceptions
        systems::blast::run(
            &mut self.world,
            &self.config,
            elapsed_ms,
            &mut self.score,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        trace!(
            "tick {}: {} entities, score {}",
            self.time.tick,
            self.world.len(),
            self.score.score
        );
    }

    /// Leave `Playing` once the session is decided. Runs once per session.
    fn evaluate_terminal(&mut self) {
        let Some(outcome) = systems::terminal::evaluate(&self.world, &self.score, &self.config)
        else {
            return;
        };
        let score = self.score.score;
        let tick = self.time.tick;
        match outcome {
            SessionOutcome::Won => {
                self.phase = GamePhase::Won;
                self.events.push(GameEvent::SessionWon { score, tick });
                info!("session won: score {score} at tick {tick}");
            }
            SessionOutcome::Lost => {
                self.phase = GamePhase::Lost;
                self.events.push(GameEvent::SessionLost { score, tick });
                info!("session lost: score {score} at tick {tick}");
            }
        }
    }

    fn build_snapshot(&self, events: Vec<GameEvent>) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.config,
            &self.score,
            events,
        )
    }
}
