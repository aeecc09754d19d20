//! Headless sessions: drive the engine frame by frame without sleeping.

use log::debug;
use serde::Serialize;

use bastion_core::config::{ConfigError, EngineConfig};
use bastion_core::enums::SessionOutcome;
use bastion_core::state::GameStateSnapshot;
use bastion_sim::engine::SimulationEngine;

use crate::autopilot::Autopilot;

/// How to drive a headless session.
#[derive(Debug, Clone)]
pub struct HeadlessOptions {
    /// Stop after this many frames even if the session is undecided.
    pub max_frames: u64,
    /// Simulated duration of every frame.
    pub frame_ms: f64,
    /// Frames between autopilot shots. `None` never fires.
    pub autopilot_interval: Option<u64>,
}

impl Default for HeadlessOptions {
    fn default() -> Self {
        Self {
            max_frames: 36_000,
            frame_ms: 16.0,
            autopilot_interval: Some(6),
        }
    }
}

/// Summary of one finished (or capped) session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub seed: u64,
    /// `None` when the frame cap was hit first.
    pub outcome: Option<SessionOutcome>,
    pub frames: u64,
    pub score: u32,
    pub kills: u32,
    pub impacts: u32,
    pub projectiles_fired: u32,
    pub cities_remaining: u32,
    pub sites_remaining: u32,
    pub ammo_remaining: u32,
}

impl SessionReport {
    fn from_snapshot(
        seed: u64,
        outcome: Option<SessionOutcome>,
        frames: u64,
        snapshot: &GameStateSnapshot,
    ) -> Self {
        let score = &snapshot.score;
        Self {
            seed,
            outcome,
            frames,
            score: score.score,
            kills: score.kills,
            impacts: score.impacts,
            projectiles_fired: score.projectiles_fired,
            cities_remaining: score.cities_remaining,
            sites_remaining: score.sites_remaining,
            ammo_remaining: score.ammo_remaining,
        }
    }
}

/// Run one session to completion or to the frame cap.
pub fn run_headless_session(
    config: EngineConfig,
    options: &HeadlessOptions,
) -> Result<SessionReport, ConfigError> {
    let seed = config.seed;
    let mut engine = SimulationEngine::try_new(config)?;
    let mut autopilot = options
        .autopilot_interval
        .map(|interval| Autopilot::new(interval, engine.config()));

    engine.start();
    let mut snapshot = engine.snapshot();
    let mut outcome = None;

    while engine.time().tick < options.max_frames {
        if let Some(shot) = autopilot.as_mut().and_then(|a| a.next_shot(&snapshot)) {
            engine.fire_at(shot);
        }
        snapshot = engine.tick(options.frame_ms);

        outcome = snapshot.events.iter().find_map(|e| e.outcome());
        if outcome.is_some() {
            break;
        }
    }

    let frames = engine.time().tick;
    debug!("seed {seed}: {outcome:?} after {frames} frames");
    Ok(SessionReport::from_snapshot(seed, outcome, frames, &snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_cap_without_spawns() {
        let config = EngineConfig {
            spawn_probability: 0.0,
            ..Default::default()
        };
        let options = HeadlessOptions {
            max_frames: 500,
            autopilot_interval: None,
            ..Default::default()
        };
        let report = run_headless_session(config, &options).unwrap();
        assert_eq!(report.outcome, None);
        assert_eq!(report.frames, 500);
        assert_eq!(report.projectiles_fired, 0);
        assert_eq!(report.ammo_remaining, 8000);
        assert_eq!(report.sites_remaining, 3);
    }

    #[test]
    fn test_undefended_session_is_lost() {
        let config = EngineConfig {
            seed: 9,
            spawn_probability: 1.0,
            ..Default::default()
        };
        // One-second frames: blasts never live long enough to intercept.
        let options = HeadlessOptions {
            max_frames: 5000,
            frame_ms: 1000.0,
            autopilot_interval: None,
        };
        let report = run_headless_session(config, &options).unwrap();
        assert_eq!(report.outcome, Some(SessionOutcome::Lost));
        assert_eq!(report.sites_remaining, 0);
        assert_eq!(report.score, 0);
        assert!(report.frames < 5000);
    }

    #[test]
    fn test_autopilot_fires_and_scores() {
        let config = EngineConfig {
            seed: 3,
            spawn_probability: 0.05,
            ..Default::default()
        };
        let options = HeadlessOptions {
            max_frames: 3000,
            ..Default::default()
        };
        let report = run_headless_session(config, &options).unwrap();
        assert!(report.projectiles_fired > 0);
        assert_eq!(report.score, report.kills * 20);
        if report.sites_remaining == 3 {
            assert_eq!(report.ammo_remaining + report.projectiles_fired, 8000);
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig {
            spawn_probability: 2.0,
            ..Default::default()
        };
        assert!(matches!(
            run_headless_session(config, &HeadlessOptions::default()),
            Err(ConfigError::InvalidSpawnProbability(_))
        ));
    }

    #[test]
    fn test_report_serializes() {
        let config = EngineConfig {
            spawn_probability: 0.0,
            ..Default::default()
        };
        let options = HeadlessOptions {
            max_frames: 1,
            ..Default::default()
        };
        let report = run_headless_session(config, &options).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""outcome":null"#), "got {json}");
        assert!(json.contains(r#""frames":1"#));
    }
}
