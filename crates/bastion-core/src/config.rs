//! Engine configuration.
//!
//! Every tunable is fixed when the engine is constructed. A config file only
//! needs to name the fields it overrides; the rest fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Errors raised while loading or validating an `EngineConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("playfield must have positive size, got {width}x{height}")]
    InvalidPlayfield { width: f64, height: f64 },

    #[error("ground offset {offset} lies outside the playfield height {height}")]
    InvalidGroundOffset { offset: f64, height: f64 },

    #[error("at least one launch site is required")]
    NoLaunchSites,

    #[error("layout places at most 3 launch sites (first, middle and last slot), got {0}")]
    TooManyLaunchSites(u32),

    #[error("at most {max} cities and launch sites fit on the ground line, got {requested}")]
    TooManySlots { requested: u64, max: u32 },

    #[error("slot spacing {spacing} must exceed the structure epsilon {epsilon}")]
    SlotsTooClose { spacing: f64, epsilon: f64 },

    #[error("total launch site ammo {0} does not fit in a u32")]
    AmmoOverflow(u64),

    #[error("spawn probability must lie in [0, 1], got {0}")]
    InvalidSpawnProbability(f64),

    #[error("win score must be positive")]
    ZeroWinScore,

    #[error("score per kill must be positive")]
    ZeroScorePerKill,

    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("incoming speed jitter must be non-negative, got {0}")]
    NegativeJitter(f64),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fixed inputs to a `SimulationEngine`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// RNG seed for spawn decisions.
    pub seed: u64,
    pub playfield_width: f64,
    pub playfield_height: f64,
    pub ground_offset: f64,
    pub city_count: u32,
    pub battery_count: u32,
    pub outer_battery_ammo: u32,
    pub middle_battery_ammo: u32,
    pub win_score: u32,
    pub score_per_kill: u32,
    pub blast_max_radius: f64,
    pub blast_duration_ms: f64,
    pub spawn_probability: f64,
    pub incoming_speed_base: f64,
    pub incoming_speed_jitter: f64,
    pub outgoing_speed: f64,
    pub impact_threshold: f64,
    pub completion_threshold: f64,
    pub structure_epsilon: f64,
    /// Frame duration (ms) that speeds are expressed against.
    pub frame_ms: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            playfield_width: DEFAULT_PLAYFIELD_WIDTH,
            playfield_height: DEFAULT_PLAYFIELD_HEIGHT,
            ground_offset: DEFAULT_GROUND_OFFSET,
            city_count: DEFAULT_CITY_COUNT,
            battery_count: DEFAULT_BATTERY_COUNT,
            outer_battery_ammo: DEFAULT_OUTER_BATTERY_AMMO,
            middle_battery_ammo: DEFAULT_MIDDLE_BATTERY_AMMO,
            win_score: DEFAULT_WIN_SCORE,
            score_per_kill: DEFAULT_SCORE_PER_KILL,
            blast_max_radius: DEFAULT_BLAST_MAX_RADIUS,
            blast_duration_ms: DEFAULT_BLAST_DURATION_MS,
            spawn_probability: DEFAULT_SPAWN_PROBABILITY,
            incoming_speed_base: DEFAULT_INCOMING_SPEED_BASE,
            incoming_speed_jitter: DEFAULT_INCOMING_SPEED_JITTER,
            outgoing_speed: DEFAULT_OUTGOING_SPEED,
            impact_threshold: DEFAULT_IMPACT_THRESHOLD,
            completion_threshold: DEFAULT_COMPLETION_THRESHOLD,
            structure_epsilon: DEFAULT_STRUCTURE_EPSILON,
            frame_ms: DEFAULT_FRAME_MS,
        }
    }
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Total number of ground slots (cities + launch sites).
    pub fn slot_count(&self) -> u32 {
        self.city_count.saturating_add(self.battery_count)
    }

    /// Horizontal distance between neighbouring ground slots.
    pub fn slot_spacing(&self) -> f64 {
        self.playfield_width / (f64::from(self.slot_count()) + 1.0)
    }

    /// Check that the config describes a playable world.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.playfield_width > 0.0 && self.playfield_height > 0.0)
            || !self.playfield_width.is_finite()
            || !self.playfield_height.is_finite()
        {
            return Err(ConfigError::InvalidPlayfield {
                width: self.playfield_width,
                height: self.playfield_height,
            });
        }
        if !(0.0..self.playfield_height).contains(&self.ground_offset) {
            return Err(ConfigError::InvalidGroundOffset {
                offset: self.ground_offset,
                height: self.playfield_height,
            });
        }
        if self.battery_count == 0 {
            return Err(ConfigError::NoLaunchSites);
        }
        if self.battery_count > 3 {
            return Err(ConfigError::TooManyLaunchSites(self.battery_count));
        }
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(ConfigError::InvalidSpawnProbability(self.spawn_probability));
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        if self.score_per_kill == 0 {
            return Err(ConfigError::ZeroScorePerKill);
        }
        for (name, value) in [
            ("blast_max_radius", self.blast_max_radius),
            ("blast_duration_ms", self.blast_duration_ms),
            ("incoming_speed_base", self.incoming_speed_base),
            ("outgoing_speed", self.outgoing_speed),
            ("impact_threshold", self.impact_threshold),
            ("completion_threshold", self.completion_threshold),
            ("structure_epsilon", self.structure_epsilon),
            ("frame_ms", self.frame_ms),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if !(self.incoming_speed_jitter >= 0.0 && self.incoming_speed_jitter.is_finite()) {
            return Err(ConfigError::NegativeJitter(self.incoming_speed_jitter));
        }

        let slots = self
            .city_count
            .checked_add(self.battery_count)
            .filter(|&slots| slots <= MAX_GROUND_SLOTS);
        if slots.is_none() {
            return Err(ConfigError::TooManySlots {
                requested: u64::from(self.city_count) + u64::from(self.battery_count),
                max: MAX_GROUND_SLOTS,
            });
        }
        // Impacts find their structure by position, so slots must not coincide.
        if self.slot_spacing() <= self.structure_epsilon {
            return Err(ConfigError::SlotsTooClose {
                spacing: self.slot_spacing(),
                epsilon: self.structure_epsilon,
            });
        }
        let largest_magazine = self.outer_battery_ammo.max(self.middle_battery_ammo);
        let ammo_bound = u64::from(self.battery_count) * u64::from(largest_magazine);
        if ammo_bound > u64::from(u32::MAX) {
            return Err(ConfigError::AmmoOverflow(ammo_bound));
        }
        Ok(())
    }
}
