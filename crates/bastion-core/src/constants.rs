//! Simulation constants and tuning defaults.
//!
//! The `DEFAULT_*` values seed `EngineConfig::default()`; everything else is
//! a fixed design constant.

/// Nominal host frame rate (Hz). The engine itself is driven by measured frame time.
pub const TICK_RATE: u32 = 60;

/// Frame duration (ms) that movement speeds are normalized to.
pub const DEFAULT_FRAME_MS: f64 = 16.0;

// --- Playfield ---

/// Logical playfield width.
pub const DEFAULT_PLAYFIELD_WIDTH: f64 = 800.0;

/// Logical playfield height.
pub const DEFAULT_PLAYFIELD_HEIGHT: f64 = 600.0;

/// Distance of the ground line above the bottom edge.
pub const DEFAULT_GROUND_OFFSET: f64 = 20.0;

// --- Layout ---

pub const DEFAULT_CITY_COUNT: u32 = 6;

pub const DEFAULT_BATTERY_COUNT: u32 = 3;

/// Upper bound on cities plus launch sites accepted by config validation.
pub const MAX_GROUND_SLOTS: u32 = 256;

/// Ammo for the two outer launch sites.
pub const DEFAULT_OUTER_BATTERY_AMMO: u32 = 2000;

/// Ammo for the middle launch site (double the outer ones).
pub const DEFAULT_MIDDLE_BATTERY_AMMO: u32 = 4000;

// --- Scoring ---

pub const DEFAULT_WIN_SCORE: u32 = 1000;

pub const DEFAULT_SCORE_PER_KILL: u32 = 20;

// --- Blasts ---

pub const DEFAULT_BLAST_MAX_RADIUS: f64 = 40.0;

/// Full grow-then-shrink lifetime of a blast (ms).
pub const DEFAULT_BLAST_DURATION_MS: f64 = 1000.0;

// --- Spawning ---

/// Chance of spawning one incoming projectile per frame (not per ms).
pub const DEFAULT_SPAWN_PROBABILITY: f64 = 0.02;

/// Incoming projectile base speed (units per normalized frame).
pub const DEFAULT_INCOMING_SPEED_BASE: f64 = 1.2;

/// Upper bound of the uniform jitter added to the base speed.
pub const DEFAULT_INCOMING_SPEED_JITTER: f64 = 0.6;

/// Outgoing projectile speed (units per normalized frame).
pub const DEFAULT_OUTGOING_SPEED: f64 = 10.0;

// --- Proximity ---

/// Incoming projectile impacts when this close to its target (inclusive).
pub const DEFAULT_IMPACT_THRESHOLD: f64 = 5.0;

/// Outgoing projectile detonates when this close to its tap point (inclusive).
pub const DEFAULT_COMPLETION_THRESHOLD: f64 = 10.0;

/// Per-axis tolerance when matching an impact point to a structure.
pub const DEFAULT_STRUCTURE_EPSILON: f64 = 1.0;

// --- Display ---

/// Ammo fraction below which a launch site is flagged as running low.
pub const LOW_AMMO_FRACTION: f64 = 0.2;
