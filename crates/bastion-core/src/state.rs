//! Game state snapshot: the complete visible state handed to the renderer each frame.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state produced after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: ScoreView,
    pub cities: Vec<CityView>,
    pub launch_sites: Vec<LaunchSiteView>,
    pub incoming: Vec<IncomingView>,
    pub outgoing: Vec<OutgoingView>,
    pub blasts: Vec<BlastView>,
    /// Events emitted since the previous snapshot.
    pub events: Vec<GameEvent>,
}

/// A city on the ground line. Destroyed cities stay listed with `active = false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityView {
    pub id: u64,
    pub index: u32,
    pub position: Position,
    pub active: bool,
}

/// A launch site with its ammo gauge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchSiteView {
    pub id: u64,
    pub index: u32,
    pub position: Position,
    pub active: bool,
    pub ammo: u32,
    pub max_ammo: u32,
    /// `ammo / max_ammo`, 0.0 when `max_ammo` is zero.
    pub ammo_fraction: f64,
    /// Below `LOW_AMMO_FRACTION`.
    pub low_ammo: bool,
}

/// An enemy projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingView {
    pub id: u64,
    pub position: Position,
    pub target: Position,
    pub speed: f64,
    /// Bearing toward the target (radians), for orienting the sprite.
    pub heading: f64,
}

/// A player projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutgoingView {
    pub id: u64,
    pub position: Position,
    /// Start of the trail.
    pub origin: Position,
    /// Tap point, drawn as the target marker.
    pub target: Position,
    pub heading: f64,
    pub site_index: u32,
}

/// A live blast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlastView {
    pub id: u64,
    pub center: Position,
    pub radius: f64,
    pub max_radius: f64,
    pub life: f64,
    pub cause: BlastCause,
}

/// Running score for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub win_score: u32,
    pub kills: u32,
    pub impacts: u32,
    pub projectiles_fired: u32,
    pub cities_remaining: u32,
    pub sites_remaining: u32,
    pub ammo_remaining: u32,
}
