//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::BlastCause;
use crate::types::Position;

/// A defended city on the ground line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct City {
    /// Index among cities, in left-to-right layout order.
    pub index: u32,
    /// Cleared on impact; never set again within a session.
    pub active: bool,
}

/// A launch site (battery) the player fires from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LaunchSite {
    /// Index among launch sites, in left-to-right layout order.
    pub index: u32,
    /// Cleared on impact, independent of remaining ammo.
    pub active: bool,
    pub ammo: u32,
    /// Fixed when the site is created.
    pub max_ammo: u32,
}

/// Marks an entity as an enemy projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Incoming;

/// Marks an entity as a player projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Outgoing;

/// Flight state of an incoming projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IncomingFlight {
    /// Copied from the structure picked at spawn. Not a live reference.
    pub target: Position,
    /// Units per normalized frame.
    pub speed: f64,
    /// Current bearing toward the target (radians).
    pub heading: f64,
}

/// Flight state of an outgoing projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OutgoingFlight {
    /// Launch site position at fire time.
    pub origin: Position,
    /// Tap point.
    pub target: Position,
    pub speed: f64,
    pub heading: f64,
    /// Index of the launch site that fired it.
    pub site_index: u32,
}

/// An expanding-then-contracting interception volume.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Blast {
    pub radius: f64,
    pub max_radius: f64,
    /// Normalized progress, 0.0 at creation, removed at 1.0.
    pub life: f64,
    pub cause: BlastCause,
}
