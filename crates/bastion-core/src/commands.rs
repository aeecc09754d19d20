//! Player commands sent from the host to the simulation.
//!
//! Commands are applied synchronously when handed to the engine, never
//! deferred to a later frame.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start (or restart) a session with a freshly laid-out world.
    Start,
    /// Fire from the nearest eligible launch site toward a playfield point.
    FireAt { x: f64, y: f64 },
    /// Abandon the session and go back to the menu.
    ReturnToMenu,
}

/// Result of a fire request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FireOutcome {
    /// One outgoing projectile was created.
    Fired {
        site_index: u32,
        /// Entity id of the new outgoing projectile.
        projectile: u64,
        origin: Position,
        ammo_left: u32,
    },
    /// Every launch site is destroyed or out of ammo.
    NoEligibleSite,
    /// Input outside a running session is ignored.
    NotPlaying,
}

impl FireOutcome {
    pub fn fired(&self) -> bool {
        matches!(self, FireOutcome::Fired { .. })
    }
}
