//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{SessionOutcome, StructureKind};

/// A structure struck by an incoming projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureRef {
    pub kind: StructureKind,
    pub index: u32,
}

/// Discrete things that happened during a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new session began.
    SessionStarted,
    /// An outgoing projectile left a launch site.
    Fired {
        site_index: u32,
        target_x: f64,
        target_y: f64,
        ammo_left: u32,
    },
    /// An outgoing projectile reached its tap point.
    Detonation { x: f64, y: f64 },
    /// An incoming projectile reached its target.
    Impact {
        x: f64,
        y: f64,
        struck: Option<StructureRef>,
    },
    /// A blast destroyed an incoming projectile.
    Intercept { x: f64, y: f64, score: u32 },
    /// Score reached the win threshold.
    SessionWon { score: u32, tick: u64 },
    /// Every launch site was destroyed.
    SessionLost { score: u32, tick: u64 },
}

impl GameEvent {
    /// The outcome carried by a terminal event.
    pub fn outcome(&self) -> Option<SessionOutcome> {
        match self {
            GameEvent::SessionWon { .. } => Some(SessionOutcome::Won),
            GameEvent::SessionLost { .. } => Some(SessionOutcome::Lost),
            _ => None,
        }
    }
}
