//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first session, or after returning to the menu.
    #[default]
    Menu,
    /// A session is running; the world advances every frame.
    Playing,
    /// Score reached the win threshold.
    Won,
    /// Every launch site was destroyed.
    Lost,
}

impl GamePhase {
    /// Whether the phase ends a session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Kind of defended entity sitting on the ground line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    City,
    LaunchSite,
}

/// What produced a blast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlastCause {
    /// An outgoing projectile reached its tap point.
    Interceptor,
    /// An incoming projectile reached its target.
    Impact,
    /// An incoming projectile was caught by another blast.
    Chain,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionOutcome {
    Won,
    Lost,
}
