//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in playfield space.
/// Origin is the top-left corner, x grows right, y grows down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of frames advanced since the session started.
    pub tick: u64,
    /// Elapsed simulation time in milliseconds (sum of frame deltas).
    pub elapsed_ms: f64,
}

/// Client-space rectangle the playfield is drawn into.
///
/// Hosts use it to turn pointer coordinates into playfield coordinates
/// before handing them to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_vec().distance(other.as_vec())
    }

    /// Angle of the straight line toward `other`, in radians (`atan2(dy, dx)`).
    pub fn bearing_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dy.atan2(dx)
    }

    /// Whether both axes are within `epsilon` of `other` (strict).
    pub fn coincides_with(&self, other: &Position, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl SimTime {
    /// Advance by one frame of `elapsed_ms` milliseconds.
    pub fn advance(&mut self, elapsed_ms: f64) {
        self.tick += 1;
        self.elapsed_ms += elapsed_ms;
    }
}

impl Viewport {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Map a client-space point into a playfield of `playfield_width` × `playfield_height`.
    ///
    /// Returns `None` for a degenerate (zero-sized) viewport.
    pub fn to_world(
        &self,
        client_x: f64,
        client_y: f64,
        playfield_width: f64,
        playfield_height: f64,
    ) -> Option<Position> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        let scale_x = playfield_width / self.width;
        let scale_y = playfield_height / self.height;
        Some(Position::new(
            (client_x - self.left) * scale_x,
            (client_y - self.top) * scale_y,
        ))
    }
}
