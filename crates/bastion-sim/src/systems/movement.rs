//! Kinematic integration system.
//!
//! Moves every projectile straight toward its fixed target point at constant
//! speed. Displacement is `speed * elapsed_ms / frame_ms` and never carries a
//! projectile past its target.

use hecs::World;

use bastion_core::components::{IncomingFlight, OutgoingFlight};
use bastion_core::types::Position;

/// Run kinematic integration for all incoming and outgoing projectiles.
pub fn run(world: &mut World, elapsed_ms: f64, frame_ms: f64) {
    let frames = elapsed_ms / frame_ms;

    for (_entity, (pos, flight)) in world.query_mut::<(&mut Position, &mut IncomingFlight)>() {
        if let Some(heading) = step_toward(pos, &flight.target, flight.speed * frames) {
            flight.heading = heading;
        }
    }

    for (_entity, (pos, flight)) in world.query_mut::<(&mut Position, &mut OutgoingFlight)>() {
        if let Some(heading) = step_toward(pos, &flight.target, flight.speed * frames) {
            flight.heading = heading;
        }
    }
}

/// Move `pos` up to `step` units toward `target`.
///
/// Returns the bearing used, or `None` if `pos` already sits on the target.
pub fn step_toward(pos: &mut Position, target: &Position, step: f64) -> Option<f64> {
    let remaining = pos.distance_to(target);
    if remaining <= 0.0 {
        return None;
    }
    let heading = pos.bearing_to(target);
    if step >= remaining {
        *pos = *target;
    } else {
        pos.x += step * heading.cos();
        pos.y += step * heading.sin();
    }
    Some(heading)
}
