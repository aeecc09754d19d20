//! Aim assistance for outgoing projectiles.
//!
//! Provides time-to-reach estimation and lead point prediction against
//! incoming projectiles flying straight at constant speed.

use glam::DVec2;

use bastion_core::types::Position;

/// Number of frames a projectile at `speed` units per frame needs to cover
/// the straight line from `from` to `to`.
pub fn frames_to_reach(from: &Position, to: &Position, speed: f64) -> f64 {
    if speed <= 0.0 {
        return f64::INFINITY;
    }
    from.distance_to(to) / speed
}

/// Calculate a lead point using iterative prediction.
///
/// `target_velocity` is in units per frame. Returns (lead point, estimated
/// frames to reach it). Uses 2 iterations to refine the prediction for the
/// target's motion during flight.
pub fn lead_point(
    target_pos: &Position,
    target_velocity: DVec2,
    launcher: &Position,
    speed: f64,
) -> (Position, f64) {
    let mut frames = frames_to_reach(launcher, target_pos, speed);
    if !frames.is_finite() {
        return (*target_pos, frames);
    }

    for _ in 0..2 {
        let predicted = Position::from(target_pos.as_vec() + target_velocity * frames);
        frames = frames_to_reach(launcher, &predicted, speed);
    }

    let lead = Position::from(target_pos.as_vec() + target_velocity * frames);
    (lead, frames)
}

/// Lead point against an incoming projectile heading for `destination`.
///
/// The incoming projectile stops at its destination, so the prediction never
/// runs past it.
pub fn incoming_lead_point(
    position: &Position,
    destination: &Position,
    incoming_speed: f64,
    launcher: &Position,
    outgoing_speed: f64,
) -> Position {
    let remaining = position.distance_to(destination);
    if remaining <= 0.0 {
        return *destination;
    }
    let direction = (destination.as_vec() - position.as_vec()) / remaining;
    let (lead, _frames) = lead_point(position, direction * incoming_speed, launcher, outgoing_speed);

    if position.distance_to(&lead) >= remaining {
        *destination
    } else {
        lead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_to_reach() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(0.0, 100.0);
        assert!((frames_to_reach(&a, &b, 10.0) - 10.0).abs() < 1e-10);
        assert!(frames_to_reach(&a, &b, 0.0).is_infinite());
    }

    #[test]
    fn test_lead_point_ahead_of_target() {
        // Target 300 units above the launcher, drifting right.
        let t_pos = Position::new(400.0, 280.0);
        let t_vel = DVec2::new(1.5, 0.0);
        let launcher = Position::new(400.0, 580.0);

        let (lead, frames) = lead_point(&t_pos, t_vel, &launcher, 10.0);

        assert!(lead.x > t_pos.x, "lead should be ahead of the target");
        assert!(frames > 0.0);
        // Flight time to the lead point matches the target's travel time.
        let flight = frames_to_reach(&launcher, &lead, 10.0);
        let expected_x = t_pos.x + t_vel.x * flight;
        assert!((lead.x - expected_x).abs() < 0.5);
    }

    #[test]
    fn test_incoming_lead_point_stops_at_destination() {
        // Nearly landed, launcher far away: the lead point is the destination.
        let position = Position::new(100.0, 570.0);
        let destination = Position::new(100.0, 580.0);
        let launcher = Position::new(720.0, 580.0);

        let lead = incoming_lead_point(&position, &destination, 1.5, &launcher, 10.0);
        assert_eq!(lead, destination);
    }

    #[test]
    fn test_incoming_lead_point_on_path() {
        let position = Position::new(400.0, 0.0);
        let destination = Position::new(400.0, 580.0);
        let launcher = Position::new(80.0, 580.0);

        let lead = incoming_lead_point(&position, &destination, 1.5, &launcher, 10.0);
        assert!((lead.x - 400.0).abs() < 1e-9);
        assert!(lead.y > 0.0 && lead.y < 580.0);
    }
}
