//! Scripted player used by headless sessions and the real-time runner.
//!
//! Every `interval` frames it picks the incoming projectile closest to its
//! target that no pending shot already covers, and fires at its lead point.

use bastion_core::config::EngineConfig;
use bastion_core::enums::GamePhase;
use bastion_core::state::{GameStateSnapshot, IncomingView, LaunchSiteView};
use bastion_core::types::Position;
use bastion_sim::guidance;

/// Fraction of the blast radius within which a pending shot counts as cover.
const COVER_FRACTION: f64 = 0.75;

#[derive(Debug, Clone)]
pub struct Autopilot {
    interval: u64,
    outgoing_speed: f64,
    cover_radius: f64,
    frames_until_fire: u64,
}

impl Autopilot {
    /// An autopilot firing at most once every `interval` frames (minimum 1).
    pub fn new(interval: u64, config: &EngineConfig) -> Self {
        Self {
            interval: interval.max(1),
            outgoing_speed: config.outgoing_speed,
            cover_radius: config.blast_max_radius * COVER_FRACTION,
            frames_until_fire: 0,
        }
    }

    /// Decide this frame's shot, if any. Call once per frame.
    pub fn next_shot(&mut self, snapshot: &GameStateSnapshot) -> Option<Position> {
        if snapshot.phase != GamePhase::Playing {
            return None;
        }
        if self.frames_until_fire > 0 {
            self.frames_until_fire -= 1;
            return None;
        }
        let shot = self.pick_shot(snapshot)?;
        self.frames_until_fire = self.interval - 1;
        Some(shot)
    }

    fn pick_shot(&self, snapshot: &GameStateSnapshot) -> Option<Position> {
        let sites: Vec<&LaunchSiteView> = snapshot
            .launch_sites
            .iter()
            .filter(|s| s.active && s.ammo > 0)
            .collect();
        if sites.is_empty() {
            return None;
        }

        let mut threats: Vec<&IncomingView> = snapshot.incoming.iter().collect();
        threats.sort_by(|a, b| {
            a.position
                .distance_to(&a.target)
                .total_cmp(&b.position.distance_to(&b.target))
        });

        threats.into_iter().find_map(|threat| {
            let launcher = sites.iter().min_by(|a, b| {
                a.position
                    .distance_to(&threat.position)
                    .total_cmp(&b.position.distance_to(&threat.position))
            })?;
            let lead = guidance::incoming_lead_point(
                &threat.position,
                &threat.target,
                threat.speed,
                &launcher.position,
                self.outgoing_speed,
            );
            (!self.is_covered(&lead, snapshot)).then_some(lead)
        })
    }

    /// A shot in flight, or a blast still growing, already lands near `point`.
    fn is_covered(&self, point: &Position, snapshot: &GameStateSnapshot) -> bool {
        snapshot
            .outgoing
            .iter()
            .any(|o| o.target.distance_to(point) < self.cover_radius)
            || snapshot
                .blasts
                .iter()
                .any(|b| b.life < 0.5 && b.center.distance_to(point) < self.cover_radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bastion_core::enums::BlastCause;
    use bastion_core::state::{BlastView, OutgoingView};

    fn site(index: u32, x: f64) -> LaunchSiteView {
        LaunchSiteView {
            id: u64::from(index) + 1,
            index,
            position: Position::new(x, 580.0),
            active: true,
            ammo: 10,
            max_ammo: 10,
            ammo_fraction: 1.0,
            low_ammo: false,
        }
    }

    fn incoming(id: u64, x: f64, y: f64, target_x: f64) -> IncomingView {
        let position = Position::new(x, y);
        let target = Position::new(target_x, 580.0);
        IncomingView {
            id,
            position,
            target,
            speed: 1.5,
            heading: position.bearing_to(&target),
        }
    }

    fn playing(incoming: Vec<IncomingView>) -> GameStateSnapshot {
        GameStateSnapshot {
            phase: GamePhase::Playing,
            launch_sites: vec![site(0, 80.0), site(1, 400.0), site(2, 720.0)],
            incoming,
            ..Default::default()
        }
    }

    #[test]
    fn test_fires_at_most_urgent_threat() {
        let mut pilot = Autopilot::new(1, &EngineConfig::default());
        let snapshot = playing(vec![
            incoming(10, 100.0, 50.0, 100.0),
            incoming(11, 600.0, 400.0, 600.0),
        ]);

        let shot = pilot.next_shot(&snapshot).unwrap();
        // The lower projectile is closer to its target.
        assert!((shot.x - 600.0).abs() < 1e-9);
        assert!(shot.y > 400.0 && shot.y < 580.0);
    }

    #[test]
    fn test_skips_covered_threat() {
        let mut pilot = Autopilot::new(1, &EngineConfig::default());
        let mut snapshot = playing(vec![incoming(10, 600.0, 400.0, 600.0)]);
        let lead = pilot.clone().next_shot(&snapshot).unwrap();

        snapshot.outgoing.push(OutgoingView {
            id: 20,
            position: Position::new(720.0, 560.0),
            origin: Position::new(720.0, 580.0),
            target: lead,
            heading: 0.0,
            site_index: 2,
        });
        assert!(pilot.next_shot(&snapshot).is_none());

        snapshot.outgoing.clear();
        snapshot.blasts.push(BlastView {
            id: 21,
            center: lead,
            radius: 5.0,
            max_radius: 40.0,
            life: 0.1,
            cause: BlastCause::Interceptor,
        });
        assert!(pilot.next_shot(&snapshot).is_none());
    }

    #[test]
    fn test_respects_interval() {
        let mut pilot = Autopilot::new(3, &EngineConfig::default());
        let snapshot = playing(vec![incoming(10, 300.0, 100.0, 400.0)]);

        let fired: Vec<bool> = (0..7).map(|_| pilot.next_shot(&snapshot).is_some()).collect();
        assert_eq!(fired, vec![true, false, false, true, false, false, true]);
    }

    #[test]
    fn test_idle_without_targets_or_sites() {
        let mut pilot = Autopilot::new(1, &EngineConfig::default());
        assert!(pilot.next_shot(&playing(Vec::new())).is_none());

        let mut snapshot = playing(vec![incoming(10, 300.0, 100.0, 400.0)]);
        for s in &mut snapshot.launch_sites {
            s.ammo = 0;
        }
        assert!(pilot.next_shot(&snapshot).is_none());

        let mut snapshot = playing(vec![incoming(10, 300.0, 100.0, 400.0)]);
        snapshot.phase = GamePhase::Won;
        assert!(pilot.next_shot(&snapshot).is_none());
    }
}
