//! Impact system: incoming projectiles that reach their target point.
//!
//! A landed projectile is removed, a blast spawns at its target point, and
//! the structure found at that point is deactivated. The binding is
//! positional: no two structures may share a position.

use hecs::{Entity, World};
use log::debug;

use bastion_core::components::{City, Incoming, IncomingFlight, LaunchSite};
use bastion_core::config::EngineConfig;
use bastion_core::enums::{BlastCause, StructureKind};
use bastion_core::events::{GameEvent, StructureRef};
use bastion_core::types::Position;

use crate::score::ScoreState;
use crate::world_setup;

/// Resolve every incoming projectile within `impact_threshold` (inclusive)
/// of its target.
pub fn run(
    world: &mut World,
    config: &EngineConfig,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();
    let mut landed = Vec::new();

    for (entity, (pos, flight, _incoming)) in
        world.query_mut::<(&Position, &IncomingFlight, &Incoming)>()
    {
        if pos.distance_to(&flight.target) <= config.impact_threshold {
            despawn_buffer.push(entity);
            landed.push(flight.target);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for point in landed {
        world_setup::spawn_blast(world, point, config.blast_max_radius, BlastCause::Impact);
        let struck = deactivate_structure_at(world, &point, config.structure_epsilon);
        score.impacts += 1;
        if let Some(structure) = struck {
            debug!(
                "{:?} {} destroyed at ({:.1}, {:.1})",
                structure.kind, structure.index, point.x, point.y
            );
        }
        events.push(GameEvent::Impact {
            x: point.x,
            y: point.y,
            struck,
        });
    }
}

/// Deactivate the active city or launch site sitting at `point`.
///
/// Returns the structure that was destroyed by this call, if any.
pub fn deactivate_structure_at(
    world: &mut World,
    point: &Position,
    epsilon: f64,
) -> Option<StructureRef> {
    for (_entity, (pos, city)) in world.query_mut::<(&Position, &mut City)>() {
        if city.active && pos.coincides_with(point, epsilon) {
            city.active = false;
            return Some(StructureRef {
                kind: StructureKind::City,
                index: city.index,
            });
        }
    }
    for (_entity, (pos, site)) in world.query_mut::<(&Position, &mut LaunchSite)>() {
        if site.active && pos.coincides_with(point, epsilon) {
            site.active = false;
            return Some(StructureRef {
                kind: StructureKind::LaunchSite,
                index: site.index,
            });
        }
    }
    None
}
