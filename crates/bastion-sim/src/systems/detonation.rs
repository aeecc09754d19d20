//! Detonation system: outgoing projectiles that reach their tap point.

use hecs::{Entity, World};

use bastion_core::components::{Outgoing, OutgoingFlight};
use bastion_core::config::EngineConfig;
use bastion_core::enums::BlastCause;
use bastion_core::events::GameEvent;
use bastion_core::types::Position;

use crate::world_setup;

/// Remove every outgoing projectile within `completion_threshold` of its
/// target and spawn an interceptor blast at the target point.
pub fn run(
    world: &mut World,
    config: &EngineConfig,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();
    let mut detonations = Vec::new();

    for (entity, (pos, flight, _outgoing)) in
        world.query_mut::<(&Position, &OutgoingFlight, &Outgoing)>()
    {
        if pos.distance_to(&flight.target) <= config.completion_threshold {
            despawn_buffer.push(entity);
            detonations.push(flight.target);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for point in detonations {
        world_setup::spawn_blast(world, point, config.blast_max_radius, BlastCause::Interceptor);
        events.push(GameEvent::Detonation {
            x: point.x,
            y: point.y,
        });
    }
}
