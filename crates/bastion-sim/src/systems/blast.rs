//! Blast system: grows and shrinks blasts and destroys incoming projectiles
//! caught inside them.
//!
//! Radius follows `max_radius * sin(pi * life)`. A caught projectile scores
//! and leaves a chain blast at its position. Chain blasts start at radius 0
//! and first update on the next frame.

use std::f64::consts::PI;

use hecs::{Entity, World};

use bastion_core::components::{Blast, Incoming};
use bastion_core::config::EngineConfig;
use bastion_core::enums::BlastCause;
use bastion_core::events::GameEvent;
use bastion_core::types::Position;

use crate::score::ScoreState;
use crate::world_setup;

/// Advance every live blast by `elapsed_ms` and resolve interceptions.
pub fn run(
    world: &mut World,
    config: &EngineConfig,
    elapsed_ms: f64,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();
    let mut live: Vec<(Position, f64)> = Vec::new();

    for (entity, (center, blast)) in world.query_mut::<(&Position, &mut Blast)>() {
        blast.life += elapsed_ms / config.blast_duration_ms;
        if blast.life >= 1.0 {
            despawn_buffer.push(entity);
            continue;
        }
        blast.radius = blast.max_radius * (PI * blast.life).sin();
        live.push((*center, blast.radius));
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    if live.is_empty() {
        return;
    }

    // Strictly inside any live blast. Each projectile is collected once.
    let caught: Vec<(Entity, Position)> = world
        .query_mut::<(&Position, &Incoming)>()
        .into_iter()
        .filter(|(_, (pos, _))| {
            live.iter()
                .any(|(center, radius)| pos.distance_to(center) < *radius)
        })
        .map(|(entity, (pos, _))| (entity, *pos))
        .collect();

    for (entity, pos) in caught {
        if world.despawn(entity).is_err() {
            continue;
        }
        score.record_kill(config.score_per_kill);
        world_setup::spawn_blast(world, pos, config.blast_max_radius, BlastCause::Chain);
        events.push(GameEvent::Intercept {
            x: pos.x,
            y: pos.y,
            score: score.score,
        });
    }
}
