//! Spawn system: creates incoming projectiles at random.
//!
//! The spawn roll happens once per frame regardless of the frame's length,
//! while movement scales with elapsed time.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bastion_core::config::EngineConfig;

use crate::world_setup;

/// Roll the per-frame spawn chance and spawn at most one incoming projectile.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, config: &EngineConfig) -> Option<Entity> {
    if !rng.gen_bool(config.spawn_probability) {
        return None;
    }
    world_setup::spawn_incoming(world, rng, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bastion_core::components::{City, IncomingFlight, LaunchSite};
    use bastion_core::types::Position;
    use rand::SeedableRng;

    fn certain_spawn_config() -> EngineConfig {
        EngineConfig {
            spawn_probability: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_probability_never_spawns() {
        let config = EngineConfig {
            spawn_probability: 0.0,
            ..Default::default()
        };
        let mut world = World::new();
        world_setup::setup_session(&mut world, &config);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..1000 {
            assert!(run(&mut world, &mut rng, &config).is_none());
        }
    }

    #[test]
    fn test_spawn_targets_active_structure_from_top_edge() {
        let config = certain_spawn_config();
        let mut world = World::new();
        world_setup::setup_session(&mut world, &config);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..50 {
            let entity = run(&mut world, &mut rng, &config).unwrap();
            let pos = *world.get::<&Position>(entity).unwrap();
            let flight = *world.get::<&IncomingFlight>(entity).unwrap();

            assert_eq!(pos.y, 0.0);
            assert!((0.0..config.playfield_width).contains(&pos.x));
            assert!(flight.speed >= config.incoming_speed_base);
            assert!(flight.speed < config.incoming_speed_base + config.incoming_speed_jitter);
            assert!((flight.target.y - 580.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_no_spawn_without_targets() {
        let config = certain_spawn_config();
        let mut world = World::new();
        world_setup::setup_session(&mut world, &config);
        for (_e, city) in world.query_mut::<&mut City>() {
            city.active = false;
        }
        for (_e, site) in world.query_mut::<&mut LaunchSite>() {
            site.active = false;
        }
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(run(&mut world, &mut rng, &config).is_none());
    }
}
