//! Fire control: turns a tap into an outgoing projectile.
//!
//! Picks the nearest active launch site that still has ammo, spends one
//! round and launches toward the tap point. Applied synchronously.

use hecs::{Entity, World};
use log::trace;

use bastion_core::commands::FireOutcome;
use bastion_core::components::LaunchSite;
use bastion_core::config::EngineConfig;
use bastion_core::events::GameEvent;
use bastion_core::types::Position;

use crate::score::ScoreState;
use crate::world_setup;

/// Nearest eligible launch site to `target`. Ties go to the lowest index.
pub fn select_site(world: &World, target: &Position) -> Option<Entity> {
    world
        .query::<(&Position, &LaunchSite)>()
        .iter()
        .filter(|(_, (_, site))| site.active && site.ammo > 0)
        .min_by(|(_, (a_pos, a)), (_, (b_pos, b))| {
            a_pos
                .distance_to(target)
                .total_cmp(&b_pos.distance_to(target))
                .then(a.index.cmp(&b.index))
        })
        .map(|(entity, _)| entity)
}

/// Fire one outgoing projectile toward `target` from the selected site.
pub fn fire_at(
    world: &mut World,
    config: &EngineConfig,
    target: Position,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) -> FireOutcome {
    let Some(site_entity) = select_site(world, &target) else {
        trace!("fire at ({:.1}, {:.1}) ignored: no eligible site", target.x, target.y);
        return FireOutcome::NoEligibleSite;
    };

    let (origin, site_index, ammo_left) = {
        let Ok(mut site) = world.get::<&mut LaunchSite>(site_entity) else {
            return FireOutcome::NoEligibleSite;
        };
        let Some(ammo_left) = site.ammo.checked_sub(1) else {
            return FireOutcome::NoEligibleSite;
        };
        site.ammo = ammo_left;
        let site_index = site.index;
        drop(site);

        let Ok(origin) = world.get::<&Position>(site_entity).map(|pos| *pos) else {
            return FireOutcome::NoEligibleSite;
        };
        (origin, site_index, ammo_left)
    };

    let projectile =
        world_setup::spawn_outgoing(world, origin, target, config.outgoing_speed, site_index);
    score.projectiles_fired += 1;
    events.push(GameEvent::Fired {
        site_index,
        target_x: target.x,
        target_y: target.y,
        ammo_left,
    });

    FireOutcome::Fired {
        site_index,
        projectile: projectile.to_bits().get(),
        origin,
        ammo_left,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (World, EngineConfig) {
        let config = EngineConfig::default();
        let mut world = World::new();
        world_setup::setup_session(&mut world, &config);
        (world, config)
    }

    fn site_mut(world: &mut World, index: u32) -> hecs::RefMut<'_, LaunchSite> {
        let entity = world
            .query::<&LaunchSite>()
            .iter()
            .find(|(_, site)| site.index == index)
            .map(|(e, _)| e)
            .unwrap();
        world.get::<&mut LaunchSite>(entity).unwrap()
    }

    #[test]
    fn test_nearest_site_selected() {
        let (mut world, config) = setup();
        let mut score = ScoreState::default();
        let mut events = Vec::new();

        let outcome = fire_at(
            &mut world,
            &config,
            Position::new(700.0, 300.0),
            &mut score,
            &mut events,
        );
        match outcome {
            FireOutcome::Fired {
                site_index,
                ammo_left,
                origin,
                ..
            } => {
                assert_eq!(site_index, 2);
                assert_eq!(ammo_left, 1999);
                assert!((origin.x - 720.0).abs() < 1e-9);
            }
            other => panic!("expected Fired, got {other:?}"),
        }
        assert_eq!(score.projectiles_fired, 1);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        let (world, _config) = setup();
        // Exactly halfway between site 0 (x=80) and site 1 (x=400).
        let target = Position::new(240.0, 300.0);
        let chosen = select_site(&world, &target).unwrap();
        assert_eq!(world.get::<&LaunchSite>(chosen).unwrap().index, 0);
    }

    #[test]
    fn test_skips_empty_and_destroyed_sites() {
        let (mut world, config) = setup();
        site_mut(&mut world, 0).ammo = 0;
        site_mut(&mut world, 1).active = false;

        let target = Position::new(80.0, 300.0);
        let chosen = select_site(&world, &target).unwrap();
        assert_eq!(world.get::<&LaunchSite>(chosen).unwrap().index, 2);

        site_mut(&mut world, 2).ammo = 0;
        let mut score = ScoreState::default();
        let mut events = Vec::new();
        let outcome = fire_at(&mut world, &config, target, &mut score, &mut events);
        assert_eq!(outcome, FireOutcome::NoEligibleSite);
        assert!(events.is_empty());
        assert_eq!(score.projectiles_fired, 0);
    }
}
