//! Entity spawn factories for setting up the simulation world.
//!
//! Lays out cities and launch sites along the ground line and creates
//! projectile and blast entities with their component bundles.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bastion_core::components::*;
use bastion_core::config::EngineConfig;
use bastion_core::enums::BlastCause;
use bastion_core::types::Position;

/// Set up a fresh session world: every city and launch site, nothing in flight.
pub fn setup_session(world: &mut World, config: &EngineConfig) {
    let slots = config.slot_count();
    let site_slots = launch_site_slots(slots, config.battery_count);
    let middle = slots / 2;

    let mut city_index = 0;
    let mut site_index = 0;
    for slot in 0..slots {
        let position = slot_position(slot, config);
        if site_slots.contains(&slot) {
            let ammo = if slot == middle {
                config.middle_battery_ammo
            } else {
                config.outer_battery_ammo
            };
            spawn_launch_site(world, position, site_index, ammo);
            site_index += 1;
        } else {
            world.spawn((
                City {
                    index: city_index,
                    active: true,
                },
                position,
            ));
            city_index += 1;
        }
    }
}

/// Slot indices occupied by launch sites: the ends and the middle.
pub fn launch_site_slots(slot_count: u32, battery_count: u32) -> Vec<u32> {
    let last = slot_count.saturating_sub(1);
    match battery_count {
        0 => Vec::new(),
        1 => vec![slot_count / 2],
        2 => vec![0, last],
        _ => vec![0, slot_count / 2, last],
    }
}

/// Ground position of slot `slot`, evenly spaced across the playfield width.
pub fn slot_position(slot: u32, config: &EngineConfig) -> Position {
    let spacing = config.playfield_width / f64::from(config.slot_count() + 1);
    Position::new(
        f64::from(slot + 1) * spacing,
        config.playfield_height - config.ground_offset,
    )
}

/// Spawn a launch site with a full magazine.
pub fn spawn_launch_site(world: &mut World, position: Position, index: u32, ammo: u32) -> Entity {
    world.spawn((
        LaunchSite {
            index,
            active: true,
            ammo,
            max_ammo: ammo,
        },
        position,
    ))
}

/// Positions of every structure that can still be targeted.
pub fn active_structure_positions(world: &World) -> Vec<Position> {
    let mut targets: Vec<Position> = world
        .query::<(&Position, &City)>()
        .iter()
        .filter(|(_, (_, city))| city.active)
        .map(|(_, (pos, _))| *pos)
        .collect();
    targets.extend(
        world
            .query::<(&Position, &LaunchSite)>()
            .iter()
            .filter(|(_, (_, site))| site.active)
            .map(|(_, (pos, _))| *pos),
    );
    targets
}

/// Spawn an incoming projectile from a random point on the top edge toward a
/// random active structure. Returns `None` when nothing is left to target.
pub fn spawn_incoming(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &EngineConfig,
) -> Option<Entity> {
    let targets = active_structure_positions(world);
    if targets.is_empty() {
        return None;
    }
    let target = targets[rng.gen_range(0..targets.len())];
    let x = rng.gen_range(0.0..config.playfield_width);
    let jitter = if config.incoming_speed_jitter > 0.0 {
        rng.gen_range(0.0..config.incoming_speed_jitter)
    } else {
        0.0
    };
    let speed = config.incoming_speed_base + jitter;

    Some(spawn_incoming_at(
        world,
        Position::new(x, 0.0),
        target,
        speed,
    ))
}

/// Spawn an incoming projectile at an explicit position.
pub fn spawn_incoming_at(
    world: &mut World,
    position: Position,
    target: Position,
    speed: f64,
) -> Entity {
    world.spawn((
        Incoming,
        position,
        IncomingFlight {
            target,
            speed,
            heading: position.bearing_to(&target),
        },
    ))
}

/// Spawn an outgoing projectile leaving `origin` toward the tap point.
pub fn spawn_outgoing(
    world: &mut World,
    origin: Position,
    target: Position,
    speed: f64,
    site_index: u32,
) -> Entity {
    world.spawn((
        Outgoing,
        origin,
        OutgoingFlight {
            origin,
            target,
            speed,
            heading: origin.bearing_to(&target),
            site_index,
        },
    ))
}

/// Spawn a blast at `center`. Every blast starts with radius 0 and life 0.
pub fn spawn_blast(world: &mut World, center: Position, max_radius: f64, cause: BlastCause) -> Entity {
    world.spawn((
        center,
        Blast {
            radius: 0.0,
            max_radius,
            life: 0.0,
            cause,
        },
    ))
}
