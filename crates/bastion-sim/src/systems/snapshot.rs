//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use bastion_core::components::*;
use bastion_core::config::EngineConfig;
use bastion_core::constants::LOW_AMMO_FRACTION;
use bastion_core::enums::GamePhase;
use bastion_core::events::GameEvent;
use bastion_core::state::*;
use bastion_core::types::{Position, SimTime};

use crate::score::ScoreState;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    config: &EngineConfig,
    score: &ScoreState,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let cities = build_cities(world);
    let launch_sites = build_launch_sites(world);

    GameStateSnapshot {
        time: *time,
        phase,
        score: ScoreView {
            score: score.score,
            win_score: config.win_score,
            kills: score.kills,
            impacts: score.impacts,
            projectiles_fired: score.projectiles_fired,
            cities_remaining: cities.iter().filter(|c| c.active).count() as u32,
            sites_remaining: launch_sites.iter().filter(|s| s.active).count() as u32,
            ammo_remaining: launch_sites
                .iter()
                .filter(|s| s.active)
                .fold(0u32, |total, s| total.saturating_add(s.ammo)),
        },
        cities,
        launch_sites,
        incoming: build_incoming(world),
        outgoing: build_outgoing(world),
        blasts: build_blasts(world),
        events,
    }
}

fn build_cities(world: &World) -> Vec<CityView> {
    let mut cities: Vec<CityView> = world
        .query::<(&Position, &City)>()
        .iter()
        .map(|(entity, (pos, city))| CityView {
            id: entity.to_bits().get(),
            index: city.index,
            position: *pos,
            active: city.active,
        })
        .collect();
    cities.sort_by_key(|c| c.id);
    cities
}

fn build_launch_sites(world: &World) -> Vec<LaunchSiteView> {
    let mut sites: Vec<LaunchSiteView> = world
        .query::<(&Position, &LaunchSite)>()
        .iter()
        .map(|(entity, (pos, site))| {
            let ammo_fraction = if site.max_ammo > 0 {
                f64::from(site.ammo) / f64::from(site.max_ammo)
            } else {
                0.0
            };
            LaunchSiteView {
                id: entity.to_bits().get(),
                index: site.index,
                position: *pos,
                active: site.active,
                ammo: site.ammo,
                max_ammo: site.max_ammo,
                ammo_fraction,
                low_ammo: ammo_fraction < LOW_AMMO_FRACTION,
            }
        })
        .collect();
    sites.sort_by_key(|s| s.id);
    sites
}

fn build_incoming(world: &World) -> Vec<IncomingView> {
    let mut incoming: Vec<IncomingView> = world
        .query::<(&Position, &IncomingFlight)>()
        .iter()
        .map(|(entity, (pos, flight))| IncomingView {
            id: entity.to_bits().get(),
            position: *pos,
            target: flight.target,
            speed: flight.speed,
            heading: flight.heading,
        })
        .collect();
    incoming.sort_by_key(|p| p.id);
    incoming
}

fn build_outgoing(world: &World) -> Vec<OutgoingView> {
    let mut outgoing: Vec<OutgoingView> = world
        .query::<(&Position, &OutgoingFlight)>()
        .iter()
        .map(|(entity, (pos, flight))| OutgoingView {
            id: entity.to_bits().get(),
            position: *pos,
            origin: flight.origin,
            target: flight.target,
            heading: flight.heading,
            site_index: flight.site_index,
        })
        .collect();
    outgoing.sort_by_key(|p| p.id);
    outgoing
}

fn build_blasts(world: &World) -> Vec<BlastView> {
    let mut blasts: Vec<BlastView> = world
        .query::<(&Position, &Blast)>()
        .iter()
        .map(|(entity, (pos, blast))| BlastView {
            id: entity.to_bits().get(),
            center: *pos,
            radius: blast.radius,
            max_radius: blast.max_radius,
            life: blast.life,
            cause: blast.cause,
        })
        .collect();
    blasts.sort_by_key(|b| b.id);
    blasts
}
