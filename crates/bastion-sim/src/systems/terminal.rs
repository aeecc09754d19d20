//! Terminal evaluation: decides whether the session is won or lost.

use hecs::World;

use bastion_core::components::LaunchSite;
use bastion_core::config::EngineConfig;
use bastion_core::enums::SessionOutcome;

use crate::score::ScoreState;

/// Evaluate win/loss after all per-frame updates.
/// The score threshold is checked first, so a frame meeting both conditions wins.
pub fn evaluate(world: &World, score: &ScoreState, config: &EngineConfig) -> Option<SessionOutcome> {
    if score.score >= config.win_score {
        return Some(SessionOutcome::Won);
    }
    if active_launch_sites(world) == 0 {
        return Some(SessionOutcome::Lost);
    }
    None
}

/// Number of launch sites not yet destroyed.
pub fn active_launch_sites(world: &World) -> usize {
    world
        .query::<&LaunchSite>()
        .iter()
        .filter(|(_, site)| site.active)
        .count()
}
