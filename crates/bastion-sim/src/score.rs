//! Running score state tracked by the engine.
//!
//! Lives beside the ECS world, NOT as an entity.

/// Score and per-session counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreState {
    /// Only ever raised by interceptions, in steps of the per-kill value.
    pub score: u32,
    pub kills: u32,
    pub impacts: u32,
    pub projectiles_fired: u32,
}

impl ScoreState {
    /// Credit one destroyed incoming projectile.
    pub fn record_kill(&mut self, score_per_kill: u32) {
        self.kills += 1;
        self.score = self.score.saturating_add(score_per_kill);
    }
}
