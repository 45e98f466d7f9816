use rand::rngs::SmallRng;

use crate::{
    ai::TargetingEngine,
    common::{Coord, ShotOutcome},
    grid::{Grid, RevealedGrid},
    placement,
    player::Player,
};

/// Automated opponent: random fleet, rule-based targeting.
#[derive(Debug, Default)]
pub struct AiPlayer {
    engine: TargetingEngine,
    last: ShotOutcome,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The targeting engine driving this player.
    pub fn engine(&self) -> &TargetingEngine {
        &self.engine
    }
}

impl Player for AiPlayer {
    fn place_ships(&mut self, rng: &mut SmallRng, grid: &mut Grid) -> anyhow::Result<()> {
        placement::place_fleet_randomly(grid, rng)?;
        Ok(())
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        _own: &Grid,
        target: &RevealedGrid,
    ) -> anyhow::Result<Coord> {
        let previous = core::mem::take(&mut self.last);
        Ok(self.engine.next_shot(target, &previous, rng)?)
    }

    fn handle_shot_result(&mut self, _coord: Coord, outcome: &ShotOutcome) {
        self.last = outcome.clone();
    }
}
