use rand::rngs::SmallRng;

use crate::{
    common::{Coord, ShotOutcome},
    grid::{Grid, RevealedGrid},
};

/// Interface implemented by the different kinds of commander.
pub trait Player {
    /// Place every ship still missing from `grid`.
    fn place_ships(&mut self, rng: &mut SmallRng, grid: &mut Grid) -> anyhow::Result<()>;

    /// Choose the next target on the opponent's grid.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        own: &Grid,
        target: &RevealedGrid,
    ) -> anyhow::Result<Coord>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _coord: Coord, _outcome: &ShotOutcome) {}

    /// Inform the player of an opponent shot against its grid.
    fn handle_opponent_shot(&mut self, _coord: Coord, _outcome: &ShotOutcome) {}
}
