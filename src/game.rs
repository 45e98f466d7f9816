use alloc::boxed::Box;

use crate::{
    common::{Coord, ShotOutcome},
    grid::Grid,
    player::Player,
};
use rand::rngs::SmallRng;

/// One of the two players of a battle. `First` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn opponent(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// Current status of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Seat),
}

/// What happened during one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub seat: Seat,
    pub target: Coord,
    pub outcome: ShotOutcome,
}

struct Side {
    player: Box<dyn Player>,
    grid: Grid,
    shots: usize,
}

/// Two players, each with their own grid, taking alternate shots.
pub struct Battle {
    sides: [Side; 2],
    turn: Seat,
}

impl Battle {
    /// Battle on two empty standard grids. Call [`Battle::place_fleets`] before playing.
    pub fn new(first: Box<dyn Player>, second: Box<dyn Player>) -> Self {
        Self::with_grids(first, Grid::standard(), second, Grid::standard())
    }

    /// Battle on grids that may already carry ships.
    pub fn with_grids(
        first: Box<dyn Player>,
        first_grid: Grid,
        second: Box<dyn Player>,
        second_grid: Grid,
    ) -> Self {
        let side = |player: Box<dyn Player>, grid: Grid| Side {
            player,
            grid,
            shots: 0,
        };
        Self {
            sides: [side(first, first_grid), side(second, second_grid)],
            turn: Seat::First,
        }
    }

    /// Let each player complete its fleet.
    pub fn place_fleets(&mut self, rng: &mut SmallRng) -> anyhow::Result<()> {
        for side in self.sides.iter_mut() {
            if !side.grid.fleet_complete() {
                side.player.place_ships(rng, &mut side.grid)?;
            }
            if !side.grid.fleet_complete() {
                return Err(anyhow::anyhow!("player left ships unplaced"));
            }
        }
        Ok(())
    }

    fn side(&self, seat: Seat) -> &Side {
        match seat {
            Seat::First => &self.sides[0],
            Seat::Second => &self.sides[1],
        }
    }

    /// Seat whose turn it is.
    pub fn turn(&self) -> Seat {
        self.turn
    }

    pub fn grid(&self, seat: Seat) -> &Grid {
        &self.side(seat).grid
    }

    /// Shots fired so far by `seat`.
    pub fn shots(&self, seat: Seat) -> usize {
        self.side(seat).shots
    }

    pub fn status(&self) -> GameStatus {
        let defeated = |grid: &Grid| grid.ships().next().is_some() && grid.game_over();
        if defeated(&self.sides[1].grid) {
            GameStatus::Won(Seat::First)
        } else if defeated(&self.sides[0].grid) {
            GameStatus::Won(Seat::Second)
        } else {
            GameStatus::InProgress
        }
    }

    /// Ask the current player for a target, resolve it on the opponent's
    /// grid and hand the turn over.
    pub fn play_turn(&mut self, rng: &mut SmallRng) -> anyhow::Result<TurnReport> {
        if let GameStatus::Won(seat) = self.status() {
            return Err(anyhow::anyhow!("the game is already over, {:?} won", seat));
        }
        let seat = self.turn;
        let [first, second] = &mut self.sides;
        let (attacker, defender) = match seat {
            Seat::First => (first, second),
            Seat::Second => (second, first),
        };

        let target = attacker
            .player
            .select_target(rng, &attacker.grid, defender.grid.revealed())?;
        let outcome = defender.grid.shoot(target)?;
        attacker.shots += 1;
        attacker.player.handle_shot_result(target, &outcome);
        defender.player.handle_opponent_shot(target, &outcome);
        log::debug!("{:?} fired at {:?}: {:?}", seat, target, outcome);

        self.turn = seat.opponent();
        Ok(TurnReport {
            seat,
            target,
            outcome,
        })
    }

    /// Play until someone wins, giving up after `max_turns` turns.
    pub fn run(&mut self, rng: &mut SmallRng, max_turns: usize) -> anyhow::Result<Seat> {
        for _ in 0..max_turns {
            if let GameStatus::Won(seat) = self.status() {
                return Ok(seat);
            }
            self.play_turn(rng)?;
        }
        match self.status() {
            GameStatus::Won(seat) => Ok(seat),
            GameStatus::InProgress => Err(anyhow::anyhow!("no winner after {} turns", max_turns)),
        }
    }
}
