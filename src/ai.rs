//! Rule-based targeting engine for the automated opponent.
//!
//! Works only from the revealed view of the enemy grid and the outcome of its
//! own previous shot.

use alloc::vec::Vec;
use rand::Rng;

use crate::{
    common::{Coord, EngineError, ShotOutcome},
    config::{FLEET, SEEK_SAMPLE_LIMIT},
    grid::RevealedGrid,
    ship::ShipKind,
};

/// Unit step on the board. North decreases `y` (towards row A).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Probe order used when collecting candidate directions.
    pub const ALL: [Direction; 4] = [
        Direction::West,
        Direction::South,
        Direction::East,
        Direction::North,
    ];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// `coord` moved `n` steps this way, or `None` once it leaves a
    /// `width` × `width` board.
    pub fn step_by(self, (x, y): Coord, n: usize, width: usize) -> Option<Coord> {
        let (dx, dy) = self.delta();
        let n = isize::try_from(n).ok()?;
        let nx = x.checked_add_signed(dx.checked_mul(n)?)?;
        let ny = y.checked_add_signed(dy.checked_mul(n)?)?;
        (nx < width && ny < width).then_some((nx, ny))
    }

    pub fn step(self, coord: Coord, width: usize) -> Option<Coord> {
        self.step_by(coord, 1, width)
    }
}

/// Whether the engine currently knows of a live, unresolved hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    Seeking,
    Attacking,
}

/// Snapshot of everything the engine carries between turns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineState {
    pub mode: Mode,
    /// Live hits not yet resolved into a sunk ship, in the order they landed.
    pub active_hits: Vec<Coord>,
    pub remaining: Vec<ShipKind>,
    pub orientation: Option<Direction>,
    pub pending_flank: bool,
    pub last_shot: Option<Coord>,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            mode: Mode::Seeking,
            active_hits: Vec::new(),
            remaining: FLEET.to_vec(),
            orientation: None,
            pending_flank: false,
            last_shot: None,
        }
    }
}

/// Hunt / target / flank shot selector.
///
/// Each call to [`TargetingEngine::next_shot`] takes the outcome of the
/// previous shot and returns the next cell to fire at. Every candidate is
/// filtered against the cells still `Unknown` in the revealed view, so the
/// engine never fires at a resolved cell twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetingEngine {
    state: EngineState,
}

impl TargetingEngine {
    /// Engine hunting the standard fleet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine hunting an arbitrary set of ship kinds.
    pub fn with_fleet(kinds: &[ShipKind]) -> Self {
        Self::from_state(EngineState {
            remaining: kinds.to_vec(),
            ..EngineState::default()
        })
    }

    /// Resume from a saved snapshot.
    pub fn from_state(state: EngineState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn active_hits(&self) -> &[Coord] {
        &self.state.active_hits
    }

    pub fn remaining_ship_kinds(&self) -> &[ShipKind] {
        &self.state.remaining
    }

    pub fn orientation(&self) -> Option<Direction> {
        self.state.orientation
    }

    pub fn pending_flank(&self) -> bool {
        self.state.pending_flank
    }

    pub fn last_shot(&self) -> Option<Coord> {
        self.state.last_shot
    }

    /// Choose the next target given the outcome of the previous shot.
    ///
    /// Pass [`ShotOutcome::seed`] on the first call of a game.
    pub fn next_shot<R: Rng + ?Sized>(
        &mut self,
        view: &RevealedGrid,
        previous: &ShotOutcome,
        rng: &mut R,
    ) -> Result<Coord, EngineError> {
        let shot = if previous.is_sunk() {
            self.resolve_sunk(view, previous, rng)?
        } else {
            match (self.state.mode, previous.hit) {
                (Mode::Seeking, false) => self.seek(view, rng)?,
                (Mode::Seeking, true) => self.engage(view, rng)?,
                (Mode::Attacking, true) => self.press(view, rng)?,
                (Mode::Attacking, false) if !self.state.pending_flank => self.flank(view, rng)?,
                (Mode::Attacking, false) => self.regroup(view, rng)?,
            }
        };
        self.state.last_shot = Some(shot);
        Ok(shot)
    }

    /// A ship went down: forget its cells and either resume hunting or pick
    /// up the next live hit.
    fn resolve_sunk<R: Rng + ?Sized>(
        &mut self,
        view: &RevealedGrid,
        previous: &ShotOutcome,
        rng: &mut R,
    ) -> Result<Coord, EngineError> {
        self.state.pending_flank = false;
        self.state
            .active_hits
            .retain(|c| !previous.sunk_cells.contains(c));
        if let Some(kind) = previous.ship {
            self.state.remaining.retain(|k| *k != kind);
        }
        if self.state.active_hits.is_empty() {
            log::debug!("{:?} sunk, back to seeking", previous.ship);
            self.state.mode = Mode::Seeking;
            self.state.orientation = None;
            return self.seek(view, rng);
        }
        log::debug!(
            "{:?} sunk, {} live hits remain",
            previous.ship,
            self.state.active_hits.len()
        );
        self.state.mode = Mode::Attacking;
        self.open_line(view, rng)
    }

    /// Random cell that could still hold the shortest surviving ship.
    fn seek<R: Rng + ?Sized>(&mut self, view: &RevealedGrid, rng: &mut R) -> Result<Coord, EngineError> {
        let width = view.width();
        let depth = self.shortest_remaining().saturating_sub(1);
        let plausible =
            |c: Coord| view.is_unknown(c) && !possible_orientations(view, c, depth).is_empty();

        if width > 0 {
            for _ in 0..SEEK_SAMPLE_LIMIT {
                let cell = (rng.random_range(0..width), rng.random_range(0..width));
                if plausible(cell) {
                    return Ok(cell);
                }
            }
        }

        log::warn!("seek sampling exhausted, scanning the board");
        let candidates: Vec<Coord> = view.unknown_cells().filter(|c| plausible(*c)).collect();
        let candidates = if candidates.is_empty() {
            view.unknown_cells().collect()
        } else {
            candidates
        };
        pick(&candidates, rng).ok_or(EngineError::NoTargets)
    }

    /// First hit on a new ship: start attacking along an orientation that
    /// could still hold the shortest surviving ship.
    fn engage<R: Rng + ?Sized>(&mut self, view: &RevealedGrid, rng: &mut R) -> Result<Coord, EngineError> {
        let anchor = self.state.last_shot.ok_or(EngineError::UntrackedHit)?;
        self.state.mode = Mode::Attacking;
        self.state.active_hits.push(anchor);

        let depth = self.shortest_remaining().saturating_sub(1).max(1);
        let orientations = possible_orientations(view, anchor, depth);
        match pick(&orientations, rng) {
            Some(dir) => {
                log::debug!("hit at {:?}, attacking {:?}", anchor, dir);
                self.state.orientation = Some(dir);
                dir.step(anchor, view.width()).ok_or(EngineError::NoCandidates)
            }
            None => {
                log::warn!("no full-length orientation from {:?}, probing neighbours", anchor);
                self.open_line(view, rng)
            }
        }
    }

    /// Hit while attacking: keep walking the same way, or flank at a wall.
    fn press<R: Rng + ?Sized>(&mut self, view: &RevealedGrid, rng: &mut R) -> Result<Coord, EngineError> {
        let last = self.state.last_shot.ok_or(EngineError::UntrackedHit)?;
        self.state.active_hits.push(last);
        self.state.pending_flank = false;

        let next = self
            .state
            .orientation
            .and_then(|dir| dir.step(last, view.width()))
            .filter(|c| view.is_unknown(*c));
        match next {
            Some(cell) => Ok(cell),
            None => self.flank(view, rng),
        }
    }

    /// Missed (or ran out of room) while attacking: try the opposite side of
    /// the anchor, or any open neighbour when the opposite side is closed.
    fn flank<R: Rng + ?Sized>(&mut self, view: &RevealedGrid, rng: &mut R) -> Result<Coord, EngineError> {
        let reverse = self.state.orientation.map(Direction::reverse);
        let (anchor, directions) = self.anchor(view)?;

        let dir = match reverse.filter(|r| directions.contains(r)) {
            Some(rev) => {
                log::debug!("flanking {:?} from {:?}", rev, anchor);
                self.state.pending_flank = true;
                rev
            }
            None => pick(&directions, rng).ok_or(EngineError::NoCandidates)?,
        };
        self.state.orientation = Some(dir);
        dir.step(anchor, view.width()).ok_or(EngineError::NoCandidates)
    }

    /// The flank missed as well: start over from the first live hit.
    fn regroup<R: Rng + ?Sized>(&mut self, view: &RevealedGrid, rng: &mut R) -> Result<Coord, EngineError> {
        log::debug!("flank failed, regrouping on first hit");
        self.state.pending_flank = false;
        self.open_line(view, rng)
    }

    /// Fire one step from the first usable live hit in a random open direction.
    fn open_line<R: Rng + ?Sized>(&mut self, view: &RevealedGrid, rng: &mut R) -> Result<Coord, EngineError> {
        let (anchor, directions) = self.anchor(view)?;
        let dir = pick(&directions, rng).ok_or(EngineError::NoCandidates)?;
        self.state.orientation = Some(dir);
        dir.step(anchor, view.width()).ok_or(EngineError::NoCandidates)
    }

    /// First active hit, in insertion order, with at least one unexplored
    /// neighbour.
    fn anchor(&self, view: &RevealedGrid) -> Result<(Coord, Vec<Direction>), EngineError> {
        self.state
            .active_hits
            .iter()
            .map(|&hit| (hit, adjacent_unknown(view, hit)))
            .find(|(_, dirs)| !dirs.is_empty())
            .ok_or(EngineError::NoCandidates)
    }

    fn shortest_remaining(&self) -> usize {
        self.state
            .remaining
            .iter()
            .map(|k| k.length())
            .min()
            .unwrap_or(1)
    }
}

/// Directions whose immediate neighbour of `from` is on the board and unexplored.
pub fn adjacent_unknown(view: &RevealedGrid, from: Coord) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|d| {
            d.step(from, view.width())
                .is_some_and(|c| view.is_unknown(c))
        })
        .collect()
}

/// Directions along which the `depth` cells after `from` are all on the board
/// and unexplored.
pub fn possible_orientations(view: &RevealedGrid, from: Coord, depth: usize) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|d| {
            (1..=depth).all(|n| {
                d.step_by(from, n, view.width())
                    .is_some_and(|c| view.is_unknown(c))
            })
        })
        .collect()
}

fn pick<T: Copy, R: Rng + ?Sized>(options: &[T], rng: &mut R) -> Option<T> {
    if options.is_empty() {
        None
    } else {
        Some(options[rng.random_range(0..options.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_stop_at_the_board_edge() {
        assert_eq!(Direction::East.step((9, 3), 10), None);
        assert_eq!(Direction::North.step((4, 0), 10), None);
        assert_eq!(Direction::West.step((0, 0), 10), None);
        assert_eq!(Direction::South.step_by((2, 5), 4, 10), Some((2, 9)));
        assert_eq!(Direction::South.step_by((2, 6), 4, 10), None);
    }

    #[test]
    fn reverse_is_an_involution() {
        for d in Direction::ALL {
            assert_ne!(d.reverse(), d);
            assert_eq!(d.reverse().reverse(), d);
        }
    }

    #[test]
    fn zero_depth_probe_accepts_every_direction() {
        let grid = crate::Grid::new(3);
        assert_eq!(possible_orientations(grid.revealed(), (0, 0), 0).len(), 4);
        assert_eq!(possible_orientations(grid.revealed(), (0, 0), 1).len(), 2);
        assert_eq!(adjacent_unknown(grid.revealed(), (1, 1)).len(), 4);
    }
}
