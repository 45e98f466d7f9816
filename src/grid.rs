//! Per-player grid: the concealed ship layout, the view revealed to the
//! opponent, and per-ship footprints and health.
//!
//! Both views are only ever written by [`Grid::place`] and [`Grid::shoot`],
//! so a revealed cell is always either `Unknown` or equal to its concealed
//! counterpart.

use alloc::collections::BTreeMap;
use alloc::vec;
use alloc::vec::Vec;

use crate::common::{Coord, PlacementError, ShotError, ShotOutcome};
use crate::config::{BOARD_SIZE, FLEET};
use crate::placement;
use crate::ship::{Orientation, ShipKind};

/// Ground-truth state of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Water,
    Ship(ShipKind),
    Hit,
    Miss,
    Sunk,
}

impl Cell {
    /// What the opponent is allowed to see of this cell.
    pub fn revealed(self) -> Mark {
        match self {
            Cell::Water | Cell::Ship(_) => Mark::Unknown,
            Cell::Hit => Mark::Hit,
            Cell::Miss => Mark::Miss,
            Cell::Sunk => Mark::Sunk,
        }
    }
}

/// Cell state as seen by the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    Unknown,
    Hit,
    Miss,
    Sunk,
}

/// The opponent's view of a grid. Read-only outside this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedGrid {
    width: usize,
    cells: Vec<Mark>,
}

impl RevealedGrid {
    fn new(width: usize) -> Self {
        Self {
            width,
            cells: vec![Mark::Unknown; width * width],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn in_bounds(&self, (x, y): Coord) -> bool {
        x < self.width && y < self.width
    }

    /// Mark at `coord`, or `None` when it is off the board.
    pub fn get(&self, coord: Coord) -> Option<Mark> {
        if self.in_bounds(coord) {
            Some(self.cells[coord.0 * self.width + coord.1])
        } else {
            None
        }
    }

    /// `true` only for in-bounds cells nobody has fired at yet.
    pub fn is_unknown(&self, coord: Coord) -> bool {
        self.get(coord) == Some(Mark::Unknown)
    }

    /// Every cell still unexplored, column by column.
    pub fn unknown_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, m)| **m == Mark::Unknown)
            .map(move |(i, _)| (i / width, i % width))
    }

    fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }
}

/// One player's square grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    concealed: Vec<Cell>,
    revealed: RevealedGrid,
    ship_cells: BTreeMap<ShipKind, Vec<Coord>>,
    ship_health: BTreeMap<ShipKind, usize>,
}

impl Grid {
    /// Empty grid of `width` × `width` water cells.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            concealed: vec![Cell::Water; width * width],
            revealed: RevealedGrid::new(width),
            ship_cells: BTreeMap::new(),
            ship_health: BTreeMap::new(),
        }
    }

    /// Empty grid with the standard board size.
    pub fn standard() -> Self {
        Self::new(BOARD_SIZE)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn in_bounds(&self, (x, y): Coord) -> bool {
        x < self.width && y < self.width
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.0 * self.width + coord.1)
        } else {
            None
        }
    }

    /// Ground-truth cell at `coord`, or `None` when it is off the board.
    pub fn concealed(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.concealed[i])
    }

    /// The view an opponent is allowed to see.
    pub fn revealed(&self) -> &RevealedGrid {
        &self.revealed
    }

    /// Footprint of a placed ship.
    pub fn ship_cells(&self, kind: ShipKind) -> Option<&[Coord]> {
        self.ship_cells.get(&kind).map(Vec::as_slice)
    }

    /// Remaining unhit segments of a placed ship.
    pub fn ship_health(&self, kind: ShipKind) -> Option<usize> {
        self.ship_health.get(&kind).copied()
    }

    pub fn is_placed(&self, kind: ShipKind) -> bool {
        self.ship_cells.contains_key(&kind)
    }

    /// Placed ships with their footprints, in catalog order.
    pub fn ships(&self) -> impl Iterator<Item = (ShipKind, &[Coord])> {
        self.ship_cells.iter().map(|(k, cells)| (*k, cells.as_slice()))
    }

    /// Ship kinds of the standard fleet not yet placed.
    pub fn unplaced(&self) -> impl Iterator<Item = ShipKind> + '_ {
        FLEET.iter().copied().filter(|k| !self.is_placed(*k))
    }

    /// `true` once every kind of the standard fleet is on the grid.
    pub fn fleet_complete(&self) -> bool {
        self.unplaced().next().is_none()
    }

    /// Place `kind` at `origin`, rejecting out-of-bounds or overlapping footprints.
    pub fn place(
        &mut self,
        kind: ShipKind,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<(), PlacementError> {
        if self.is_placed(kind) {
            return Err(PlacementError::AlreadyPlaced(kind));
        }
        if !self.in_bounds(origin) {
            let (x, y) = origin;
            return Err(PlacementError::OutOfBounds { kind, x, y });
        }
        let cells = crate::ship::footprint(kind.length(), origin, orientation);
        placement::check_footprint(self, kind, &cells)?;
        for &coord in &cells {
            if let Some(i) = self.index(coord) {
                self.concealed[i] = Cell::Ship(kind);
            }
        }
        log::debug!("placed {} at {:?} {:?}", kind, origin, orientation);
        self.ship_health.insert(kind, cells.len());
        self.ship_cells.insert(kind, cells);
        Ok(())
    }

    /// Remove every ship and shot, leaving an empty grid of the same width.
    pub fn clear(&mut self) {
        *self = Self::new(self.width);
    }

    /// Resolve a shot at `target`.
    ///
    /// Firing at an already resolved cell changes nothing and reports a miss
    /// with `repeated` set.
    pub fn shoot(&mut self, target: Coord) -> Result<ShotOutcome, ShotError> {
        let index = self.index(target).ok_or(ShotError::OutOfBounds {
            x: target.0,
            y: target.1,
        })?;
        let mut outcome = ShotOutcome::default();
        match self.concealed[index] {
            Cell::Water => self.mark(index, Cell::Miss),
            Cell::Ship(kind) => {
                outcome.hit = true;
                outcome.ship = Some(kind);
                let health = match self.ship_health.get_mut(&kind) {
                    Some(h) => {
                        *h = h.saturating_sub(1);
                        *h
                    }
                    None => 0,
                };
                if health == 0 {
                    let cells = self.ship_cells.get(&kind).cloned().unwrap_or_default();
                    for &coord in &cells {
                        if let Some(i) = self.index(coord) {
                            self.mark(i, Cell::Sunk);
                        }
                    }
                    outcome.sunk_cells = cells;
                } else {
                    self.mark(index, Cell::Hit);
                }
            }
            Cell::Hit | Cell::Miss | Cell::Sunk => outcome.repeated = true,
        }
        outcome.game_over = self.game_over();
        Ok(outcome)
    }

    /// `true` when every placed ship has no health left.
    pub fn game_over(&self) -> bool {
        self.ship_health.values().all(|h| *h == 0)
    }

    fn mark(&mut self, index: usize, cell: Cell) {
        self.concealed[index] = cell;
        self.revealed.set(index, cell.revealed());
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::standard()
    }
}
