//! Footprint validation and random fleet placement.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::{Coord, PlacementError};
use crate::config::{MAX_FLEET_RESTARTS, MAX_PLACEMENT_ATTEMPTS};
use crate::grid::{Cell, Grid};
use crate::ship::{footprint, Orientation, ShipKind};

/// `true` iff every cell is on the board and still open water.
pub fn is_valid_footprint(grid: &Grid, cells: &[Coord]) -> bool {
    cells
        .iter()
        .all(|&c| grid.concealed(c) == Some(Cell::Water))
}

/// Like [`is_valid_footprint`] but names the first offending cell.
pub(crate) fn check_footprint(
    grid: &Grid,
    kind: ShipKind,
    cells: &[Coord],
) -> Result<(), PlacementError> {
    for &(x, y) in cells {
        match grid.concealed((x, y)) {
            None => return Err(PlacementError::OutOfBounds { kind, x, y }),
            Some(Cell::Water) => {}
            Some(_) => return Err(PlacementError::Overlap { kind, x, y }),
        }
    }
    Ok(())
}

/// Sample uniformly random origins and orientations until one footprint for
/// `kind` is valid. Gives up after [`MAX_PLACEMENT_ATTEMPTS`] tries.
pub fn random_placement<R: Rng + ?Sized>(
    grid: &Grid,
    kind: ShipKind,
    rng: &mut R,
) -> Result<(Coord, Orientation), PlacementError> {
    let width = grid.width();
    if width == 0 {
        return Err(PlacementError::RetriesExhausted { kind, attempts: 0 });
    }
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let origin = (rng.random_range(0..width), rng.random_range(0..width));
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let cells: Vec<Coord> = footprint(kind.length(), origin, orientation);
        if is_valid_footprint(grid, &cells) {
            return Ok((origin, orientation));
        }
    }
    Err(PlacementError::RetriesExhausted {
        kind,
        attempts: MAX_PLACEMENT_ATTEMPTS,
    })
}

/// Randomly place every ship of the standard fleet that is not yet on `grid`.
///
/// A retryable failure clears the randomly placed ships and starts over, up
/// to [`MAX_FLEET_RESTARTS`] times. Ships already on the grid when this is
/// called are kept.
pub fn place_fleet_randomly<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
) -> Result<(), PlacementError> {
    let fixed: Vec<(ShipKind, Vec<Coord>)> = grid
        .ships()
        .map(|(k, cells)| (k, cells.to_vec()))
        .collect();
    let mut restarts = 0;
    loop {
        match place_remaining(grid, rng) {
            Ok(()) => return Ok(()),
            Err(e) if e.is_retryable() && restarts < MAX_FLEET_RESTARTS => {
                restarts += 1;
                log::warn!("{}; restarting fleet placement ({})", e, restarts);
                restore(grid, &fixed)?;
            }
            Err(e) => return Err(e),
        }
    }
}

fn place_remaining<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<(), PlacementError> {
    let pending: Vec<ShipKind> = grid.unplaced().collect();
    for kind in pending {
        let (origin, orientation) = random_placement(grid, kind, rng)?;
        grid.place(kind, origin, orientation)?;
    }
    Ok(())
}

fn restore(grid: &mut Grid, fixed: &[(ShipKind, Vec<Coord>)]) -> Result<(), PlacementError> {
    grid.clear();
    for (kind, cells) in fixed {
        let (origin, orientation) = match cells.as_slice() {
            [a, b, ..] if a.1 == b.1 => (*a, Orientation::Horizontal),
            [a, _, ..] => (*a, Orientation::Vertical),
            [a] => (*a, Orientation::Horizontal),
            [] => continue,
        };
        grid.place(*kind, origin, orientation)?;
    }
    Ok(())
}
