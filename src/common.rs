//! Common types: coordinates, shot outcomes and the core error enums.

use alloc::string::String;
use alloc::vec::Vec;
use thiserror::Error;

use crate::ship::ShipKind;

/// Board coordinate as `(x, y)`: `x` is the column (0-9), `y` the row (A-J).
pub type Coord = (usize, usize);

/// Result of resolving one shot against a [`crate::Grid`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotOutcome {
    /// The shot struck a live ship segment.
    pub hit: bool,
    /// Footprint of the ship this shot sank, empty otherwise.
    pub sunk_cells: Vec<Coord>,
    /// Ship that was hit, if any.
    pub ship: Option<ShipKind>,
    /// Every ship on the grid has been sunk.
    pub game_over: bool,
    /// The cell had already been resolved; nothing changed.
    pub repeated: bool,
}

impl ShotOutcome {
    /// Outcome fed to the targeting engine before its first shot of a game.
    pub fn seed() -> Self {
        Self::default()
    }

    pub fn is_sunk(&self) -> bool {
        !self.sunk_cells.is_empty()
    }
}

/// Errors raised while placing ships.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("{kind} does not fit on the board at ({x}, {y})")]
    OutOfBounds { kind: ShipKind, x: usize, y: usize },
    #[error("{kind} overlaps another ship at ({x}, {y})")]
    Overlap { kind: ShipKind, x: usize, y: usize },
    #[error("{0} is already placed")]
    AlreadyPlaced(ShipKind),
    #[error("gave up placing {kind} after {attempts} attempts")]
    RetriesExhausted { kind: ShipKind, attempts: usize },
}

impl PlacementError {
    /// Random placement may start over after this error.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PlacementError::RetriesExhausted { .. })
    }
}

/// Shot passed to the resolver outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShotError {
    #[error("shot at ({x}, {y}) is outside the board")]
    OutOfBounds { x: usize, y: usize },
}

/// Failures of the targeting engine's decision procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("a hit was reported before any shot was fired")]
    UntrackedHit,
    #[error("no active hit has an unexplored neighbour")]
    NoCandidates,
    #[error("no unexplored cell is left on the board")]
    NoTargets,
}

/// Rejected human commands. The orchestrator re-prompts on all of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected {expected} items but got {found}")]
    TokenCount { expected: usize, found: usize },
    #[error("'{0}' is not a ship code")]
    UnknownShip(String),
    #[error("'{0}' is not a column number")]
    BadColumn(String),
    #[error("'{0}' is not a row letter")]
    BadRow(String),
    #[error("'{0}' is not an orientation, use H or V")]
    BadOrientation(String),
}
