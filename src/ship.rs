//! Ship catalog and footprint geometry.

use alloc::vec::Vec;

use crate::common::Coord;

/// Orientation of a ship on the board. Horizontal ships grow along +x
/// (columns), vertical ships along +y (rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Parse the `H`/`V` token used by placement commands.
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'H' => Some(Orientation::Horizontal),
            'V' => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

/// One of the five ship kinds every fleet carries exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Carrier,
    Battleship,
    Submarine,
    Destroyer,
    PatrolBoat,
}

impl ShipKind {
    /// Number of cells the ship occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Submarine => 3,
            ShipKind::Destroyer => 3,
            ShipKind::PatrolBoat => 2,
        }
    }

    /// Single-letter code used on the board and in placement commands.
    pub const fn code(self) -> char {
        match self {
            ShipKind::Carrier => 'C',
            ShipKind::Battleship => 'B',
            ShipKind::Submarine => 'S',
            ShipKind::Destroyer => 'D',
            ShipKind::PatrolBoat => 'P',
        }
    }

    /// Display name, upper case as announced in game messages.
    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "CARRIER",
            ShipKind::Battleship => "BATTLESHIP",
            ShipKind::Submarine => "SUBMARINE",
            ShipKind::Destroyer => "DESTROYER",
            ShipKind::PatrolBoat => "PATROL BOAT",
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        let code = code.to_ascii_uppercase();
        crate::config::FLEET.iter().copied().find(|k| k.code() == code)
    }
}

impl core::fmt::Display for ShipKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Cells covered by a ship of `length` starting at `origin`.
///
/// No bounds checking happens here; a footprint may run past the board edge
/// and is rejected later by [`crate::is_valid_footprint`]. Coordinates
/// saturate at `usize::MAX` instead of wrapping.
pub fn footprint(length: usize, origin: Coord, orientation: Orientation) -> Vec<Coord> {
    let (x, y) = origin;
    (0..length)
        .map(|i| match orientation {
            Orientation::Horizontal => (x.saturating_add(i), y),
            Orientation::Vertical => (x, y.saturating_add(i)),
        })
        .collect()
}
