use crate::ship::ShipKind;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipKind; NUM_SHIPS] = [
    ShipKind::Carrier,
    ShipKind::Battleship,
    ShipKind::Submarine,
    ShipKind::Destroyer,
    ShipKind::PatrolBoat,
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random origins tried for one ship before placement reports a retryable failure.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Times a whole random fleet placement may start over after a retryable failure.
pub const MAX_FLEET_RESTARTS: usize = 16;

/// Random cells the engine samples while seeking before scanning the board exhaustively.
pub const SEEK_SAMPLE_LIMIT: usize = 4_096;
