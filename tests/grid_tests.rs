use fogfleet::{
    footprint, is_valid_footprint, Cell, Grid, Mark, Orientation, PlacementError, ShipKind,
    ShotError,
};

#[test]
fn test_manual_place_and_sink() {
    let mut grid = Grid::standard();
    grid.place(ShipKind::Carrier, (0, 0), Orientation::Horizontal)
        .unwrap();

    for x in 0..4 {
        let outcome = grid.shoot((x, 0)).unwrap();
        assert!(outcome.hit);
        assert!(outcome.sunk_cells.is_empty());
        assert_eq!(grid.revealed().get((x, 0)), Some(Mark::Hit));
    }
    let outcome = grid.shoot((4, 0)).unwrap();
    assert!(outcome.hit);
    assert_eq!(outcome.ship, Some(ShipKind::Carrier));
    assert_eq!(
        outcome.sunk_cells,
        vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]
    );
    for x in 0..5 {
        assert_eq!(grid.concealed((x, 0)), Some(Cell::Sunk));
        assert_eq!(grid.revealed().get((x, 0)), Some(Mark::Sunk));
    }
    // only ship on the grid
    assert!(outcome.game_over);
}

#[test]
fn test_miss_marks_both_views() {
    let mut grid = Grid::standard();
    grid.place(ShipKind::PatrolBoat, (3, 3), Orientation::Vertical)
        .unwrap();
    let outcome = grid.shoot((0, 0)).unwrap();
    assert!(!outcome.hit);
    assert!(!outcome.game_over);
    assert_eq!(grid.concealed((0, 0)), Some(Cell::Miss));
    assert_eq!(grid.revealed().get((0, 0)), Some(Mark::Miss));
}

#[test]
fn test_unhit_ship_stays_hidden() {
    let mut grid = Grid::standard();
    grid.place(ShipKind::Submarine, (5, 2), Orientation::Vertical)
        .unwrap();
    assert_eq!(grid.concealed((5, 3)), Some(Cell::Ship(ShipKind::Submarine)));
    assert_eq!(grid.revealed().get((5, 3)), Some(Mark::Unknown));
    assert_eq!(
        grid.ship_cells(ShipKind::Submarine).unwrap(),
        &[(5, 2), (5, 3), (5, 4)]
    );
    assert_eq!(grid.ship_health(ShipKind::Submarine), Some(3));
}

#[test]
fn test_repeat_shot_is_a_no_op() {
    let mut grid = Grid::standard();
    grid.place(ShipKind::Destroyer, (0, 0), Orientation::Horizontal)
        .unwrap();
    assert!(grid.shoot((1, 0)).unwrap().hit);
    let before = grid.clone();

    let again = grid.shoot((1, 0)).unwrap();
    assert!(!again.hit);
    assert!(again.repeated);
    assert_eq!(grid, before);
    assert_eq!(grid.ship_health(ShipKind::Destroyer), Some(2));

    grid.shoot((9, 9)).unwrap();
    assert!(grid.shoot((9, 9)).unwrap().repeated);
}

#[test]
fn test_repeat_shot_on_sunk_ship_does_not_retrigger_win() {
    let mut grid = Grid::standard();
    grid.place(ShipKind::PatrolBoat, (8, 9), Orientation::Horizontal)
        .unwrap();
    grid.shoot((8, 9)).unwrap();
    let sunk = grid.shoot((9, 9)).unwrap();
    assert!(sunk.game_over);
    let again = grid.shoot((9, 9)).unwrap();
    assert!(!again.hit);
    assert!(again.sunk_cells.is_empty());
    assert_eq!(again.ship, None);
}

#[test]
fn test_shot_off_the_board_is_rejected() {
    let mut grid = Grid::standard();
    assert_eq!(
        grid.shoot((10, 0)).unwrap_err(),
        ShotError::OutOfBounds { x: 10, y: 0 }
    );
    assert_eq!(
        grid.shoot((0, 12)).unwrap_err(),
        ShotError::OutOfBounds { x: 0, y: 12 }
    );
}

#[test]
fn test_placement_errors() {
    let mut grid = Grid::standard();
    grid.place(ShipKind::Carrier, (2, 2), Orientation::Horizontal)
        .unwrap();
    assert_eq!(
        grid.place(ShipKind::Carrier, (0, 5), Orientation::Horizontal),
        Err(PlacementError::AlreadyPlaced(ShipKind::Carrier))
    );
    assert_eq!(
        grid.place(ShipKind::Battleship, (4, 0), Orientation::Vertical),
        Err(PlacementError::Overlap {
            kind: ShipKind::Battleship,
            x: 4,
            y: 2
        })
    );
    assert_eq!(
        grid.place(ShipKind::Battleship, (8, 0), Orientation::Horizontal),
        Err(PlacementError::OutOfBounds {
            kind: ShipKind::Battleship,
            x: 10,
            y: 0
        })
    );
    // rejected placements leave nothing behind
    assert!(!grid.is_placed(ShipKind::Battleship));
    assert_eq!(grid.concealed((8, 0)), Some(Cell::Water));
}

#[test]
fn test_game_over_needs_every_ship_sunk() {
    let mut grid = Grid::standard();
    grid.place(ShipKind::PatrolBoat, (0, 0), Orientation::Horizontal)
        .unwrap();
    grid.place(ShipKind::Destroyer, (0, 2), Orientation::Horizontal)
        .unwrap();
    grid.shoot((0, 0)).unwrap();
    assert!(!grid.shoot((1, 0)).unwrap().game_over);
    grid.shoot((0, 2)).unwrap();
    grid.shoot((1, 2)).unwrap();
    assert!(grid.shoot((2, 2)).unwrap().game_over);
    assert!(grid.game_over());
}

#[test]
fn test_place_far_off_the_board_is_rejected() {
    let mut grid = Grid::standard();
    assert_eq!(
        grid.place(ShipKind::Carrier, (usize::MAX - 1, 0), Orientation::Horizontal),
        Err(PlacementError::OutOfBounds {
            kind: ShipKind::Carrier,
            x: usize::MAX - 1,
            y: 0
        })
    );
    assert_eq!(
        grid.place(ShipKind::Destroyer, (3, usize::MAX), Orientation::Vertical),
        Err(PlacementError::OutOfBounds {
            kind: ShipKind::Destroyer,
            x: 3,
            y: usize::MAX
        })
    );
    assert!(grid.ships().next().is_none());

    let cells = footprint(3, (usize::MAX - 1, 4), Orientation::Horizontal);
    assert_eq!(
        cells,
        vec![(usize::MAX - 1, 4), (usize::MAX, 4), (usize::MAX, 4)]
    );
    assert!(!is_valid_footprint(&grid, &cells));
}
