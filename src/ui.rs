//! Text rendering of grids and game messages.

use alloc::format;
use alloc::string::String;
use core::fmt::Write;

use crate::{
    common::{Coord, ShotOutcome},
    grid::{Cell, Grid, Mark, RevealedGrid},
};

pub const WATER_GLYPH: char = '~';
pub const MISS_GLYPH: char = 'M';
pub const HIT_GLYPH: char = 'X';
pub const SUNK_GLYPH: char = '#';

pub const TITLE: &str = r"
 ___  ___   ___  ___ _    ___  ___ _____
| __|/ _ \ / __|| __| |  | __|| __|_   _|
| _|| (_) | (_ || _|| |__| _| | _|  | |
|_|  \___/ \___||_| |____|___||___| |_|
";

pub const INTRO: &str = "\
INCOMING TRANSMISSION:
Greetings commander, your mission is to destroy the enemy fleet out there in this thick fog.
Due to the fog, we can't see them and they can't see us.
But we can hear the sounds of shells hitting their mark.
Good luck!
END OF TRANSMISSION.";

pub const INSTRUCTIONS: &str = "\
Fire shots at an enemy fleet you cannot see while the enemy fires back.
The first side to sink every opposing ship wins.

Gameplay
1. Place your ships, or press enter to have them placed for you.
2. On your turn fire one shot, e.g. `4 B` (column number, row letter).
3. The enemy then fires one shot at your fleet.

Ships (one of each per side):
CCCCC - carrier
BBBB  - battleship
SSS   - submarine
DDD   - destroyer
PP    - patrol boat

Symbols:
~ - unexplored ocean
X - hit (part of a ship not yet sunk)
# - sunk (part of a sunken ship)
M - miss";

fn cell_glyph(cell: Cell) -> char {
    match cell {
        Cell::Water => WATER_GLYPH,
        Cell::Ship(kind) => kind.code(),
        Cell::Hit => HIT_GLYPH,
        Cell::Miss => MISS_GLYPH,
        Cell::Sunk => SUNK_GLYPH,
    }
}

fn mark_glyph(mark: Mark) -> char {
    match mark {
        Mark::Unknown => WATER_GLYPH,
        Mark::Hit => HIT_GLYPH,
        Mark::Miss => MISS_GLYPH,
        Mark::Sunk => SUNK_GLYPH,
    }
}

/// Row label for `y`: `A` for row 0.
pub fn row_label(y: usize) -> char {
    u8::try_from(y)
        .ok()
        .and_then(|y| b'A'.checked_add(y))
        .map(char::from)
        .unwrap_or('?')
}

/// Coordinate as typed by a player, e.g. `4 B`.
pub fn coord_label((x, y): Coord) -> String {
    format!("{} {}", x, row_label(y))
}

fn draw(width: usize, glyph: impl Fn(Coord) -> char) -> String {
    let mut out = String::new();
    let rule = format!(" {}+", "+---".repeat(width));
    for x in 0..width {
        let _ = write!(out, "{:>4}", x);
    }
    out.push('\n');
    for y in 0..width {
        out.push_str(&rule);
        out.push('\n');
        out.push(row_label(y));
        for x in 0..width {
            let _ = write!(out, "| {} ", glyph((x, y)));
        }
        out.push_str("|\n");
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

/// Draw `grid`. With `reveal_own_ships` the concealed layout is shown,
/// ship letters included; otherwise only what the opponent can see.
pub fn render(grid: &Grid, reveal_own_ships: bool) -> String {
    if reveal_own_ships {
        draw(grid.width(), |c| {
            grid.concealed(c).map(cell_glyph).unwrap_or(WATER_GLYPH)
        })
    } else {
        render_view(grid.revealed())
    }
}

/// Draw an opponent's revealed view.
pub fn render_view(view: &RevealedGrid) -> String {
    draw(view.width(), |c| view.get(c).map(mark_glyph).unwrap_or(WATER_GLYPH))
}

/// Message for the result of our own shot.
pub fn outcome_message(outcome: &ShotOutcome) -> String {
    match (outcome.is_sunk(), outcome.ship) {
        (true, Some(kind)) => format!("Enemy {} sunk.", kind),
        _ if outcome.hit => String::from("Hit!"),
        _ if outcome.repeated => String::from("Miss! (already fired there)"),
        _ => String::from("Miss!"),
    }
}

/// Message for an enemy shot that landed at `target`.
pub fn incoming_message(target: Coord, outcome: &ShotOutcome) -> String {
    let result = match (outcome.is_sunk(), outcome.ship) {
        (true, Some(kind)) => format!("your {} was sunk", kind),
        (false, Some(kind)) if outcome.hit => format!("your {} was hit", kind),
        _ => String::from("miss"),
    };
    format!("Enemy fired at {}: {}", coord_label(target), result)
}
