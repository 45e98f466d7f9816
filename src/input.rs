//! Parsing of the commands a human types: ship placement and firing.

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::{
    common::{Coord, InputError},
    ship::{Orientation, ShipKind},
};

/// A parsed `C 4 A H` command: carrier, column 4, row A, horizontal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementCommand {
    pub kind: ShipKind,
    pub origin: Coord,
    pub orientation: Orientation,
}

fn tokens(line: &str, expected: usize) -> Result<Vec<&str>, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != expected {
        return Err(InputError::TokenCount {
            expected,
            found: tokens.len(),
        });
    }
    Ok(tokens)
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}

fn parse_column(token: &str, width: usize) -> Result<usize, InputError> {
    if !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(InputError::BadColumn(token.to_string()));
    }
    token
        .parse::<usize>()
        .ok()
        .filter(|x| *x < width)
        .ok_or_else(|| InputError::BadColumn(token.to_string()))
}

fn parse_row(token: &str, width: usize) -> Result<usize, InputError> {
    single_char(token)
        .filter(char::is_ascii_uppercase)
        .map(|c| usize::from(c as u8 - b'A'))
        .filter(|y| *y < width)
        .ok_or_else(|| InputError::BadRow(token.to_string()))
}

/// Parse a placement command. Whether the footprint fits is checked later by
/// the grid.
pub fn parse_placement(line: &str, width: usize) -> Result<PlacementCommand, InputError> {
    let t = tokens(line, 4)?;
    let kind = single_char(t[0])
        .and_then(ShipKind::from_code)
        .ok_or_else(|| InputError::UnknownShip(t[0].to_string()))?;
    let x = parse_column(t[1], width)?;
    let y = parse_row(t[2], width)?;
    let orientation = single_char(t[3])
        .and_then(Orientation::from_code)
        .ok_or_else(|| InputError::BadOrientation(t[3].to_string()))?;
    Ok(PlacementCommand {
        kind,
        origin: (x, y),
        orientation,
    })
}

/// Parse a fire command such as `4 B` into an in-bounds coordinate.
pub fn parse_fire(line: &str, width: usize) -> Result<Coord, InputError> {
    let t = tokens(line, 2)?;
    Ok((parse_column(t[0], width)?, parse_row(t[1], width)?))
}
