//! Commonly used types and utilities for ease of import.

pub use crate::{
    footprint, place_fleet_randomly, render, AiPlayer, Battle, Grid, GameStatus, Player, Seat,
    ShipKind, ShotOutcome, TargetingEngine,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer};
