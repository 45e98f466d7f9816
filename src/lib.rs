#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod common;
mod config;
mod game;
mod grid;
pub mod input;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
mod ship;
pub mod ui;

pub use ai::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
pub use input::{parse_fire, parse_placement, PlacementCommand};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use placement::{is_valid_footprint, place_fleet_randomly, random_placement};
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use ship::*;
pub use ui::{render, render_view};
