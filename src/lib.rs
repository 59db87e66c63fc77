//! Two-player console Battleship: the board/fleet state machine plus a
//! thin line-oriented front end.

mod board;
mod common;
mod config;
mod console;
mod coord;
mod fleet;
mod game;
mod logging;
mod ship;

pub use board::{Board, CellState};
pub use common::{BoardError, ShotResult};
pub use config::{BOARD_SIZE, NUM_SHIPS, SHIPS, TOTAL_SHIP_CELLS};
pub use console::Console;
pub use coord::Coord;
pub use fleet::Fleet;
pub use game::{Game, Phase, PlayerId};
pub use logging::init_logging;
pub use ship::{Ship, ShipType};
