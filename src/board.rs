//! One player's 10×10 grid: placement validation and shot resolution.

use rand::Rng;

use crate::common::{BoardError, ShotResult};
use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::fleet::Fleet;
use crate::ship::{Ship, ShipType};

const MAX_RANDOM_ATTEMPTS: usize = 100;

/// What a single square holds, before any reveal policy is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    Occupied,
    Missed,
    Hit,
}

/// A square plus the back-reference to the ship segment occupying it, as
/// (fleet id, segment index).
#[derive(Debug, Clone, Copy, Default)]
struct Cell {
    state: CellState,
    ship: Option<(usize, usize)>,
}

/// A board owns its fleet; every occupied square points back into the
/// fleet arena, so shot resolution never searches for the owning ship.
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    fleet: Fleet,
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Self {
            cells: [[Cell::default(); BOARD_SIZE]; BOARD_SIZE],
            fleet: Fleet::new(),
        }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Raw state of a square.
    pub fn state(&self, at: Coord) -> CellState {
        self.cells[at.row][at.col].state
    }

    /// The state a square presents to a viewer. Ships show only when
    /// `reveal` is set; hits and misses always show. Hiding is a view
    /// concern, board state is never mutated for it.
    pub fn view(&self, at: Coord, reveal: bool) -> CellState {
        match self.cells[at.row][at.col].state {
            CellState::Occupied if !reveal => CellState::Empty,
            state => state,
        }
    }

    /// Place a ship of `kind` over the inclusive run between `start` and
    /// `end`. Nothing is mutated on failure; the caller re-prompts and
    /// tries the same ship again.
    pub fn place_ship(&mut self, kind: ShipType, start: Coord, end: Coord) -> Result<(), BoardError> {
        let run = self.legal_run(kind, start, end)?;
        let id = self.fleet.add(Ship::new(kind, run.clone()));
        for (segment, &at) in run.iter().enumerate() {
            let cell = &mut self.cells[at.row][at.col];
            cell.state = CellState::Occupied;
            cell.ship = Some((id, segment));
        }
        Ok(())
    }

    /// Pick a random legal run for `kind`, leaving the board untouched.
    pub fn random_run<R: Rng>(
        &self,
        rng: &mut R,
        kind: ShipType,
    ) -> Result<(Coord, Coord), BoardError> {
        let len = kind.length();
        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let horizontal: bool = rng.random();
            let (start, end) = if horizontal {
                let row = rng.random_range(0..BOARD_SIZE);
                let col = rng.random_range(0..=BOARD_SIZE - len);
                (Coord::new(row, col), Coord::new(row, col + len - 1))
            } else {
                let row = rng.random_range(0..=BOARD_SIZE - len);
                let col = rng.random_range(0..BOARD_SIZE);
                (Coord::new(row, col), Coord::new(row + len - 1, col))
            };
            if self.legal_run(kind, start, end).is_ok() {
                return Ok((start, end));
            }
        }
        Err(BoardError::NoRoomLeft)
    }

    /// Resolve a shot. Any square may be fired at any number of times;
    /// repeats cannot advance the sunk bookkeeping twice.
    pub fn fire(&mut self, at: Coord) -> ShotResult {
        let cell = &mut self.cells[at.row][at.col];
        match cell.ship {
            None => {
                cell.state = CellState::Missed;
                ShotResult::Miss
            }
            Some((id, segment)) => {
                cell.state = CellState::Hit;
                if self.fleet.ship_mut(id).record_hit(segment) {
                    let name = self.fleet.ships()[id].name();
                    if self.fleet.all_sunk() {
                        ShotResult::FleetSunk(name)
                    } else {
                        ShotResult::Sunk(name)
                    }
                } else {
                    ShotResult::Hit
                }
            }
        }
    }

    /// Validate a placement run without committing it.
    fn legal_run(&self, kind: ShipType, start: Coord, end: Coord) -> Result<Vec<Coord>, BoardError> {
        let run = run_between(start, end)?;
        if run.len() != kind.length() {
            return Err(BoardError::WrongLength);
        }
        // Chebyshev distance 2 to every other ship: the run itself and its
        // whole one-square border must be free.
        if run.iter().any(|&at| self.crowded(at)) {
            return Err(BoardError::Overlap);
        }
        Ok(run)
    }

    /// `true` when `at` or any of its eight neighbours holds a ship.
    fn crowded(&self, at: Coord) -> bool {
        neighbourhood(at).any(|c| self.cells[c.row][c.col].ship.is_some())
    }
}

/// The inclusive run of squares between two colinear endpoints, ascending.
/// Endpoints may be given in either order.
fn run_between(start: Coord, end: Coord) -> Result<Vec<Coord>, BoardError> {
    if start.row == end.row {
        let (lo, hi) = ordered(start.col, end.col);
        Ok((lo..=hi).map(|col| Coord::new(start.row, col)).collect())
    } else if start.col == end.col {
        let (lo, hi) = ordered(start.row, end.row);
        Ok((lo..=hi).map(|row| Coord::new(row, start.col)).collect())
    } else {
        Err(BoardError::NotStraight)
    }
}

fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// `at` and its Chebyshev-distance-1 neighbours that lie on the board.
fn neighbourhood(at: Coord) -> impl Iterator<Item = Coord> {
    (-1i32..=1).flat_map(move |dr| {
        (-1i32..=1).filter_map(move |dc| {
            let row = at.row as i32 + dr;
            let col = at.col as i32 + dc;
            if (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col) {
                Some(Coord::new(row as usize, col as usize))
            } else {
                None
            }
        })
    })
}
