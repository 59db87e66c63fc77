//! Turn controller: alternates players and drives the two boards.

use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, ShotResult};
use crate::coord::Coord;
use crate::ship::ShipType;

/// Identifies one of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// Where the game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The carried player is still placing ships.
    Placing(PlayerId),
    /// Both fleets placed; the carried player is to fire.
    Firing(PlayerId),
    /// One fleet is destroyed.
    Over { winner: PlayerId },
}

/// A full two-player game. Each board is owned here and mutated only
/// through [`Game::place_ship`], [`Game::place_ship_randomly`] and
/// [`Game::fire`], which enforce the phase transitions.
pub struct Game {
    boards: [Board; 2],
    names: [String; 2],
    phase: Phase,
}

impl Game {
    pub fn new(name_one: impl Into<String>, name_two: impl Into<String>) -> Self {
        Self {
            boards: [Board::new(), Board::new()],
            names: [name_one.into(), name_two.into()],
            phase: Phase::Placing(PlayerId::One),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self, player: PlayerId) -> &Board {
        &self.boards[player.index()]
    }

    pub fn name(&self, player: PlayerId) -> &str {
        &self.names[player.index()]
    }

    /// Winner's name once the game is over.
    pub fn winner(&self) -> Option<&str> {
        match self.phase {
            Phase::Over { winner } => Some(self.name(winner)),
            _ => None,
        }
    }

    /// Catalog entry the placing player still has to put down.
    pub fn ship_to_place(&self) -> Option<ShipType> {
        match self.phase {
            Phase::Placing(player) => self.boards[player.index()].fleet().next_unplaced(),
            _ => None,
        }
    }

    /// Place the current player's next catalog ship from a raw coordinate
    /// pair like `"A1 A5"`. On error the phase is unchanged and the same
    /// ship is expected again.
    pub fn place_ship(&mut self, text: &str) -> Result<ShipType, BoardError> {
        let Phase::Placing(player) = self.phase else {
            return Err(BoardError::OutOfPhase);
        };
        let kind = self.ship_to_place().ok_or(BoardError::OutOfPhase)?;
        let (start, end) = Coord::parse_pair(text)?;
        self.boards[player.index()].place_ship(kind, start, end)?;
        log::debug!(
            "{}: {} placed at {} {}",
            self.names[player.index()],
            kind.name(),
            start,
            end
        );
        self.advance_placement(player);
        Ok(kind)
    }

    /// Place the current player's next catalog ship on a random legal run.
    pub fn place_ship_randomly<R: Rng>(&mut self, rng: &mut R) -> Result<ShipType, BoardError> {
        let Phase::Placing(player) = self.phase else {
            return Err(BoardError::OutOfPhase);
        };
        let kind = self.ship_to_place().ok_or(BoardError::OutOfPhase)?;
        let board = &mut self.boards[player.index()];
        let (start, end) = board.random_run(rng, kind)?;
        board.place_ship(kind, start, end)?;
        log::debug!(
            "{}: {} placed at {} {} (random)",
            self.names[player.index()],
            kind.name(),
            start,
            end
        );
        self.advance_placement(player);
        Ok(kind)
    }

    /// Fire the active player's shot at the opponent's board from a raw
    /// coordinate token. A malformed token leaves the turn with the same
    /// player; a resolved shot always passes the turn unless it wins.
    pub fn fire(&mut self, text: &str) -> Result<ShotResult, BoardError> {
        let Phase::Firing(player) = self.phase else {
            return Err(BoardError::OutOfPhase);
        };
        let at = Coord::parse(text.trim())?;
        let result = self.boards[player.opponent().index()].fire(at);
        log::debug!("{} fires at {}: {:?}", self.names[player.index()], at, result);
        self.phase = if result.is_victory() {
            log::info!("{} sank the last ship", self.names[player.index()]);
            Phase::Over { winner: player }
        } else {
            Phase::Firing(player.opponent())
        };
        Ok(result)
    }

    fn advance_placement(&mut self, player: PlayerId) {
        if !self.boards[player.index()].fleet().is_complete() {
            return;
        }
        self.phase = match player {
            PlayerId::One => Phase::Placing(PlayerId::Two),
            PlayerId::Two => Phase::Firing(PlayerId::One),
        };
    }
}
