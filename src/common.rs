//! Shared result and error types for the board state machine.

use core::fmt;

/// Outcome of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot landed on open water.
    Miss,
    /// Shot struck a ship that still has unhit segments.
    Hit,
    /// Shot finished off a ship, carrying its name.
    Sunk(&'static str),
    /// The sunk ship was the fleet's last one; the firing player wins.
    FleetSunk(&'static str),
}

impl ShotResult {
    /// `true` when this result ends the game.
    pub fn is_victory(&self) -> bool {
        matches!(self, ShotResult::FleetSunk(_))
    }
}

/// Errors returned by coordinate parsing and board operations. All of them
/// are recoverable: the caller re-prompts the same actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate token malformed or outside `A1`..`J10`.
    InvalidFormat,
    /// Placement endpoints share neither a row nor a column.
    NotStraight,
    /// Placement run length differs from the ship's catalog length.
    WrongLength,
    /// Placement run lies on or next to an already placed ship.
    Overlap,
    /// Random placement ran out of attempts.
    NoRoomLeft,
    /// Operation does not match the current game phase.
    OutOfPhase,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidFormat => write!(f, "coordinates must be between A1 and J10"),
            BoardError::NotStraight => {
                write!(f, "ship endpoints must lie in one row or one column")
            }
            BoardError::WrongLength => write!(f, "run length does not match the ship"),
            BoardError::Overlap => write!(f, "ship would touch another ship"),
            BoardError::NoRoomLeft => write!(f, "no room left to place the ship"),
            BoardError::OutOfPhase => write!(f, "operation does not match the current phase"),
        }
    }
}

impl std::error::Error for BoardError {}
